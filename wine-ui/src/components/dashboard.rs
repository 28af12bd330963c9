//! The dashboard view: owns the navigation state and redraws the scene
//! whenever a controller operation changes it.

use std::sync::Arc;

use gpui::{
    App, Context, FocusHandle, Focusable, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;
use wine_core::navigation::{StepDirection, View, ViewState};
use wine_core::render::render;
use wine_core::render::scene::{Body, NavItem, StepArrows, StepButton, StoryPanel};
use wine_core::{Dataset, StyleConfig};

use super::panels;
use super::{make_arrow_button, make_button};
use crate::themes::hsla;
use crate::{
    GoToStep1, GoToStep2, GoToStep3, GoToStep4, NextStep, PreviousStep, ShowOverview, ShowStory,
};

pub const KEY_CONTEXT: &str = "Dashboard";

pub struct Dashboard {
    state: ViewState,
    dataset: Arc<Dataset>,
    style: Arc<StyleConfig>,
    focus_handle: FocusHandle,
}

impl Dashboard {
    pub fn new(
        state: ViewState,
        dataset: Arc<Dataset>,
        style: Arc<StyleConfig>,
        cx: &mut Context<Self>,
    ) -> Self {
        debug!(view = %state.selected_view(), step = state.current_step(), "Dashboard constructed");
        Self {
            state,
            dataset,
            style,
            focus_handle: cx.focus_handle(),
        }
    }

    fn select_view(
        &mut self,
        view: View,
        cx: &mut Context<Self>,
    ) {
        self.state.select_view(view);
        cx.notify();
    }

    fn go_to_step(
        &mut self,
        step: usize,
        cx: &mut Context<Self>,
    ) {
        self.state.go_to_step(step);
        cx.notify();
    }

    fn advance_step(
        &mut self,
        direction: StepDirection,
        cx: &mut Context<Self>,
    ) {
        if self.state.can_advance(direction) {
            self.state.advance_step(direction);
            cx.notify();
        }
    }

    // ── Keyboard actions ──────────────────────────────────────────

    fn on_previous_step(
        &mut self,
        _: &PreviousStep,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.advance_step(StepDirection::Previous, cx);
    }

    fn on_next_step(
        &mut self,
        _: &NextStep,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.advance_step(StepDirection::Next, cx);
    }

    fn on_show_story(
        &mut self,
        _: &ShowStory,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.select_view(View::Story, cx);
    }

    fn on_show_overview(
        &mut self,
        _: &ShowOverview,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.select_view(View::Overview, cx);
    }

    // ── Interactive pieces ────────────────────────────────────────

    fn nav_bar(
        &self,
        items: &[NavItem],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        h_flex()
            .justify_center()
            .gap_3()
            .children(items.iter().map(|item| {
                let view = item.view;
                make_button(
                    format!("nav-{}", view.as_str()),
                    item.label.clone(),
                    item.active,
                    cx.listener(move |this, _, _, cx| this.select_view(view, cx)),
                )
            }))
    }

    fn step_buttons(
        &self,
        buttons: &[StepButton],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        h_flex()
            .justify_center()
            .gap_2()
            .children(buttons.iter().map(|button| {
                let step = button.step;
                make_button(
                    format!("step-{step}"),
                    button.label.clone(),
                    button.active,
                    cx.listener(move |this, _, _, cx| this.go_to_step(step, cx)),
                )
            }))
    }

    fn arrows(
        &self,
        arrows: &StepArrows,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        h_flex()
            .justify_between()
            .items_center()
            .child(make_arrow_button(
                "step-previous",
                "← Previous",
                arrows.previous_enabled,
                cx.listener(|this, _, _, cx| this.advance_step(StepDirection::Previous, cx)),
            ))
            .child(
                div()
                    .text_sm()
                    .text_color(hsla(self.style.palette.muted_text))
                    .child(arrows.indicator.clone()),
            )
            .child(make_arrow_button(
                "step-next",
                "Next →",
                arrows.next_enabled,
                cx.listener(|this, _, _, cx| this.advance_step(StepDirection::Next, cx)),
            ))
    }

    fn story(
        &self,
        panel: &StoryPanel,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_6()
            .child(self.step_buttons(&panel.step_buttons, cx))
            .child(panels::story_text(
                panel.step_number,
                &panel.step,
                &self.style.palette,
            ))
            .child(panels::story_visual(&panel.visual, &self.style))
            .child(self.arrows(&panel.arrows, cx))
    }
}

impl Focusable for Dashboard {
    fn focus_handle(
        &self,
        _: &App,
    ) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Dashboard {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let scene = render(&self.state, &self.dataset, &self.style);
        let palette = self.style.palette;

        let body = match &scene.body {
            Body::Story(panel) => self.story(panel, cx).into_any_element(),
            Body::Overview(panel) => panels::overview(panel, &self.style).into_any_element(),
        };

        div()
            .id("dashboard")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_previous_step))
            .on_action(cx.listener(Self::on_next_step))
            .on_action(cx.listener(|this, _: &GoToStep1, _, cx| this.go_to_step(1, cx)))
            .on_action(cx.listener(|this, _: &GoToStep2, _, cx| this.go_to_step(2, cx)))
            .on_action(cx.listener(|this, _: &GoToStep3, _, cx| this.go_to_step(3, cx)))
            .on_action(cx.listener(|this, _: &GoToStep4, _, cx| this.go_to_step(4, cx)))
            .on_action(cx.listener(Self::on_show_story))
            .on_action(cx.listener(Self::on_show_overview))
            .size_full()
            .overflow_y_scroll()
            .bg(hsla(palette.background))
            .child(
                v_flex()
                    .gap_8()
                    .p_8()
                    .child(panels::header(&scene.header, &palette))
                    .child(self.nav_bar(&scene.nav, cx))
                    .child(body)
                    .child(panels::key_insights(&scene.insights)),
            )
    }
}
