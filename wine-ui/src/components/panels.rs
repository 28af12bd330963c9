//! Stateless pieces of the dashboard. Each takes a part of the scene and
//! the palette; none of them touch navigation state.

use gpui::{
    Background, FontWeight, IntoElement, ParentElement, Styled, div, linear_color_stop,
    linear_gradient,
};
use gpui_component::{h_flex, v_flex};
use wine_core::StyleConfig;
use wine_core::models::StoryStep;
use wine_core::render::scene::{
    Header, ImpactPanel, KeyInsights, MetricCard, OverviewPanel, StoryVisual,
};
use wine_core::style::{Gradient, Palette};

use super::charts::{bar_chart, pie_chart, scatter_chart};
use crate::themes::hsla;

pub(crate) fn gradient(g: Gradient) -> Background {
    linear_gradient(
        135.,
        linear_color_stop(hsla(g.from), 0.),
        linear_color_stop(hsla(g.to), 1.),
    )
}

pub fn header(
    header: &Header,
    palette: &Palette,
) -> impl IntoElement {
    v_flex()
        .items_center()
        .gap_2()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(hsla(palette.title))
                .child(header.title.clone()),
        )
        .child(
            div()
                .text_lg()
                .text_color(hsla(palette.muted_text))
                .child(header.subtitle.clone()),
        )
        .child(
            div()
                .text_sm()
                .text_color(hsla(palette.faint_text))
                .child(header.data_line.clone()),
        )
}

pub fn story_text(
    step_number: usize,
    step: &StoryStep,
    palette: &Palette,
) -> impl IntoElement {
    v_flex()
        .gap_3()
        .p_6()
        .rounded_lg()
        .bg(hsla(palette.story_background))
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(hsla(palette.accent.from))
                .child(format!("Step {step_number}")),
        )
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(hsla(palette.title))
                .child(step.title.clone()),
        )
        .child(
            div()
                .text_lg()
                .text_color(hsla(palette.muted_text))
                .child(step.subtitle.clone()),
        )
        .child(
            div()
                .text_color(hsla(palette.text))
                .child(step.content.clone()),
        )
        .child(
            div()
                .p_3()
                .rounded_md()
                .bg(hsla(palette.stats_background))
                .text_color(hsla(palette.stats_text))
                .font_weight(FontWeight::SEMIBOLD)
                .child(step.stats_text.clone()),
        )
}

pub fn story_visual(
    visual: &StoryVisual,
    style: &StyleConfig,
) -> impl IntoElement {
    let palette = &style.palette;
    match visual {
        StoryVisual::Problem {
            quality,
            wine_types,
        } => h_flex()
            .gap_4()
            .child(div().flex_1().child(bar_chart(quality, palette)))
            .child(div().flex_1().child(pie_chart(wine_types, palette))),
        StoryVisual::Discovery { scatter } => h_flex().child(div().flex_1().child(
            scatter_chart(scatter, style.charts.scatter_point_radius, palette),
        )),
        StoryVisual::Proof { categories } => {
            h_flex().child(div().flex_1().child(bar_chart(categories, palette)))
        }
        StoryVisual::Impact { panels } => h_flex()
            .gap_4()
            .children(panels.iter().map(impact_panel)),
    }
}

fn impact_panel(panel: &ImpactPanel) -> impl IntoElement {
    v_flex()
        .flex_1()
        .gap_2()
        .p_5()
        .rounded_lg()
        .bg(hsla(panel.style.background))
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .text_color(hsla(panel.style.title))
                .child(panel.title.clone()),
        )
        .child(
            div()
                .text_color(hsla(panel.style.text))
                .child(panel.text.clone()),
        )
}

fn metric_card(card: &MetricCard) -> impl IntoElement {
    v_flex()
        .flex_1()
        .gap_1()
        .p_5()
        .rounded_lg()
        .bg(gradient(card.gradient))
        .text_color(gpui::white())
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .child(card.value.clone()),
        )
        .child(
            div()
                .font_weight(FontWeight::SEMIBOLD)
                .child(card.label.clone()),
        )
        .child(div().text_sm().opacity(0.9).child(card.detail.clone()))
}

pub fn overview(
    panel: &OverviewPanel,
    style: &StyleConfig,
) -> impl IntoElement {
    let palette = &style.palette;
    v_flex()
        .gap_6()
        .child(h_flex().gap_4().children(panel.metrics.iter().map(metric_card)))
        .child(
            h_flex()
                .gap_4()
                .child(div().flex_1().child(bar_chart(&panel.quality, palette)))
                .child(div().flex_1().child(scatter_chart(
                    &panel.scatter,
                    style.charts.scatter_point_radius,
                    palette,
                ))),
        )
}

pub fn key_insights(insights: &KeyInsights) -> impl IntoElement {
    v_flex()
        .gap_4()
        .p_6()
        .rounded_lg()
        .bg(gradient(insights.background))
        .text_color(gpui::white())
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .child(insights.title.clone()),
        )
        .child(
            h_flex()
                .gap_4()
                .children(insights.cards.iter().map(|card| {
                    v_flex()
                        .flex_1()
                        .items_center()
                        .gap_1()
                        .child(
                            div()
                                .text_3xl()
                                .font_weight(FontWeight::BOLD)
                                .child(card.value.clone()),
                        )
                        .child(
                            div()
                                .font_weight(FontWeight::SEMIBOLD)
                                .child(card.label.clone()),
                        )
                        .child(div().text_sm().child(card.detail.clone()))
                })),
        )
        .child(
            div()
                .font_weight(FontWeight::SEMIBOLD)
                .child(insights.bottom_line.clone()),
        )
        .child(div().text_sm().child(insights.final_message.clone()))
}
