use gpui::{
    App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use tracing::info;

use super::Dashboard;
use crate::{Quit, quit};

/// Top-level window view. Quits the application once the window closes.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    dashboard: Entity<Dashboard>,
}

impl AppWindow {
    pub fn new(
        dashboard: Entity<Dashboard>,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            if cx.windows().is_empty() {
                quit(&Quit, cx);
            }
        });

        Self {
            _window_close_subscription: subscription,
            dashboard,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _: &mut Context<Self>,
    ) -> impl IntoElement {
        div().size_full().child(self.dashboard.clone())
    }
}
