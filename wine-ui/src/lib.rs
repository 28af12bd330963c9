pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod themes;

use gpui::{App, actions};
pub use gui::{open_dashboard_window, setup_app};
use tracing::info;

actions!(
    wine_dashboard,
    [
        Quit,
        PreviousStep,
        NextStep,
        GoToStep1,
        GoToStep2,
        GoToStep3,
        GoToStep4,
        ShowStory,
        ShowOverview
    ]
);

pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
