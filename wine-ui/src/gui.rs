use std::sync::Arc;

use anyhow::{Context as _, Result};
use gpui::{
    App, AppContext, Bounds, Focusable, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::info;
use wine_core::navigation::ViewState;
use wine_core::{Dataset, StyleConfig};

use crate::components::dashboard::KEY_CONTEXT;
use crate::components::{AppWindow, Dashboard, WindowPreferences};
use crate::themes::apply_dashboard_theme;
use crate::{
    GoToStep1, GoToStep2, GoToStep3, GoToStep4, NextStep, PreviousStep, Quit, ShowOverview,
    ShowStory, quit,
};

pub fn setup_app(
    style: &StyleConfig,
    app_cx: &mut App,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_dashboard_theme(style, app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    let context = Some(KEY_CONTEXT);
    app_cx.bind_keys([
        KeyBinding::new("left", PreviousStep, context),
        KeyBinding::new("right", NextStep, context),
        KeyBinding::new("1", GoToStep1, context),
        KeyBinding::new("2", GoToStep2, context),
        KeyBinding::new("3", GoToStep3, context),
        KeyBinding::new("4", GoToStep4, context),
        KeyBinding::new("s", ShowStory, context),
        KeyBinding::new("o", ShowOverview, context),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![
        Menu {
            name: "Wine Dashboard".into(),
            items: vec![MenuItem::action("Quit", Quit)],
        },
        Menu {
            name: "View".into(),
            items: vec![
                MenuItem::action("3-Min Story", ShowStory),
                MenuItem::action("Overview", ShowOverview),
                MenuItem::separator(),
                MenuItem::action("Previous Step", PreviousStep),
                MenuItem::action("Next Step", NextStep),
            ],
        },
    ]);
}

/// Opens the main window with a dashboard starting at `state`.
pub fn open_dashboard_window(
    prefs: WindowPreferences,
    state: ViewState,
    dataset: Arc<Dataset>,
    style: Arc<StyleConfig>,
    app_cx: &mut App,
) -> Result<()> {
    let bounds = Bounds::centered(None, prefs.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Wine Quality Dashboard".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx
        .open_window(options, |window, cx| {
            let dashboard = cx.new(|cx| Dashboard::new(state, dataset, style, cx));
            let focus = dashboard.read(cx).focus_handle(cx);
            window.focus(&focus);

            let app_window = cx.new(|cx| AppWindow::new(dashboard, cx));
            cx.new(|cx| Root::new(Into::<gpui::AnyView>::into(app_window), window, cx))
        })
        .context("failed to open dashboard window")?;

    info!(width = ?prefs.size.width, height = ?prefs.size.height, "Dashboard window opened");
    Ok(())
}
