pub mod charts;
pub mod dashboard;
pub mod panels;
pub mod window;

use gpui::prelude::FluentBuilder;
use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::{Disableable, Sizable};
use gpui_component::button::{Button, ButtonVariants};

pub use dashboard::Dashboard;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl From<WindowConfig> for WindowPreferences {
    fn from(config: WindowConfig) -> Self {
        Self {
            size: Size {
                width: px(config.width),
                height: px(config.height),
            },
        }
    }
}

/// Toggle-style button: primary when `active`, secondary otherwise.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    active: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .large()
        .when(active, |button| button.primary())
        .label(label.into())
        .on_click(on_click)
}

/// Previous / next arrow. A disabled arrow ignores clicks.
pub fn make_arrow_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    enabled: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .when(enabled, |button| button.primary())
        .disabled(!enabled)
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}
