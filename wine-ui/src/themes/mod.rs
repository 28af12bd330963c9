mod dashboard_theme;

pub use dashboard_theme::{apply_dashboard_theme, hsla};
