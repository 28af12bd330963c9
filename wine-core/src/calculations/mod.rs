//! Derived display values.
//!
//! Every figure shown on the dashboard that is not a raw constant is
//! computed here from the [`WineSummary`](crate::WineSummary) at render
//! time; nothing derived is stored in the dataset.

pub mod common;
pub mod derived;

pub use common::{format_one_dp, format_percent, format_thousands, round_one_dp, to_chart_value};
pub use derived::{excellence_rate, quality_point_gap};
