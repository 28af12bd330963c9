//! Core of the wine quality dashboard.
//!
//! Holds the static dataset, the navigation state machine, derived display
//! values and a pure renderer producing a [`render::Scene`]. Nothing here
//! depends on a UI toolkit.

pub mod calculations;
pub mod dataset;
pub mod models;
pub mod navigation;
pub mod render;
pub mod style;

pub use dataset::{Dataset, DatasetError, STORY_STEP_COUNT};
pub use models::*;
pub use style::StyleConfig;
