mod alcohol_category;
mod color_tag;
mod quality_bucket;
mod story_step;
mod wine_summary;
mod wine_type;

pub use alcohol_category::AlcoholCategoryStat;
pub use color_tag::{ColorTag, ColorTagError};
pub use quality_bucket::{MAX_QUALITY, MIN_QUALITY, QualityBucket};
pub use story_step::{StoryStep, VisualKind};
pub use wine_summary::WineSummary;
pub use wine_type::{AlcoholQualitySample, WineCategory, WineTypeSlice};
