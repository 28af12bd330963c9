use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ColorTag;

/// Aggregate quality for one alcohol band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlcoholCategoryStat {
    pub label: String,
    pub avg_quality: Decimal,
    pub count: u32,
    /// Each band is drawn in its own colour.
    pub color: ColorTag,
}
