use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const MIN_QUALITY: u8 = 3;
pub const MAX_QUALITY: u8 = 9;

/// Number of wines that received one quality score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBucket {
    pub quality: u8,
    pub count: u32,
    /// Share of all wines, 0..=100.
    pub percentage: Decimal,
}

impl QualityBucket {
    pub fn new(
        quality: u8,
        count: u32,
        percentage: Decimal,
    ) -> Self {
        Self {
            quality,
            count,
            percentage,
        }
    }
}
