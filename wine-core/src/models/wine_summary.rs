use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Precomputed headline figures of the UCI wine quality dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineSummary {
    pub total_wines: u32,
    pub red_wines: u32,
    pub white_wines: u32,
    pub alcohol_quality_correlation: Decimal,
    /// Wines scoring 8 or more.
    pub excellent_wines: u32,
    /// Wines scoring 7 or more.
    pub high_quality_wines: u32,
    pub average_quality: Decimal,
    /// Average quality of the highest alcohol band (12%+).
    pub premium_alcohol_avg_quality: Decimal,
    /// Average quality of the lowest alcohol band (<9%).
    pub budget_alcohol_avg_quality: Decimal,
}
