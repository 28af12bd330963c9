use rust_decimal::Decimal;

use crate::WineSummary;
use crate::calculations::common::round_one_dp;

/// Share of excellent wines (score 8+) in percent, rounded to one decimal.
///
/// A summary with no wines yields zero rather than dividing by zero.
///
/// ```
/// use wine_core::Dataset;
/// use wine_core::calculations::{excellence_rate, format_percent};
///
/// let dataset = Dataset::uci_wine_quality();
/// assert_eq!(format_percent(excellence_rate(&dataset.summary)), "3.0%");
/// ```
pub fn excellence_rate(summary: &WineSummary) -> Decimal {
    if summary.total_wines == 0 {
        return Decimal::ZERO;
    }

    let excellent = Decimal::from(summary.excellent_wines);
    let total = Decimal::from(summary.total_wines);
    round_one_dp(excellent / total * Decimal::ONE_HUNDRED)
}

/// Difference in average quality between the premium and budget alcohol bands.
pub fn quality_point_gap(summary: &WineSummary) -> Decimal {
    round_one_dp(summary.premium_alcohol_avg_quality - summary.budget_alcohol_avg_quality)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn summary() -> WineSummary {
        WineSummary {
            total_wines: 6497,
            red_wines: 1599,
            white_wines: 4898,
            alcohol_quality_correlation: dec!(0.476),
            excellent_wines: 198,
            high_quality_wines: 1277,
            average_quality: dec!(5.87),
            premium_alcohol_avg_quality: dec!(6.6),
            budget_alcohol_avg_quality: dec!(5.1),
        }
    }

    #[test]
    fn excellence_rate_rounds_to_one_decimal() {
        // 198 / 6497 * 100 = 3.0475...
        assert_eq!(excellence_rate(&summary()), dec!(3.0));
    }

    #[test]
    fn excellence_rate_of_empty_summary_is_zero() {
        let empty = WineSummary {
            total_wines: 0,
            excellent_wines: 0,
            ..summary()
        };

        assert_eq!(excellence_rate(&empty), Decimal::ZERO);
    }

    #[test]
    fn excellence_rate_rounds_half_up() {
        // 1 / 16 * 100 = 6.25 -> 6.3
        let quarter = WineSummary {
            total_wines: 16,
            excellent_wines: 1,
            ..summary()
        };

        assert_eq!(excellence_rate(&quarter), dec!(6.3));
    }

    #[test]
    fn quality_point_gap_is_premium_minus_budget() {
        assert_eq!(quality_point_gap(&summary()), dec!(1.5));
    }

    #[test]
    fn quality_point_gap_can_be_negative() {
        let inverted = WineSummary {
            premium_alcohol_avg_quality: dec!(5.0),
            budget_alcohol_avg_quality: dec!(5.25),
            ..summary()
        };

        assert_eq!(quality_point_gap(&inverted), dec!(-0.3));
    }
}
