//! Rounding and formatting helpers shared by the renderer.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounds a decimal value to one decimal place using half-up rounding.
///
/// Values exactly halfway between two tenths move away from zero, so
/// `0.05` becomes `0.1` and `-0.05` becomes `-0.1`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wine_core::calculations::round_one_dp;
///
/// assert_eq!(round_one_dp(dec!(3.0479)), dec!(3.0));
/// assert_eq!(round_one_dp(dec!(3.05)), dec!(3.1));
/// assert_eq!(round_one_dp(dec!(-3.05)), dec!(-3.1));
/// ```
pub fn round_one_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly one decimal digit, rounding half-up first.
///
/// ```
/// use rust_decimal_macros::dec;
/// use wine_core::calculations::format_one_dp;
///
/// assert_eq!(format_one_dp(dec!(1.5)), "1.5");
/// assert_eq!(format_one_dp(dec!(2)), "2.0");
/// ```
pub fn format_one_dp(value: Decimal) -> String {
    format!("{:.1}", round_one_dp(value))
}

/// Same as [`format_one_dp`] with a trailing `%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_one_dp(value))
}

/// Formats an integer with comma thousands separators (`6497` → `"6,497"`).
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Converts a decimal to the `f64` the charting layer works with.
pub fn to_chart_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_one_dp tests
    // =========================================================================

    #[test]
    fn round_one_dp_rounds_down_below_midpoint() {
        assert_eq!(round_one_dp(dec!(3.0479)), dec!(3.0));
    }

    #[test]
    fn round_one_dp_rounds_up_at_midpoint() {
        assert_eq!(round_one_dp(dec!(0.05)), dec!(0.1));
        assert_eq!(round_one_dp(dec!(1.45)), dec!(1.5));
    }

    #[test]
    fn round_one_dp_handles_negative_midpoint() {
        assert_eq!(round_one_dp(dec!(-0.05)), dec!(-0.1));
    }

    #[test]
    fn round_one_dp_preserves_already_rounded_values() {
        assert_eq!(round_one_dp(dec!(6.6)), dec!(6.6));
    }

    // =========================================================================
    // formatting tests
    // =========================================================================

    #[test]
    fn format_one_dp_pads_integers() {
        assert_eq!(format_one_dp(dec!(3)), "3.0");
        assert_eq!(format_one_dp(dec!(0)), "0.0");
    }

    #[test]
    fn format_one_dp_rounds_long_fractions() {
        assert_eq!(format_one_dp(dec!(3.04790)), "3.0");
        assert_eq!(format_one_dp(dec!(19.66)), "19.7");
    }

    #[test]
    fn format_percent_appends_sign() {
        assert_eq!(format_percent(dec!(3.0479)), "3.0%");
    }

    #[test]
    fn format_thousands_groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(6497), "6,497");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn to_chart_value_converts_exactly_representable_values() {
        assert_eq!(to_chart_value(dec!(12.5)), 12.5);
        assert_eq!(to_chart_value(dec!(0)), 0.0);
    }
}
