//! Rounding shared by every reported average and percentage.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places on every reported SGPA, CGPA and percentage.
pub const REPORTED_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to two decimal places, half away from zero.
///
/// Midpoints always round up in magnitude (`9.425` becomes `9.43`), which is
/// the schoolbook rounding students check results against.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::round_reported;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("9.425").unwrap();
/// assert_eq!(round_reported(value), Decimal::from_str("9.43").unwrap());
/// ```
pub fn round_reported(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        REPORTED_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_reported(dec("9.425")), dec("9.43"));
        assert_eq!(round_reported(dec("8.005")), dec("8.01"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_reported(dec("9.4249")), dec("9.42"));
    }

    #[test]
    fn test_rounds_rather_than_truncates() {
        assert_eq!(round_reported(dec("9.428571")), dec("9.43"));
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_reported(dec("-2.505")), dec("-2.51"));
    }

    #[test]
    fn test_short_values_unchanged() {
        assert_eq!(round_reported(dec("8.5")), dec("8.5"));
        assert_eq!(round_reported(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_result_has_at_most_two_decimal_places() {
        assert!(round_reported(dec("6.666666666")).scale() <= 2);
    }
}
