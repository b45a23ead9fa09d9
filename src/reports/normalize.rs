//! Frequency normalization
//!
//! Converts an item's (amount, frequency) pair into a canonical monthly
//! amount so items with different recurrence cycles can be compared and
//! summed. The weekly companion figure is always derived from the monthly
//! one. No rounding happens here; amounts stay at full precision until
//! display.

use crate::models::{Frequency, FrequencyUnit, Money};

/// Average weeks per month used for every weekly/monthly conversion
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Convert an amount recurring at the given frequency to its
/// monthly-equivalent value in currency units
///
/// - week(s): `amount * count * 4.33`
/// - month(s): `amount / count` (an amount charged every `count` months)
/// - year(s): `amount / (count * 12)`
/// - anything else: `amount / count`
pub fn monthly_equivalent(amount: Money, frequency: &Frequency) -> f64 {
    let amount = amount.to_dollars();
    let count = f64::from(frequency.count());

    match frequency.unit() {
        FrequencyUnit::Week => amount * count * WEEKS_PER_MONTH,
        FrequencyUnit::Month => amount / count,
        FrequencyUnit::Year => amount / (count * 12.0),
        FrequencyUnit::Other(_) => amount / count,
    }
}

/// The weekly companion of a monthly-equivalent amount
pub fn weekly_equivalent(monthly: f64) -> f64 {
    monthly / WEEKS_PER_MONTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(s: &str) -> Frequency {
        s.parse().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_weekly_units_multiply() {
        let monthly = monthly_equivalent(Money::from_cents(5000), &freq("2 weeks"));
        assert!(close(monthly, 50.0 * 2.0 * 4.33));
    }

    #[test]
    fn test_monthly_units_divide_by_count() {
        let monthly = monthly_equivalent(Money::from_cents(10000), &freq("1 month"));
        assert!(close(monthly, 100.0));

        let monthly = monthly_equivalent(Money::from_cents(6000), &freq("3 months"));
        assert!(close(monthly, 20.0));
    }

    #[test]
    fn test_yearly_units_divide() {
        let monthly = monthly_equivalent(Money::from_cents(120000), &freq("1 year"));
        assert!(close(monthly, 100.0));

        let monthly = monthly_equivalent(Money::from_cents(120000), &freq("2 years"));
        assert!(close(monthly, 50.0));
    }

    #[test]
    fn test_unrecognized_unit_fallback() {
        let monthly = monthly_equivalent(Money::from_cents(10000), &freq("4 fortnight"));
        assert!(close(monthly, 25.0));
    }

    #[test]
    fn test_weekly_equivalent_derivation() {
        let monthly = monthly_equivalent(Money::from_cents(10000), &freq("1 month"));
        assert!(close(weekly_equivalent(monthly), 100.0 / 4.33));
        // ~23.09 at display precision
        assert!((weekly_equivalent(monthly) - 23.09).abs() < 0.01);
    }

    #[test]
    fn test_no_rounding_inside_normalizer() {
        let monthly = monthly_equivalent(Money::from_cents(1001), &freq("1 week"));
        // 10.01 * 4.33 carries more than two decimals
        assert!(close(monthly, 10.01 * 4.33));
    }
}
