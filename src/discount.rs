//! Discount percentage derivation.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3})(?:[.,]\d+)?\s*%").expect("valid percent regex"));

/// Derives a whole-number discount percentage from the original and current
/// prices.
///
/// Returns `None` unless both prices are present and `original > current`.
/// Ties round half to even, so 12.5% becomes 12 and 13.5% becomes 14.
pub fn resolve_discount(original: Option<Decimal>, current: Option<Decimal>) -> Option<u32> {
    let (original, current) = (original?, current?);
    if original <= current || original <= Decimal::ZERO {
        return None;
    }

    // Divide before scaling so prices near Decimal::MAX cannot overflow.
    let ratio = (original - current).checked_div(original)?;
    ratio
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_u32()
}

/// Reads a percentage out of a badge such as `"-25%"` or `"25% OFF"`.
///
/// The sign is ignored; badges always describe a reduction.
pub fn parse_discount_text(text: &str) -> Option<u32> {
    PERCENT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|pct| (1..100).contains(pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(units: i64, scale: u32) -> Option<Decimal> {
        Some(Decimal::new(units, scale))
    }

    #[test]
    fn quarter_off() {
        assert_eq!(resolve_discount(d(10_000, 2), d(7_500, 2)), Some(25));
    }

    #[test]
    fn equal_prices_have_no_discount() {
        assert_eq!(resolve_discount(d(10_000, 2), d(10_000, 2)), None);
    }

    #[test]
    fn price_increase_has_no_discount() {
        assert_eq!(resolve_discount(d(7_500, 2), d(10_000, 2)), None);
    }

    #[test]
    fn missing_original_has_no_discount() {
        assert_eq!(resolve_discount(None, d(7_500, 2)), None);
    }

    #[test]
    fn missing_current_has_no_discount() {
        assert_eq!(resolve_discount(d(7_500, 2), None), None);
    }

    #[test]
    fn rounds_to_nearest_whole_percent() {
        // 100 * 100 / 299.90 = 33.34...
        assert_eq!(resolve_discount(d(29_990, 2), d(19_990, 2)), Some(33));
    }

    #[test]
    fn ties_round_half_to_even() {
        assert_eq!(resolve_discount(d(200, 0), d(175, 0)), Some(12));
        assert_eq!(resolve_discount(d(200, 0), d(173, 0)), Some(14));
    }

    #[test]
    fn huge_original_price_does_not_overflow() {
        let huge = Decimal::from_str_exact("999999999999999999999999999").unwrap();
        assert_eq!(resolve_discount(Some(huge), Some(Decimal::ZERO)), Some(100));
        assert_eq!(resolve_discount(Some(huge), d(1, 0)), Some(100));
    }

    #[test]
    fn parses_negative_badge() {
        assert_eq!(parse_discount_text("-25%"), Some(25));
    }

    #[test]
    fn parses_badge_with_suffix() {
        assert_eq!(parse_discount_text(" 37% OFF "), Some(37));
    }

    #[test]
    fn rejects_text_without_percent() {
        assert_eq!(parse_discount_text("Economize R$ 10,00"), None);
    }
}
