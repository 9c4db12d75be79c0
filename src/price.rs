//! Numeric normalization of localized price strings.
//!
//! Prices on the storefront are rendered in the pt-BR locale: `.` groups
//! thousands and `,` separates decimals (`"R$ 1.234,56"`).

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a localized price string into a [`Decimal`].
///
/// Every character that is not an ASCII digit or a comma is dropped, the
/// comma becomes the decimal point and the remainder is parsed. Returns
/// `None` for absent, empty or unparseable input; normalization failure is
/// never an error.
pub fn normalize_price(text: Option<&str>) -> Option<Decimal> {
    let text = text?;
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_thousands_separator() {
        assert_eq!(normalize_price(Some("R$ 1.234,56")), Some(Decimal::new(123_456, 2)));
    }

    #[test]
    fn parses_simple_decimal_comma() {
        assert_eq!(normalize_price(Some("199,90")), Some(Decimal::new(19_990, 2)));
    }

    #[test]
    fn parses_whole_number() {
        assert_eq!(normalize_price(Some("R$ 89")), Some(Decimal::from(89)));
    }

    #[test]
    fn tolerates_non_breaking_space() {
        assert_eq!(normalize_price(Some("R$\u{a0}49,99")), Some(Decimal::new(4_999, 2)));
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(normalize_price(Some("")), None);
    }

    #[test]
    fn missing_input_is_absent() {
        assert_eq!(normalize_price(None), None);
    }

    #[test]
    fn text_without_digits_is_absent() {
        assert_eq!(normalize_price(Some("Indisponível")), None);
    }

    #[test]
    fn multiple_commas_fail_silently() {
        assert_eq!(normalize_price(Some("1,234,56")), None);
    }
}
