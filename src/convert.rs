//! Fiat-to-crypto conversion
//!
//! Pure functions; the dashboard wires them to the store and the display.

/// Rendered value when the amount or price makes conversion impossible
pub const CONVERTED_ZERO: &str = "0.00000000";

/// Parses user-supplied amount text defensively
///
/// Unparsable, non-finite or non-positive input is treated as zero.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Converts a local-currency amount into an asset quantity
///
/// Returns `0.0` when the amount is non-positive or the price is unknown or
/// non-positive; never divides by zero.
pub fn convert(local_amount: f64, price: Option<f64>) -> f64 {
    match price {
        Some(p) if p > 0.0 && local_amount > 0.0 => local_amount / p,
        _ => 0.0,
    }
}

/// Formats a converted quantity with exactly 8 fraction digits
pub fn format_converted(value: f64) -> String {
    format!("{value:.8}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_coerces_garbage_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("0"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("1000"), 1000.0);
        assert_eq!(parse_amount("  12.5  "), 12.5);
    }

    #[test]
    fn zero_amount_yields_zero_sentinel() {
        for price in [Some(5_000_000.0), Some(0.0), None] {
            assert_eq!(format_converted(convert(0.0, price)), CONVERTED_ZERO);
        }
    }

    #[test]
    fn unknown_or_zero_price_yields_zero_sentinel() {
        for amount in [1.0, 1000.0, 123_456.789] {
            assert_eq!(format_converted(convert(amount, None)), CONVERTED_ZERO);
            assert_eq!(format_converted(convert(amount, Some(0.0))), CONVERTED_ZERO);
        }
    }

    #[test]
    fn converts_with_eight_fraction_digits() {
        assert_eq!(
            format_converted(convert(1000.0, Some(5_000_000.0))),
            "0.00020000"
        );
        assert_eq!(format_converted(convert(129.0, Some(129.0))), "1.00000000");
    }
}
