//! Money helpers
//!
//! Amounts are kept as 2-decimal strings in state. Arithmetic happens in
//! `f64` and is re-formatted after every mutation.

/// Format an amount with exactly two decimals (`-0.00` collapses to `0.00`)
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

/// Parse a stored amount; anything unparsable counts as zero
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Add `delta` to a stored amount and re-format it
pub fn adjust_amount(value: &str, delta: f64) -> String {
    format_amount(parse_amount(value) + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
        assert_eq!(format_amount(1234.5), "1234.50");
    }

    #[test]
    fn test_negative_zero_collapses() {
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(0.3 - 0.1 - 0.2), "0.00");
    }

    #[test]
    fn test_adjust_amount() {
        assert_eq!(adjust_amount("0.00", 10.0), "10.00");
        assert_eq!(adjust_amount("10.00", -2.5), "7.50");
        assert_eq!(adjust_amount("garbage", 1.0), "1.00");
    }
}
