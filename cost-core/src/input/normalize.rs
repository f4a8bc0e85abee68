/// Numeric field normalization

use tracing::trace;

/// Parse a user-entered amount. Empty, unparsable, non-finite and negative
/// values all become zero.
pub fn parse_amount(raw: &str) -> f64 {
    parse_optional_amount(raw).unwrap_or(0.0)
}

/// Like `parse_amount`, but distinguishes a blank field (`None`) from one that
/// holds text. Text that is not a usable amount still yields `Some(0.0)`.
pub fn parse_optional_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        Ok(value) => {
            trace!(raw, value, "Out of range amount replaced with zero");
            0.0
        }
        Err(_) => {
            trace!(raw, "Invalid amount replaced with zero");
            0.0
        }
    };

    // -0.0 parses as a valid non-negative value
    Some(value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("3.50"), 3.5);
        assert_eq!(parse_amount("  329 "), 329.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-4"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount("   "), None);
        assert_eq!(parse_optional_amount("0.47"), Some(0.47));
        assert_eq!(parse_optional_amount("x"), Some(0.0));
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert!(parse_amount("-0").is_sign_positive());
    }
}
