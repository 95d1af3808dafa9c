//! Raw form-field coercion.
//!
//! The three fields arrive as strings, whether from argv or from the
//! interactive prompts. Coercion never fails: heir counts that do not parse
//! become 0, and an amount that does not parse becomes NaN so the core
//! rejects it as an invalid amount. Validation proper stays in the core.

use faraid_core::ShareInput;

/// Coerce the three raw fields into a calculation input.
pub fn coerce(amount: &str, sons: &str, daughters: &str) -> ShareInput {
    ShareInput::new(
        amount.trim().parse::<f64>().unwrap_or(f64::NAN),
        sons.trim().parse::<i64>().unwrap_or(0),
        daughters.trim().parse::<i64>().unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use faraid_core::calculate;

    #[test]
    fn test_parses_clean_fields() {
        let input = coerce("900000", "2", "1");
        assert_eq!(input.amount, 900_000.0);
        assert_eq!(input.sons, 2);
        assert_eq!(input.daughters, 1);
    }

    #[test]
    fn test_trims_whitespace() {
        let input = coerce(" 1500.50 ", " 1 ", "\t2\n");
        assert_eq!(input.amount, 1500.50);
        assert_eq!(input.sons, 1);
        assert_eq!(input.daughters, 2);
    }

    #[test]
    fn test_unparseable_counts_become_zero() {
        let input = coerce("100", "abc", "");
        assert_eq!(input.sons, 0);
        assert_eq!(input.daughters, 0);
        // ...which the core then reports as the no-heirs case
        assert_eq!(calculate(&input).unwrap_err().error_code(), "NO_HEIRS");
    }

    #[test]
    fn test_unparseable_amount_fails_validation() {
        let input = coerce("lots", "1", "1");
        assert!(input.amount.is_nan());
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
    }

    #[test]
    fn test_empty_amount_fails_validation() {
        let input = coerce("", "1", "0");
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "INVALID_AMOUNT"
        );
    }

    #[test]
    fn test_negative_counts_pass_through() {
        // Negative counts are representable; rejecting them is the core's job
        let input = coerce("1000", "-1", "0");
        assert_eq!(input.sons, -1);
        assert_eq!(
            calculate(&input).unwrap_err().error_code(),
            "NEGATIVE_HEIR_COUNT"
        );
    }
}
