//! # Error Types
//!
//! Structured error types for faraid_core. Every failure in this crate is a
//! user-input validation outcome: non-fatal, deterministic, and meant to be
//! shown to the person who typed the input. The `Display` text of each
//! variant is the exact message a front end should render; structured
//! context (the offending values) travels only in the serialized form.
//!
//! ## Example
//!
//! ```rust
//! use faraid_core::errors::{CalcResult, ShareError};
//!
//! fn validate_amount(amount: f64) -> CalcResult<()> {
//!     if !amount.is_finite() || amount <= 0.0 {
//!         return Err(ShareError::invalid_amount(amount.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for faraid_core operations
pub type CalcResult<T> = Result<T, ShareError>;

/// Structured error type for share calculations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by front ends and other consumers.
/// There is no fatal or systemic class here; a caller surfaces the message
/// and takes no further action.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShareError {
    /// The estate amount is absent, non-numeric, zero, or negative
    #[error("Please enter a valid positive amount")]
    InvalidAmount { value: String },

    /// One of the heir counts is negative
    #[error("Number of sons and daughters cannot be negative")]
    NegativeHeirCount { sons: i64, daughters: i64 },

    /// Both heir counts are zero, so there is nobody to distribute to
    #[error("Please enter at least one son or daughter")]
    NoHeirs,
}

impl ShareError {
    /// Create an InvalidAmount error carrying the raw offending value
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        ShareError::InvalidAmount {
            value: value.into(),
        }
    }

    /// Create a NegativeHeirCount error
    pub fn negative_heir_count(sons: i64, daughters: i64) -> Self {
        ShareError::NegativeHeirCount { sons, daughters }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShareError::InvalidAmount { .. } => "INVALID_AMOUNT",
            ShareError::NegativeHeirCount { .. } => "NEGATIVE_HEIR_COUNT",
            ShareError::NoHeirs => "NO_HEIRS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ShareError::invalid_amount("-100");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ShareError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShareError::invalid_amount("0").error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            ShareError::negative_heir_count(-1, 0).error_code(),
            "NEGATIVE_HEIR_COUNT"
        );
        assert_eq!(ShareError::NoHeirs.error_code(), "NO_HEIRS");
    }

    #[test]
    fn test_display_is_the_user_facing_message() {
        assert_eq!(
            ShareError::invalid_amount("NaN").to_string(),
            "Please enter a valid positive amount"
        );
        assert_eq!(
            ShareError::negative_heir_count(-1, 2).to_string(),
            "Number of sons and daughters cannot be negative"
        );
        assert_eq!(
            ShareError::NoHeirs.to_string(),
            "Please enter at least one son or daughter"
        );
    }
}
