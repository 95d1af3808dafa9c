//! # Inheritance Share Calculation
//!
//! Divides an estate between sons and daughters at the fixed 2:1 ratio of
//! the simplified rule: each son receives twice the share of each daughter.
//!
//! ## Assumptions
//!
//! - Only sons and daughters inherit (no spouses, parents, or residuary heirs)
//! - The whole estate is distributed; nothing is withheld
//! - Shares are per heir, not per category
//!
//! ## Example
//!
//! ```rust
//! use faraid_core::calculations::shares::{calculate, ShareInput};
//!
//! let input = ShareInput::new(900_000.0, 2, 1);
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.total_share_units, 5.0);
//! assert_eq!(result.daughter_share, 180_000.0);
//! assert_eq!(result.son_share, 360_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, ShareError};

/// Input parameters for a share calculation.
///
/// Heir counts are signed so that negative user input reaches `validate`
/// and comes back as a structured error instead of being unrepresentable.
///
/// ## JSON Example
///
/// ```json
/// {
///   "amount": 900000.0,
///   "sons": 2,
///   "daughters": 1
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareInput {
    /// Total estate amount to distribute (must be finite and positive)
    pub amount: f64,

    /// Number of sons (must be >= 0)
    pub sons: i64,

    /// Number of daughters (must be >= 0)
    pub daughters: i64,
}

impl ShareInput {
    /// Create a new share calculation input.
    pub fn new(amount: f64, sons: i64, daughters: i64) -> Self {
        ShareInput {
            amount,
            sons,
            daughters,
        }
    }

    /// Validate input parameters.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// amount, then negative counts, then the no-heirs case.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(ShareError::invalid_amount(self.amount.to_string()));
        }
        if self.sons < 0 || self.daughters < 0 {
            return Err(ShareError::negative_heir_count(self.sons, self.daughters));
        }
        if self.sons == 0 && self.daughters == 0 {
            return Err(ShareError::NoHeirs);
        }
        Ok(())
    }

    /// Total proportional units: each son counts as 2, each daughter as 1.
    pub fn total_share_units(&self) -> f64 {
        self.sons as f64 * 2.0 + self.daughters as f64
    }
}

/// Results from a share calculation.
///
/// Shares are per heir. The intermediate quantities are included for
/// display and audit alongside the two share values.
///
/// ## JSON Example
///
/// ```json
/// {
///   "son_share": 360000.0,
///   "daughter_share": 180000.0,
///   "total_share_units": 5.0,
///   "share_unit_value": 180000.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResult {
    /// Amount due to each son (2 share units)
    pub son_share: f64,

    /// Amount due to each daughter (1 share unit)
    pub daughter_share: f64,

    /// Total share units the estate was divided into
    pub total_share_units: f64,

    /// Monetary value of one share unit
    pub share_unit_value: f64,
}

/// Calculate per-heir inheritance shares.
///
/// Pure function: no I/O, no hidden state. Identical inputs produce
/// bit-identical results. No rounding is applied here; rendering the
/// values as currency is the front end's job.
///
/// `son_share` is computed even when there are zero sons (and likewise for
/// daughters); callers display only the categories they care about.
///
/// # Arguments
///
/// * `input` - Estate amount and heir counts
///
/// # Returns
///
/// * `Ok(ShareResult)` - Per-heir shares plus the unit breakdown
/// * `Err(ShareError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use faraid_core::calculations::shares::{calculate, ShareInput};
///
/// let result = calculate(&ShareInput::new(100.0, 0, 1)).unwrap();
/// assert_eq!(result.daughter_share, 100.0);
/// ```
pub fn calculate(input: &ShareInput) -> CalcResult<ShareResult> {
    // Validate inputs
    input.validate()?;

    // Each son weighs double a daughter
    let total_share_units = input.total_share_units();
    let share_unit_value = input.amount / total_share_units;

    Ok(ShareResult {
        son_share: share_unit_value * 2.0,
        daughter_share: share_unit_value,
        total_share_units,
        share_unit_value,
    })
}
