//! # Share Calculations
//!
//! This module contains the share calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, ShareError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`shares`] - Fixed-ratio son/daughter estate division

pub mod shares;

// Re-export commonly used types
pub use shares::{ShareInput, ShareResult};
