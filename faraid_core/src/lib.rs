//! # faraid_core - Inheritance Share Calculation Engine
//!
//! `faraid_core` computes simplified Islamic inheritance shares for sons and
//! daughters at the fixed 2:1 (son:daughter) ratio, with a clean,
//! front-end-agnostic API. All inputs and outputs are JSON-serializable, so
//! the same core drives a CLI, a web form, or an AI-assistant integration
//! unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types whose `Display` text is the
//!   user-facing message, not just debug strings
//! - **Locale-Agnostic**: No currency or formatting concerns in the core
//!
//! ## Quick Start
//!
//! ```rust
//! use faraid_core::{calculate, ShareInput};
//!
//! // Divide 900,000 between 2 sons and 1 daughter
//! let result = calculate(&ShareInput::new(900_000.0, 2, 1)).unwrap();
//! assert_eq!(result.son_share, 360_000.0);
//! assert_eq!(result.daughter_share, 180_000.0);
//!
//! // Serialize for transmission to a front end
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("daughter_share"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Share calculation types and the pure `calculate` function
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::shares::{calculate, ShareInput, ShareResult};
pub use errors::{CalcResult, ShareError};
