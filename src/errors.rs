//! Error Types
//!
//! This module defines the error types used at the boundaries of the crate.
//!
//! # Overview
//!
//! The spring solvers and quaternion maps never fail: every input has a defined
//! (if degenerate) output. [`SpringError`] only covers the edges where data
//! enters the crate:
//! - Unwrapping a dynamically shaped [`Operand`](crate::dispatch::Operand)
//! - Loading and validating [`SpringSettings`](crate::settings::SpringSettings)
//!
//! # Usage
//!
//! ```rust,ignore
//! use myth_spring::errors::{SpringError, Result};
//! use myth_spring::settings::SpringSettings;
//!
//! fn load(json: &str) -> Result<SpringSettings> {
//!     SpringSettings::from_json(json)
//! }
//! ```

use thiserror::Error;

/// The main error type for the spring library.
#[derive(Error, Debug)]
pub enum SpringError {
    // ========================================================================
    // Dispatch Errors
    // ========================================================================
    /// An operand did not have the shape the caller asked for.
    #[error("Operand shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Shape that was requested
        expected: &'static str,
        /// Shape that was actually held
        found: &'static str,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A configured spring parameter is outside its valid domain.
    #[error("Invalid spring parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f32,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Settings could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias for `Result<T, SpringError>`.
pub type Result<T> = std::result::Result<T, SpringError>;
