//! Error types for the Payroll Computation Core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The computation pipeline itself is infallible for well-typed inputs --
//! every input irregularity degrades to a defined numeric default -- so
//! errors arise only at the boundaries: configuration loading and payroll
//! period construction.

use thiserror::Error;

/// The main error type for the Payroll Computation Core.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payroll period was requested for a month outside 1..=12.
    #[error("Invalid payroll period: {year}-{month}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (out of range).
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
