//! Error types for the Leave Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a leave calculation. All of them are
//! caller input or configuration errors; none is transient.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Leave Accrual Engine.
///
/// Every engine operation returns this error type. Validation happens before
/// any computation starts, so an error never comes with a partial result.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedConvention {
///     tag: "lunar".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported leave convention: lunar");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value cannot be used for accrual arithmetic.
    #[error("Invalid accrual policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date that must not precede the hire date does.
    #[error("Invalid date range: {end_date} is before hire date {hire_date}")]
    InvalidDateRange {
        /// The hire date.
        hire_date: NaiveDate,
        /// The termination or reference date that precedes it.
        end_date: NaiveDate,
    },

    /// A date was malformed or outside the supported calendar range.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The offending input.
        value: String,
        /// A description of what made the date invalid.
        message: String,
    },

    /// The requested accrual convention is not known.
    #[error("Unsupported leave convention: {tag}")]
    UnsupportedConvention {
        /// The tag supplied by the caller.
        tag: String,
    },

    /// The projection horizon is outside the supported range.
    #[error("Invalid projection horizon: {years} years (expected 1 to {max})")]
    InvalidHorizon {
        /// The requested number of years.
        years: u32,
        /// The largest accepted number of years.
        max: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
