//! Error types for the Income Insights Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading reference data and
//! building statistics snapshots.

use thiserror::Error;

/// The main error type for the Income Insights Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use income_insights::error::EngineError;
///
/// let error = EngineError::DataUnavailable {
///     message: "region income data not available for XX".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Data not available: region income data not available for XX"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A reference dataset file was not found at the specified path.
    #[error("Data file not found: {path}")]
    DataFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A reference dataset file could not be parsed.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A user profile field violated an invariant.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A mandatory reference-data lookup returned nothing.
    ///
    /// This aborts snapshot construction entirely; callers are expected to
    /// surface it to the user rather than substitute defaults.
    #[error("Data not available: {message}")]
    DataUnavailable {
        /// A description of the missing data.
        message: String,
    },

    /// A spawned calculation task failed to join.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
