//! Error types for the GPA engine.
//!
//! The computation core is total and never fails. These errors belong to
//! the layers around it: loading a grading scheme from disk and talking to
//! the external extraction and credit-lookup collaborators.

use thiserror::Error;

/// The main error type for the GPA engine.
///
/// # Example
///
/// ```
/// use gpa_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheme.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheme.yaml");
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

    /// The grade bands of a grading policy are unusable.
    #[error("Invalid grading policy: {message}")]
    InvalidGradingPolicy {
        /// What is wrong with the band list.
        message: String,
    },

    /// The marksheet extraction service failed or returned nothing usable.
    #[error("Marksheet extraction failed: {message}")]
    ExtractionFailed {
        /// A description of the failure.
        message: String,
    },

    /// The credit-lookup service failed.
    #[error("Credit lookup failed: {message}")]
    CreditLookupFailed {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
