//! Error types for markup parsing.
//!
//! Malformed markup is never an error: a rule that cannot match simply
//! declines and the text is kept as a literal. The variants here cover the
//! limits that guard against pathological input.

use thiserror::Error;

/// Errors that can occur when parsing markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Nested rules went deeper than the configured limit.
    #[error("input too complex: nesting exceeds {limit} levels")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The rule engine was consulted more often than the configured limit.
    #[error("input too complex: more than {limit} rule attempts")]
    TooManySteps {
        /// The configured maximum number of attempts.
        limit: usize,
    },

    /// The input is longer than the configured limit.
    #[error("input too large: {len} characters exceeds limit of {limit}")]
    InputTooLarge {
        /// Length of the rejected input, in characters.
        len: usize,
        /// The configured maximum length.
        limit: usize,
    },
}

impl MarkupError {
    /// Whether this error reports input too complex to parse within limits.
    pub fn is_too_complex(&self) -> bool {
        matches!(self, MarkupError::TooDeep { .. } | MarkupError::TooManySteps { .. })
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, MarkupError>;
