//! Error types for reading filter tokens and attribute paths.

use thiserror::Error;

/// Errors that can occur when reading filter text into model values.
///
/// Building and rendering an expression tree never fails; these errors only
/// come from the text-reading helpers such as `Token::from_str`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The token is not part of the operator vocabulary.
    #[error("unknown operator: '{token}'")]
    UnknownOperator {
        /// The rejected token text.
        token: String,
    },

    /// An attribute path without an attribute name.
    #[error("empty attribute name")]
    EmptyAttributeName,

    /// Attribute path text that does not follow the attribute name grammar.
    #[error("invalid attribute path at position {position}: {message}")]
    InvalidAttributePath {
        /// Position in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },
}

/// Result type for filter model operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;
