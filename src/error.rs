//! Error taxonomy for query operations.
//!
//! Three failure classes, kept deliberately small:
//!
//! - [`QueryError::InvalidArgument`] - the caller passed something unusable
//!   (empty tag, zero page/limit, unknown sort field). Never retried.
//! - [`QueryError::NotFound`] - a lookup target does not exist. Distinct from
//!   an empty result set so callers can tell "no related items" apart from
//!   "target missing".
//! - [`QueryError::StoreUnavailable`] - the external document store failed.
//!   Propagated unchanged; the store's retry policy is not ours to guess.
//!
//! No partial results accompany an error: a failed call returns only the error.

use std::fmt;

/// Error type for query operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The caller supplied an argument the query cannot act on.
    InvalidArgument { message: String },
    /// The requested document does not exist.
    NotFound { id: String },
    /// The external document store could not serve the request.
    StoreUnavailable { message: String },
}

impl QueryError {
    /// Shorthand for an `InvalidArgument` with a formatted message.
    pub fn invalid(message: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            QueryError::NotFound { id } => {
                write!(f, "document '{}' not found", id)
            }
            QueryError::StoreUnavailable { message } => {
                write!(f, "document store unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_each_variant() {
        let invalid = QueryError::invalid("page must be >= 1");
        assert_eq!(invalid.to_string(), "invalid argument: page must be >= 1");

        let missing = QueryError::NotFound {
            id: "post-42".to_string(),
        };
        assert_eq!(missing.to_string(), "document 'post-42' not found");

        let down = QueryError::StoreUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            down.to_string(),
            "document store unavailable: connection refused"
        );
    }
}
