//! Error taxonomy shared by the core algorithms.

use thiserror::Error;

/// Failure of a single algorithm call. Errors are terminal for that call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// Input violates the operation's precondition (e.g. an empty sequence).
    #[error("{operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },
    /// Result does not fit the operation's integer width.
    #[error("{operation}: input {input} exceeds maximum {max} for a 64-bit result")]
    Overflow {
        operation: &'static str,
        input: i64,
        max: i64,
    },
}

impl SeqError {
    /// `InvalidArgument` for an operation that requires a non-empty sequence.
    pub fn empty(operation: &'static str) -> Self {
        SeqError::InvalidArgument {
            operation,
            reason: "sequence must not be empty".to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SeqError::InvalidArgument { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, SeqError::Overflow { .. })
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;
