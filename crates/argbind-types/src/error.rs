use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced by value conversions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("kind mismatch: expected {expected}, found {actual}")]
    KindMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Result alias for value conversions.
pub type TypeResult<T> = Result<T, TypeError>;
