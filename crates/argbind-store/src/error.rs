use argbind_types::ValueKind;

/// Errors from argument store lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The key exists but holds a value of a different kind.
    #[error("argument {key:?} holds {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
