use argbind_store::StoreError;
use argbind_types::ValueKind;
use thiserror::Error;

/// Errors surfaced by binding declaration and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A required binding found nothing, including when no store is attached.
    #[error("missing required argument {key:?} ({kind})")]
    MissingArgument { key: String, kind: ValueKind },

    /// The key is present but holds another kind.
    #[error("argument {key:?} holds {actual}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("invalid argument key: {0}")]
    InvalidKey(String),

    #[error("invalid binding configuration: {0}")]
    Config(String),
}

impl From<StoreError> for BindingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TypeMismatch {
                key,
                expected,
                actual,
            } => BindingError::TypeMismatch {
                key,
                expected,
                actual,
            },
        }
    }
}

pub type BindingResult<T> = Result<T, BindingError>;
