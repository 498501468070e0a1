use argbind_types::{ArgumentValue, ValueKind};

use crate::key::KeySource;

/// Policy applied when the key is not found.
#[derive(Clone, Debug, PartialEq)]
pub enum Requirement<T> {
    /// Missing is an error.
    Required,
    /// Missing resolves to the given default.
    RequiredWithDefault(T),
    /// Missing resolves to `None`.
    Optional,
}

impl<T> Requirement<T> {
    /// Whether a miss resolves to `None`.
    pub fn is_optional(&self) -> bool {
        matches!(self, Requirement::Optional)
    }

    /// The fallback value, if this is `RequiredWithDefault`.
    pub fn default_value(&self) -> Option<&T> {
        match self {
            Requirement::RequiredWithDefault(default) => Some(default),
            _ => None,
        }
    }
}

/// Immutable declaration of one bound field: key source, value type, and
/// missing-value policy. The value kind is carried by `T`.
#[derive(Clone, Debug)]
pub struct BindingDescriptor<T> {
    key: KeySource,
    requirement: Requirement<T>,
}

impl<T: ArgumentValue> BindingDescriptor<T> {
    /// Descriptor with an explicit requirement.
    pub fn new(key: impl Into<KeySource>, requirement: Requirement<T>) -> Self {
        Self {
            key: key.into(),
            requirement,
        }
    }

    /// A binding that fails when the key is missing.
    pub fn required(key: impl Into<KeySource>) -> Self {
        Self::new(key, Requirement::Required)
    }

    /// A binding that falls back to `default` when the key is missing.
    pub fn with_default(key: impl Into<KeySource>, default: T) -> Self {
        Self::new(key, Requirement::RequiredWithDefault(default))
    }

    /// A binding that resolves to `None` when the key is missing.
    pub fn optional(key: impl Into<KeySource>) -> Self {
        Self::new(key, Requirement::Optional)
    }

    /// Where the lookup key comes from.
    pub fn key(&self) -> &KeySource {
        &self.key
    }

    /// Missing-value policy.
    pub fn requirement(&self) -> &Requirement<T> {
        &self.requirement
    }

    /// Kind requested from the store.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    pub(crate) fn into_parts(self) -> (KeySource, Requirement<T>) {
        (self.key, self.requirement)
    }
}
