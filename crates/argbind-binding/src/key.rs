use std::fmt;
use std::sync::Arc;

use crate::config::BindingConfig;
use crate::error::{BindingError, BindingResult};

type KeyGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Where a binding's lookup key comes from.
///
/// The key is fixed when the binding is declared, before the first read.
#[derive(Clone)]
pub enum KeySource {
    /// Used as given.
    Explicit(String),
    /// Inferred from a field name registered at the declaration site,
    /// usually through [`field_key!`](crate::field_key).
    Field(&'static str),
    /// Produced by a generator, evaluated once at declaration.
    Generated(KeyGenerator),
}

impl KeySource {
    /// A key used exactly as given.
    pub fn explicit(key: impl Into<String>) -> Self {
        KeySource::Explicit(key.into())
    }

    /// A key inferred from a registered field name.
    pub fn field(name: &'static str) -> Self {
        KeySource::Field(name)
    }

    /// A key produced by `generator` at declaration.
    pub fn generated(generator: impl Fn() -> String + Send + Sync + 'static) -> Self {
        KeySource::Generated(Arc::new(generator))
    }

    /// Whether the key is derived rather than spelled out.
    pub fn is_inferred(&self) -> bool {
        !matches!(self, KeySource::Explicit(_))
    }

    /// Produce the lookup key. Empty keys are rejected.
    pub fn resolve(&self, config: &BindingConfig) -> BindingResult<String> {
        let key = match self {
            KeySource::Explicit(key) => key.clone(),
            KeySource::Field(name) => config.infer_key(name),
            KeySource::Generated(generator) => generator(),
        };
        if key.is_empty() {
            return Err(BindingError::InvalidKey(format!("{self:?} produced an empty key")));
        }
        Ok(key)
    }
}

impl fmt::Debug for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySource::Explicit(key) => f.debug_tuple("Explicit").field(key).finish(),
            KeySource::Field(name) => f.debug_tuple("Field").field(name).finish(),
            KeySource::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

impl From<&str> for KeySource {
    fn from(key: &str) -> Self {
        KeySource::Explicit(key.to_string())
    }
}

impl From<String> for KeySource {
    fn from(key: String) -> Self {
        KeySource::Explicit(key)
    }
}

/// Key source inferred from a field identifier.
///
/// `field_key!(user_id)` registers the name `"user_id"`; the final key is
/// derived from it through the host's [`BindingConfig`].
#[macro_export]
macro_rules! field_key {
    ($field:ident) => {
        $crate::KeySource::Field(stringify!($field))
    };
}
