use std::fmt;
use std::sync::{Arc, Weak};

use argbind_store::ArgumentSlot;
use argbind_types::{ArgumentValue, ValueKind};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::BindingConfig;
use crate::descriptor::{BindingDescriptor, Requirement};
use crate::error::{BindingError, BindingResult};

/// A bound field: resolves its value from the host's argument slot on the
/// first successful read and returns the cached value from then on.
///
/// The accessor holds only a weak link to the slot and reads it at
/// resolution time, never at construction. Once resolved, later changes to
/// the store (or attaching a different one) are not observed.
///
/// Concurrent first reads run a single resolution; the others block until it
/// finishes. A resolution that fails or panics leaves the cache empty.
pub struct Accessor<T> {
    key: String,
    requirement: Requirement<T>,
    slot: Weak<ArgumentSlot>,
    cache: OnceCell<Option<T>>,
}

impl<T: ArgumentValue> Accessor<T> {
    /// Declare an accessor over `slot`. The key is fixed here.
    pub fn new(
        descriptor: BindingDescriptor<T>,
        slot: &Arc<ArgumentSlot>,
        config: &BindingConfig,
    ) -> BindingResult<Self> {
        Self::from_weak(descriptor, Arc::downgrade(slot), config)
    }

    pub(crate) fn from_weak(
        descriptor: BindingDescriptor<T>,
        slot: Weak<ArgumentSlot>,
        config: &BindingConfig,
    ) -> BindingResult<Self> {
        let (source, requirement) = descriptor.into_parts();
        let key = source.resolve(config)?;
        Ok(Self {
            key,
            requirement,
            slot,
            cache: OnceCell::new(),
        })
    }

    /// The lookup key fixed at declaration.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value kind requested from the store.
    pub fn kind(&self) -> ValueKind {
        T::KIND
    }

    /// The missing-value policy.
    pub fn requirement(&self) -> &Requirement<T> {
        &self.requirement
    }

    /// Whether the value has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Read the value, resolving it on first success.
    ///
    /// `Ok(None)` only for optional bindings. A failed resolution caches
    /// nothing, so the next call retries against the current store.
    pub fn get(&self) -> BindingResult<Option<T>> {
        self.cache.get_or_try_init(|| self.resolve()).cloned()
    }

    fn resolve(&self) -> BindingResult<Option<T>> {
        let found = match self.slot.upgrade() {
            Some(slot) => slot.get::<T>(&self.key)?,
            None => None,
        };

        match (found, &self.requirement) {
            (Some(value), _) => {
                debug!(key = %self.key, kind = %T::KIND, "argument resolved");
                Ok(Some(value))
            }
            (None, Requirement::RequiredWithDefault(default)) => {
                debug!(key = %self.key, kind = %T::KIND, "argument missing; using default");
                Ok(Some(default.clone()))
            }
            (None, Requirement::Optional) => {
                debug!(key = %self.key, kind = %T::KIND, "optional argument absent");
                Ok(None)
            }
            (None, Requirement::Required) => {
                debug!(key = %self.key, kind = %T::KIND, "required argument missing");
                Err(self.missing())
            }
        }
    }

    fn missing(&self) -> BindingError {
        BindingError::MissingArgument {
            key: self.key.clone(),
            kind: T::KIND,
        }
    }
}

impl<T: ArgumentValue> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("key", &self.key)
            .field("kind", &T::KIND)
            .field("requirement", &self.requirement)
            .field("cached", &self.cache.get())
            .finish()
    }
}

/// A binding that always yields a value: required, or required with a
/// default.
pub struct Arg<T>(Accessor<T>);

impl<T: ArgumentValue> Arg<T> {
    pub(crate) fn new(accessor: Accessor<T>) -> Self {
        Self(accessor)
    }

    /// Read the value. Fails with [`BindingError::MissingArgument`] while a
    /// required key is not found.
    pub fn get(&self) -> BindingResult<T> {
        self.0.get()?.ok_or_else(|| self.0.missing())
    }

    /// The lookup key fixed at declaration.
    pub fn key(&self) -> &str {
        self.0.key()
    }

    /// Whether the value has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.0.is_resolved()
    }

    /// The underlying accessor.
    pub fn accessor(&self) -> &Accessor<T> {
        &self.0
    }
}

/// A binding that yields `None` when the key is not found.
pub struct OptionalArg<T>(Accessor<T>);

impl<T: ArgumentValue> OptionalArg<T> {
    pub(crate) fn new(accessor: Accessor<T>) -> Self {
        Self(accessor)
    }

    /// Read the value; `None` when the key was not found.
    pub fn get(&self) -> BindingResult<Option<T>> {
        self.0.get()
    }

    /// The lookup key fixed at declaration.
    pub fn key(&self) -> &str {
        self.0.key()
    }

    /// Whether the value has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.0.is_resolved()
    }

    /// The underlying accessor.
    pub fn accessor(&self) -> &Accessor<T> {
        &self.0
    }
}

impl<T: ArgumentValue> fmt::Debug for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Arg").field(&self.0).finish()
    }
}

impl<T: ArgumentValue> fmt::Debug for OptionalArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OptionalArg").field(&self.0).finish()
    }
}
