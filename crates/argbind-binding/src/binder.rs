use std::sync::{Arc, Weak};

use argbind_store::ArgumentSlot;
use argbind_types::ArgumentValue;

use crate::accessor::{Accessor, Arg, OptionalArg};
use crate::config::BindingConfig;
use crate::descriptor::BindingDescriptor;
use crate::error::BindingResult;
use crate::key::KeySource;

/// Declares bindings against one host's argument slot.
///
/// A host builds its accessors through a binder while constructing itself,
/// before the slot has a store. Keys are resolved at declaration; values on
/// first read.
#[derive(Clone, Debug)]
pub struct Binder {
    slot: Weak<ArgumentSlot>,
    config: BindingConfig,
}

impl Binder {
    /// Binder over `slot` with the default key configuration.
    pub fn new(slot: &Arc<ArgumentSlot>) -> Self {
        Self {
            slot: Arc::downgrade(slot),
            config: BindingConfig::default(),
        }
    }

    /// Replace the key inference settings.
    pub fn with_config(mut self, config: BindingConfig) -> Self {
        self.config = config;
        self
    }

    /// Key inference settings in use.
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Declare an accessor for an arbitrary descriptor.
    pub fn declare<T: ArgumentValue>(
        &self,
        descriptor: BindingDescriptor<T>,
    ) -> BindingResult<Accessor<T>> {
        Accessor::from_weak(descriptor, self.slot.clone(), &self.config)
    }

    /// A required binding.
    pub fn bind<T: ArgumentValue>(&self, key: impl Into<KeySource>) -> BindingResult<Arg<T>> {
        self.declare(BindingDescriptor::required(key)).map(Arg::new)
    }

    /// A required binding that falls back to `default` when missing.
    pub fn bind_or<T: ArgumentValue>(
        &self,
        key: impl Into<KeySource>,
        default: T,
    ) -> BindingResult<Arg<T>> {
        self.declare(BindingDescriptor::with_default(key, default))
            .map(Arg::new)
    }

    /// An optional binding.
    pub fn bind_optional<T: ArgumentValue>(
        &self,
        key: impl Into<KeySource>,
    ) -> BindingResult<OptionalArg<T>> {
        self.declare(BindingDescriptor::optional(key))
            .map(OptionalArg::new)
    }
}
