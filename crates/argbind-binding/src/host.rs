use std::sync::Arc;

use argbind_store::{ArgumentSlot, ArgumentStore};
use argbind_types::ArgumentValue;

use crate::accessor::Accessor;
use crate::binder::Binder;
use crate::config::BindingConfig;
use crate::descriptor::BindingDescriptor;
use crate::error::BindingResult;

/// An object that owns an argument slot and the bindings reading from it.
///
/// Each host owns its own slot; nothing is shared between hosts.
pub trait ArgumentHost {
    fn argument_slot(&self) -> &Arc<ArgumentSlot>;

    /// Key inference settings for bindings declared by this host.
    fn binding_config(&self) -> BindingConfig {
        BindingConfig::default()
    }

    /// Whether a store is attached at all.
    fn has_arguments(&self) -> bool {
        self.argument_slot().has_store()
    }

    /// Attach (or replace) the host's argument store.
    fn set_arguments(&self, store: impl ArgumentStore + 'static)
    where
        Self: Sized,
    {
        self.argument_slot().attach_store(store);
    }

    /// Detach the argument store, leaving the host without one.
    fn clear_arguments(&self) {
        self.argument_slot().detach();
    }

    fn binder(&self) -> Binder {
        Binder::new(self.argument_slot()).with_config(self.binding_config())
    }

    /// Declare a binding after construction.
    fn declare_binding<T: ArgumentValue>(
        &self,
        descriptor: BindingDescriptor<T>,
    ) -> BindingResult<Accessor<T>>
    where
        Self: Sized,
    {
        self.binder().declare(descriptor)
    }
}
