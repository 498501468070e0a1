use std::sync::{Arc, RwLock};

use argbind_types::{ArgumentValue, Value, ValueKind};
use tracing::debug;

use crate::error::StoreResult;
use crate::traits::{extract, ArgumentStore};

/// Host-owned holder for an optional argument store.
///
/// A slot starts absent. The host attaches, replaces or detaches the store;
/// bindings only read through it. While absent, every lookup is a miss,
/// exactly like an attached empty store.
pub struct ArgumentSlot {
    store: RwLock<Option<Arc<dyn ArgumentStore>>>,
}

impl ArgumentSlot {
    /// An absent slot.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(None),
        }
    }

    /// A slot already attached to `store`.
    pub fn with_store(store: impl ArgumentStore + 'static) -> Self {
        Self {
            store: RwLock::new(Some(Arc::new(store))),
        }
    }

    /// Whether a store is attached at all.
    pub fn has_store(&self) -> bool {
        self.store.read().expect("lock poisoned").is_some()
    }

    /// Attach a shared store, returning the one it replaced.
    pub fn attach(&self, store: Arc<dyn ArgumentStore>) -> Option<Arc<dyn ArgumentStore>> {
        debug!(entries = store.len(), "argument store attached");
        self.store.write().expect("lock poisoned").replace(store)
    }

    /// Attach an owned store.
    pub fn attach_store(
        &self,
        store: impl ArgumentStore + 'static,
    ) -> Option<Arc<dyn ArgumentStore>> {
        self.attach(Arc::new(store))
    }

    /// Detach the current store, leaving the slot absent.
    pub fn detach(&self) -> Option<Arc<dyn ArgumentStore>> {
        let previous = self.store.write().expect("lock poisoned").take();
        if previous.is_some() {
            debug!("argument store detached");
        }
        previous
    }

    /// Handle to the currently attached store.
    pub fn current(&self) -> Option<Arc<dyn ArgumentStore>> {
        self.store.read().expect("lock poisoned").clone()
    }

    /// Look up `key` as `kind` in the current store; a miss when absent.
    pub fn get_typed(&self, key: &str, kind: ValueKind) -> StoreResult<Option<Value>> {
        match self.current() {
            Some(store) => store.get_typed(key, kind),
            None => Ok(None),
        }
    }

    /// Typed lookup of `key` in the current store; a miss when absent.
    pub fn get<T: ArgumentValue>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.current() {
            Some(store) => extract(store.as_ref(), key),
            None => Ok(None),
        }
    }
}

impl Default for ArgumentSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ArgumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.current().map(|store| store.len());
        f.debug_struct("ArgumentSlot")
            .field("attached", &entries.is_some())
            .field("entries", &entries)
            .finish()
    }
}
