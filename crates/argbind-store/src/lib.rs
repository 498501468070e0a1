//! Argument store adapters.
//!
//! A host object carries a flat bundle of typed primitive arguments. This
//! crate provides the read side of that bundle as seen by bindings:
//!
//! - [`ArgumentStore`] -- the lookup contract (`get_typed` plus one typed
//!   getter per [`ValueKind`])
//! - [`Arguments`] -- `HashMap`-based bundle for hosts, tests and embedding
//! - [`ArgumentSlot`] -- the host-owned holder that is either absent or
//!   attached to a store
//!
//! # Design Rules
//!
//! 1. An absent store and an empty store are indistinguishable to lookups.
//! 2. Lookups never coerce: a key holding another kind is a
//!    [`StoreError::TypeMismatch`], not a miss.
//! 3. The store is shared read-only from the binding side; only the host
//!    mutates or replaces it.

pub mod error;
pub mod memory;
pub mod slot;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::Arguments;
pub use slot::ArgumentSlot;
pub use traits::{extract, ArgumentStore};

pub use argbind_types::{ArgumentValue, Value, ValueKind};
