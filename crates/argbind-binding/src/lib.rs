//! Lazily-resolved, memoized typed bindings over an argument store.
//!
//! A host declares one binding per field. Each binding fixes its lookup key
//! at declaration (explicitly, or inferred from the field name) and resolves
//! its value on the first read:
//!
//! 1. Look the key up in the host's current [`ArgumentSlot`] as the field's
//!    [`ValueKind`].
//! 2. Found: cache and return it.
//! 3. Not found: a [`Requirement::RequiredWithDefault`] caches its default,
//!    a [`Requirement::Optional`] caches `None`, a [`Requirement::Required`]
//!    fails with [`BindingError::MissingArgument`] and caches nothing.
//!
//! Once cached, a value is returned unconditionally; later store changes are
//! not observed. A key holding another kind fails with
//! [`BindingError::TypeMismatch`] and is never coerced.
//!
//! # Key Types
//!
//! - [`Binder`] — declares bindings against a slot
//! - [`Arg`] / [`OptionalArg`] — typed field accessors
//! - [`Accessor`] — the underlying resolve-once accessor
//! - [`ArgumentHost`] — trait for objects owning a slot
//! - [`BindingConfig`] — key inference settings

pub mod accessor;
pub mod binder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod host;
pub mod key;

pub use accessor::{Accessor, Arg, OptionalArg};
pub use binder::Binder;
pub use config::{BindingConfig, KeyStyle};
pub use descriptor::{BindingDescriptor, Requirement};
pub use error::{BindingError, BindingResult};
pub use host::ArgumentHost;
pub use key::KeySource;

pub use argbind_store::ArgumentSlot;
pub use argbind_types::{ArgumentValue, ValueKind};
