//! Typed, lazily-resolved argument bindings.
//!
//! This is the main entry point for hosts. A host owns an [`ArgumentSlot`]
//! (absent until a store is attached) and declares its bound fields through a
//! [`Binder`]. Each field resolves from the slot on first read and keeps that
//! value for the host's lifetime.
//!
//! Most hosts only need the [`prelude`].

pub mod prelude;

#[cfg(test)]
mod scenarios;

pub use argbind_binding::{
    field_key, Accessor, Arg, ArgumentHost, Binder, BindingConfig, BindingDescriptor,
    BindingError, BindingResult, KeySource, KeyStyle, OptionalArg, Requirement,
};
pub use argbind_store::{arguments, ArgumentSlot, ArgumentStore, Arguments, StoreError, StoreResult};
pub use argbind_types::{ArgumentValue, TypeError, Value, ValueKind};
