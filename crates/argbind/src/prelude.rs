//! Everything a host needs to declare and read bindings.

pub use crate::{
    arguments, field_key, Arg, ArgumentHost, ArgumentSlot, ArgumentStore, Arguments, Binder,
    BindingConfig, BindingError, BindingResult, KeyStyle, OptionalArg,
};
