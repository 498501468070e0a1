//! Foundation types for argument bindings.
//!
//! Every other argbind crate depends on `argbind-types`. It defines the closed
//! set of primitive kinds an argument store may hold and the conversion
//! contract between a stored [`Value`] and a Rust field type.
//!
//! # Key Types
//!
//! - [`ValueKind`] — The primitive kind tag (`Int`, `Bool`, `String`, `Long`, `Double`, `Float`)
//! - [`Value`] — A stored argument value, tagged with its kind
//! - [`ArgumentValue`] — Exact-kind extraction from a [`Value`] into a Rust type
//!
//! # Design Rules
//!
//! 1. Each Rust field type maps to exactly one [`ValueKind`].
//! 2. Extraction never coerces across kinds: an `i64` is not an `i32`.

pub mod error;
pub mod kind;
pub mod value;

pub use error::{TypeError, TypeResult};
pub use kind::ValueKind;
pub use value::{ArgumentValue, Value};
