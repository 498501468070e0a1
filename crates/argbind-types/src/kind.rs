use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kind of a stored argument.
///
/// The set is closed: an argument store holds nothing else, and every binding
/// requests exactly one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// 32-bit signed integer.
    Int,
    Bool,
    String,
    /// 64-bit signed integer.
    Long,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Int,
        ValueKind::Bool,
        ValueKind::String,
        ValueKind::Long,
        ValueKind::Double,
        ValueKind::Float,
    ];

    /// Lowercase name, as used in configuration and log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::String => "string",
            ValueKind::Long => "long",
            ValueKind::Double => "double",
            ValueKind::Float => "float",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
