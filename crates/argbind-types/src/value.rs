use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::kind::ValueKind;

/// A single argument value as held by a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Int(i32),
    Bool(bool),
    String(String),
    Long(i64),
    Double(f64),
    Float(f32),
}

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::String(_) => ValueKind::String,
            Value::Long(_) => ValueKind::Long,
            Value::Double(_) => ValueKind::Double,
            Value::Float(_) => ValueKind::Float,
        }
    }

    /// Extract this value as `T`, failing if the kinds differ.
    pub fn extract<T: ArgumentValue>(&self) -> TypeResult<T> {
        T::try_from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Long(v) => write!(f, "{v}L"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}f"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

/// A Rust type that can be bound to an argument.
///
/// Each implementation names exactly one [`ValueKind`] and accepts only values
/// of that kind. There is no widening: a stored `Int` does not satisfy an
/// `i64` binding, and a stored `Double` does not satisfy an `f32` binding.
pub trait ArgumentValue: Clone + fmt::Debug + Send + Sync + 'static {
    /// The kind this type is stored as.
    const KIND: ValueKind;

    /// Borrowing extraction; `None` when the value is of another kind.
    fn from_value(value: &Value) -> Option<Self>;

    fn into_value(self) -> Value;

    /// Like [`from_value`](Self::from_value), reporting the mismatched kind.
    fn try_from_value(value: &Value) -> TypeResult<Self> {
        Self::from_value(value).ok_or(TypeError::KindMismatch {
            expected: Self::KIND,
            actual: value.kind(),
        })
    }
}

macro_rules! argument_value {
    ($ty:ty, $variant:ident) => {
        impl ArgumentValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    };
}

argument_value!(i32, Int);
argument_value!(bool, Bool);
argument_value!(String, String);
argument_value!(i64, Long);
argument_value!(f64, Double);
argument_value!(f32, Float);
