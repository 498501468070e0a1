use std::collections::{BTreeMap, HashMap};

use argbind_types::{ArgumentValue, TypeError, Value, ValueKind};

use crate::error::{StoreError, StoreResult};

/// Read-only view over a flat `key -> value` argument bundle.
///
/// All implementations must satisfy these invariants:
/// - Lookups have no side effects.
/// - `get_typed` returns `Ok(None)` only when the key is absent, and
///   [`StoreError::TypeMismatch`] when the key holds another kind.
/// - No value is ever converted from one kind to another.
pub trait ArgumentStore: Send + Sync {
    /// Raw lookup. Returns `None` if the key is absent.
    fn lookup(&self, key: &str) -> Option<Value>;

    /// Number of entries in the store.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Kind of the value stored under `key`, if any.
    fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.lookup(key).map(|value| value.kind())
    }

    /// Look up `key`, requiring the stored value to be of `kind`.
    fn get_typed(&self, key: &str, kind: ValueKind) -> StoreResult<Option<Value>> {
        match self.lookup(key) {
            None => Ok(None),
            Some(value) if value.kind() == kind => Ok(Some(value)),
            Some(value) => Err(StoreError::TypeMismatch {
                key: key.to_string(),
                expected: kind,
                actual: value.kind(),
            }),
        }
    }

    fn get_int(&self, key: &str) -> StoreResult<Option<i32>> {
        extract(self, key)
    }

    fn get_bool(&self, key: &str) -> StoreResult<Option<bool>> {
        extract(self, key)
    }

    fn get_string(&self, key: &str) -> StoreResult<Option<String>> {
        extract(self, key)
    }

    fn get_long(&self, key: &str) -> StoreResult<Option<i64>> {
        extract(self, key)
    }

    fn get_double(&self, key: &str) -> StoreResult<Option<f64>> {
        extract(self, key)
    }

    fn get_float(&self, key: &str) -> StoreResult<Option<f32>> {
        extract(self, key)
    }
}

/// Typed lookup of `key` as `T`, dispatching on `T::KIND`.
pub fn extract<T, S>(store: &S, key: &str) -> StoreResult<Option<T>>
where
    T: ArgumentValue,
    S: ArgumentStore + ?Sized,
{
    let Some(value) = store.lookup(key) else {
        return Ok(None);
    };
    match T::try_from_value(&value) {
        Ok(typed) => Ok(Some(typed)),
        Err(TypeError::KindMismatch { expected, actual }) => Err(StoreError::TypeMismatch {
            key: key.to_string(),
            expected,
            actual,
        }),
    }
}

impl ArgumentStore for HashMap<String, Value> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl ArgumentStore for BTreeMap<String, Value> {
    fn lookup(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
