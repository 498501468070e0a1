use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use argbind_types::{Value, ValueKind};

use crate::traits::ArgumentStore;

/// In-memory, HashMap-based argument bundle.
///
/// Hosts populate it with the typed `put_*` methods before or after handing it
/// to an [`ArgumentSlot`](crate::ArgumentSlot). Entries live behind a
/// `RwLock`, so a shared bundle can still be mutated by its owner. Values are
/// cloned on read.
pub struct Arguments {
    entries: RwLock<HashMap<String, Value>>,
}

impl Arguments {
    /// Create a new empty bundle.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// A present-but-empty bundle.
    pub fn empty() -> Self {
        Self::new()
    }

    /// Build a bundle from `(key, value)` pairs. Later duplicates win.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Builder-style insert.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.put(key, value);
        self
    }

    /// Insert a value, returning the one it replaced.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(key.into(), value.into())
    }

    /// Store an `Int`, returning the value it replaced.
    pub fn put_int(&self, key: impl Into<String>, value: i32) -> Option<Value> {
        self.put(key, value)
    }

    /// Store a `Bool`, returning the value it replaced.
    pub fn put_bool(&self, key: impl Into<String>, value: bool) -> Option<Value> {
        self.put(key, value)
    }

    /// Store a `String`, returning the value it replaced.
    pub fn put_string(&self, key: impl Into<String>, value: impl Into<String>) -> Option<Value> {
        self.put(key, Value::String(value.into()))
    }

    /// Store a `Long`, returning the value it replaced.
    pub fn put_long(&self, key: impl Into<String>, value: i64) -> Option<Value> {
        self.put(key, value)
    }

    /// Store a `Double`, returning the value it replaced.
    pub fn put_double(&self, key: impl Into<String>, value: f64) -> Option<Value> {
        self.put(key, value)
    }

    /// Store a `Float`, returning the value it replaced.
    pub fn put_float(&self, key: impl Into<String>, value: f32) -> Option<Value> {
        self.put(key, value)
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.write().expect("lock poisoned").remove(key)
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Sorted list of all keys.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Sorted copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        let map = self.entries.read().expect("lock poisoned");
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Arguments {
    fn clone(&self) -> Self {
        let map = self.entries.read().expect("lock poisoned").clone();
        Self {
            entries: RwLock::new(map),
        }
    }
}

impl ArgumentStore for Arguments {
    fn lookup(&self, key: &str) -> Option<Value> {
        let map = self.entries.read().expect("lock poisoned");
        map.get(key).cloned()
    }

    fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().expect("lock poisoned").contains_key(key)
    }

    fn kind_of(&self, key: &str) -> Option<ValueKind> {
        let map = self.entries.read().expect("lock poisoned");
        map.get(key).map(Value::kind)
    }
}

impl std::fmt::Debug for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.snapshot()).finish()
    }
}

/// Build an [`Arguments`] bundle from `key => value` pairs.
///
/// Values go through `Into<Value>`, so literal suffixes pick the kind:
/// `14i64` is a `Long`, `2.71f32` a `Float`.
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::Arguments::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Arguments::new()$(.with($key, $value))+
    };
}
