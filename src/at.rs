//! Key-based access to map entries, with insertion and removal.
//!
//! The [`At`] trait provides a Lens from a map to `Option<V>` for a fixed
//! key. Because the focus is the *slot* rather than the value, the lens is
//! total: setting `Some(v)` inserts or replaces the entry, setting `None`
//! removes it. Compare [`Ixed`](crate::ixed::Ixed), whose Optional can only
//! update entries that already exist.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use refract::{At, Lens};
//!
//! let entry = <HashMap<String, i32> as At>::at("bar".to_string());
//!
//! let map: HashMap<String, i32> = [("foo".to_string(), 1)].into_iter().collect();
//!
//! // setting Some inserts
//! let with_bar = entry.set(map, Some(9));
//! assert_eq!(with_bar.get("bar"), Some(&9));
//!
//! // setting None removes
//! let without_bar = entry.set(with_bar, None);
//! assert_eq!(without_bar.get("bar"), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::lens::Lens;
use crate::path::key_fragment;

/// Maps whose entry slots can be focused by key.
pub trait At: Sized {
    /// The key type.
    type Key;
    /// The value type stored under a key.
    type Value;
    /// The Lens returned by [`at`](Self::at).
    type AtLens: Lens<Self, Option<Self::Value>>;

    /// Returns a Lens focusing the entry slot under the given key.
    fn at(key: Self::Key) -> Self::AtLens;
}

/// A Lens focusing the entry slot of a `HashMap` under a fixed key.
///
/// Its path fragment is `{key}`.
pub struct HashMapAt<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> HashMapAt<K, V> {
    /// Creates a new `HashMapAt` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Lens<HashMap<K, V>, Option<V>> for HashMapAt<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Display,
    V: Clone,
{
    fn get(&self, source: &HashMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V>, value: Option<V>) -> HashMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&key_fragment(&self.key));
    }
}

impl<K: Clone, V> Clone for HashMapAt<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: std::fmt::Debug, V> std::fmt::Debug for HashMapAt<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HashMapAt")
            .field("key", &self.key)
            .finish()
    }
}

impl<K, V> At for HashMap<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Display,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type AtLens = HashMapAt<K, V>;

    fn at(key: K) -> HashMapAt<K, V> {
        HashMapAt::new(key)
    }
}

/// A Lens focusing the entry slot of a `BTreeMap` under a fixed key.
///
/// Its path fragment is `{key}`.
pub struct BTreeMapAt<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> BTreeMapAt<K, V> {
    /// Creates a new `BTreeMapAt` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Lens<BTreeMap<K, V>, Option<V>> for BTreeMapAt<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    fn get(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: Option<V>) -> BTreeMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&key_fragment(&self.key));
    }
}

impl<K: Clone, V> Clone for BTreeMapAt<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: std::fmt::Debug, V> std::fmt::Debug for BTreeMapAt<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BTreeMapAt")
            .field("key", &self.key)
            .finish()
    }
}

impl<K, V> At for BTreeMap<K, V>
where
    K: Ord + Clone + std::fmt::Display,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type AtLens = BTreeMapAt<K, V>;

    fn at(key: K) -> BTreeMapAt<K, V> {
        BTreeMapAt::new(key)
    }
}
