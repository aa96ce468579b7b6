//! Index-based access to container elements.
//!
//! The [`Ixed`] trait provides an Optional focusing the element at a given
//! index or key. The focus is absent when the index is out of bounds or the
//! key is missing; setting through an absent focus leaves the container
//! unchanged (unlike [`At`](crate::at::At), which can insert and remove).
//!
//! # Example
//!
//! ```
//! use refract::{Ixed, Optional};
//!
//! let third = <Vec<i32> as Ixed>::ix(2);
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(third.get_option(&numbers), Some(3));
//! assert_eq!(third.set(numbers, 30), vec![1, 2, 30]);
//!
//! let short = vec![1];
//! assert_eq!(third.get_option(&short), None);
//! assert_eq!(third.set(short, 30), vec![1]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::optional::Optional;
use crate::path::{index_fragment, key_fragment};

/// Containers whose elements can be focused by index or key.
pub trait Ixed: Sized {
    /// The index or key type.
    type Index;
    /// The element type focused at an index.
    type Element;
    /// The Optional returned by [`ix`](Self::ix).
    type IxOptional: Optional<Self, Self::Element>;

    /// Returns an Optional focusing the element at the given index.
    fn ix(index: Self::Index) -> Self::IxOptional;
}

/// An Optional focusing the element of a `Vec` at a fixed position.
///
/// Its path fragment is `[index]`.
pub struct VecIx<A> {
    index: usize,
    _marker: PhantomData<A>,
}

impl<A> VecIx<A> {
    /// Creates a new `VecIx` for the given position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<A: Clone> Optional<Vec<A>, A> for VecIx<A> {
    fn get_option(&self, source: &Vec<A>) -> Option<A> {
        source.get(self.index).cloned()
    }

    fn set(&self, mut source: Vec<A>, value: A) -> Vec<A> {
        if let Some(slot) = source.get_mut(self.index) {
            *slot = value;
        }
        source
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&index_fragment(self.index));
    }
}

impl<A> Clone for VecIx<A> {
    fn clone(&self) -> Self {
        Self::new(self.index)
    }
}

impl<A> std::fmt::Debug for VecIx<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("VecIx")
            .field("index", &self.index)
            .finish()
    }
}

impl<A: Clone> Ixed for Vec<A> {
    type Index = usize;
    type Element = A;
    type IxOptional = VecIx<A>;

    fn ix(index: usize) -> VecIx<A> {
        VecIx::new(index)
    }
}

/// An Optional focusing the value of a `HashMap` under a fixed key.
///
/// Its path fragment is `{key}`.
pub struct HashMapIx<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> HashMapIx<K, V> {
    /// Creates a new `HashMapIx` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Optional<HashMap<K, V>, V> for HashMapIx<K, V>
where
    K: Eq + Hash + std::fmt::Display,
    V: Clone,
{
    fn get_option(&self, source: &HashMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V>, value: V) -> HashMap<K, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&key_fragment(&self.key));
    }
}

impl<K: Clone, V> Clone for HashMapIx<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: std::fmt::Debug, V> std::fmt::Debug for HashMapIx<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HashMapIx")
            .field("key", &self.key)
            .finish()
    }
}

impl<K, V> Ixed for HashMap<K, V>
where
    K: Eq + Hash + std::fmt::Display,
    V: Clone,
{
    type Index = K;
    type Element = V;
    type IxOptional = HashMapIx<K, V>;

    fn ix(key: K) -> HashMapIx<K, V> {
        HashMapIx::new(key)
    }
}

/// An Optional focusing the value of a `BTreeMap` under a fixed key.
///
/// Its path fragment is `{key}`.
pub struct BTreeMapIx<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> BTreeMapIx<K, V> {
    /// Creates a new `BTreeMapIx` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Optional<BTreeMap<K, V>, V> for BTreeMapIx<K, V>
where
    K: Ord + std::fmt::Display,
    V: Clone,
{
    fn get_option(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: V) -> BTreeMap<K, V> {
        if let Some(slot) = source.get_mut(&self.key) {
            *slot = value;
        }
        source
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&key_fragment(&self.key));
    }
}

impl<K: Clone, V> Clone for BTreeMapIx<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: std::fmt::Debug, V> std::fmt::Debug for BTreeMapIx<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BTreeMapIx")
            .field("key", &self.key)
            .finish()
    }
}

impl<K, V> Ixed for BTreeMap<K, V>
where
    K: Ord + std::fmt::Display,
    V: Clone,
{
    type Index = K;
    type Element = V;
    type IxOptional = BTreeMapIx<K, V>;

    fn ix(key: K) -> BTreeMapIx<K, V> {
        BTreeMapIx::new(key)
    }
}
