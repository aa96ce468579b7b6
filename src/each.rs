//! Element-wise traversal entry points for standard containers.
//!
//! The [`Each`] trait names the canonical Traversal over a container's
//! elements, so generic code can write `C::each()` instead of picking the
//! concrete adapter by hand.
//!
//! # Example
//!
//! ```
//! use refract::{Each, Traversal};
//!
//! let every = <Vec<i32> as Each>::each();
//! assert_eq!(every.modify_all(vec![1, 2], |x| x + 1), vec![2, 3]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::traversal::{Foci, OptionTraversal, ResultTraversal, Traversal, VecTraversal};

/// Containers with a canonical Traversal over their elements.
pub trait Each: Sized {
    /// The element type the traversal focuses.
    type Element;
    /// The Traversal returned by [`each`](Self::each).
    type EachTraversal: Traversal<Self, Self::Element>;

    /// Returns the Traversal over every element of the container.
    fn each() -> Self::EachTraversal;
}

impl<A: Clone> Each for Vec<A> {
    type Element = A;
    type EachTraversal = VecTraversal<A>;

    fn each() -> VecTraversal<A> {
        VecTraversal::new()
    }
}

impl<A: Clone> Each for Option<A> {
    type Element = A;
    type EachTraversal = OptionTraversal<A>;

    fn each() -> OptionTraversal<A> {
        OptionTraversal::new()
    }
}

impl<A: Clone, E> Each for Result<A, E> {
    type Element = A;
    type EachTraversal = ResultTraversal<A, E>;

    fn each() -> ResultTraversal<A, E> {
        ResultTraversal::new()
    }
}

/// A Traversal over every value of a `HashMap`.
///
/// Keys are untouched; iteration order is the map's own (unordered). Its
/// path fragment is `{}`.
pub struct HashMapValuesTraversal<K, V> {
    _marker: PhantomData<(K, V)>,
}

impl<K, V> HashMapValuesTraversal<K, V> {
    /// Creates a new `HashMapValuesTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for HashMapValuesTraversal<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Traversal<HashMap<K, V>, V> for HashMapValuesTraversal<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn get_all(&self, source: &HashMap<K, V>) -> Foci<V> {
        source.values().cloned().collect()
    }

    fn modify_all<F>(&self, source: HashMap<K, V>, mut function: F) -> HashMap<K, V>
    where
        F: FnMut(V) -> V,
    {
        source
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }

    fn append_path(&self, out: &mut String) {
        out.push_str("{}");
    }
}

impl<K, V> Clone for HashMapValuesTraversal<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for HashMapValuesTraversal<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("HashMapValuesTraversal").finish()
    }
}

impl<K, V> Each for HashMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    type Element = V;
    type EachTraversal = HashMapValuesTraversal<K, V>;

    fn each() -> HashMapValuesTraversal<K, V> {
        HashMapValuesTraversal::new()
    }
}

/// A Traversal over every value of a `BTreeMap`, in key order.
///
/// Its path fragment is `{}`.
pub struct BTreeMapValuesTraversal<K, V> {
    _marker: PhantomData<(K, V)>,
}

impl<K, V> BTreeMapValuesTraversal<K, V> {
    /// Creates a new `BTreeMapValuesTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for BTreeMapValuesTraversal<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Traversal<BTreeMap<K, V>, V> for BTreeMapValuesTraversal<K, V>
where
    K: Ord,
    V: Clone,
{
    fn get_all(&self, source: &BTreeMap<K, V>) -> Foci<V> {
        source.values().cloned().collect()
    }

    fn modify_all<F>(&self, source: BTreeMap<K, V>, mut function: F) -> BTreeMap<K, V>
    where
        F: FnMut(V) -> V,
    {
        source
            .into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }

    fn append_path(&self, out: &mut String) {
        out.push_str("{}");
    }
}

impl<K, V> Clone for BTreeMapValuesTraversal<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for BTreeMapValuesTraversal<K, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("BTreeMapValuesTraversal").finish()
    }
}

impl<K, V> Each for BTreeMap<K, V>
where
    K: Ord,
    V: Clone,
{
    type Element = V;
    type EachTraversal = BTreeMapValuesTraversal<K, V>;

    fn each() -> BTreeMapValuesTraversal<K, V> {
        BTreeMapValuesTraversal::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_vec() {
        let every = <Vec<i32> as Each>::each();
        assert_eq!(every.modify_all(vec![1, 2, 3], |x| x * 10), vec![10, 20, 30]);
    }

    #[test]
    fn test_each_option_and_result() {
        let some_value = <Option<i32> as Each>::each();
        assert_eq!(some_value.modify_all(Some(1), |x| x + 1), Some(2));

        let ok_value = <Result<i32, String> as Each>::each();
        assert_eq!(ok_value.modify_all(Ok(1), |x| x + 1), Ok(2));
    }

    #[test]
    fn test_hashmap_values_traversal() {
        let every_value = HashMapValuesTraversal::new();
        let map: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();

        let doubled = every_value.modify_all(map, |v| v * 2);
        assert_eq!(doubled.get("a"), Some(&2));
        assert_eq!(doubled.get("b"), Some(&4));
        assert_eq!(every_value.path(), "{}");
    }

    #[test]
    fn test_btreemap_values_in_key_order() {
        let every_value = BTreeMapValuesTraversal::new();
        let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        let values: Vec<i32> = every_value.get_all(&map).into_iter().collect();
        assert_eq!(values, vec![1, 2]);
    }
}
