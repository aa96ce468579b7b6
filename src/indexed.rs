//! Indexed optics that pair each focus with its position.
//!
//! An indexed optic works over `(index, value)` pairs instead of bare
//! values, letting a modification observe where in the structure it is
//! operating. A plain optic is lifted into its indexed form with the
//! wrappers here; `VecEnumerate` provides the primitive indexed traversal
//! over a vector.
//!
//! # Example
//!
//! ```
//! use refract::{Traversal, VecEnumerate};
//!
//! let enumerated = VecEnumerate::new();
//!
//! let labels = vec!["a".to_string(), "b".to_string()];
//! let numbered = enumerated.modify_all(labels, |(index, label)| {
//!     (index, format!("{index}:{label}"))
//! });
//! assert_eq!(numbered, vec!["0:a".to_string(), "1:b".to_string()]);
//! ```

use std::marker::PhantomData;

use crate::lens::Lens;
use crate::prism::Prism;
use crate::traversal::{Foci, Traversal};

/// A Lens lifted to operate over `(index, value)` pairs.
///
/// The index part is carried through unchanged; the inner lens operates on
/// the value part.
///
/// # Type Parameters
///
/// - `L`: The type of the underlying Lens
pub struct IndexedLens<L> {
    inner: L,
}

impl<L> IndexedLens<L> {
    /// Lifts a plain Lens into its indexed form.
    #[must_use]
    pub const fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<I, A, B, L> Lens<(I, A), B> for IndexedLens<L>
where
    L: Lens<A, B>,
{
    fn get(&self, source: &(I, A)) -> B {
        self.inner.get(&source.1)
    }

    fn set(&self, source: (I, A), value: B) -> (I, A) {
        let (index, inner_source) = source;
        (index, self.inner.set(inner_source, value))
    }

    fn append_path(&self, out: &mut String) {
        self.inner.append_path(out);
    }
}

impl<L: Clone> Clone for IndexedLens<L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for IndexedLens<L> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IndexedLens")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A Prism lifted to operate over `(index, value)` pairs.
///
/// `split` carries the index through on both the hit and the miss path.
/// `review` has no index to carry, so it supplies `I::default()`.
///
/// # Type Parameters
///
/// - `P`: The type of the underlying Prism
pub struct IndexedPrism<P> {
    inner: P,
}

impl<P> IndexedPrism<P> {
    /// Lifts a plain Prism into its indexed form.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<I, A, B, P> Prism<(I, A), B> for IndexedPrism<P>
where
    P: Prism<A, B>,
    I: Default,
{
    fn split(&self, source: (I, A)) -> Result<B, (I, A)> {
        let (index, inner_source) = source;
        self.inner
            .split(inner_source)
            .map_err(|unmatched| (index, unmatched))
    }

    fn review(&self, value: B) -> (I, A) {
        (I::default(), self.inner.review(value))
    }

    fn append_path(&self, out: &mut String) {
        self.inner.append_path(out);
    }
}

impl<P: Clone> Clone for IndexedPrism<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for IndexedPrism<P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IndexedPrism")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A Traversal lifted to operate over `(index, value)` pairs.
///
/// # Type Parameters
///
/// - `T`: The type of the underlying Traversal
pub struct IndexedTraversal<T> {
    inner: T,
}

impl<T> IndexedTraversal<T> {
    /// Lifts a plain Traversal into its indexed form.
    #[must_use]
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<I, A, B, T> Traversal<(I, A), B> for IndexedTraversal<T>
where
    T: Traversal<A, B>,
{
    fn get_all(&self, source: &(I, A)) -> Foci<B> {
        self.inner.get_all(&source.1)
    }

    fn modify_all<F>(&self, source: (I, A), function: F) -> (I, A)
    where
        F: FnMut(B) -> B,
    {
        let (index, inner_source) = source;
        (index, self.inner.modify_all(inner_source, function))
    }

    fn append_path(&self, out: &mut String) {
        self.inner.append_path(out);
    }
}

impl<T: Clone> Clone for IndexedTraversal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for IndexedTraversal<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IndexedTraversal")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A Traversal over a `Vec` that pairs each element with its position.
///
/// The focused values are `(usize, A)` pairs. On modification the position
/// component is ignored: elements stay where they are, only the value
/// component is written back. Its path fragment is `[#]`.
///
/// # Example
///
/// ```
/// use refract::{Traversal, VecEnumerate};
///
/// let enumerated = VecEnumerate::new();
/// let pairs: Vec<(usize, char)> =
///     enumerated.get_all(&vec!['x', 'y']).into_iter().collect();
/// assert_eq!(pairs, vec![(0, 'x'), (1, 'y')]);
/// ```
pub struct VecEnumerate<A> {
    _marker: PhantomData<A>,
}

impl<A> VecEnumerate<A> {
    /// Creates a new `VecEnumerate`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecEnumerate<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Traversal<Vec<A>, (usize, A)> for VecEnumerate<A> {
    fn get_all(&self, source: &Vec<A>) -> Foci<(usize, A)> {
        source
            .iter()
            .cloned()
            .enumerate()
            .collect()
    }

    fn modify_all<F>(&self, source: Vec<A>, mut function: F) -> Vec<A>
    where
        F: FnMut((usize, A)) -> (usize, A),
    {
        source
            .into_iter()
            .enumerate()
            .map(|(index, element)| function((index, element)).1)
            .collect()
    }

    fn append_path(&self, out: &mut String) {
        out.push_str("[#]");
    }
}

impl<A> Clone for VecEnumerate<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for VecEnumerate<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecEnumerate").finish()
    }
}
