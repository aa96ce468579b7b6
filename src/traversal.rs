//! Traversal optics for focusing on multiple elements.
//!
//! A Traversal is an optic that can focus on zero or more elements within a
//! structure. It is the weakest optic in the hierarchy: every other kind can
//! be converted into a Traversal, and composing any optic with a Traversal
//! yields a Traversal.
//!
//! # Laws
//!
//! A lawful Traversal respects identity and composition of modification:
//!
//! 1. **Identity Law**: `traversal.modify_all(source, |x| x) == source`
//! 2. **Composition Law**:
//!    ```text
//!    traversal.modify_all(traversal.modify_all(source, f), g)
//!        == traversal.modify_all(source, |x| g(f(x)))
//!    ```
//!
//! # Examples
//!
//! ```
//! use refract::{Traversal, VecTraversal};
//!
//! let each = VecTraversal::new();
//!
//! let numbers = vec![1, 2, 3];
//! let all: Vec<i32> = each.get_all(&numbers).into_iter().collect();
//! assert_eq!(all, vec![1, 2, 3]);
//!
//! let doubled = each.modify_all(numbers, |x| x * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

use smallvec::{SmallVec, smallvec};

use crate::lens::{Lens, LensAsTraversal};
use crate::path::Fragment;
use crate::prism::{Prism, PrismAsTraversal};

/// The collection of values a Traversal focuses on.
///
/// Most optic chains focus zero or one value, so the first focus is stored
/// inline without allocating.
pub type Foci<A> = SmallVec<[A; 1]>;

/// A Traversal focuses on zero or more elements within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The element type (the focused parts)
///
/// # Laws
///
/// 1. **Identity Law**: `traversal.modify_all(source, |x| x) == source`
/// 2. **Composition Law**: modifying twice equals modifying once with the
///    composed function
pub trait Traversal<S, A> {
    /// Extracts all focused elements from the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to extract elements from
    ///
    /// # Returns
    ///
    /// All focused elements, in traversal order
    fn get_all(&self, source: &S) -> Foci<A>;

    /// Applies a function to every focused element.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to modify
    /// * `function` - The function to apply to each element
    ///
    /// # Returns
    ///
    /// A new structure with all focused elements modified
    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(A) -> A;

    /// Appends this optic's path fragment to the buffer.
    fn append_path(&self, out: &mut String);

    /// Returns the dotted/bracketed path name of this optic.
    fn path(&self) -> String {
        let mut out = String::new();
        self.append_path(&mut out);
        out
    }

    /// Replaces every focused element with the given value.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to modify
    /// * `value` - The value to set every focus to
    ///
    /// # Returns
    ///
    /// A new structure with all focused elements replaced
    fn set_all(&self, source: S, value: A) -> S
    where
        A: Clone,
    {
        self.modify_all(source, |_| value.clone())
    }

    /// Folds over all focused elements, threading an accumulator.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to fold over
    /// * `initial` - The initial accumulator value
    /// * `function` - The folding function
    ///
    /// # Returns
    ///
    /// The final accumulator value
    fn fold<B, F>(&self, source: &S, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Returns the number of focused elements.
    fn length(&self, source: &S) -> usize {
        self.get_all(source).len()
    }

    /// Returns true when no element is focused.
    fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Returns true when every focused element satisfies the predicate.
    ///
    /// Vacuously true when nothing is focused.
    fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(|element| predicate(element))
    }

    /// Returns true when at least one focused element satisfies the
    /// predicate.
    fn exists<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().any(|element| predicate(element))
    }

    /// Returns the first focused element, if any.
    fn head_option(&self, source: &S) -> Option<A> {
        self.get_all(source).into_iter().next()
    }

    /// Composes this Traversal with another Traversal.
    ///
    /// The resulting Traversal focuses every element the second traversal
    /// finds inside every element the first one finds.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The element type of the other Traversal
    /// - `T`: The type of the other Traversal
    ///
    /// # Arguments
    ///
    /// * `other` - The Traversal to compose with
    ///
    /// # Returns
    ///
    /// A composed Traversal from S to B
    fn compose<B, T>(self, other: T) -> ComposedTraversal<Self, T, A>
    where
        Self: Sized,
        T: Traversal<A, B>,
    {
        ComposedTraversal::new(self, other)
    }
}

/// A Traversal implemented from explicit functions.
///
/// Adapters for standard containers (`VecTraversal`, `OptionTraversal`)
/// cover the common cases; `FunctionTraversal` is the escape hatch for
/// custom structures.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The element type
/// - `Ga`: The `get_all` function type
/// - `Ma`: The `modify_all` function type
pub struct FunctionTraversal<S, A, Ga, Ma>
where
    Ga: Fn(&S) -> Foci<A>,
    Ma: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fragment: Fragment,
    get_all_function: Ga,
    modify_all_function: Ma,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Ga, Ma> FunctionTraversal<S, A, Ga, Ma>
where
    Ga: Fn(&S) -> Foci<A>,
    Ma: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    /// Creates a new `FunctionTraversal` from a path fragment and the two
    /// core functions.
    ///
    /// # Arguments
    ///
    /// * `fragment` - The path fragment naming this step
    /// * `get_all_function` - Extracts all focused elements
    /// * `modify_all_function` - Rebuilds the source with each focus mapped
    ///
    /// # Returns
    ///
    /// A new `FunctionTraversal`
    #[must_use]
    pub fn new(
        fragment: impl Into<Fragment>,
        get_all_function: Ga,
        modify_all_function: Ma,
    ) -> Self {
        Self {
            fragment: fragment.into(),
            get_all_function,
            modify_all_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Ga, Ma> Traversal<S, A> for FunctionTraversal<S, A, Ga, Ma>
where
    Ga: Fn(&S) -> Foci<A>,
    Ma: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn get_all(&self, source: &S) -> Foci<A> {
        (self.get_all_function)(source)
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        (self.modify_all_function)(source, &mut function)
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&self.fragment);
    }
}

impl<S, A, Ga, Ma> Clone for FunctionTraversal<S, A, Ga, Ma>
where
    Ga: Fn(&S) -> Foci<A> + Clone,
    Ma: Fn(S, &mut dyn FnMut(A) -> A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            fragment: self.fragment.clone(),
            get_all_function: self.get_all_function.clone(),
            modify_all_function: self.modify_all_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Ga, Ma> std::fmt::Debug for FunctionTraversal<S, A, Ga, Ma>
where
    Ga: Fn(&S) -> Foci<A>,
    Ma: Fn(S, &mut dyn FnMut(A) -> A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionTraversal")
            .field("fragment", &self.fragment)
            .finish_non_exhaustive()
    }
}

/// A Traversal over every element of a `Vec`.
///
/// Its path fragment is `[]`.
///
/// # Example
///
/// ```
/// use refract::{Traversal, VecTraversal};
///
/// let each = VecTraversal::new();
/// let incremented = each.modify_all(vec![1, 2, 3], |x| x + 1);
/// assert_eq!(incremented, vec![2, 3, 4]);
/// assert_eq!(each.path(), "[]");
/// ```
pub struct VecTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> VecTraversal<A> {
    /// Creates a new `VecTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for VecTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Traversal<Vec<A>, A> for VecTraversal<A> {
    fn get_all(&self, source: &Vec<A>) -> Foci<A> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Vec<A>, function: F) -> Vec<A>
    where
        F: FnMut(A) -> A,
    {
        source.into_iter().map(function).collect()
    }

    fn append_path(&self, out: &mut String) {
        out.push_str("[]");
    }
}

impl<A> Clone for VecTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for VecTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("VecTraversal").finish()
    }
}

/// A Traversal over the `Some` value of an `Option`.
///
/// Focuses zero elements for `None`, one element for `Some`. Its path
/// fragment is `?`.
///
/// # Example
///
/// ```
/// use refract::{Traversal, OptionTraversal};
///
/// let some_value = OptionTraversal::new();
/// assert_eq!(some_value.modify_all(Some(2), |x| x * 10), Some(20));
/// assert_eq!(some_value.modify_all(None::<i32>, |x| x * 10), None);
/// ```
pub struct OptionTraversal<A> {
    _marker: PhantomData<A>,
}

impl<A> OptionTraversal<A> {
    /// Creates a new `OptionTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A> Default for OptionTraversal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Traversal<Option<A>, A> for OptionTraversal<A> {
    fn get_all(&self, source: &Option<A>) -> Foci<A> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Option<A>, function: F) -> Option<A>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }

    fn append_path(&self, out: &mut String) {
        out.push('?');
    }
}

impl<A> Clone for OptionTraversal<A> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for OptionTraversal<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("OptionTraversal").finish()
    }
}

/// A Traversal over the `Ok` value of a `Result`.
///
/// Focuses zero elements for `Err`, one element for `Ok`. Its path fragment
/// is `~`.
pub struct ResultTraversal<A, E> {
    _marker: PhantomData<(A, E)>,
}

impl<A, E> ResultTraversal<A, E> {
    /// Creates a new `ResultTraversal`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, E> Default for ResultTraversal<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone, E> Traversal<Result<A, E>, A> for ResultTraversal<A, E> {
    fn get_all(&self, source: &Result<A, E>) -> Foci<A> {
        source.iter().cloned().collect()
    }

    fn modify_all<F>(&self, source: Result<A, E>, function: F) -> Result<A, E>
    where
        F: FnMut(A) -> A,
    {
        source.map(function)
    }

    fn append_path(&self, out: &mut String) {
        out.push('~');
    }
}

impl<A, E> Clone for ResultTraversal<A, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<A, E> std::fmt::Debug for ResultTraversal<A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ResultTraversal").finish()
    }
}

/// A composed Traversal that chains two Traversals together.
///
/// # Type Parameters
///
/// - `T1`: The type of the first Traversal
/// - `T2`: The type of the second Traversal
/// - `A`: The intermediate element type
///
/// # Example
///
/// ```
/// use refract::{Traversal, VecTraversal};
///
/// let nested = VecTraversal::new().compose(VecTraversal::new());
///
/// let matrix = vec![vec![1, 2], vec![3, 4]];
/// let all: Vec<i32> = nested.get_all(&matrix).into_iter().collect();
/// assert_eq!(all, vec![1, 2, 3, 4]);
///
/// let doubled = nested.modify_all(matrix, |x| x * 2);
/// assert_eq!(doubled, vec![vec![2, 4], vec![6, 8]]);
/// ```
pub struct ComposedTraversal<T1, T2, A> {
    first: T1,
    second: T2,
    _marker: PhantomData<A>,
}

impl<T1, T2, A> ComposedTraversal<T1, T2, A> {
    /// Creates a new `ComposedTraversal` from two Traversals.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer Traversal (focuses A inside S)
    /// * `second` - The inner Traversal (focuses B inside A)
    ///
    /// # Returns
    ///
    /// A new `ComposedTraversal`
    #[must_use]
    pub const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, T1, T2> Traversal<S, B> for ComposedTraversal<T1, T2, A>
where
    T1: Traversal<S, A>,
    T2: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Foci<B> {
        self.first
            .get_all(source)
            .iter()
            .flat_map(|intermediate| self.second.get_all(intermediate))
            .collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        self.first.modify_all(source, |intermediate| {
            self.second.modify_all(intermediate, &mut function)
        })
    }

    fn append_path(&self, out: &mut String) {
        self.first.append_path(out);
        self.second.append_path(out);
    }
}

impl<T1: Clone, T2: Clone, A> Clone for ComposedTraversal<T1, T2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T1: std::fmt::Debug, T2: std::fmt::Debug, A> std::fmt::Debug for ComposedTraversal<T1, T2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedTraversal")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<S, A, L> Traversal<S, A> for LensAsTraversal<L, S, A>
where
    L: Lens<S, A>,
{
    fn get_all(&self, source: &S) -> Foci<A> {
        smallvec![self.lens.get(source)]
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        let value = self.lens.get(&source);
        self.lens.set(source, function(value))
    }

    fn append_path(&self, out: &mut String) {
        self.lens.append_path(out);
    }

    fn length(&self, _source: &S) -> usize {
        1
    }

    fn is_empty(&self, _source: &S) -> bool {
        false
    }
}

impl<S, A, P> Traversal<S, A> for PrismAsTraversal<P, S, A>
where
    P: Prism<S, A>,
    S: Clone,
{
    fn get_all(&self, source: &S) -> Foci<A> {
        self.prism.preview(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.prism.modify_or_identity(source, &mut function)
    }

    fn append_path(&self, out: &mut String) {
        self.prism.append_path(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_traversal_get_all() {
        let each = VecTraversal::new();
        let all: Vec<i32> = each.get_all(&vec![1, 2, 3]).into_iter().collect();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn test_vec_traversal_empty() {
        let each = VecTraversal::<i32>::new();
        assert!(each.is_empty(&vec![]));
        assert_eq!(each.length(&vec![]), 0);
        assert_eq!(each.head_option(&vec![]), None);
    }

    #[test]
    fn test_vec_traversal_modify_all() {
        let each = VecTraversal::new();
        assert_eq!(each.modify_all(vec![1, 2, 3], |x| x * 2), vec![2, 4, 6]);
    }

    #[test]
    fn test_set_all() {
        let each = VecTraversal::new();
        assert_eq!(each.set_all(vec![1, 2, 3], 0), vec![0, 0, 0]);
    }

    #[test]
    fn test_fold() {
        let each = VecTraversal::new();
        let sum = each.fold(&vec![1, 2, 3, 4], 0, |acc, x| acc + x);
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_for_all_and_exists() {
        let each = VecTraversal::new();
        let numbers = vec![2, 4, 6];
        assert!(each.for_all(&numbers, |x| x % 2 == 0));
        assert!(each.exists(&numbers, |x| *x > 5));
        assert!(!each.exists(&numbers, |x| *x > 6));
        // vacuous truth on empty focus set
        assert!(each.for_all(&vec![], |_: &i32| false));
    }

    #[test]
    fn test_option_traversal() {
        let some_value = OptionTraversal::new();
        assert_eq!(some_value.head_option(&Some(5)), Some(5));
        assert_eq!(some_value.head_option(&None::<i32>), None);
        assert_eq!(some_value.modify_all(Some(5), |x| x + 1), Some(6));
        assert_eq!(some_value.modify_all(None, |x: i32| x + 1), None);
    }

    #[test]
    fn test_result_traversal() {
        let ok_value = ResultTraversal::<i32, String>::new();
        assert_eq!(ok_value.head_option(&Ok(5)), Some(5));
        assert_eq!(ok_value.head_option(&Err("nope".to_string())), None);
    }

    #[test]
    fn test_composed_traversal() {
        let nested = VecTraversal::new().compose(VecTraversal::new());
        let matrix = vec![vec![1, 2], vec![3]];
        assert_eq!(nested.length(&matrix), 3);
        assert_eq!(
            nested.modify_all(matrix, |x| x + 10),
            vec![vec![11, 12], vec![13]]
        );
    }

    #[test]
    fn test_composed_traversal_path() {
        let nested = VecTraversal::<Vec<i32>>::new().compose(VecTraversal::<i32>::new());
        assert_eq!(nested.path(), "[][]");
    }

    #[test]
    fn test_function_traversal() {
        let pair_both = FunctionTraversal::new(
            ".both",
            |source: &(i32, i32)| smallvec![source.0, source.1],
            |source: (i32, i32), function: &mut dyn FnMut(i32) -> i32| {
                (function(source.0), function(source.1))
            },
        );

        assert_eq!(pair_both.length(&(1, 2)), 2);
        assert_eq!(pair_both.modify_all((1, 2), |x| x * 3), (3, 6));
        assert_eq!(pair_both.path(), ".both");

        let copy = pair_both.clone();
        assert_eq!(copy.get_all(&(1, 2)), pair_both.get_all(&(1, 2)));
        assert_eq!(copy.path(), ".both");
    }
}
