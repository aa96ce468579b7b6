//! Cross-kind optic composition.
//!
//! Composing two optics of the same kind is handled by each kind's own
//! `compose` method. This module supplies the mixed pairs: the result of a
//! mixed composition is the weakest kind in the chain.
//!
//! | first \ second | Lens | Prism | Optional | Traversal |
//! |---|---|---|---|---|
//! | **Lens** | Lens | Optional | Optional | Traversal |
//! | **Prism** | Optional | Prism | Optional | Traversal |
//! | **Optional** | Optional | Optional | Optional | Traversal |
//! | **Traversal** | Traversal | Traversal | Traversal | Traversal |
//!
//! Iso is absent from the table: convert it first with
//! [`Iso::to_lens`](crate::Iso::to_lens) or
//! [`Iso::to_prism`](crate::Iso::to_prism), which preserves the other
//! operand's kind.
//!
//! Each mixed pair is implemented by a dedicated composition struct, reached
//! through an extension trait with a blanket impl, so every combination
//! reads as a single method call:
//!
//! ```
//! use refract::{LensComposeWithTraversal, Traversal};
//! use refract::{lens, VecTraversal};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Batch { items: Vec<i32> }
//!
//! let every_item = lens!(Batch, items).compose_traversal(VecTraversal::new());
//!
//! let batch = Batch { items: vec![1, 2, 3] };
//! let doubled = every_item.modify_all(batch, |x| x * 2);
//! assert_eq!(doubled.items, vec![2, 4, 6]);
//! ```

use std::marker::PhantomData;

use crate::lens::Lens;
use crate::optional::Optional;
use crate::prism::Prism;
use crate::traversal::{Foci, Traversal};

/// A Lens composed with an Optional, yielding an Optional.
pub struct LensOptionalComposition<L, O, A> {
    lens: L,
    optional: O,
    _marker: PhantomData<A>,
}

impl<L, O, A> LensOptionalComposition<L, O, A> {
    /// Creates a new `LensOptionalComposition`.
    #[must_use]
    pub const fn new(lens: L, optional: O) -> Self {
        Self {
            lens,
            optional,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, O> Optional<S, B> for LensOptionalComposition<L, O, A>
where
    L: Lens<S, A>,
    O: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional.get_option(&self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.lens.get(&source);
        let updated = self.optional.set(intermediate, value);
        self.lens.set(source, updated)
    }

    fn append_path(&self, out: &mut String) {
        self.lens.append_path(out);
        self.optional.append_path(out);
    }
}

/// A Lens composed with a Traversal, yielding a Traversal.
pub struct LensTraversalComposition<L, T, A> {
    lens: L,
    traversal: T,
    _marker: PhantomData<A>,
}

impl<L, T, A> LensTraversalComposition<L, T, A> {
    /// Creates a new `LensTraversalComposition`.
    #[must_use]
    pub const fn new(lens: L, traversal: T) -> Self {
        Self {
            lens,
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, T> Traversal<S, B> for LensTraversalComposition<L, T, A>
where
    L: Lens<S, A>,
    T: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Foci<B> {
        self.traversal.get_all(&self.lens.get(source))
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        let intermediate = self.lens.get(&source);
        let updated = self.traversal.modify_all(intermediate, function);
        self.lens.set(source, updated)
    }

    fn append_path(&self, out: &mut String) {
        self.lens.append_path(out);
        self.traversal.append_path(out);
    }
}

/// A Prism composed with an Optional, yielding an Optional.
pub struct PrismOptionalComposition<P, O, A> {
    prism: P,
    optional: O,
    _marker: PhantomData<A>,
}

impl<P, O, A> PrismOptionalComposition<P, O, A> {
    /// Creates a new `PrismOptionalComposition`.
    #[must_use]
    pub const fn new(prism: P, optional: O) -> Self {
        Self {
            prism,
            optional,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, O> Optional<S, B> for PrismOptionalComposition<P, O, A>
where
    P: Prism<S, A>,
    O: Optional<A, B>,
    S: Clone,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism
            .preview(source)
            .and_then(|intermediate| self.optional.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.prism.split(source) {
            Ok(intermediate) => self.prism.review(self.optional.set(intermediate, value)),
            Err(unmatched) => unmatched,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.prism.append_path(out);
        self.optional.append_path(out);
    }
}

/// A Prism composed with a Traversal, yielding a Traversal.
pub struct PrismTraversalComposition<P, T, A> {
    prism: P,
    traversal: T,
    _marker: PhantomData<A>,
}

impl<P, T, A> PrismTraversalComposition<P, T, A> {
    /// Creates a new `PrismTraversalComposition`.
    #[must_use]
    pub const fn new(prism: P, traversal: T) -> Self {
        Self {
            prism,
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, T> Traversal<S, B> for PrismTraversalComposition<P, T, A>
where
    P: Prism<S, A>,
    T: Traversal<A, B>,
    S: Clone,
{
    fn get_all(&self, source: &S) -> Foci<B> {
        match self.prism.preview(source) {
            Some(intermediate) => self.traversal.get_all(&intermediate),
            None => Foci::new(),
        }
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        match self.prism.split(source) {
            Ok(intermediate) => self
                .prism
                .review(self.traversal.modify_all(intermediate, function)),
            Err(unmatched) => unmatched,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.prism.append_path(out);
        self.traversal.append_path(out);
    }
}

/// An Optional composed with a Lens, yielding an Optional.
pub struct OptionalLensComposition<O, L, A> {
    optional: O,
    lens: L,
    _marker: PhantomData<A>,
}

impl<O, L, A> OptionalLensComposition<O, L, A> {
    /// Creates a new `OptionalLensComposition`.
    #[must_use]
    pub const fn new(optional: O, lens: L) -> Self {
        Self {
            optional,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, L> Optional<S, B> for OptionalLensComposition<O, L, A>
where
    O: Optional<S, A>,
    L: Lens<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional
            .get_option(source)
            .map(|intermediate| self.lens.get(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.optional.get_option(&source) {
            Some(intermediate) => {
                let updated = self.lens.set(intermediate, value);
                self.optional.set(source, updated)
            }
            None => source,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.optional.append_path(out);
        self.lens.append_path(out);
    }
}

/// An Optional composed with a Prism, yielding an Optional.
pub struct OptionalPrismComposition<O, P, A> {
    optional: O,
    prism: P,
    _marker: PhantomData<A>,
}

impl<O, P, A> OptionalPrismComposition<O, P, A> {
    /// Creates a new `OptionalPrismComposition`.
    #[must_use]
    pub const fn new(optional: O, prism: P) -> Self {
        Self {
            optional,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, P> Optional<S, B> for OptionalPrismComposition<O, P, A>
where
    O: Optional<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.optional
            .get_option(source)
            .and_then(|intermediate| self.prism.split(intermediate).ok())
    }

    fn set(&self, source: S, value: B) -> S {
        // the prism must match the current intermediate, not just the outer focus
        if self.get_option(&source).is_some() {
            self.optional.set(source, self.prism.review(value))
        } else {
            source
        }
    }

    fn append_path(&self, out: &mut String) {
        self.optional.append_path(out);
        self.prism.append_path(out);
    }
}

/// An Optional composed with a Traversal, yielding a Traversal.
pub struct OptionalTraversalComposition<O, T, A> {
    optional: O,
    traversal: T,
    _marker: PhantomData<A>,
}

impl<O, T, A> OptionalTraversalComposition<O, T, A> {
    /// Creates a new `OptionalTraversalComposition`.
    #[must_use]
    pub const fn new(optional: O, traversal: T) -> Self {
        Self {
            optional,
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, T> Traversal<S, B> for OptionalTraversalComposition<O, T, A>
where
    O: Optional<S, A>,
    T: Traversal<A, B>,
{
    fn get_all(&self, source: &S) -> Foci<B> {
        match self.optional.get_option(source) {
            Some(intermediate) => self.traversal.get_all(&intermediate),
            None => Foci::new(),
        }
    }

    fn modify_all<F>(&self, source: S, function: F) -> S
    where
        F: FnMut(B) -> B,
    {
        match self.optional.get_option(&source) {
            Some(intermediate) => {
                let updated = self.traversal.modify_all(intermediate, function);
                self.optional.set(source, updated)
            }
            None => source,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.optional.append_path(out);
        self.traversal.append_path(out);
    }
}

/// Extension methods for composing a Lens with an Optional.
///
/// Implemented for every Lens via a blanket impl.
pub trait LensComposeWithOptional<S, A>: Lens<S, A> + Sized {
    /// Composes this Lens with an Optional, yielding an Optional.
    fn compose_optional<B, O>(self, optional: O) -> LensOptionalComposition<Self, O, A>
    where
        O: Optional<A, B>,
    {
        LensOptionalComposition::new(self, optional)
    }
}

impl<S, A, L> LensComposeWithOptional<S, A> for L where L: Lens<S, A> {}

/// Extension methods for composing a Lens with a Traversal.
///
/// Implemented for every Lens via a blanket impl.
pub trait LensComposeWithTraversal<S, A>: Lens<S, A> + Sized {
    /// Composes this Lens with a Traversal, yielding a Traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::{Traversal, LensComposeWithTraversal};
    /// use refract::{lens, VecTraversal};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Poll { votes: Vec<u32> }
    ///
    /// let every_vote = lens!(Poll, votes).compose_traversal(VecTraversal::new());
    /// let poll = Poll { votes: vec![1, 2, 3] };
    /// assert_eq!(every_vote.length(&poll), 3);
    /// ```
    fn compose_traversal<B, T>(self, traversal: T) -> LensTraversalComposition<Self, T, A>
    where
        T: Traversal<A, B>,
    {
        LensTraversalComposition::new(self, traversal)
    }
}

impl<S, A, L> LensComposeWithTraversal<S, A> for L where L: Lens<S, A> {}

/// Extension methods for composing a Prism with an Optional.
///
/// Implemented for every Prism via a blanket impl.
pub trait PrismComposeWithOptional<S, A>: Prism<S, A> + Sized {
    /// Composes this Prism with an Optional, yielding an Optional.
    fn compose_optional<B, O>(self, optional: O) -> PrismOptionalComposition<Self, O, A>
    where
        O: Optional<A, B>,
    {
        PrismOptionalComposition::new(self, optional)
    }
}

impl<S, A, P> PrismComposeWithOptional<S, A> for P where P: Prism<S, A> {}

/// Extension methods for composing a Prism with a Traversal.
///
/// Implemented for every Prism via a blanket impl.
pub trait PrismComposeWithTraversal<S, A>: Prism<S, A> + Sized {
    /// Composes this Prism with a Traversal, yielding a Traversal.
    fn compose_traversal<B, T>(self, traversal: T) -> PrismTraversalComposition<Self, T, A>
    where
        T: Traversal<A, B>,
    {
        PrismTraversalComposition::new(self, traversal)
    }
}

impl<S, A, P> PrismComposeWithTraversal<S, A> for P where P: Prism<S, A> {}

/// Extension methods for composing an Optional with a Lens.
///
/// Implemented for every Optional via a blanket impl.
pub trait OptionalComposeWithLens<S, A>: Optional<S, A> + Sized {
    /// Composes this Optional with a Lens, yielding an Optional.
    fn compose_lens<B, L>(self, lens: L) -> OptionalLensComposition<Self, L, A>
    where
        L: Lens<A, B>,
    {
        OptionalLensComposition::new(self, lens)
    }
}

impl<S, A, O> OptionalComposeWithLens<S, A> for O where O: Optional<S, A> {}

/// Extension methods for composing an Optional with a Prism.
///
/// Implemented for every Optional via a blanket impl.
pub trait OptionalComposeWithPrism<S, A>: Optional<S, A> + Sized {
    /// Composes this Optional with a Prism, yielding an Optional.
    fn compose_prism<B, P>(self, prism: P) -> OptionalPrismComposition<Self, P, A>
    where
        P: Prism<A, B>,
    {
        OptionalPrismComposition::new(self, prism)
    }
}

impl<S, A, O> OptionalComposeWithPrism<S, A> for O where O: Optional<S, A> {}

/// Extension methods for composing an Optional with a Traversal.
///
/// Implemented for every Optional via a blanket impl.
pub trait OptionalComposeWithTraversal<S, A>: Optional<S, A> + Sized {
    /// Composes this Optional with a Traversal, yielding a Traversal.
    fn compose_traversal<B, T>(self, traversal: T) -> OptionalTraversalComposition<Self, T, A>
    where
        T: Traversal<A, B>,
    {
        OptionalTraversalComposition::new(self, traversal)
    }
}

impl<S, A, O> OptionalComposeWithTraversal<S, A> for O where O: Optional<S, A> {}

macro_rules! derive_composition_clone_debug {
    ($name:ident, $field1:ident, $field2:ident) => {
        impl<F1: Clone, F2: Clone, A> Clone for $name<F1, F2, A> {
            fn clone(&self) -> Self {
                Self {
                    $field1: self.$field1.clone(),
                    $field2: self.$field2.clone(),
                    _marker: PhantomData,
                }
            }
        }

        impl<F1: std::fmt::Debug, F2: std::fmt::Debug, A> std::fmt::Debug for $name<F1, F2, A> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field(stringify!($field1), &self.$field1)
                    .field(stringify!($field2), &self.$field2)
                    .finish()
            }
        }
    };
}

derive_composition_clone_debug!(LensOptionalComposition, lens, optional);
derive_composition_clone_debug!(LensTraversalComposition, lens, traversal);
derive_composition_clone_debug!(PrismOptionalComposition, prism, optional);
derive_composition_clone_debug!(PrismTraversalComposition, prism, traversal);
derive_composition_clone_debug!(OptionalLensComposition, optional, lens);
derive_composition_clone_debug!(OptionalPrismComposition, optional, prism);
derive_composition_clone_debug!(OptionalTraversalComposition, optional, traversal);
