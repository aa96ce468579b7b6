//! Optional optics for partial access.
//!
//! An Optional is an optic that focuses on zero or one element within a
//! structure. It arises naturally when composing a Lens with a Prism: the
//! lens part always reaches its field, the prism part may fail to match, so
//! the combination may find nothing. Unlike a Prism, an Optional cannot
//! construct a source from a value alone.
//!
//! # Laws
//!
//! 1. **`GetOptionSet` Law**: setting what you got changes nothing.
//!    ```text
//!    optional.get_option(&source) == Some(a)
//!        implies optional.set(source, a) == source
//!    ```
//! 2. **`SetGetOption` Law**: when the focus exists, you get what you set.
//!    ```text
//!    optional.get_option(&source).is_some()
//!        implies optional.get_option(&optional.set(source, a)) == Some(a)
//!    ```
//! 3. **Absent focus**: when nothing is focused, `set` returns the source
//!    unchanged.
//!
//! # Examples
//!
//! ```
//! use refract::{Optional, LensComposeExtension};
//! use refract::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Form { entry: Option<String> }
//!
//! let entry_lens = lens!(Form, entry);
//! let some_prism = refract::standard::some();
//! let entry_value = entry_lens.compose_prism(some_prism);
//!
//! let form = Form { entry: Some("draft".to_string()) };
//! assert_eq!(entry_value.get_option(&form), Some("draft".to_string()));
//!
//! let updated = entry_value.set(form, "final".to_string());
//! assert_eq!(updated.entry, Some("final".to_string()));
//!
//! let empty = Form { entry: None };
//! let untouched = entry_value.set(empty.clone(), "final".to_string());
//! assert_eq!(untouched, empty);
//! ```

use std::marker::PhantomData;

use crate::lens::Lens;
use crate::prism::Prism;

/// An Optional focuses on zero or one element within a structure.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused type
///
/// # Laws
///
/// 1. **`GetOptionSet` Law**: `get_option == Some(a)` implies
///    `set(source, a) == source`
/// 2. **`SetGetOption` Law**: when a focus exists,
///    `get_option(&set(source, a)) == Some(a)`
/// 3. When no focus exists, `set` returns the source unchanged.
pub trait Optional<S, A> {
    /// Extracts the focused value, if present.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to read from
    ///
    /// # Returns
    ///
    /// `Some` focused value, or `None` when the focus is absent
    fn get_option(&self, source: &S) -> Option<A>;

    /// Replaces the focused value when present.
    ///
    /// When the focus is absent the source is returned unchanged.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to update
    /// * `value` - The new value for the focus
    ///
    /// # Returns
    ///
    /// A new structure with the focus replaced, or the original structure
    fn set(&self, source: S, value: A) -> S;

    /// Appends this optic's path fragment to the buffer.
    fn append_path(&self, out: &mut String);

    /// Returns the dotted/bracketed path name of this optic.
    fn path(&self) -> String {
        let mut out = String::new();
        self.append_path(&mut out);
        out
    }

    /// Returns true when the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Applies a function to the focused value when present.
    ///
    /// # Arguments
    ///
    /// * `source` - The structure to modify
    /// * `function` - The function to apply to the focus
    ///
    /// # Returns
    ///
    /// A new structure with the focus modified, or the original structure
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Composes this Optional with another Optional.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The focused type of the other Optional
    /// - `O`: The type of the other Optional
    ///
    /// # Arguments
    ///
    /// * `other` - The Optional to compose with
    ///
    /// # Returns
    ///
    /// A composed Optional from S to B
    fn compose<B, O>(self, other: O) -> ComposedOptional<Self, O, A>
    where
        Self: Sized,
        O: Optional<A, B>,
    {
        ComposedOptional::new(self, other)
    }

    /// Converts this Optional to a Traversal focusing zero or one element.
    fn to_traversal(self) -> OptionalAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        OptionalAsTraversal::new(self)
    }
}

/// A Lens composed with a Prism, yielding an Optional.
///
/// Reading goes through the lens then attempts the prism match. Writing
/// only succeeds when the current value matches the prism: the new value is
/// rebuilt with `review` and stored through the lens. On a miss the source
/// is returned unchanged, so `set` agrees with `modify` under a constant
/// function.
///
/// # Type Parameters
///
/// - `L`: The type of the Lens
/// - `P`: The type of the Prism
/// - `A`: The intermediate type (target of L, source of P)
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The outer Lens
    /// * `prism` - The inner Prism
    ///
    /// # Returns
    ///
    /// A new `LensPrismComposition`
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.split(self.lens.get(source)).ok()
    }

    fn set(&self, source: S, value: B) -> S {
        match self.prism.split(self.lens.get(&source)) {
            Ok(_) => self.lens.set(source, self.prism.review(value)),
            Err(_) => source,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.lens.append_path(out);
        self.prism.append_path(out);
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A Prism composed with a Lens, yielding an Optional.
///
/// Reading attempts the prism match then reads through the lens. Writing
/// only succeeds when the prism matches: the matched value is updated
/// through the lens and rebuilt with `review`.
///
/// # Type Parameters
///
/// - `P`: The type of the Prism
/// - `L`: The type of the Lens
/// - `A`: The intermediate type (target of P, source of L)
pub struct PrismLensComposition<P, L, A> {
    prism: P,
    lens: L,
    _marker: PhantomData<A>,
}

impl<P, L, A> PrismLensComposition<P, L, A> {
    /// Creates a new `PrismLensComposition`.
    ///
    /// # Arguments
    ///
    /// * `prism` - The outer Prism
    /// * `lens` - The inner Lens
    ///
    /// # Returns
    ///
    /// A new `PrismLensComposition`
    #[must_use]
    pub const fn new(prism: P, lens: L) -> Self {
        Self {
            prism,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, L> Optional<S, B> for PrismLensComposition<P, L, A>
where
    P: Prism<S, A>,
    L: Lens<A, B>,
    S: Clone,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism
            .preview(source)
            .map(|intermediate| self.lens.get(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.prism.split(source) {
            Ok(intermediate) => self.prism.review(self.lens.set(intermediate, value)),
            Err(unmatched) => unmatched,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.prism.append_path(out);
        self.lens.append_path(out);
    }
}

impl<P: Clone, L: Clone, A> Clone for PrismLensComposition<P, L, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, L: std::fmt::Debug, A> std::fmt::Debug for PrismLensComposition<P, L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismLensComposition")
            .field("prism", &self.prism)
            .field("lens", &self.lens)
            .finish()
    }
}

/// A composed Optional that chains two Optionals together.
///
/// # Type Parameters
///
/// - `O1`: The type of the first Optional
/// - `O2`: The type of the second Optional
/// - `A`: The intermediate type
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new `ComposedOptional` from two Optionals.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer Optional
    /// * `second` - The inner Optional
    ///
    /// # Returns
    ///
    /// A new `ComposedOptional`
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Optional<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.get_option(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.first.get_option(&source) {
            Some(intermediate) => {
                let updated = self.second.set(intermediate, value);
                self.first.set(source, updated)
            }
            None => source,
        }
    }

    fn append_path(&self, out: &mut String) {
        self.first.append_path(out);
        self.second.append_path(out);
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An Optional used as a Traversal focusing zero or one element.
///
/// # Type Parameters
///
/// - `O`: The type of the underlying Optional
/// - `S`: The source type
/// - `A`: The focused type
pub struct OptionalAsTraversal<O, S, A> {
    pub(crate) optional: O,
    _marker: PhantomData<(S, A)>,
}

impl<O, S, A> OptionalAsTraversal<O, S, A> {
    /// Creates a new `OptionalAsTraversal` from an Optional.
    #[must_use]
    pub const fn new(optional: O) -> Self {
        Self {
            optional,
            _marker: PhantomData,
        }
    }
}

impl<O, S, A> crate::traversal::Traversal<S, A> for OptionalAsTraversal<O, S, A>
where
    O: Optional<S, A>,
{
    fn get_all(&self, source: &S) -> crate::traversal::Foci<A> {
        self.optional.get_option(source).into_iter().collect()
    }

    fn modify_all<F>(&self, source: S, mut function: F) -> S
    where
        F: FnMut(A) -> A,
    {
        self.optional.modify(source, &mut function)
    }

    fn append_path(&self, out: &mut String) {
        self.optional.append_path(out);
    }
}

impl<O: Clone, S, A> Clone for OptionalAsTraversal<O, S, A> {
    fn clone(&self) -> Self {
        Self {
            optional: self.optional.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, S, A> std::fmt::Debug for OptionalAsTraversal<O, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OptionalAsTraversal")
            .field("optional", &self.optional)
            .finish()
    }
}

/// Extension methods for composing a Lens with a Prism.
///
/// Implemented for every Lens via a blanket impl, so
/// `lens.compose_prism(prism)` is always available.
pub trait LensComposeExtension<S, A>: Lens<S, A> + Sized {
    /// Composes this Lens with a Prism, yielding an Optional.
    ///
    /// # Example
    ///
    /// ```
    /// use refract::{Optional, LensComposeExtension};
    /// use refract::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Config { timeout: Option<u64> }
    ///
    /// let timeout = lens!(Config, timeout).compose_prism(refract::standard::some());
    ///
    /// let config = Config { timeout: Some(30) };
    /// assert_eq!(timeout.get_option(&config), Some(30));
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }
}

impl<S, A, L> LensComposeExtension<S, A> for L where L: Lens<S, A> {}

/// Extension methods for composing a Prism with a Lens.
///
/// Implemented for every Prism via a blanket impl.
pub trait PrismComposeExtension<S, A>: Prism<S, A> + Sized {
    /// Composes this Prism with a Lens, yielding an Optional.
    fn compose_lens<B, L>(self, lens: L) -> PrismLensComposition<Self, L, A>
    where
        L: Lens<A, B>,
    {
        PrismLensComposition::new(self, lens)
    }
}

impl<S, A, P> PrismComposeExtension<S, A> for P where P: Prism<S, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lens::FunctionLens;
    use crate::prism::FunctionPrism;

    #[derive(Clone, PartialEq, Debug)]
    struct Account {
        nickname: Option<String>,
    }

    fn nickname_lens() -> impl Lens<Account, Option<String>> + Clone {
        FunctionLens::new(
            ".nickname",
            |account: &Account| account.nickname.clone(),
            |mut account: Account, nickname| {
                account.nickname = nickname;
                account
            },
        )
    }

    fn some_prism<A>() -> impl Prism<Option<A>, A> + Clone {
        FunctionPrism::new(
            "?",
            |source: Option<A>| source.ok_or(None),
            Some,
        )
    }

    #[test]
    fn test_lens_prism_composition_get_option() {
        let nickname = nickname_lens().compose_prism(some_prism());

        let account = Account {
            nickname: Some("ada".to_string()),
        };
        assert_eq!(nickname.get_option(&account), Some("ada".to_string()));
        assert!(nickname.is_present(&account));

        let anonymous = Account { nickname: None };
        assert_eq!(nickname.get_option(&anonymous), None);
    }

    #[test]
    fn test_lens_prism_composition_set_present() {
        let nickname = nickname_lens().compose_prism(some_prism());

        let account = Account {
            nickname: Some("ada".to_string()),
        };
        let renamed = nickname.set(account, "grace".to_string());
        assert_eq!(renamed.nickname, Some("grace".to_string()));
    }

    #[test]
    fn test_lens_prism_composition_set_absent_is_identity() {
        let nickname = nickname_lens().compose_prism(some_prism());

        let anonymous = Account { nickname: None };
        let untouched = nickname.set(anonymous.clone(), "grace".to_string());
        assert_eq!(untouched, anonymous);

        // set agrees with modify under a constant function
        let via_modify = nickname.modify(anonymous.clone(), |_| "grace".to_string());
        assert_eq!(via_modify, anonymous);
    }

    #[test]
    fn test_optional_modify_absent_is_identity() {
        let nickname = nickname_lens()
            .compose_prism(some_prism())
            .compose(identity_optional());

        let anonymous = Account { nickname: None };
        let untouched = nickname.modify(anonymous.clone(), |name| name.to_uppercase());
        assert_eq!(untouched, anonymous);
    }

    fn identity_optional<A: Clone>() -> impl Optional<A, A> + Clone {
        #[derive(Clone)]
        struct IdentityOptional;

        impl<A: Clone> Optional<A, A> for IdentityOptional {
            fn get_option(&self, source: &A) -> Option<A> {
                Some(source.clone())
            }

            fn set(&self, _source: A, value: A) -> A {
                value
            }

            fn append_path(&self, _out: &mut String) {}
        }

        IdentityOptional
    }

    #[test]
    fn test_composed_optional_path() {
        let nickname = nickname_lens().compose_prism(some_prism());
        assert_eq!(nickname.path(), ".nickname?");
    }

    #[test]
    fn test_prism_lens_composition() {
        #[derive(Clone, PartialEq, Debug)]
        struct Point {
            x: i32,
        }

        #[derive(Clone, PartialEq, Debug)]
        enum Shape {
            Dot(Point),
            Empty,
        }

        let dot_prism = FunctionPrism::new(
            "?Dot",
            |shape: Shape| match shape {
                Shape::Dot(point) => Ok(point),
                other => Err(other),
            },
            Shape::Dot,
        );
        let x_lens = FunctionLens::new(
            ".x",
            |point: &Point| point.x,
            |mut point: Point, x| {
                point.x = x;
                point
            },
        );

        let dot_x = dot_prism.compose_lens(x_lens);

        assert_eq!(dot_x.get_option(&Shape::Dot(Point { x: 3 })), Some(3));
        assert_eq!(dot_x.get_option(&Shape::Empty), None);
        assert_eq!(
            dot_x.set(Shape::Dot(Point { x: 3 }), 9),
            Shape::Dot(Point { x: 9 })
        );
        assert_eq!(dot_x.set(Shape::Empty, 9), Shape::Empty);
        assert_eq!(dot_x.path(), "?Dot.x");
    }

    #[test]
    fn test_optional_as_traversal() {
        use crate::traversal::Traversal;

        let nickname = nickname_lens().compose_prism(some_prism()).to_traversal();

        let account = Account {
            nickname: Some("ada".to_string()),
        };
        assert_eq!(nickname.length(&account), 1);
        let shouted = nickname.modify_all(account, |name| name.to_uppercase());
        assert_eq!(shouted.nickname, Some("ADA".to_string()));

        let anonymous = Account { nickname: None };
        assert!(nickname.is_empty(&anonymous));
    }
}
