//! Prism optics for focusing on enum variants.
//!
//! A Prism is an optic that provides split/review access to one branch of a
//! tagged union. Unlike a Lens which always succeeds, a Prism may fail to
//! extract a value if the source is not the expected variant; the miss is
//! ordinary data (the untouched source comes back), never an error.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **SplitReview Law** (yin): Reviewing then splitting yields the original
//!    value.
//!    ```text
//!    prism.split(prism.review(value)) == Ok(value)
//!    ```
//!
//! 2. **ReviewSplit Law** (yang): If split succeeds, reviewing the result
//!    yields the original source; if it misses, the source comes back
//!    untouched.
//!    ```text
//!    match prism.split(source.clone()) {
//!        Ok(value) => prism.review(value) == source,
//!        Err(unmatched) => unmatched == source,
//!    }
//!    ```
//!
//! # Examples
//!
//! ```
//! use refract::Prism;
//! use refract::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Using the prism! macro
//! let circle_prism = prism!(Shape, Circle);
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(circle_prism.preview(&circle), Some(5.0));
//!
//! let rect = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(circle_prism.preview(&rect), None);
//!
//! let constructed = circle_prism.review(10.0);
//! assert!(matches!(constructed, Shape::Circle(r) if (r - 10.0).abs() < 1e-10));
//! ```

use std::marker::PhantomData;

use crate::path::Fragment;

/// A Prism focuses on a single branch of a tagged union.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the branch)
///
/// # Laws
///
/// 1. **SplitReview Law**: `prism.split(prism.review(value)) == Ok(value)`
/// 2. **ReviewSplit Law**: If `split` succeeds, `prism.review(value) == source`;
///    if it misses, the returned `Err` carries the source unchanged.
pub trait Prism<S, A> {
    /// Attempts to extract the focused value, consuming the source.
    ///
    /// Returns `Ok(value)` if the source is the expected branch, and
    /// `Err(source)` with the source unchanged otherwise. Nothing is cloned
    /// on the miss path.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value (consumed)
    ///
    /// # Returns
    ///
    /// `Ok` with the inner value, or `Err` with the unmatched source
    fn split(&self, source: S) -> Result<A, S>;

    /// Constructs the source from a focus value alone.
    ///
    /// This always succeeds, creating the expected branch from the given
    /// value with no existing outer value as input.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap in the branch
    ///
    /// # Returns
    ///
    /// A new source with the value wrapped in the expected branch
    fn review(&self, value: A) -> S;

    /// Appends this optic's path fragment to the buffer.
    fn append_path(&self, out: &mut String);

    /// Returns the dotted/bracketed path name of this optic.
    fn path(&self) -> String {
        let mut out = String::new();
        self.append_path(&mut out);
        out
    }

    /// Attempts to extract the focused value without consuming the source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value
    ///
    /// # Returns
    ///
    /// The inner value if the branch matches, `None` otherwise
    fn preview(&self, source: &S) -> Option<A>
    where
        S: Clone,
    {
        self.split(source.clone()).ok()
    }

    /// Checks whether the source is the expected branch.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value
    ///
    /// # Returns
    ///
    /// `true` if [`split`](Prism::split) would succeed
    fn is_match(&self, source: &S) -> bool
    where
        S: Clone,
    {
        self.preview(source).is_some()
    }

    /// Modifies the value if the source is the expected branch.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value (consumed)
    /// * `function` - The function to apply to the inner value
    ///
    /// # Returns
    ///
    /// `Some(modified_source)` if the branch matches, `None` otherwise
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.split(source)
            .ok()
            .map(|value| self.review(function(value)))
    }

    /// Modifies the value if the source is the expected branch, or returns
    /// the source unchanged.
    ///
    /// # Arguments
    ///
    /// * `source` - The source value (consumed)
    /// * `function` - The function to apply to the inner value
    ///
    /// # Returns
    ///
    /// The modified source if the branch matches, the original otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use refract::Prism;
    /// use refract::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Rectangle(f64, f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.modify_or_identity(Shape::Circle(5.0), |r| r * 2.0);
    /// assert!(matches!(doubled, Shape::Circle(r) if (r - 10.0).abs() < 1e-10));
    ///
    /// let rect = Shape::Rectangle(3.0, 4.0);
    /// let unchanged = circle_prism.modify_or_identity(rect.clone(), |r| r * 2.0);
    /// assert_eq!(unchanged, rect);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.split(source) {
            Ok(value) => self.review(function(value)),
            Err(source) => source,
        }
    }

    /// Composes this prism with another prism to focus on a nested branch.
    ///
    /// The composed optic is itself a full Prism: both steps can reconstruct
    /// the outer value from a focus alone.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other prism
    /// - `P`: The type of the other prism
    ///
    /// # Arguments
    ///
    /// * `other` - The prism to compose with
    ///
    /// # Returns
    ///
    /// A composed prism that focuses on the nested branch
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Converts this prism to a traversal.
    ///
    /// A prism can be viewed as a traversal that yields zero or one elements.
    ///
    /// # Returns
    ///
    /// A traversal that yields the focused element if present
    fn to_traversal(self) -> PrismAsTraversal<Self, S, A>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism implemented using split and review functions.
///
/// This is the most common way to create a prism. The `prism!` macro
/// generates a `FunctionPrism` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `Sp`: The split function type
/// - `Re`: The review function type
///
/// # Example
///
/// ```
/// use refract::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let circle_prism = FunctionPrism::new(
///     "?Circle",
///     |shape: Shape| match shape {
///         Shape::Circle(radius) => Ok(radius),
///         other => Err(other),
///     },
///     |radius: f64| Shape::Circle(radius),
/// );
///
/// let circle = Shape::Circle(5.0);
/// assert_eq!(circle_prism.preview(&circle), Some(5.0));
/// ```
pub struct FunctionPrism<S, A, Sp, Re>
where
    Sp: Fn(S) -> Result<A, S>,
    Re: Fn(A) -> S,
{
    fragment: Fragment,
    split_function: Sp,
    review_function: Re,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Sp, Re> FunctionPrism<S, A, Sp, Re>
where
    Sp: Fn(S) -> Result<A, S>,
    Re: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from a path fragment, split and review
    /// functions.
    ///
    /// # Arguments
    ///
    /// * `fragment` - The path fragment naming this step (e.g. `"?Circle"`)
    /// * `split_function` - Extracts the focus or returns the unmatched source
    /// * `review_function` - Constructs the source from a focus value
    ///
    /// # Returns
    ///
    /// A new `FunctionPrism`
    #[must_use]
    pub fn new(
        fragment: impl Into<Fragment>,
        split_function: Sp,
        review_function: Re,
    ) -> Self {
        Self {
            fragment: fragment.into(),
            split_function,
            review_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Sp, Re> Prism<S, A> for FunctionPrism<S, A, Sp, Re>
where
    Sp: Fn(S) -> Result<A, S>,
    Re: Fn(A) -> S,
{
    fn split(&self, source: S) -> Result<A, S> {
        (self.split_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn append_path(&self, out: &mut String) {
        out.push_str(&self.fragment);
    }
}

impl<S, A, Sp, Re> Clone for FunctionPrism<S, A, Sp, Re>
where
    Sp: Fn(S) -> Result<A, S> + Clone,
    Re: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            fragment: self.fragment.clone(),
            split_function: self.split_function.clone(),
            review_function: self.review_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Sp, Re> std::fmt::Debug for FunctionPrism<S, A, Sp, Re>
where
    Sp: Fn(S) -> Result<A, S>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .field("fragment", &self.fragment)
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// This allows focusing on nested branches by composing a prism that focuses
/// on an intermediate enum with a prism that focuses on a branch within that
/// enum.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer prism (focuses on the intermediate enum)
    /// * `second` - The inner prism (focuses on the final value)
    ///
    /// # Returns
    ///
    /// A new `ComposedPrism`
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn split(&self, source: S) -> Result<B, S> {
        match self.first.split(source) {
            Ok(intermediate) => self
                .second
                .split(intermediate)
                .map_err(|unmatched| self.first.review(unmatched)),
            Err(source) => Err(source),
        }
    }

    fn review(&self, value: B) -> S {
        let intermediate = self.second.review(value);
        self.first.review(intermediate)
    }

    fn append_path(&self, out: &mut String) {
        self.first.append_path(out);
        self.second.append_path(out);
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A prism converted to a traversal.
///
/// This wrapper allows using a prism where a traversal is expected.
/// It will yield zero or one elements.
///
/// # Type Parameters
///
/// - `P`: The type of the underlying prism
/// - `S`: The source type
/// - `A`: The target type
pub struct PrismAsTraversal<P, S, A> {
    pub(crate) prism: P,
    _marker: PhantomData<(S, A)>,
}

impl<P, S, A> PrismAsTraversal<P, S, A> {
    /// Creates a new `PrismAsTraversal` from a prism.
    ///
    /// # Arguments
    ///
    /// * `prism` - The prism to wrap
    ///
    /// # Returns
    ///
    /// A new `PrismAsTraversal`
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self {
            prism,
            _marker: PhantomData,
        }
    }
}

impl<P: Clone, S, A> Clone for PrismAsTraversal<P, S, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, S, A> std::fmt::Debug for PrismAsTraversal<P, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismAsTraversal")
            .field("prism", &self.prism)
            .finish()
    }
}

/// Creates a prism for an enum variant.
///
/// This macro generates a `FunctionPrism` that focuses on the specified
/// variant of the given enum type, with a `?Variant` path fragment.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Limitations
///
/// This macro only works with tuple variants that have a single value.
/// For variants with multiple fields or named fields, use
/// `FunctionPrism::new` directly.
///
/// # Example
///
/// ```
/// use refract::Prism;
/// use refract::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// let some_value = MyOption::Some(42);
/// assert_eq!(some_prism.preview(&some_value), Some(42));
///
/// let none_value: MyOption<i32> = MyOption::None;
/// assert_eq!(some_prism.preview(&none_value), None);
///
/// let constructed = some_prism.review(100);
/// assert_eq!(constructed, MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::FunctionPrism::new(
            concat!("?", stringify!($variant)),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => Ok(value),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::FunctionPrism::new(
            concat!("?", stringify!($variant)),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Ok(value),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::FunctionPrism::new(
            concat!("?", stringify!($variant)),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => Ok(value),
                #[allow(unreachable_patterns)]
                other => Err(other),
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Rectangle(f64, f64),
    }

    #[test]
    fn test_function_prism_split_match() {
        let circle_prism = prism!(Shape, Circle);

        let circle = Shape::Circle(5.0);
        assert_eq!(circle_prism.split(circle), Ok(5.0));
    }

    #[test]
    fn test_function_prism_split_miss_returns_source() {
        let circle_prism = prism!(Shape, Circle);

        let rect = Shape::Rectangle(3.0, 4.0);
        assert_eq!(circle_prism.split(rect.clone()), Err(rect));
    }

    #[test]
    fn test_function_prism_review() {
        let circle_prism = prism!(Shape, Circle);

        let constructed = circle_prism.review(10.0);
        assert!(matches!(constructed, Shape::Circle(r) if (r - 10.0).abs() < 1e-10));
    }

    #[test]
    fn test_prism_preview() {
        let circle_prism = prism!(Shape, Circle);

        assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(5.0));
        assert_eq!(circle_prism.preview(&Shape::Rectangle(3.0, 4.0)), None);
    }

    #[test]
    fn test_prism_is_match() {
        let circle_prism = prism!(Shape, Circle);

        assert!(circle_prism.is_match(&Shape::Circle(5.0)));
        assert!(!circle_prism.is_match(&Shape::Rectangle(3.0, 4.0)));
    }

    #[test]
    fn test_prism_modify_option() {
        let circle_prism = prism!(Shape, Circle);
        let doubled = circle_prism.modify_option(Shape::Circle(5.0), |r| r * 2.0);
        assert!(matches!(doubled, Some(Shape::Circle(r)) if (r - 10.0).abs() < 1e-10));

        let missed = circle_prism.modify_option(Shape::Rectangle(3.0, 4.0), |r| r * 2.0);
        assert!(missed.is_none());
    }

    #[test]
    fn test_composed_prism() {
        #[derive(Clone, PartialEq, Debug)]
        enum Outer {
            Inner(Inner),
            Empty,
        }

        #[derive(Clone, PartialEq, Debug)]
        enum Inner {
            Value(i32),
            Nothing,
        }

        let outer_value = prism!(Outer, Inner).compose(prism!(Inner, Value));

        let data = Outer::Inner(Inner::Value(42));
        assert_eq!(outer_value.preview(&data), Some(42));

        let empty = Outer::Empty;
        assert_eq!(outer_value.preview(&empty), None);

        // An inner miss reassembles the outer value unchanged.
        let nothing = Outer::Inner(Inner::Nothing);
        assert_eq!(outer_value.split(nothing.clone()), Err(nothing));

        assert_eq!(outer_value.review(7), Outer::Inner(Inner::Value(7)));
    }

    #[test]
    fn test_prism_path() {
        let circle_prism = prism!(Shape, Circle);
        assert_eq!(circle_prism.path(), "?Circle");
    }
}
