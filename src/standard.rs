//! Ready-made optics for common shapes.
//!
//! Constructors here cover the identities, tuple components, and the
//! standard sum types. They return `impl Trait + Clone`, so they compose
//! freely with user-defined optics.
//!
//! # Example
//!
//! ```
//! use refract::{Optional, LensComposeExtension};
//! use refract::standard::{first, some};
//!
//! let first_some = first().compose_prism(some());
//!
//! let pair = (Some(3), "rest");
//! assert_eq!(first_some.get_option(&pair), Some(3));
//! assert_eq!(first_some.set(pair, 9), (Some(9), "rest"));
//! ```

use crate::iso::{FunctionIso, Iso};
use crate::lens::{FunctionLens, Lens};
use crate::prism::{FunctionPrism, Prism};

/// The identity Iso: both directions are the identity function.
///
/// Its path is empty, so it is invisible in composed path names.
#[must_use]
pub fn identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new("", |value: T| value, |value: T| value)
}

/// An Iso between `(A, B)` and `(B, A)`.
#[must_use]
pub fn swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(
        "",
        |(a, b): (A, B)| (b, a),
        |(b, a): (B, A)| (a, b),
    )
}

/// A Lens focusing the first component of a pair. Path fragment `.0`.
#[must_use]
pub fn first<A: Clone, B>() -> impl Lens<(A, B), A> + Clone {
    FunctionLens::new(
        ".0",
        |source: &(A, B)| source.0.clone(),
        |source: (A, B), value| (value, source.1),
    )
}

/// A Lens focusing the second component of a pair. Path fragment `.1`.
#[must_use]
pub fn second<A, B: Clone>() -> impl Lens<(A, B), B> + Clone {
    FunctionLens::new(
        ".1",
        |source: &(A, B)| source.1.clone(),
        |source: (A, B), value| (source.0, value),
    )
}

/// A Prism matching the `Some` variant of an `Option`. Path fragment `?`.
///
/// # Example
///
/// ```
/// use refract::Prism;
/// use refract::standard::some;
///
/// let some_prism = some();
/// assert_eq!(some_prism.split(Some(3)), Ok(3));
/// assert_eq!(some_prism.split(None::<i32>), Err(None));
/// assert_eq!(some_prism.review(5), Some(5));
/// ```
#[must_use]
pub fn some<A>() -> impl Prism<Option<A>, A> + Clone {
    FunctionPrism::new("?", |source: Option<A>| source.ok_or(None), Some)
}

/// A Prism matching the `Ok` variant of a `Result`. Path fragment `~`.
#[must_use]
pub fn ok<A, E>() -> impl Prism<Result<A, E>, A> + Clone {
    FunctionPrism::new("~", |source: Result<A, E>| source.map_err(Err), Ok)
}

/// A Prism matching the `Err` variant of a `Result`. Path fragment `!`.
#[must_use]
pub fn err<A, E>() -> impl Prism<Result<A, E>, E> + Clone {
    FunctionPrism::new(
        "!",
        |source: Result<A, E>| match source {
            Err(error) => Ok(error),
            Ok(value) => Err(Ok(value)),
        },
        Err,
    )
}
