//! # refract
//!
//! Composable optics for immutable data manipulation: focus on a part of a
//! nested structure, then read, replace, or rewrite it without mutating the
//! original.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Traversal
//! Prism <: Traversal
//! Lens . Prism = Optional
//! ```
//!
//! Each kind of optic is its own trait, so an operation a kind cannot
//! support simply does not exist on it: a Traversal has no `get`, an
//! Optional has no `review`. Composing optics of different kinds yields the
//! weakest kind in the chain.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on exactly one field (get/set access)
//! - [`Prism`]: Focus on a variant of a sum type (split/review access)
//! - [`Optional`]: Focus on a value that may be absent (Lens + Prism composition)
//! - [`Iso`]: Isomorphism between types (bidirectional conversion)
//! - [`Traversal`]: Focus on zero or more elements (batch access)
//!
//! Every optic also carries a path fragment (`.field`, `[7]`, `?`,
//! `{key}`); composition concatenates them into a `jq`-like name such as
//! `.info.stuff[7]?.name`, available through `path()` on any optic.
//!
//! # Example with Lens
//!
//! ```
//! use refract::Lens;
//! use refract::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! // Set nested field (returns new structure)
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! assert_eq!(person_street.path(), ".address.street");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use refract::Prism;
//! use refract::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Payment {
//!     Card { number: String },
//!     Cash(u64),
//! }
//!
//! let cash = prism!(Payment, Cash);
//!
//! assert_eq!(cash.split(Payment::Cash(100)), Ok(100));
//! assert!(cash.split(Payment::Card { number: "4".to_string() }).is_err());
//! assert_eq!(cash.review(25), Payment::Cash(25));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod at;
pub mod compose;
pub mod each;
pub mod indexed;
pub mod iso;
pub mod ixed;
pub mod lens;
pub mod optional;
pub mod path;
pub mod prism;
pub mod standard;
pub mod traversal;

pub use at::{At, BTreeMapAt, HashMapAt};
pub use compose::{
    LensComposeWithOptional, LensComposeWithTraversal, LensOptionalComposition,
    LensTraversalComposition, OptionalComposeWithLens, OptionalComposeWithPrism,
    OptionalComposeWithTraversal, OptionalLensComposition, OptionalPrismComposition,
    OptionalTraversalComposition, PrismComposeWithOptional, PrismComposeWithTraversal,
    PrismOptionalComposition, PrismTraversalComposition,
};
pub use each::{BTreeMapValuesTraversal, Each, HashMapValuesTraversal};
pub use indexed::{IndexedLens, IndexedPrism, IndexedTraversal, VecEnumerate};
pub use iso::{ComposedIso, FunctionIso, Iso, IsoAsLens, IsoAsPrism, ReversedIso};
pub use ixed::{BTreeMapIx, HashMapIx, Ixed, VecIx};
pub use lens::{ComposedLens, FunctionLens, Lens, LensAsTraversal};
pub use optional::{
    ComposedOptional, LensComposeExtension, LensPrismComposition, Optional,
    OptionalAsTraversal, PrismComposeExtension, PrismLensComposition,
};
pub use path::Fragment;
pub use prism::{ComposedPrism, FunctionPrism, Prism, PrismAsTraversal};
pub use traversal::{
    ComposedTraversal, Foci, FunctionTraversal, OptionTraversal, ResultTraversal, Traversal,
    VecTraversal,
};

/// Prelude module for convenient imports.
///
/// Re-exports the optic traits, the common adapters, and the composition
/// extension traits.
///
/// # Usage
///
/// ```rust
/// use refract::prelude::*;
/// ```
pub mod prelude {
    pub use crate::at::At;
    pub use crate::compose::{
        LensComposeWithOptional, LensComposeWithTraversal, OptionalComposeWithLens,
        OptionalComposeWithPrism, OptionalComposeWithTraversal, PrismComposeWithOptional,
        PrismComposeWithTraversal,
    };
    pub use crate::each::Each;
    pub use crate::iso::{FunctionIso, Iso};
    pub use crate::ixed::Ixed;
    pub use crate::lens::{FunctionLens, Lens};
    pub use crate::optional::{LensComposeExtension, Optional, PrismComposeExtension};
    pub use crate::prism::{FunctionPrism, Prism};
    pub use crate::standard;
    pub use crate::traversal::{Foci, Traversal};
}
