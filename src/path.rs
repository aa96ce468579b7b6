//! Path fragments for naming optics.
//!
//! Every optic carries a short fragment describing the single step it
//! performs (`.field`, `[]`, `[7]`, `?`, `{key}`). Composing optics
//! concatenates their fragments in composition order, producing a stable,
//! `jq`-like path string such as `.info.stuff[7]?.name`. Paths are useful as
//! diagnostic labels and as dictionary keys distinguishing structurally
//! different accessors.
//!
//! # Conventional fragments
//!
//! | Fragment | Meaning |
//! |---|---|
//! | `.field` | record/struct field |
//! | `[]` | every list element |
//! | `[7]` | list element at index 7 |
//! | `?` | optional value (`Some` branch) |
//! | `?Variant` | enum branch (from the `prism!` macro) |
//! | `{key}` | dictionary entry |
//! | `~` / `!` | `Ok` / `Err` branch of a result |
//! | (empty) | identity |
//!
//! # Example
//!
//! ```
//! use refract::Lens;
//! use refract::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Inner { value: i32 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Outer { inner: Inner }
//!
//! let composed = lens!(Outer, inner).compose(lens!(Inner, value));
//! assert_eq!(composed.path(), ".inner.value");
//! ```

use std::borrow::Cow;

/// A single path-name fragment.
///
/// Leaf constructors usually supply a `&'static str` literal; adapters whose
/// fragment depends on runtime data (an index, a map key) supply an owned
/// `String`.
pub type Fragment = Cow<'static, str>;

/// Builds a `.field`-style fragment for a record field.
#[must_use]
pub fn field_fragment(name: &str) -> Fragment {
    Cow::Owned(format!(".{name}"))
}

/// Builds a `[i]`-style fragment for a positional index.
#[must_use]
pub fn index_fragment(index: usize) -> Fragment {
    Cow::Owned(format!("[{index}]"))
}

/// Builds a `{key}`-style fragment for a dictionary entry.
#[must_use]
pub fn key_fragment(key: &impl std::fmt::Display) -> Fragment {
    Cow::Owned(format!("{{{key}}}"))
}
