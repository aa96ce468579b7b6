//! Property-based tests for Iso laws.
//!
//! This module tests that Iso implementations satisfy the fundamental laws:
//!
//! 1. **GetReverseGet Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **ReverseGetGet Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! It also checks that the Lens and Prism views of an Iso satisfy their own
//! laws, since an Iso claims both capabilities.

use proptest::prelude::*;
use refract::standard::{identity, swap};
use refract::{FunctionIso, Iso, Lens, Prism};

// =============================================================================
// Test isos
// =============================================================================

fn meters_millimeters() -> impl Iso<i64, i64> + Clone {
    FunctionIso::new(
        ".millimeters",
        |meters: i64| meters * 1000,
        |millimeters: i64| millimeters / 1000,
    )
}

fn string_bytes() -> impl Iso<String, Vec<u8>> + Clone {
    FunctionIso::new(
        ".bytes",
        String::into_bytes,
        |bytes: Vec<u8>| String::from_utf8_lossy(&bytes).into_owned(),
    )
}

// =============================================================================
// Roundtrip laws
// =============================================================================

proptest! {
    /// GetReverseGet Law for a unit-conversion iso
    #[test]
    fn prop_get_reverse_get_law_units(meters in -1_000_000i64..1_000_000) {
        let iso = meters_millimeters();
        prop_assert_eq!(iso.reverse_get(iso.get(meters)), meters);
    }

    /// Both roundtrip laws for the string/bytes iso
    #[test]
    fn prop_roundtrip_laws_string_bytes(text in "\\PC*") {
        let iso = string_bytes();
        prop_assert_eq!(iso.reverse_get(iso.get(text.clone())), text.clone());

        let bytes = text.into_bytes();
        prop_assert_eq!(iso.get(iso.reverse_get(bytes.clone())), bytes);
    }

    /// Both roundtrip laws for the identity iso
    #[test]
    fn prop_identity_laws(value in any::<i64>()) {
        let id = identity::<i64>();
        prop_assert_eq!(id.reverse_get(id.get(value)), value);
        prop_assert_eq!(id.get(id.reverse_get(value)), value);
    }

    /// swap is its own inverse
    #[test]
    fn prop_swap_involution(a in any::<i32>(), b in ".*") {
        let swapped = swap::<i32, String>();
        let pair = (a, b);
        prop_assert_eq!(
            swapped.reverse_get(swapped.get(pair.clone())),
            pair
        );
    }
}

// =============================================================================
// Reversal
// =============================================================================

proptest! {
    /// Reversing twice restores the original behavior
    #[test]
    fn prop_double_reverse(value in -1_000_000i64..1_000_000) {
        let iso = meters_millimeters();
        let double_reversed = meters_millimeters().reverse().reverse();
        prop_assert_eq!(double_reversed.get(value), iso.get(value));
    }

    /// The reversed iso satisfies the roundtrip laws with directions swapped
    #[test]
    fn prop_reversed_roundtrip(millimeters in -1_000i64..1_000) {
        let millimeters = millimeters * 1000;
        let reversed = meters_millimeters().reverse();
        prop_assert_eq!(reversed.reverse_get(reversed.get(millimeters)), millimeters);
    }
}

// =============================================================================
// Degraded views keep their laws
// =============================================================================

proptest! {
    /// The Lens view of an iso satisfies GetPut
    #[test]
    fn prop_iso_as_lens_get_put(meters in -1_000_000i64..1_000_000) {
        let lens = meters_millimeters().to_lens();
        let value = lens.get(&meters);
        prop_assert_eq!(lens.set(meters, value), meters);
    }

    /// The Lens view of an iso satisfies PutGet
    #[test]
    fn prop_iso_as_lens_put_get(
        meters in -1_000i64..1_000,
        new_millimeters in -1_000i64..1_000
    ) {
        let new_millimeters = new_millimeters * 1000;
        let lens = meters_millimeters().to_lens();
        let updated = lens.set(meters, new_millimeters);
        prop_assert_eq!(lens.get(&updated), new_millimeters);
    }

    /// The Prism view of an iso always matches and satisfies SplitReview
    #[test]
    fn prop_iso_as_prism_total(meters in -1_000_000i64..1_000_000) {
        let prism = meters_millimeters().to_prism();
        let split = prism.split(meters);
        prop_assert!(split.is_ok());
        if let Ok(millimeters) = split {
            prop_assert_eq!(prism.review(millimeters), meters);
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    /// Composed isos satisfy the roundtrip laws
    #[test]
    fn prop_composed_iso_roundtrip(value in -1_000i64..1_000) {
        let negate = FunctionIso::new("", |x: i64| -x, |x: i64| -x);
        let composed = meters_millimeters().compose(negate);
        prop_assert_eq!(composed.reverse_get(composed.get(value)), value);
    }
}
