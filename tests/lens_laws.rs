//! Property-based tests for Lens laws.
//!
//! This module verifies that Lens implementations satisfy the required laws:
//!
//! - **GetPut Law**: `lens.set(source, lens.get(&source)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use proptest::prelude::*;
use refract::lens;
use refract::{FunctionLens, Lens};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

// =============================================================================
// Lens Laws for Point
// =============================================================================

proptest! {
    /// GetPut Law for Point.x: setting back what was got yields the original
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let value = x_lens.get(&point);
        let result = x_lens.set(point.clone(), value);
        prop_assert_eq!(result, point);
    }

    /// PutGet Law for Point.x: setting then getting yields the set value
    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let updated = x_lens.set(point, new_value);
        prop_assert_eq!(x_lens.get(&updated), new_value);
    }

    /// PutPut Law for Point.x: two consecutive sets equal the last set
    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let left = x_lens.set(x_lens.set(point.clone(), value1), value2);
        let right = x_lens.set(point, value2);
        prop_assert_eq!(left, right);
    }

    /// GetPut Law for Point.y
    #[test]
    fn prop_point_y_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let y_lens = lens!(Point, y);
        let point = Point { x, y };
        let value = y_lens.get(&point);
        let result = y_lens.set(point.clone(), value);
        prop_assert_eq!(result, point);
    }

    /// PutGet Law for Point.y
    #[test]
    fn prop_point_y_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let y_lens = lens!(Point, y);
        let point = Point { x, y };
        let updated = y_lens.set(point, new_value);
        prop_assert_eq!(y_lens.get(&updated), new_value);
    }
}

// =============================================================================
// Lens Laws for String-valued fields
// =============================================================================

proptest! {
    /// GetPut Law for Address.street
    #[test]
    fn prop_street_get_put_law(street in ".*", city in ".*") {
        let street_lens = lens!(Address, street);
        let address = Address { street, city };
        let value = street_lens.get(&address);
        let result = street_lens.set(address.clone(), value);
        prop_assert_eq!(result, address);
    }

    /// PutGet Law for Address.street
    #[test]
    fn prop_street_put_get_law(street in ".*", city in ".*", new_street in ".*") {
        let street_lens = lens!(Address, street);
        let address = Address { street, city };
        let updated = street_lens.set(address, new_street.clone());
        prop_assert_eq!(street_lens.get(&updated), new_street);
    }

    /// PutPut Law for Address.city
    #[test]
    fn prop_city_put_put_law(
        street in ".*",
        city in ".*",
        value1 in ".*",
        value2 in ".*"
    ) {
        let city_lens = lens!(Address, city);
        let address = Address { street, city };
        let left = city_lens.set(city_lens.set(address.clone(), value1), value2.clone());
        let right = city_lens.set(address, value2);
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Laws survive composition
// =============================================================================

proptest! {
    /// GetPut Law for a two-level composed lens
    #[test]
    fn prop_composed_get_put_law(name in ".*", street in ".*", city in ".*") {
        let person_street = lens!(Person, address).compose(lens!(Address, street));
        let person = Person {
            name,
            address: Address { street, city },
        };
        let value = person_street.get(&person);
        let result = person_street.set(person.clone(), value);
        prop_assert_eq!(result, person);
    }

    /// PutGet Law for a two-level composed lens
    #[test]
    fn prop_composed_put_get_law(
        name in ".*",
        street in ".*",
        city in ".*",
        new_street in ".*"
    ) {
        let person_street = lens!(Person, address).compose(lens!(Address, street));
        let person = Person {
            name,
            address: Address { street, city },
        };
        let updated = person_street.set(person, new_street.clone());
        prop_assert_eq!(person_street.get(&updated), new_street);
    }

    /// PutPut Law for a two-level composed lens
    #[test]
    fn prop_composed_put_put_law(
        name in ".*",
        street in ".*",
        city in ".*",
        value1 in ".*",
        value2 in ".*"
    ) {
        let person_street = lens!(Person, address).compose(lens!(Address, street));
        let person = Person {
            name,
            address: Address { street, city },
        };
        let left = person_street.set(person_street.set(person.clone(), value1), value2.clone());
        let right = person_street.set(person, value2);
        prop_assert_eq!(left, right);
    }

    /// Composition leaves unrelated fields untouched
    #[test]
    fn prop_composed_set_preserves_siblings(
        name in ".*",
        street in ".*",
        city in ".*",
        new_street in ".*"
    ) {
        let person_street = lens!(Person, address).compose(lens!(Address, street));
        let person = Person {
            name: name.clone(),
            address: Address { street, city: city.clone() },
        };
        let updated = person_street.set(person, new_street);
        prop_assert_eq!(updated.name, name);
        prop_assert_eq!(updated.address.city, city);
    }
}

// =============================================================================
// FunctionLens laws (hand-written getter/setter)
// =============================================================================

proptest! {
    /// GetPut Law for a hand-written FunctionLens
    #[test]
    fn prop_function_lens_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = FunctionLens::new(
            ".x",
            |point: &Point| point.x,
            |mut point: Point, x| {
                point.x = x;
                point
            },
        );
        let point = Point { x, y };
        let value = x_lens.get(&point);
        prop_assert_eq!(x_lens.set(point.clone(), value), point);
    }

    /// modify is set-after-get
    #[test]
    fn prop_modify_equals_get_then_set(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let modified = x_lens.modify(point.clone(), |v| v.wrapping_add(1));
        let expected = x_lens.set(point.clone(), x_lens.get(&point).wrapping_add(1));
        prop_assert_eq!(modified, expected);
    }

    /// set_if_changed agrees with set observationally
    #[test]
    fn prop_set_if_changed_agrees_with_set(
        x in any::<i32>(),
        y in any::<i32>(),
        new_value in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let guarded = x_lens.set_if_changed(point.clone(), new_value);
        let plain = x_lens.set(point, new_value);
        prop_assert_eq!(guarded, plain);
    }
}
