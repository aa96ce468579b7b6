//! End-to-end scenarios over small realistic structures.
//!
//! Each scenario exercises a full read/modify/write cycle the way user code
//! would: field access on a record, batch updates through a list, partial
//! access into optional data, and slot manipulation on a dictionary.

use std::collections::HashMap;

use refract::standard::some;
use refract::{
    At, Each, Lens, LensComposeExtension, LensComposeWithTraversal, Optional,
    OptionalComposeWithLens, Prism, Traversal, lens,
};

// =============================================================================
// Record scenario: plain field access
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Record {
    foo: i64,
    bar: String,
    qux: bool,
}

fn sample_record() -> Record {
    Record {
        foo: 3,
        bar: "Yop".to_string(),
        qux: false,
    }
}

#[test]
fn test_record_field_get() {
    assert_eq!(lens!(Record, foo).get(&sample_record()), 3);
    assert_eq!(lens!(Record, bar).get(&sample_record()), "Yop");
    assert!(!lens!(Record, qux).get(&sample_record()));
}

#[test]
fn test_record_field_set_and_modify() {
    let updated = lens!(Record, foo).set(sample_record(), 42);
    assert_eq!(updated.foo, 42);
    assert_eq!(updated.bar, "Yop");

    let toggled = lens!(Record, qux).modify(sample_record(), |q| !q);
    assert!(toggled.qux);

    let decremented = lens!(Record, foo).modify(sample_record(), |n| n - 2);
    assert_eq!(decremented.foo, 1);
}

// =============================================================================
// List scenario: a lens into a list, then every element
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Item {
    foo: i64,
}

#[derive(Clone, PartialEq, Debug)]
struct ListRecord {
    bar: Vec<Item>,
}

fn sample_list_record() -> ListRecord {
    ListRecord {
        bar: vec![Item { foo: 2 }, Item { foo: 3 }],
    }
}

#[test]
fn test_list_record_all_foo_values() {
    let every_foo = lens!(ListRecord, bar)
        .compose_traversal(<Vec<Item> as Each>::each())
        .compose(lens!(Item, foo).to_traversal());

    let all: Vec<i64> = every_foo.get_all(&sample_list_record()).into_iter().collect();
    assert_eq!(all, vec![2, 3]);
}

#[test]
fn test_list_record_modify_every_foo() {
    let every_foo = lens!(ListRecord, bar)
        .compose_traversal(<Vec<Item> as Each>::each())
        .compose(lens!(Item, foo).to_traversal());

    let shifted = every_foo.modify_all(sample_list_record(), |n| n - 2);
    assert_eq!(
        shifted.bar,
        vec![Item { foo: 0 }, Item { foo: 1 }]
    );
}

#[test]
fn test_list_record_predicates() {
    let every_foo = lens!(ListRecord, bar)
        .compose_traversal(<Vec<Item> as Each>::each())
        .compose(lens!(Item, foo).to_traversal());

    let record = sample_list_record();
    assert!(every_foo.exists(&record, |n| *n == 3));
    assert!(every_foo.for_all(&record, |n| *n > 0));
    assert_eq!(every_foo.head_option(&record), Some(2));
    assert_eq!(every_foo.fold(&record, 0, |acc, n| acc + n), 5);
}

// =============================================================================
// Maybe scenario: partial access through an optional field
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct MaybeRecord {
    value: Option<i64>,
}

#[test]
fn test_maybe_record_present() {
    let value = lens!(MaybeRecord, value).compose_prism(some());

    let record = MaybeRecord { value: Some(2) };
    assert_eq!(value.get_option(&record), Some(2));
    assert!(value.is_present(&record));

    let doubled = value.modify(record, |n| n * 2);
    assert_eq!(doubled.value, Some(4));
}

#[test]
fn test_maybe_record_absent() {
    let value = lens!(MaybeRecord, value).compose_prism(some());

    let record = MaybeRecord { value: None };
    assert_eq!(value.get_option(&record), None);
    assert!(!value.is_present(&record));

    // modify through an absent focus is the identity
    let untouched = value.modify(record.clone(), |n| n * 2);
    assert_eq!(untouched, record);
}

#[test]
fn test_maybe_prism_review_constructs() {
    let some_prism = some::<i64>();
    assert_eq!(some_prism.review(7), Some(7));
}

#[derive(Clone, PartialEq, Debug)]
struct Inner {
    foo: i64,
}

#[derive(Clone, PartialEq, Debug)]
struct Nested {
    bar: Option<Inner>,
    qux: Option<Inner>,
}

#[test]
fn test_nested_maybe_record_chain() {
    let bar_foo = lens!(Nested, bar)
        .compose_prism(some())
        .compose_lens(lens!(Inner, foo));
    let qux_foo = lens!(Nested, qux)
        .compose_prism(some())
        .compose_lens(lens!(Inner, foo));

    let record = Nested {
        bar: Some(Inner { foo: 2 }),
        qux: None,
    };

    assert_eq!(bar_foo.get_option(&record), Some(2));
    assert_eq!(qux_foo.get_option(&record), None);

    let updated = bar_foo.set(record.clone(), 8);
    assert_eq!(updated.bar, Some(Inner { foo: 8 }));
    assert_eq!(updated.qux, None);

    // the absent branch swallows writes below the prism step
    let untouched = qux_foo.modify(record.clone(), |n| n + 1);
    assert_eq!(untouched, record);
}

// =============================================================================
// Dictionary scenario: entry slots insert and remove
// =============================================================================

fn sample_dict() -> HashMap<String, i64> {
    [("foo".to_string(), 3)].into_iter().collect()
}

#[test]
fn test_dict_entry_read() {
    let entry_foo = <HashMap<String, i64> as At>::at("foo".to_string());
    let entry_bar = <HashMap<String, i64> as At>::at("bar".to_string());

    assert_eq!(entry_foo.get(&sample_dict()), Some(3));
    assert_eq!(entry_bar.get(&sample_dict()), None);
}

#[test]
fn test_dict_entry_insert() {
    let entry_bar = <HashMap<String, i64> as At>::at("bar".to_string());

    let inserted = entry_bar.set(sample_dict(), Some(9));
    assert_eq!(inserted.get("bar"), Some(&9));
    assert_eq!(inserted.get("foo"), Some(&3));
    assert_eq!(inserted.len(), 2);
}

#[test]
fn test_dict_entry_remove() {
    let entry_foo = <HashMap<String, i64> as At>::at("foo".to_string());

    let removed = entry_foo.set(sample_dict(), None);
    assert!(removed.is_empty());
}

#[test]
fn test_dict_entry_replace() {
    let entry_foo = <HashMap<String, i64> as At>::at("foo".to_string());

    let replaced = entry_foo.modify(sample_dict(), |slot| slot.map(|n| n + 1));
    assert_eq!(replaced.get("foo"), Some(&4));
}

#[test]
fn test_dict_values_batch_update() {
    let every_value = <HashMap<String, i64> as Each>::each();
    let mut dict = sample_dict();
    dict.insert("bar".to_string(), 9);

    let doubled = every_value.modify_all(dict, |n| n * 2);
    assert_eq!(doubled.get("foo"), Some(&6));
    assert_eq!(doubled.get("bar"), Some(&18));
}
