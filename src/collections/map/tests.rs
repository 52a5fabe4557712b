#![cfg(test)]

use std::cmp::Ordering;

use super::*;
use crate::collections::{Collection, EmptyKey, KeyError, KeyNotFound, OrderedList};
use crate::util::panic::assert_panics;

fn map<const N: usize>(entries: [(&str, i32); N]) -> Map<i32> {
    Map::from_entries(entries).expect("test maps are built from valid keys")
}

#[test]
fn test_from_entries() {
    let built = map([("foo", 1), ("bar", 2)]);
    assert_eq!(built.keys().as_slice(), ["foo", "bar"], "Insertion order should be kept.");

    assert_eq!(Map::from_entries([("", 1)]), Err(KeyError::EmptyKey(EmptyKey)));
    assert!(
        Map::from_entries([("foo", 1), ("foo", 2)]).is_err_and(|error| error.is_key_collision()),
        "Duplicate keys should be rejected."
    );

    let converted: Result<Map<i32>, _> = [("a", 1)].try_into();
    assert_eq!(converted, Ok(map([("a", 1)])));
}

#[test]
fn test_put_and_get() {
    let original = map([("foo", 1)]);
    let updated = original.put("bar", 2).put("foo", 3);

    assert_eq!(original.get("foo"), Ok(&1), "The receiver should never change.");
    assert_eq!(original.get("bar"), Err(KeyNotFound { key: String::from("bar") }));
    assert_eq!(updated.get("foo"), Ok(&3));
    assert_eq!(
        updated.keys().as_slice(),
        ["foo", "bar"],
        "Overwriting a key should keep its position."
    );

    assert_eq!(original.try_put("", 1), Err(EmptyKey));
}

#[test]
fn test_put_empty_key_panics() {
    let original = map([("foo", 1)]);
    assert_panics!(original.put("", 2));
}

#[test]
fn test_has_is_case_sensitive() {
    let map = map([("Foo", 1)]);
    assert!(map.has("Foo"));
    assert!(!map.has("foo"), "Keys should be matched exactly.");
}

#[test]
fn test_unset() {
    let original = map([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(original.unset("b"), map([("a", 1), ("c", 3)]));
    assert_eq!(original.unset("missing"), original, "Unknown keys should be ignored.");
    assert_eq!(original.remove_element_by_key("a"), map([("b", 2), ("c", 3)]));
}

#[test]
fn test_remove_element_and_filter() {
    let original = map([("a", 1), ("b", 2), ("c", 1)]);
    assert_eq!(original.remove_element(&1), map([("b", 2)]));

    let filtered = original.filter(|value, key| *value == 1 && key != "a");
    assert_eq!(filtered, map([("c", 1)]), "The predicate should receive values and keys.");
}

#[test]
fn test_map_keeps_keys() {
    let original = map([("a", 1), ("b", 2)]);
    let mapped = original.map(|value, key| format!("{key}{value}"));
    assert_eq!(mapped.get("b").map(String::as_str), Ok("b2"));
    assert_eq!(mapped.keys(), original.keys());
}

#[test]
fn test_merge() {
    let foo = Map::from_entries([("foo", "bar")]).expect("valid keys");
    let baz = Map::from_entries([("baz", "bar")]).expect("valid keys");
    assert_eq!(foo.merge([&baz]), Map::from_entries([("foo", "bar"), ("baz", "bar")]).expect("valid keys"));

    let original = map([("a", 1), ("b", 2)]);
    let merged = original.merge([&map([("a", 10)]), &map([("c", 3)])]);
    assert_eq!(
        merged,
        map([("a", 10), ("b", 2), ("c", 3)]),
        "Later values should win on a collision, without moving the key."
    );
    assert_eq!(original.merge([]), original);
}

#[test]
fn test_sort() {
    let original = map([("x", 10), ("y", 9), ("z", 100)]);
    assert_eq!(original.sort().keys().as_slice(), ["y", "x", "z"]);
    assert_eq!(original.sort_by(|a, b| b.cmp(a)).keys().as_slice(), ["z", "x", "y"]);

    let keyed = map([("b", 1), ("c", 2), ("a", 3)]);
    assert_eq!(keyed.sort_keys().keys().as_slice(), ["a", "b", "c"]);
    assert_eq!(
        keyed.sort_keys_by(|a, b| b.cmp(a)).keys().as_slice(),
        ["c", "b", "a"]
    );
    assert_eq!(keyed.sort_keys().get("a"), Ok(&3), "Sorting should keep entries together.");
}

#[test]
fn test_diff_keys() {
    let lhs = map([("a", 1), ("b", 2)]);
    let rhs = map([("b", 20), ("c", 30)]);
    assert_eq!(lhs.diff_keys(&rhs), map([("a", 1), ("c", 30)]));

    let case_insensitive = map([("A", 1)]).diff_keys_by(&map([("a", 2)]), |a, b| {
        a.to_lowercase().cmp(&b.to_lowercase())
    });
    assert!(case_insensitive.is_empty());
}

#[test]
fn test_diff() {
    let lhs = map([("a", 1), ("b", 2)]);
    let rhs = map([("c", 2), ("d", 3)]);
    assert_eq!(lhs.diff(&rhs), map([("a", 1), ("d", 3)]));

    let colliding = map([("a", 1)]).diff(&map([("a", 5)]));
    assert_eq!(colliding, map([("a", 5)]), "The other map's entry wins on a key collision.");
    assert_eq!(
        map([("a", 5)]).diff(&map([("a", 1)])),
        map([("a", 1)]),
        "Swapping the receiver should swap the surviving value."
    );

    let loose = map([("a", 1)]).diff_by(&map([("b", 11)]), |a, b| (a % 10).cmp(&(b % 10)));
    assert!(loose.is_empty());
}

#[test]
fn test_intersect_variants() {
    let lhs = map([("a", 1), ("b", 2), ("c", 3)]);
    let rhs = map([("a", 2), ("b", 2), ("d", 3)]);

    assert_eq!(
        lhs.intersect(&rhs),
        map([("b", 2), ("c", 3)]),
        "A value match anywhere in the other map should be enough."
    );
    assert_eq!(
        lhs.intersect_assoc(&rhs),
        map([("b", 2)]),
        "Keys and values should both have to match."
    );
    assert_eq!(lhs.intersect_using_keys(&rhs), map([("a", 1), ("b", 2)]));

    let parity = lhs.intersect_by(&map([("z", 4)]), |a, b| (a % 2).cmp(&(b % 2)));
    assert_eq!(parity, map([("b", 2)]));

    let upper = map([("A", 2), ("B", 2), ("C", 1)]);
    let case_insensitive = |a: &str, b: &str| a.to_lowercase().cmp(&b.to_lowercase());
    assert_eq!(lhs.intersect_using_keys_by(&upper, case_insensitive), lhs);
    assert_eq!(
        lhs.intersect_user_assoc(&upper, i32::cmp, case_insensitive),
        map([("b", 2)]),
        "The key and the value have to match on the same entry."
    );
    assert!(lhs.intersect_assoc_by(&upper, |_, _| Ordering::Equal).is_empty());
}

#[test]
fn test_keys_and_values() {
    let original = map([("a", 3), ("b", 1), ("c", 2)]);
    assert_eq!(original.keys().as_slice(), ["a", "b", "c"]);
    assert_eq!(original.values().as_slice(), [3, 1, 2]);
    assert_eq!(original.to_ordered_list(), original.values());
    assert_eq!(original.to_ordered_list_by(i32::cmp).as_slice(), [1, 2, 3]);
}

#[test]
fn test_shared_behaviour() {
    let original = map([("a", 3), ("b", 1), ("c", 2)]);
    assert_eq!(original.count(), 3);
    assert_eq!(original.first(), Ok(&3));
    assert_eq!(original.last(), Ok(&2));
    assert!(original.contains(&1));
    assert!(original.all_satisfy(|value| *value > 0));
    assert_eq!(original.reduce(|carry, value| carry + value, 0), 6);
    assert!(Map::<i32>::new().first().is_err());
}

#[test]
fn test_partition_and_group() {
    let original = map([("a", 1), ("b", 2), ("c", 3)]);
    let (odd, even) = original.partition(|value| value % 2 == 1);
    assert_eq!(odd, map([("a", 1), ("c", 3)]));
    assert_eq!(even, map([("b", 2)]));

    let groups = original
        .group(|value| if value % 2 == 0 { "even" } else { "odd" })
        .expect("group keys are non-empty");
    assert_eq!(groups.keys().as_slice(), ["odd", "even"]);
    assert_eq!(groups.get("odd"), Ok(&map([("a", 1), ("c", 3)])), "Members keep their keys.");

    let many = original
        .group_many(|value| (1..=*value).map(|level| format!("level{level}")))
        .expect("group keys are non-empty");
    assert_eq!(many.get("level1").map(|group| group.count()), Ok(3));
    assert_eq!(many.get("level3").map(|group| group.count()), Ok(1));

    assert_eq!(original.group(|_| ""), Err(EmptyKey));
}

#[test]
fn test_slice() {
    let original = map([("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(original.slice(2), map([("a", 1), ("b", 2)]));
    assert_eq!(original.slice(-1), map([("a", 1), ("b", 2)]));
    assert_eq!(original.slice(10), original);
    assert!(original.slice(-10).is_empty());
    assert!(original.slice(0).is_empty());
}

#[test]
fn test_key_exchange() {
    let original = map([("a", 1), ("b", 2)]);
    let exchanged = original
        .key_exchange(|key, value| format!("{key}{value}"))
        .expect("generated keys are unique");
    assert_eq!(exchanged, map([("a1", 1), ("b2", 2)]));

    let collision = original.key_exchange(|_, _| "same");
    assert!(
        matches!(collision, Err(KeyError::KeyCollision(ref error)) if error.key == "same"),
        "Generating the same key twice should fail."
    );
}

#[test]
fn test_join() {
    let original = map([("a", 1), ("b", 2)]);
    assert_eq!(original.join("-"), Ok(String::from("1-2")));

    let nested = Map::from_entries([("list", OrderedList::from([1]))]).expect("valid keys");
    let error = nested.join(",").expect_err("lists are not joinable");
    assert_eq!(error.entry, "key \"list\"");
}

#[test]
fn test_equality_is_order_sensitive() {
    assert_ne!(map([("a", 1), ("b", 2)]), map([("b", 2), ("a", 1)]));
}

#[test]
fn test_serialization() {
    let empty: Map<i32> = Map::new();
    assert_eq!(
        serde_json::to_string(&empty).ok().as_deref(),
        Some("null"),
        "An empty map has no key-value representation."
    );
    assert_eq!(
        serde_json::to_string(&map([("a", 1), ("b", 2)])).ok().as_deref(),
        Some(r#"{"a":1,"b":2}"#)
    );

    let parsed: Result<Map<i32>, _> = serde_json::from_str("null");
    assert_eq!(parsed.ok(), Some(Map::new()));

    let parsed: Result<Map<i32>, _> = serde_json::from_str(r#"{"z":1,"a":2}"#);
    assert_eq!(parsed.ok(), Some(map([("z", 1), ("a", 2)])), "Order should survive a round trip.");

    let invalid: Result<Map<i32>, _> = serde_json::from_str(r#"{"":1}"#);
    assert!(invalid.is_err(), "Empty keys should be rejected when deserializing.");
}
