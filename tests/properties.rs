use quickcheck_macros::quickcheck;
use typed_collections::collections::{Collection, Map, OrderedList};

fn unique_map(entries: Vec<(String, i32)>) -> Map<i32> {
    let mut map = Map::new();
    for (key, value) in entries {
        if let Ok(updated) = map.try_put(key, value) {
            map = updated;
        }
    }
    map
}

fn sorted(values: Vec<i32>) -> Vec<i32> {
    let mut values = values;
    values.sort_unstable();
    values
}

#[quickcheck]
fn filter_is_idempotent(values: Vec<i32>) -> bool {
    let list = OrderedList::from(values);
    let once = list.filter(|value, _| value % 3 != 0);
    once.filter(|value, _| value % 3 != 0) == once
}

#[quickcheck]
fn filter_keeps_indices_dense(values: Vec<i32>) -> bool {
    let filtered = OrderedList::from(values).filter(|value, _| *value > 0);
    (0..filtered.count()).all(|index| filtered.has(index)) && !filtered.has(filtered.count())
}

#[quickcheck]
fn list_merge_without_arguments_is_identity(values: Vec<i32>) -> bool {
    let list = OrderedList::from(values);
    list.merge([]) == list
}

#[quickcheck]
fn map_merge_without_arguments_is_identity(entries: Vec<(String, i32)>) -> bool {
    let map = unique_map(entries);
    map.merge([]) == map
}

#[quickcheck]
fn list_diff_is_symmetric(lhs: Vec<i32>, rhs: Vec<i32>) -> bool {
    let lhs = OrderedList::from(lhs);
    let rhs = OrderedList::from(rhs);
    sorted(lhs.diff(&rhs).into_vec()) == sorted(rhs.diff(&lhs).into_vec())
}

#[quickcheck]
fn partition_is_complete(values: Vec<i32>) -> bool {
    let list = OrderedList::from(values);
    let (even, odd) = list.partition(|value| value % 2 == 0);
    even.all_satisfy(|value| value % 2 == 0)
        && odd.all_satisfy(|value| value % 2 != 0)
        && sorted(even.merge([&odd]).into_vec()) == sorted(list.into_vec())
}

#[quickcheck]
fn transformations_never_change_the_receiver(values: Vec<i32>, extra: i32) -> bool {
    let list = OrderedList::from(values.clone());
    let _ = list.add(extra);
    let _ = list.reverse();
    let _ = list.sort_by(i32::cmp);
    let _ = list.unify();
    list.into_vec() == values
}

#[quickcheck]
fn unify_leaves_no_duplicates(values: Vec<u8>) -> bool {
    let unified = OrderedList::from(values).unify();
    let mut seen = std::collections::HashSet::new();
    unified.iter().all(|value| seen.insert(*value))
}

#[quickcheck]
fn map_keys_are_never_empty(entries: Vec<(String, i32)>) -> bool {
    unique_map(entries).keys().all_satisfy(|key| !key.is_empty())
}
