use std::cmp::Ordering;
use std::fmt::Display;

use indexmap::IndexMap;
use indexmap::map::{self, Entry};
use serde::Serialize;

use crate::collections::{
    Collection, EmptyKey, KeyCollision, KeyError, KeyNotFound, NotJoinable, OrderedList,
};
use crate::compare::{DefaultOrd, natural_cmp};
use crate::promise::{ForAllPromise, MapForAllPromise, MappedErrors};
use crate::util::join::to_joinable;

/// An immutable map of non-empty string keys to values, which remembers insertion order.
///
/// Iteration, [`keys`](Map::keys) and [`values`](Map::values) all observe the order in which keys
/// were first inserted. Every method that looks like a mutation returns a new map and leaves the
/// receiver untouched.
///
/// Two maps are equal if they hold equal entries in the same order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `m`: The number of entries in the other map.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)`* |
/// | `has` | `O(1)`* |
/// | `put` | `O(n)` |
/// | `unset` | `O(n)` |
/// | `sort` | `O(n*log(n))` |
/// | `diff` | `O(n*m)` |
/// | `diff_keys` | `O(n*m)` |
/// | `intersect*` | `O(n*m)` |
///
/// \* Average case, backed by a hash table.
#[derive(Debug, Clone)]
pub struct Map<T> {
    pub(crate) data: IndexMap<String, T>,
}

/// Which dimensions of two entries have to match for them to intersect.
enum Matching<V, K> {
    Values(V),
    Keys(K),
    Both(V, K),
}

impl<V, K> Matching<V, K> {
    fn matches<T>(&mut self, key: &str, value: &T, other_key: &str, other_value: &T) -> bool
    where
        V: FnMut(&T, &T) -> Ordering,
        K: FnMut(&str, &str) -> Ordering,
    {
        match self {
            Matching::Values(value_cmp) => value_cmp(value, other_value) == Ordering::Equal,
            Matching::Keys(key_cmp) => key_cmp(key, other_key) == Ordering::Equal,
            Matching::Both(value_cmp, key_cmp) => {
                key_cmp(key, other_key) == Ordering::Equal
                    && value_cmp(value, other_value) == Ordering::Equal
            },
        }
    }
}

fn exact_keys(lhs: &str, rhs: &str) -> Ordering {
    lhs.cmp(rhs)
}

fn validate_key(key: String) -> Result<String, EmptyKey> {
    if key.is_empty() {
        tracing::debug!("rejected empty map key");
        return Err(EmptyKey);
    }
    Ok(key)
}

impl<T> Map<T> {
    /// Creates a new, empty Map.
    pub fn new() -> Map<T> {
        Map {
            data: IndexMap::new(),
        }
    }

    /// Creates a Map from key-value pairs, in order. Keys have to be non-empty and unique.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::{KeyError, Map};
    /// let map = Map::from_entries([("foo", 1), ("bar", 2)]).unwrap();
    /// assert_eq!(map.get("bar"), Ok(&2));
    ///
    /// assert!(matches!(
    ///     Map::from_entries([("foo", 1), ("foo", 2)]),
    ///     Err(KeyError::KeyCollision(_))
    /// ));
    /// ```
    pub fn from_entries<K, I>(entries: I) -> Result<Map<T>, KeyError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut data = IndexMap::new();
        for (key, value) in entries {
            match data.entry(validate_key(key.into())?) {
                Entry::Occupied(entry) => {
                    let key = entry.key().clone();
                    tracing::debug!(%key, "rejected duplicate map key");
                    return Err(KeyCollision { key }.into());
                },
                Entry::Vacant(entry) => {
                    entry.insert(value);
                },
            }
        }
        Ok(Map { data })
    }

    /// Returns an iterator over all entries as key-value pairs, in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &T)> + ExactSizeIterator {
        self.data.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the entries as the backing [`IndexMap`].
    pub const fn as_index_map(&self) -> &IndexMap<String, T> {
        &self.data
    }

    /// Consumes the map, returning the backing [`IndexMap`].
    pub fn into_index_map(self) -> IndexMap<String, T> {
        self.data
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: &str) -> Result<&T, KeyNotFound> {
        self.data.get(key).ok_or_else(|| KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Returns true if the map contains `key`. Keys are matched exactly, including case.
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Returns all keys as an [`OrderedList`], in order.
    pub fn keys(&self) -> OrderedList<String> {
        self.data.keys().cloned().collect()
    }

    /// Creates a new map with the same keys, where every value is replaced by the result of
    /// `mapper`. The mapper receives each value and its key.
    pub fn map<U, F>(&self, mapper: F) -> Map<U>
    where
        F: FnMut(&T, &str) -> U,
    {
        let mut mapper = mapper;
        Map {
            data: self.data.iter()
                .map(|(key, value)| (key.clone(), mapper(value, key)))
                .collect(),
        }
    }

    /// Creates a [`ForAllPromise`] which runs `task` for every value and its key, collecting
    /// failures into a [`MappedErrors`] rather than stopping at the first one.
    ///
    /// The promise runs when [`execute`](ForAllPromise::execute) is called or, at the latest,
    /// when it is dropped.
    pub fn for_all<'a, E, F>(&'a self, task: F) -> MapForAllPromise<'a, T, E>
    where
        F: FnMut(&'a T, &'a str) -> Result<(), E> + 'a,
        E: 'a,
    {
        ForAllPromise::new(
            self.data.iter().map(|(key, value)| (key.as_str(), value)),
            task,
            MappedErrors::from_recorded,
        )
    }

    /// Concatenates the string representation of every value, with `separator` in between.
    ///
    /// A value has a string representation if it serializes to a string, a character, a number,
    /// a boolean or a unit enum variant. Numbers and booleans use their [`Display`] form, so booleans
    /// join as `true`/`false` and non-finite floats as `NaN`, `inf` and `-inf`.
    pub fn join(&self, separator: &str) -> Result<String, NotJoinable>
    where
        T: Serialize,
    {
        let mut parts = Vec::with_capacity(self.data.len());
        for (key, value) in &self.data {
            let part = to_joinable(value).ok_or_else(|| NotJoinable {
                entry: format!("key \"{key}\""),
            })?;
            parts.push(part);
        }
        Ok(parts.join(separator))
    }
}

impl<T: Clone> Map<T> {
    /// Creates a new map with `key` set to `value`. An existing key keeps its position.
    ///
    /// # Panics
    /// Panics if `key` is empty. Use [`try_put`](Map::try_put) for keys that aren't known to be
    /// valid.
    pub fn put(&self, key: impl Into<String>, value: T) -> Map<T> {
        match self.try_put(key, value) {
            Ok(map) => map,
            Err(error) => panic!("{}", error),
        }
    }

    /// Creates a new map with `key` set to `value`, or returns an error if `key` is empty.
    pub fn try_put(&self, key: impl Into<String>, value: T) -> Result<Map<T>, EmptyKey> {
        let key = validate_key(key.into())?;
        let mut data = self.data.clone();
        data.insert(key, value);
        Ok(Map { data })
    }

    /// Creates a new map without `key`. Unknown keys are ignored.
    pub fn unset(&self, key: &str) -> Map<T> {
        let mut data = self.data.clone();
        data.shift_remove(key);
        Map { data }
    }

    /// An alias of [`unset`](Map::unset).
    pub fn remove_element_by_key(&self, key: &str) -> Map<T> {
        self.unset(key)
    }

    /// Creates a new map without any entry whose value equals `element`.
    pub fn remove_element(&self, element: &T) -> Map<T>
    where
        T: PartialEq,
    {
        self.filter(|value, _| value != element)
    }

    /// Creates a new map containing the entries for which `predicate` holds. The predicate
    /// receives each value and its key.
    pub fn filter<P>(&self, predicate: P) -> Map<T>
    where
        P: FnMut(&T, &str) -> bool,
    {
        let mut predicate = predicate;
        Map {
            data: self.data.iter()
                .filter(|(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Creates a new map with the entries reordered by natural ordering of each value's
    /// [`Display`] form. See [`natural_cmp`].
    pub fn sort(&self) -> Map<T>
    where
        T: Display,
    {
        let mut keyed: Vec<(String, &String, &T)> = self.data.iter()
            .map(|(key, value)| (value.to_string(), key, value))
            .collect();
        keyed.sort_by(|(lhs, ..), (rhs, ..)| natural_cmp(lhs, rhs));

        Map {
            data: keyed.into_iter()
                .map(|(_, key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Creates a new map with the entries reordered by value, using `comparator`.
    pub fn sort_by<C>(&self, comparator: C) -> Map<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut comparator = comparator;
        let mut data = self.data.clone();
        data.sort_by(|_, lhs, _, rhs| comparator(lhs, rhs));
        Map { data }
    }

    /// Creates a new map with the entries reordered by key, comparing keys byte-wise.
    pub fn sort_keys(&self) -> Map<T> {
        let mut data = self.data.clone();
        data.sort_keys();
        Map { data }
    }

    /// Creates a new map with the entries reordered by key, using `comparator`.
    pub fn sort_keys_by<C>(&self, comparator: C) -> Map<T>
    where
        C: FnMut(&str, &str) -> Ordering,
    {
        let mut comparator = comparator;
        let mut data = self.data.clone();
        data.sort_by(|lhs, _, rhs, _| comparator(lhs, rhs));
        Map { data }
    }

    /// Creates a new map with the entries of each map in `stack` laid over this map, in order.
    /// On a key collision the later value wins while the key keeps its first position.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::Map;
    /// let foo = Map::from_entries([("foo", "bar")]).unwrap();
    /// let baz = Map::from_entries([("baz", "bar")]).unwrap();
    /// let merged = foo.merge([&baz]);
    /// assert_eq!(merged, Map::from_entries([("foo", "bar"), ("baz", "bar")]).unwrap());
    /// ```
    pub fn merge<'b, I>(&self, stack: I) -> Map<T>
    where
        I: IntoIterator<Item = &'b Map<T>>,
        T: 'b,
    {
        let mut data = self.data.clone();
        for map in stack {
            for (key, value) in &map.data {
                data.insert(key.clone(), value.clone());
            }
        }
        Map { data }
    }

    /// Creates a new map of the entries whose key has no exact match in the other map, taken from
    /// both maps: first this map's, then the other's.
    pub fn diff_keys(&self, other: &Map<T>) -> Map<T> {
        self.diff_keys_by(other, exact_keys)
    }

    /// Like [`diff_keys`](Map::diff_keys), but two keys match when `comparator` returns
    /// [`Ordering::Equal`].
    pub fn diff_keys_by<C>(&self, other: &Map<T>, comparator: C) -> Map<T>
    where
        C: FnMut(&str, &str) -> Ordering,
    {
        let mut comparator = comparator;
        let mut data = IndexMap::new();

        for (key, value) in &self.data {
            if !other.data.keys().any(|other_key| comparator(key, other_key) == Ordering::Equal) {
                data.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &other.data {
            if !self.data.keys().any(|own_key| comparator(key, own_key) == Ordering::Equal) {
                data.insert(key.clone(), value.clone());
            }
        }

        Map { data }
    }

    /// Creates a new map of the entries whose value has no match in the other map, taken from
    /// both maps (this map's first), using [`DefaultOrd`].
    ///
    /// # Note
    /// When both maps keep an unmatched entry under the same key, only the other map's entry ends
    /// up in the result. Unlike the list variant, `a.diff(&b)` and `b.diff(&a)` can therefore hold
    /// different values.
    ///
    /// ```
    /// # use typed_collections::collections::Map;
    /// let a = Map::from_entries([("k", 1)]).unwrap();
    /// let b = Map::from_entries([("k", 2)]).unwrap();
    /// assert_eq!(a.diff(&b).get("k"), Ok(&2));
    /// assert_eq!(b.diff(&a).get("k"), Ok(&1));
    /// ```
    pub fn diff(&self, other: &Map<T>) -> Map<T>
    where
        T: DefaultOrd,
    {
        self.diff_by(other, T::default_cmp)
    }

    /// Like [`diff`](Map::diff), but two values match when `comparator` returns
    /// [`Ordering::Equal`].
    pub fn diff_by<C>(&self, other: &Map<T>, comparator: C) -> Map<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut comparator = comparator;
        let mut data = IndexMap::new();

        for (key, value) in &self.data {
            if !other.data.values().any(|other_value| comparator(value, other_value) == Ordering::Equal) {
                data.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in &other.data {
            if !self.data.values().any(|own_value| comparator(value, own_value) == Ordering::Equal) {
                data.insert(key.clone(), value.clone());
            }
        }

        Map { data }
    }

    fn intersection<V, K>(&self, other: &Map<T>, matching: Matching<V, K>) -> Map<T>
    where
        V: FnMut(&T, &T) -> Ordering,
        K: FnMut(&str, &str) -> Ordering,
    {
        let mut matching = matching;
        let mut data = IndexMap::new();

        for (key, value) in &self.data {
            let matched = other.data.iter().any(|(other_key, other_value)| {
                matching.matches(key, value, other_key, other_value)
            });
            if matched {
                data.insert(key.clone(), value.clone());
            }
        }

        Map { data }
    }

    /// Creates a new map of the entries whose value matches any value of `other`, using
    /// [`DefaultOrd`]. Keys are not compared.
    pub fn intersect(&self, other: &Map<T>) -> Map<T>
    where
        T: DefaultOrd,
    {
        self.intersect_by(other, T::default_cmp)
    }

    /// Like [`intersect`](Map::intersect), but two values match when `value_comparator` returns
    /// [`Ordering::Equal`].
    pub fn intersect_by<V>(&self, other: &Map<T>, value_comparator: V) -> Map<T>
    where
        V: FnMut(&T, &T) -> Ordering,
    {
        self.intersection(other, Matching::<V, fn(&str, &str) -> Ordering>::Values(value_comparator))
    }

    /// Creates a new map of the entries for which `other` has an entry with the same key and a
    /// matching value, using [`DefaultOrd`] for values.
    pub fn intersect_assoc(&self, other: &Map<T>) -> Map<T>
    where
        T: DefaultOrd,
    {
        self.intersect_assoc_by(other, T::default_cmp)
    }

    /// Like [`intersect_assoc`](Map::intersect_assoc), but two values match when
    /// `value_comparator` returns [`Ordering::Equal`]. Keys still have to match exactly.
    pub fn intersect_assoc_by<V>(&self, other: &Map<T>, value_comparator: V) -> Map<T>
    where
        V: FnMut(&T, &T) -> Ordering,
    {
        self.intersect_user_assoc(other, value_comparator, exact_keys)
    }

    /// Creates a new map of the entries whose key exists in `other`. Values are not compared.
    pub fn intersect_using_keys(&self, other: &Map<T>) -> Map<T> {
        self.intersect_using_keys_by(other, exact_keys)
    }

    /// Like [`intersect_using_keys`](Map::intersect_using_keys), but two keys match when
    /// `key_comparator` returns [`Ordering::Equal`].
    pub fn intersect_using_keys_by<K>(&self, other: &Map<T>, key_comparator: K) -> Map<T>
    where
        K: FnMut(&str, &str) -> Ordering,
    {
        self.intersection(other, Matching::<fn(&T, &T) -> Ordering, K>::Keys(key_comparator))
    }

    /// Creates a new map of the entries for which `other` has a single entry matching both the key
    /// (by `key_comparator`) and the value (by `value_comparator`).
    pub fn intersect_user_assoc<V, K>(
        &self,
        other: &Map<T>,
        value_comparator: V,
        key_comparator: K,
    ) -> Map<T>
    where
        V: FnMut(&T, &T) -> Ordering,
        K: FnMut(&str, &str) -> Ordering,
    {
        self.intersection(other, Matching::Both(value_comparator, key_comparator))
    }

    /// Returns all values as an [`OrderedList`], in order.
    pub fn values(&self) -> OrderedList<T> {
        self.to_ordered_list()
    }

    /// Returns all values as an [`OrderedList`], in order.
    pub fn to_ordered_list(&self) -> OrderedList<T> {
        self.data.values().cloned().collect()
    }

    /// Returns all values as an [`OrderedList`], sorted with `sorter`.
    pub fn to_ordered_list_by<C>(&self, sorter: C) -> OrderedList<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut data: Vec<T> = self.data.values().cloned().collect();
        data.sort_by(sorter);
        OrderedList::from(data)
    }

    /// Splits the map into the entries for which `predicate` holds and those for which it doesn't,
    /// in that order. Keys are preserved on both sides.
    pub fn partition<P>(&self, predicate: P) -> (Map<T>, Map<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = predicate;
        let (matching, rest): (IndexMap<String, T>, IndexMap<String, T>) = self.data.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .partition(|(_, value)| predicate(value));
        (Map { data: matching }, Map { data: rest })
    }

    /// Groups the entries by the key `grouper` returns for their value. Each group is a new map
    /// keeping the original keys of its members.
    pub fn group<K, G>(&self, grouper: G) -> Result<Map<Map<T>>, EmptyKey>
    where
        K: Into<String>,
        G: FnMut(&T) -> K,
    {
        let mut grouper = grouper;
        self.group_many(|value| [grouper(value)])
    }

    /// Like [`group`](Map::group), but `grouper` may return any number of group keys, placing the
    /// entry in each of those groups.
    pub fn group_many<K, I, G>(&self, grouper: G) -> Result<Map<Map<T>>, EmptyKey>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
        G: FnMut(&T) -> I,
    {
        let mut grouper = grouper;
        let mut groups: IndexMap<String, IndexMap<String, T>> = IndexMap::new();

        for (key, value) in &self.data {
            for group in grouper(value) {
                let group = validate_key(group.into())?;
                groups.entry(group)
                    .or_default()
                    .insert(key.clone(), value.clone());
            }
        }

        Ok(Map {
            data: groups.into_iter()
                .map(|(group, members)| (group, Map { data: members }))
                .collect(),
        })
    }

    /// Creates a new map with the first `length` entries. A negative `length` drops that many
    /// entries from the end instead.
    pub fn slice(&self, length: isize) -> Map<T> {
        let len = self.data.len() as isize;
        let end = if length < 0 {
            (len + length).max(0)
        } else {
            length.min(len)
        };

        Map {
            data: self.data.iter()
                .take(end as usize)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Creates a new map where every key is replaced by the key `generator` returns for the
    /// original key and value. Generated keys have to be non-empty and unique.
    pub fn key_exchange<K, G>(&self, generator: G) -> Result<Map<T>, KeyError>
    where
        K: Into<String>,
        G: FnMut(&str, &T) -> K,
    {
        let mut generator = generator;
        Map::from_entries(
            self.data.iter()
                .map(|(key, value)| (generator(key, value), value.clone())),
        )
    }
}

impl<T> Collection for Map<T> {
    type Item = T;

    type Values<'a> = map::Values<'a, String, T> where T: 'a;

    fn values_iter(&self) -> Self::Values<'_> {
        self.data.values()
    }

    fn count(&self) -> usize {
        self.data.len()
    }
}

impl<T: PartialEq> PartialEq for Map<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len() && self.data.iter().eq(other.data.iter())
    }
}

impl<T: Eq> Eq for Map<T> {}

impl<T> Default for Map<T> {
    fn default() -> Self {
        Map::new()
    }
}

impl<K: Into<String>, T, const N: usize> TryFrom<[(K, T); N]> for Map<T> {
    type Error = KeyError;

    fn try_from(entries: [(K, T); N]) -> Result<Self, Self::Error> {
        Map::from_entries(entries)
    }
}

impl<T> IntoIterator for Map<T> {
    type Item = (String, T);

    type IntoIter = map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Map<T> {
    type Item = (&'a String, &'a T);

    type IntoIter = map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
