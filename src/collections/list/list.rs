use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::slice;
use std::vec;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::collections::{
    Collection, EmptyKey, FillError, IndexOutOfBounds, KeyError, Map, NoMatch, NonContiguousFill,
    NonSequentialIndex, NotJoinable, ZeroFillAmount,
};
use crate::compare::{DefaultOrd, matches_any, natural_cmp};
use crate::promise::{ForAllPromise, OrderedErrors, OrderedListForAllPromise};
use crate::util::join::to_joinable;

/// An immutable, index-addressed sequence of values.
///
/// Values are addressed by a dense, zero-based index: a list with `n` values has exactly the
/// indices `0..n`. Every method that looks like a mutation returns a new list and leaves the
/// receiver untouched, which is why most of them require `T: Clone`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the list.
/// - `m`: The number of values in the other list.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `count` | `O(1)` |
/// | `add` | `O(n)` |
/// | `filter` | `O(n)` |
/// | `sort` | `O(n*log(n))` |
/// | `diff` | `O(n*m)` |
/// | `intersect` | `O(n*m)` |
/// | `unify` | `O(n)`* |
///
/// \* Assuming a well distributed hash of the unification identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderedList<T> {
    pub(crate) data: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Creates a new, empty OrderedList.
    pub const fn new() -> OrderedList<T> {
        OrderedList { data: Vec::new() }
    }

    /// Creates an OrderedList from explicitly indexed values. The indices have to be the dense
    /// sequence `0, 1, 2, ...` in order, anything else is rejected.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::OrderedList;
    /// let list = OrderedList::from_indexed([(0, "a"), (1, "b")]).unwrap();
    /// assert_eq!(list.as_slice(), ["a", "b"]);
    /// assert!(OrderedList::from_indexed([(0, "a"), (2, "b")]).is_err());
    /// ```
    pub fn from_indexed<I>(entries: I) -> Result<OrderedList<T>, NonSequentialIndex>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut data = Vec::new();
        for (index, value) in entries {
            if index != data.len() {
                return Err(NonSequentialIndex {
                    expected: data.len(),
                    found: index,
                });
            }
            data.push(value);
        }
        Ok(OrderedList { data })
    }

    /// Returns an iterator over references to all values, in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns all values as a slice. The position in the slice is the index in the list.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the list, returning its values as a [`Vec`].
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the value stored at `index`.
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.data.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Returns true if a value is stored at `index`.
    pub fn has(&self, index: usize) -> bool {
        index < self.data.len()
    }

    /// Returns the first value that satisfies `predicate`.
    pub fn find<P>(&self, predicate: P) -> Result<&T, NoMatch>
    where
        P: FnMut(&&T) -> bool,
    {
        self.data.iter().find(predicate).ok_or(NoMatch)
    }

    /// Returns the index of the first value that satisfies `predicate`, or None if there is no
    /// such value.
    pub fn find_first_matching_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().position(predicate)
    }

    /// Creates a new list with `mapper` applied to every value. The mapper receives each value and
    /// its index.
    pub fn map<U, F>(&self, mapper: F) -> OrderedList<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let mut mapper = mapper;
        OrderedList {
            data: self.data.iter()
                .enumerate()
                .map(|(index, value)| mapper(value, index))
                .collect(),
        }
    }

    /// Creates a [`ForAllPromise`] which runs `task` for every value and its index, collecting
    /// failures into an [`OrderedErrors`] rather than stopping at the first one.
    ///
    /// The promise runs when [`execute`](ForAllPromise::execute) is called or, at the latest,
    /// when it is dropped.
    pub fn for_all<'a, E, F>(&'a self, task: F) -> OrderedListForAllPromise<'a, T, E>
    where
        F: FnMut(&'a T, usize) -> Result<(), E> + 'a,
        E: 'a,
    {
        ForAllPromise::new(
            self.data.iter().enumerate(),
            task,
            OrderedErrors::from_recorded,
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
        for (index, value) in self.data.iter().enumerate() {
            let part = to_joinable(value).ok_or_else(|| NotJoinable {
                entry: format!("position {index}"),
            })?;
            parts.push(part);
        }
        Ok(parts.join(separator))
    }
}

impl<T: Clone> OrderedList<T> {
    /// Creates a new list with `value` appended to the end.
    pub fn add(&self, value: T) -> OrderedList<T> {
        let mut data = self.data.clone();
        data.push(value);
        OrderedList { data }
    }

    /// Creates a new list with `value` inserted at index 0, shifting all other values.
    pub fn prepend(&self, value: T) -> OrderedList<T> {
        let mut data = Vec::with_capacity(self.data.len() + 1);
        data.push(value);
        data.extend_from_slice(&self.data);
        OrderedList { data }
    }

    /// Creates a new list without the value at `index`. All following values move up by one.
    pub fn remove_at(&self, index: usize) -> Result<OrderedList<T>, IndexOutOfBounds> {
        if !self.has(index) {
            return Err(IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }

        let mut data = self.data.clone();
        data.remove(index);
        Ok(OrderedList { data })
    }

    /// Creates a new list containing the values for which `predicate` holds, in their original
    /// order. The predicate receives each value and its index in this list.
    pub fn filter<P>(&self, predicate: P) -> OrderedList<T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let mut predicate = predicate;
        OrderedList {
            data: self.data.iter()
                .enumerate()
                .filter(|(index, value)| predicate(value, *index))
                .map(|(_, value)| value.clone())
                .collect(),
        }
    }

    /// Creates a new list without any value equal to `element`.
    pub fn remove_element(&self, element: &T) -> OrderedList<T>
    where
        T: PartialEq,
    {
        self.filter(|value, _| value != element)
    }

    /// Creates a new list sorted by natural ordering of each value's [`Display`] form. See
    /// [`natural_cmp`].
    pub fn sort(&self) -> OrderedList<T>
    where
        T: Display,
    {
        let mut keyed: Vec<(String, &T)> = self.data.iter()
            .map(|value| (value.to_string(), value))
            .collect();
        keyed.sort_by(|(lhs, _), (rhs, _)| natural_cmp(lhs, rhs));

        OrderedList {
            data: keyed.into_iter().map(|(_, value)| value.clone()).collect(),
        }
    }

    /// Creates a new list sorted with the provided `comparator`.
    pub fn sort_by<C>(&self, comparator: C) -> OrderedList<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut data = self.data.clone();
        data.sort_by(comparator);
        OrderedList { data }
    }

    /// Creates a new list containing the values of this list followed by the values of each list
    /// in `stack`, in order.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::OrderedList;
    /// let list = OrderedList::from([1, 2]);
    /// let merged = list.merge([&OrderedList::from([3]), &OrderedList::from([4, 5])]);
    /// assert_eq!(merged.as_slice(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn merge<'b, I>(&self, stack: I) -> OrderedList<T>
    where
        I: IntoIterator<Item = &'b OrderedList<T>>,
        T: 'b,
    {
        let mut data = self.data.clone();
        for list in stack {
            data.extend_from_slice(&list.data);
        }
        OrderedList { data }
    }

    /// Creates a new list containing the values of this list which match a value in `other`,
    /// using [`DefaultOrd`]. Duplicates are kept and the order of this list is preserved.
    pub fn intersect(&self, other: &OrderedList<T>) -> OrderedList<T>
    where
        T: DefaultOrd,
    {
        self.intersect_by(other, T::default_cmp)
    }

    /// Like [`intersect`](OrderedList::intersect), but two values match when `comparator` returns
    /// [`Ordering::Equal`].
    pub fn intersect_by<C>(&self, other: &OrderedList<T>, comparator: C) -> OrderedList<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut comparator = comparator;
        OrderedList {
            data: self.data.iter()
                .filter(|value| matches_any(*value, &other.data, &mut comparator))
                .cloned()
                .collect(),
        }
    }

    /// Creates a new list containing the values of this list without a match in `other`,
    /// followed by the values of `other` without a match in this list, using [`DefaultOrd`].
    pub fn diff(&self, other: &OrderedList<T>) -> OrderedList<T>
    where
        T: DefaultOrd,
    {
        self.diff_by(other, T::default_cmp)
    }

    /// Like [`diff`](OrderedList::diff), but two values match when `comparator` returns
    /// [`Ordering::Equal`].
    pub fn diff_by<C>(&self, other: &OrderedList<T>, comparator: C) -> OrderedList<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut comparator = comparator;
        let mut data = Vec::new();

        for value in &self.data {
            if !matches_any(value, &other.data, &mut comparator) {
                data.push(value.clone());
            }
        }
        for value in &other.data {
            if !matches_any(value, &self.data, &mut comparator) {
                data.push(value.clone());
            }
        }

        OrderedList { data }
    }

    /// Creates a [`Map`] of all values, keyed by `key_generator`. Every generated key has to be a
    /// non-empty string, and unique.
    pub fn to_map<K, F>(&self, key_generator: F) -> Result<Map<T>, KeyError>
    where
        K: Into<String>,
        F: FnMut(&T, usize) -> K,
    {
        let mut key_generator = key_generator;
        Map::from_entries(
            self.data.iter()
                .enumerate()
                .map(|(index, value)| (key_generator(value, index), value.clone())),
        )
    }

    /// Creates a new list without duplicates, where two values are duplicates if they are equal.
    /// The first occurrence of each value is kept.
    pub fn unify(&self) -> OrderedList<T>
    where
        T: Hash + Eq,
    {
        self.unify_by(T::clone)
    }

    /// Creates a new list without duplicates, where two values are duplicates if `identifier`
    /// returns the same identity for them. The first occurrence is kept and the result follows the
    /// order in which each identity was first seen.
    pub fn unify_by<K, I>(&self, identifier: I) -> OrderedList<T>
    where
        K: Hash + Eq,
        I: FnMut(&T) -> K,
    {
        self.unify_with(identifier, |kept, _| kept.clone())
    }

    /// Like [`unify_by`](OrderedList::unify_by), but every duplicate is merged into the value kept
    /// so far using `merger`, which receives the kept value and the duplicate. The merger is only
    /// called for duplicates, never for the first occurrence.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::OrderedList;
    /// let words = OrderedList::from(["apple", "avocado", "banana"]);
    /// let first_letters = words
    ///     .map(|word, _| word.to_string())
    ///     .unify_with(|word| word.chars().next(), |kept, duplicate| format!("{kept}+{duplicate}"));
    /// assert_eq!(first_letters.as_slice(), ["apple+avocado", "banana"]);
    /// ```
    pub fn unify_with<K, I, M>(&self, identifier: I, merger: M) -> OrderedList<T>
    where
        K: Hash + Eq,
        I: FnMut(&T) -> K,
        M: FnMut(&T, &T) -> T,
    {
        let mut identifier = identifier;
        let mut merger = merger;
        let mut unified: IndexMap<K, T> = IndexMap::new();

        for value in &self.data {
            match unified.entry(identifier(value)) {
                Entry::Occupied(mut entry) => {
                    let merged = merger(entry.get(), value);
                    entry.insert(merged);
                },
                Entry::Vacant(entry) => {
                    entry.insert(value.clone());
                },
            }
        }

        OrderedList {
            data: unified.into_values().collect(),
        }
    }

    /// Creates a new list where `amount` positions starting at `start` hold a clone of `value`.
    /// Existing values in that range are replaced, the list grows if the range reaches past the
    /// end.
    ///
    /// `start` may be at most the current length, so that the list stays contiguous.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::OrderedList;
    /// let list = OrderedList::from([1, 2, 3]);
    /// assert_eq!(list.fill(3, 2, 0).unwrap().as_slice(), [1, 2, 3, 0, 0]);
    /// assert!(list.fill(4, 1, 0).is_err());
    /// ```
    pub fn fill(&self, start: usize, amount: usize, value: T) -> Result<OrderedList<T>, FillError> {
        self.fill_with(start, amount, |_| value.clone())
    }

    /// Like [`fill`](OrderedList::fill), but each value is produced by `generator`, which
    /// receives the index being filled.
    pub fn fill_with<G>(
        &self,
        start: usize,
        amount: usize,
        generator: G,
    ) -> Result<OrderedList<T>, FillError>
    where
        G: FnMut(usize) -> T,
    {
        if amount < 1 {
            return Err(ZeroFillAmount.into());
        }

        let len = self.data.len();
        if start > len {
            return Err(NonContiguousFill { start, len }.into());
        }

        let end = start.saturating_add(amount);
        let mut data: Vec<T> = self.data[..start].to_vec();
        data.extend((start..end).map(generator));
        if end < len {
            data.extend_from_slice(&self.data[end..]);
        }

        Ok(OrderedList { data })
    }

    /// Creates a new list from a part of this list.
    ///
    /// A negative `offset` counts from the end of the list. Without a `length` the slice reaches
    /// to the end, a negative `length` stops that many values before the end. Ranges outside of
    /// the list are clamped, producing an empty list at worst.
    ///
    /// # Examples
    /// ```
    /// # use typed_collections::collections::OrderedList;
    /// let list = OrderedList::from([0, 1, 2, 3]);
    /// assert_eq!(list.slice(1, Some(2)).as_slice(), [1, 2]);
    /// assert_eq!(list.slice(-2, None).as_slice(), [2, 3]);
    /// assert_eq!(list.slice(0, Some(-1)).as_slice(), [0, 1, 2]);
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>) -> OrderedList<T> {
        let len = self.data.len() as isize;
        let start = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(length) if length < 0 => (len + length).max(start),
            Some(length) => start.saturating_add(length).min(len),
        };

        OrderedList {
            data: self.data[start as usize..end as usize].to_vec(),
        }
    }

    /// Creates a new list with at most the first `length` values.
    pub fn limit(&self, length: usize) -> OrderedList<T> {
        OrderedList {
            data: self.data.iter().take(length).cloned().collect(),
        }
    }

    /// Splits the list into the values for which `predicate` holds and those for which it
    /// doesn't, in that order. Both lists keep the relative order of their values.
    pub fn partition<P>(&self, predicate: P) -> (OrderedList<T>, OrderedList<T>)
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = predicate;
        let (matching, rest): (Vec<T>, Vec<T>) = self.data.iter()
            .cloned()
            .partition(|value| predicate(value));
        (OrderedList { data: matching }, OrderedList { data: rest })
    }

    /// Groups the values by the key `grouper` returns for them. Each group is a new list keeping
    /// the relative order of its members, the groups are ordered by first appearance.
    pub fn group<K, G>(&self, grouper: G) -> Result<Map<OrderedList<T>>, EmptyKey>
    where
        K: Into<String>,
        G: FnMut(&T) -> K,
    {
        let mut grouper = grouper;
        self.group_many(|value| [grouper(value)])
    }

    /// Like [`group`](OrderedList::group), but `grouper` may return any number of keys, placing
    /// the value in each of those groups.
    pub fn group_many<K, I, G>(&self, grouper: G) -> Result<Map<OrderedList<T>>, EmptyKey>
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
        G: FnMut(&T) -> I,
    {
        let mut grouper = grouper;
        let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();

        for value in &self.data {
            for key in grouper(value) {
                let key = key.into();
                if key.is_empty() {
                    tracing::debug!("rejected empty group key");
                    return Err(EmptyKey);
                }
                groups.entry(key).or_default().push(value.clone());
            }
        }

        Ok(Map {
            data: groups.into_iter()
                .map(|(key, members)| (key, OrderedList { data: members }))
                .collect(),
        })
    }

    /// Creates a new list with the values in reverse order.
    pub fn reverse(&self) -> OrderedList<T> {
        OrderedList {
            data: self.data.iter().rev().cloned().collect(),
        }
    }
}

impl<T> Collection for OrderedList<T> {
    type Item = T;

    type Values<'a> = slice::Iter<'a, T> where T: 'a;

    fn values_iter(&self) -> Self::Values<'_> {
        self.data.iter()
    }

    fn count(&self) -> usize {
        self.data.len()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        OrderedList::new()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(data: Vec<T>) -> Self {
        OrderedList { data }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedList<T> {
    fn from(values: [T; N]) -> Self {
        OrderedList {
            data: Vec::from(values),
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OrderedList {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
