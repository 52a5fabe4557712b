use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use indexmap::IndexMap;

use crate::collections::{Collection, Map, OrderedList};

const MESSAGE: &str = "there were runtime errors while executing multiple tasks";

/// The failures of a for-all execution over an [`OrderedList`].
///
/// The errors are stored by position: the entry at index `i` is the failure of the task for the
/// value at index `i`, or None if that task succeeded. Positions after an early stop have no entry
/// at all.
#[derive(Debug)]
pub struct OrderedErrors<E> {
    errors: OrderedList<Option<E>>,
}

impl<E> OrderedErrors<E> {
    /// Creates a new aggregate from per-position outcomes.
    ///
    /// # Panics
    /// Panics if `errors` is empty, an aggregate always describes at least one position.
    pub fn new(errors: OrderedList<Option<E>>) -> OrderedErrors<E> {
        assert!(!errors.is_empty(), "Provided errors must not be empty!");
        OrderedErrors { errors }
    }

    pub(crate) fn from_recorded(recorded: Vec<(usize, Option<E>)>) -> OrderedErrors<E> {
        debug_assert!(
            recorded.iter().enumerate().all(|(expected, (index, _))| expected == *index),
            "ordered outcomes must be recorded for a dense index sequence"
        );
        OrderedErrors::new(recorded.into_iter().map(|(_, error)| error).collect())
    }

    /// Returns the outcome of every position that was executed.
    pub const fn errors(&self) -> &OrderedList<Option<E>> {
        &self.errors
    }

    /// Consumes the aggregate, returning the outcome of every position that was executed.
    pub fn into_errors(self) -> OrderedList<Option<E>> {
        self.errors
    }

    /// Returns an iterator over the positions that failed, along with their error.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &E)> {
        self.errors.iter()
            .enumerate()
            .filter_map(|(index, error)| error.as_ref().map(|error| (index, error)))
    }
}

impl<E> Display for OrderedErrors<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} failed)", MESSAGE, self.failures().count())
    }
}

impl<E: Debug> Error for OrderedErrors<E> {}

/// The failures of a for-all execution over a [`Map`], keyed like the map itself. Only keys whose
/// task failed are present.
#[derive(Debug)]
pub struct MappedErrors<E> {
    errors: Map<E>,
}

impl<E> MappedErrors<E> {
    /// Creates a new aggregate from per-key failures.
    ///
    /// # Panics
    /// Panics if `errors` is empty, an aggregate always describes at least one failure.
    pub fn new(errors: Map<E>) -> MappedErrors<E> {
        assert!(!errors.is_empty(), "Provided errors must not be empty!");
        MappedErrors { errors }
    }

    pub(crate) fn from_recorded(recorded: Vec<(&str, Option<E>)>) -> MappedErrors<E> {
        let failed: IndexMap<String, E> = recorded.into_iter()
            .filter_map(|(key, error)| Some((key.to_owned(), error?)))
            .collect();
        MappedErrors::new(Map { data: failed })
    }

    /// Returns the failure of every key whose task failed.
    pub const fn errors(&self) -> &Map<E> {
        &self.errors
    }

    /// Consumes the aggregate, returning the failure of every key whose task failed.
    pub fn into_errors(self) -> Map<E> {
        self.errors
    }

    /// Returns an iterator over the keys that failed, along with their error.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &E)> {
        self.errors.iter()
    }
}

impl<E> Display for MappedErrors<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} failed)", MESSAGE, self.errors.count())
    }
}

impl<E: Debug> Error for MappedErrors<E> {}
