use super::EmptyCollection;

/// Behaviour shared by [`OrderedList`](super::OrderedList) and [`Map`](super::Map).
///
/// Implementors only need to provide ordered iteration over their values, everything else is
/// derived from it. All methods are read-only and observe values in the container's current
/// order.
pub trait Collection {
    type Item;

    type Values<'a>: DoubleEndedIterator<Item = &'a Self::Item> where Self: 'a;

    /// Returns an iterator over all values of the collection, in order.
    fn values_iter(&self) -> Self::Values<'_>;

    /// Returns the number of values stored in the collection.
    fn count(&self) -> usize;

    /// Returns true if the collection contains no values.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns true if the collection stores a value equal to `value`.
    ///
    /// Equality is [`PartialEq`], which never converts between types. Use
    /// [`exists`](Collection::exists) with a custom predicate for any looser notion of equality.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.values_iter().any(|item| item == value)
    }

    /// Returns the value in the first position.
    fn first(&self) -> Result<&Self::Item, EmptyCollection> {
        self.values_iter().next().ok_or(EmptyCollection)
    }

    /// Returns the value in the last position.
    fn last(&self) -> Result<&Self::Item, EmptyCollection> {
        self.values_iter().next_back().ok_or(EmptyCollection)
    }

    /// Returns true if `predicate` holds for every value. Vacuously true for an empty collection.
    fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = predicate;
        self.values_iter().all(|item| predicate(item))
    }

    /// Returns true if `predicate` holds for at least one value.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut predicate = predicate;
        self.values_iter().any(|item| predicate(item))
    }

    /// Folds every value into an accumulator, starting with `initial`. An empty collection returns
    /// `initial` untouched.
    fn reduce<A, F>(&self, combiner: F, initial: A) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        self.values_iter().fold(initial, combiner)
    }
}
