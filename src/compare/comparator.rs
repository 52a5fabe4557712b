use std::cmp::Ordering;

/// A value type capability providing a custom ordering between two instances of the same type.
///
/// Implementations must form a strict total order for `sort`, `diff` and `intersect` to behave
/// correctly. Nothing enforces this, it is the responsibility of the implementor.
///
/// Every `Comparator` is also [`DefaultOrd`](super::DefaultOrd), which makes it the third tier of
/// the default comparator.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use typed_collections::compare::Comparator;
/// struct Version(u32);
///
/// impl Comparator for Version {
///     fn compare_with(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// assert_eq!(Version(1).compare_with(&Version(2)), Ordering::Less);
/// ```
pub trait Comparator {
    fn compare_with(&self, other: &Self) -> Ordering;
}
