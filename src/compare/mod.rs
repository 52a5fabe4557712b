//! Ordering policy shared by every set-like operation of the collections.
//!
//! Two traits live here:
//! - [`Comparator`] is the capability a value type implements to provide its own ordering.
//! - [`DefaultOrd`] is the comparator used wherever no explicit one is supplied to `diff`,
//!   `intersect` and friends.
//!
//! # Default Comparator Tiers
//! [`DefaultOrd`] resolves to exactly one tier per type, in this order of precedence:
//! 1. Plain values (integers, floats, `bool`, `char`, strings and containers of those) use their
//!    native three-way ordering.
//! 2. Date and time values compare chronologically.
//! 3. Types implementing [`Comparator`] delegate to [`Comparator::compare_with`].
//! 4. Handles wrapped in [`ByIdentity`] compare by instance identity. Two distinct handles with
//!    equal contents are *not* equal.
//!
//! Plain shared handles ([`Rc`](std::rc::Rc), [`Arc`](std::sync::Arc)) are not a tier of their own:
//! they resolve to the tier of the value they point to, so an `Rc` of a date or of a
//! [`Comparator`] still compares chronologically or through the comparator.
//!
//! Natural ordering, used by `sort` when no comparator is supplied, is a different thing: see
//! [`natural_cmp`].

mod comparator;
mod default_ord;
mod identity;
mod natural;

pub use comparator::*;
pub use default_ord::*;
pub use identity::*;
pub use natural::*;
