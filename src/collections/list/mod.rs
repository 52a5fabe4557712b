//! A module containing [`OrderedList`], the index-addressed immutable sequence.
//!
//! Borrowed iteration uses [`std::slice::Iter`], owned iteration [`std::vec::IntoIter`].
//!
//! [`OrderedList`] is also re-exported under the parent module.

mod list;
mod serialize;

pub use list::*;
