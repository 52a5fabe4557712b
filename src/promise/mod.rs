//! Deferred, at-most-once bulk execution over the values of a collection.
//!
//! A [`ForAllPromise`] is created by [`OrderedList::for_all`](crate::collections::OrderedList::for_all)
//! or [`Map::for_all`](crate::collections::Map::for_all). It runs a fallible task for every entry,
//! sequentially and in order, and collects the failures into an error aggregate
//! ([`OrderedErrors`] or [`MappedErrors`]) instead of giving up at the first one.
//!
//! Unlike the collections, a promise is mutable: it is an action, not a value. Its flags are set
//! builder-style before it runs.
//!
//! # Implicit Execution
//! A promise which is dropped without having been executed runs itself during [`Drop`]. There is
//! no way to report errors from a destructor, so an aggregate produced that way is logged at
//! `error` level and discarded. Call [`execute`](ForAllPromise::execute) to observe failures.

mod errors;
mod for_all;

pub use errors::*;
pub use for_all::*;
