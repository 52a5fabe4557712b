//! A module containing [`Map`], the insertion-ordered immutable map with string keys.
//!
//! Borrowed and owned iteration reuse the iterators of [`indexmap`], which backs the map.
//!
//! [`Map`] is also re-exported under the parent module.

mod map;
mod serialize;
mod tests;

pub use map::*;
