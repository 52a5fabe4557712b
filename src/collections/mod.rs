//! The immutable collection types and the behaviour they share.
//!
//! # Method
//! Both containers wrap a standard backing store ([`Vec`] for [`OrderedList`], an
//! [`IndexMap`](indexmap::IndexMap) for [`Map`]) and never hand out mutable access to it. Shared,
//! read-only behaviour is defined once on the [`Collection`] trait.
//!
//! All error types of the collections are defined in this module, because several of them are
//! shared between the two containers.

mod error;
pub mod list;
pub mod map;
mod traits;

pub use error::*;
#[doc(inline)]
pub use list::OrderedList;
#[doc(inline)]
pub use map::Map;
pub use traits::*;
