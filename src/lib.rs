//! Immutable, strongly typed collections with value semantics.
//!
//! The two containers are [`OrderedList`](collections::OrderedList), a densely indexed sequence,
//! and [`Map`](collections::Map), an insertion-ordered map with non-empty string keys. Neither
//! has a mutating method: every operation that looks like a mutation returns a new container and
//! leaves the receiver exactly as it was. This makes a collection safe to hand around without
//! defensive copies, at the price of a copy per "mutation".
//!
//! # Element Types
//! Element homogeneity is enforced by the type parameter, so there is no runtime type check and no
//! "wrong element type" error anywhere in this crate. Behaviour that depends on the element type is
//! expressed through trait bounds on the individual methods instead: `sort` wants
//! [`Display`](std::fmt::Display), `diff` and `intersect` want
//! [`DefaultOrd`](compare::DefaultOrd), `join` wants [`Serialize`](serde::Serialize) and so on.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s with small, specific error types, usually ZSTs or plain
//! structs implementing [`Error`](std::error::Error). Where an operation can fail in more than one
//! way, the reasons are combined into an enum (e.g. [`KeyError`](collections::KeyError)) for
//! static dispatch rather than boxing.
//!
//! Panics are reserved for programmer errors with a documented, checked alternative, such as
//! [`Map::put`](collections::Map::put) with an empty key (see
//! [`Map::try_put`](collections::Map::try_put)).
//!
//! # Bulk Execution
//! Running a fallible task over every value, without stopping at the first failure, is handled by
//! the [`promise`] module.
//!
//! # Logging
//! This crate emits [`tracing`] events but never installs a subscriber. Rejected keys and promise
//! execution are logged at `debug`, misuse of an executed promise at `warn` and failures that have
//! to be discarded at `error`.
//!
//! # Features
//! - `chrono` (default): [`DefaultOrd`](compare::DefaultOrd) for chrono's date and time types.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod compare;
pub mod promise;

pub(crate) mod util;
