use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("there is no value stored at position {index}, the list has {len} values")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("there is no value stored for key \"{key}\"")]
pub struct KeyNotFound {
    pub key: String,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("there are no values available")]
pub struct EmptyCollection;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("could not find a value matching the provided predicate")]
pub struct NoMatch;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("map keys must be non-empty strings")]
pub struct EmptyKey;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("key \"{key}\" was provided more than once")]
pub struct KeyCollision {
    pub key: String,
}

/// The ways a generated or provided map key can be rejected.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum KeyError {
    EmptyKey(EmptyKey),
    KeyCollision(KeyCollision),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the amount of values to fill must be at least 1")]
pub struct ZeroFillAmount;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("start index {start} must not exceed the list length {len} to keep the list contiguous")]
pub struct NonContiguousFill {
    pub start: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    ZeroFillAmount(ZeroFillAmount),
    NonContiguousFill(NonContiguousFill),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected a value at index {expected} but found index {found}")]
pub struct NonSequentialIndex {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("the value at {entry} cannot be represented as a string")]
pub struct NotJoinable {
    pub entry: String,
}
