use indexmap::IndexMap;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Map;
use crate::collections::EmptyKey;

/// A Map serializes as a map of its entries, in order. An empty Map serializes as `none` instead
/// of an empty map, so that it can't be mistaken for a serialized empty list.
impl<T: Serialize> Serialize for Map<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.data.is_empty() {
            return serializer.serialize_none();
        }
        serializer.collect_map(&self.data)
    }
}

/// Accepts both a map and `none`, the latter producing an empty Map. Empty keys are rejected.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Map<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Option::<IndexMap<String, T>>::deserialize(deserializer)?.unwrap_or_default();
        if data.keys().any(String::is_empty) {
            return Err(D::Error::custom(EmptyKey));
        }
        Ok(Map { data })
    }
}
