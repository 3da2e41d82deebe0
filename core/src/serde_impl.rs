use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

/// Serializes exactly like `Option<T>`: absent as none (`null` in JSON), present as the bare value.
///
/// The wire format has a single none, so a present value that itself serializes as none, such as
/// `Maybe<Option<T>>` holding `None`, deserializes as absent. Formats that keep nested options apart
/// behave like they do for `Option<Option<T>>`.
impl<T: Serialize> Serialize for Maybe<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Maybe::Present(value) => serializer.serialize_some(value),
      Maybe::Absent => serializer.serialize_none(),
    }
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<T>::deserialize(deserializer).map(Maybe::from_nullable)
  }
}
