use crate::Maybe;

/// Extension trait converting nullable values into [`Maybe`].
pub trait IntoMaybe {
  type Value;

  fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Option<T> {
  type Value = T;

  #[inline]
  fn into_maybe(self) -> Maybe<T> { Maybe::from_nullable(self) }
}
