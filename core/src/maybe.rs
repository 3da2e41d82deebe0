use std::fmt::{self, Display, Formatter};

use crate::error::AbsentValueError;

/// An optional value: either [present](Maybe::Present) with a value of type `T`, or
/// [absent](Maybe::Absent).
///
/// Absence is its own variant, so a present value of a type that can itself be "empty" (for example
/// `Maybe<Option<u32>>` holding `None`) is never mistaken for an absent one.
///
/// All callbacks taken by the combinators are `FnOnce` and are only invoked on the branch they apply
/// to.
///
/// ```
/// use maybe_core::{absent, present, Maybe};
///
/// assert_eq!(present(42).map(|v| v + 1), present(43));
/// assert_eq!(present(42).flat_map(|v| present(v + 1)), present(43));
/// assert_eq!(present(42).flat_map(|_| Maybe::<i32>::absent()), absent());
/// assert_eq!(present(42).to_string(), "Some(42)");
/// ```
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Maybe<T> {
  #[default]
  Absent,
  Present(T),
}

impl<T> Maybe<T> {
  /// The absent value. Equal to every value returned by [`absent`](Self::absent).
  pub const NONE: Self = Self::Absent;

  #[inline]
  pub const fn absent() -> Self { Self::NONE }
  /// Wraps `value`. The value is not inspected: any value, including an empty or default one, is
  /// present.
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  /// Converts from the nullable convention: `None` becomes absent, `Some(value)` becomes present.
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }
  #[inline]
  pub fn as_mut(&mut self) -> Maybe<&mut T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }
}

impl<T> Maybe<T> {
  /// Returns the held value.
  ///
  /// # Panics
  ///
  /// Panics with `value is absent` if this is absent. Use [`try_get`](Self::try_get),
  /// [`get_or_null`](Self::get_or_null), [`get_or_else`](Self::get_or_else), or
  /// [`get_or_default`](Self::get_or_default) when absence is expected.
  #[inline]
  #[track_caller]
  pub fn get(self) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => absent_value_access::<T>(),
    }
  }
  /// Returns the held value, or [`AbsentValueError`] if this is absent.
  #[inline]
  pub fn try_get(self) -> Result<T, AbsentValueError> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(AbsentValueError),
    }
  }
  /// Converts to the nullable convention; the inverse of [`from_nullable`](Self::from_nullable).
  #[inline]
  pub fn get_or_null(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }
  /// Returns the held value, or the result of `supplier` if this is absent. `supplier` is only
  /// called on the absent branch.
  #[inline]
  pub fn get_or_else(self, supplier: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => supplier(),
    }
  }
  #[inline]
  pub fn get_or_default(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }
}

impl<T> Maybe<T> {
  /// Applies `transform` to the held value and wraps the result, or stays absent without calling
  /// `transform`.
  ///
  /// A `transform` that itself returns a `Maybe` produces a nested `Maybe<Maybe<R>>`; use
  /// [`flat_map`](Self::flat_map) to avoid the nesting.
  #[inline]
  pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> Maybe<R> {
    match self {
      Self::Present(value) => Maybe::Present(transform(value)),
      Self::Absent => Maybe::Absent,
    }
  }
  /// Returns the result of `transform` on the held value, which may be absent, or stays absent
  /// without calling `transform`.
  #[inline]
  pub fn flat_map<R>(self, transform: impl FnOnce(T) -> Maybe<R>) -> Maybe<R> {
    match self {
      Self::Present(value) => transform(value),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Calls `action` with the held value if present. Returns `self` unchanged.
  #[inline]
  pub fn on_some(self, action: impl FnOnce(&T)) -> Self {
    if let Self::Present(value) = &self {
      action(value);
    }
    self
  }
  /// Calls `action` if absent. Returns `self` unchanged.
  #[inline]
  pub fn on_none(self, action: impl FnOnce()) -> Self {
    if self.is_absent() {
      action();
    }
    self
  }
}

#[cold]
#[track_caller]
fn absent_value_access<T>() -> ! {
  #[cfg(feature = "tracing")]
  tracing::error!(value_type = std::any::type_name::<T>(), "requested the value of an absent `Maybe`");
  panic!("{}", AbsentValueError)
}

/// Creates a present [`Maybe`] holding `value`.
#[inline]
pub const fn present<T>(value: T) -> Maybe<T> { Maybe::present(value) }
/// Creates an absent [`Maybe`].
#[inline]
pub const fn absent<T>() -> Maybe<T> { Maybe::absent() }


impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_nullable(value) }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(value: Maybe<T>) -> Self { value.get_or_null() }
}

impl<T: Display> Display for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Present(value) => write!(f, "Some({})", value),
      Self::Absent => f.write_str("None"),
    }
  }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.get_or_null().into_iter() }
}
impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = std::option::IntoIter<&'a T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.as_ref().get_or_null().into_iter() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn none_constant_is_absent() {
    assert!(Maybe::<u8>::NONE.is_absent());
    assert_eq!(Maybe::<u8>::NONE, Maybe::absent());
    assert_eq!(Maybe::<u8>::default(), Maybe::NONE);
  }

  #[test]
  fn present_empty_values_stay_present() {
    let nested: Maybe<Option<u32>> = present(None);
    assert!(nested.is_present());
    assert_ne!(nested, absent());
    assert_eq!(nested.get(), None);

    assert!(present(String::new()).is_present());
    assert!(present(()).is_present());
  }

  #[test]
  fn display() {
    assert_eq!(present(42).to_string(), "Some(42)");
    assert_eq!(present("foo").to_string(), "Some(foo)");
    assert_eq!(absent::<i32>().to_string(), "None");
  }

  #[test]
  fn ordering_puts_absent_first() {
    assert!(absent() < present(i32::MIN));
    assert!(present(1) < present(2));
    let mut values = vec![present(3), absent(), present(1)];
    values.sort();
    assert_eq!(values, vec![absent(), present(1), present(3)]);
  }

  #[test]
  fn as_ref_borrows_without_consuming() {
    let value = present(String::from("held"));
    let len = value.as_ref().map(|s| s.len());
    assert_eq!(len, present(4));
    assert_eq!(value, present(String::from("held")));
  }

  #[test]
  fn as_mut_modifies_in_place() {
    let mut value = present(1);
    if let Maybe::Present(v) = value.as_mut() {
      *v += 1;
    }
    assert_eq!(value, present(2));

    let mut value = absent::<i32>();
    assert!(value.as_mut().is_absent());
  }

  #[test]
  fn into_iter_yields_at_most_one_item() {
    assert_eq!(present(5).into_iter().collect::<Vec<_>>(), vec![5]);
    assert_eq!(absent::<i32>().into_iter().count(), 0);

    let value = present(5);
    let mut sum = 0;
    for v in &value {
      sum += v;
    }
    assert_eq!(sum, 5);
  }

  #[test]
  fn option_conversions() {
    assert_eq!(Maybe::from(Some(1)), present(1));
    assert_eq!(Maybe::<i32>::from(None), absent());
    assert_eq!(Option::from(present(1)), Some(1));
    assert_eq!(Option::<i32>::from(absent()), None);
  }

  #[test]
  fn try_get_does_not_panic() {
    assert_eq!(present(1).try_get(), Ok(1));
    assert_eq!(absent::<i32>().try_get(), Err(AbsentValueError));
  }

  #[test]
  #[should_panic(expected = "value is absent")]
  fn get_on_absent_panics() {
    absent::<i32>().get();
  }
}
