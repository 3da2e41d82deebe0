use thiserror::Error;

/// Error returned when the value of an absent [`Maybe`](crate::Maybe) is requested.
#[derive(Default, Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
#[error("value is absent")]
pub struct AbsentValueError;
