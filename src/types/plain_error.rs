use crate::traits::DescriptiveError;
use crate::types::alloc_type::String;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free-form failure holding a single message.
///
/// Built by [`failure`](crate::failure) from a plain string, and by
/// [`forward_failure`](crate::forward_failure) for its misuse fallback.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainError {
    message: String,
}

impl PlainError {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    /// Returns the message as given at construction.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl DescriptiveError for PlainError {
    #[inline]
    fn error_message(&self) -> String {
        self.message.clone()
    }
}

impl Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for PlainError {}

impl From<String> for PlainError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for PlainError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
