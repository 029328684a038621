use crate::traits::DescriptiveError;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure reported by [`shell`](super::shell) when a program exits unsuccessfully.
///
/// Carries the termination code and everything the program wrote to standard
/// error. Renders as `[<code>]: <stderr>`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessError {
    code: i32,
    stderr: String,
}

impl ProcessError {
    #[inline]
    pub(crate) fn new(code: i32, stderr: String) -> Self {
        Self { code, stderr }
    }

    /// Returns the termination code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the captured standard error text.
    #[inline]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

impl DescriptiveError for ProcessError {
    fn error_message(&self) -> String {
        format!("[{}]: {}", self.code, self.stderr)
    }
}

impl Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.code, self.stderr)
    }
}

impl core::error::Error for ProcessError {}
