//! The capability every failure carried by an [`Outcome`](crate::Outcome) must provide.
//!
//! # Examples
//!
//! ```
//! use rop::traits::DescriptiveError;
//!
//! struct Timeout {
//!     seconds: u64,
//! }
//!
//! impl DescriptiveError for Timeout {
//!     fn error_message(&self) -> String {
//!         format!("timed out after {}s", self.seconds)
//!     }
//! }
//!
//! let outcome: rop::Outcome<()> = rop::failure_from(Timeout { seconds: 30 });
//! assert_eq!(outcome.error_message().as_deref(), Some("timed out after 30s"));
//! ```

use crate::types::alloc_type::String;
use core::fmt;

/// A failure that can render itself as a human-readable message.
///
/// This is the only contract [`Outcome`](crate::Outcome) places on its failure
/// payload. The payload is stored as `Box<dyn DescriptiveError>`, so any
/// concrete error kind can travel down the same chain without a shared base type.
///
/// The `Send + Sync` supertraits let an `Outcome<T>` be shared read-only
/// across threads whenever `T` allows it.
pub trait DescriptiveError: Send + Sync {
    /// Renders the failure as a message suitable for showing to a caller.
    fn error_message(&self) -> String;
}

impl fmt::Debug for dyn DescriptiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DescriptiveError").field(&self.error_message()).finish()
    }
}

impl fmt::Display for dyn DescriptiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error_message())
    }
}
