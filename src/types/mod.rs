//! The outcome type and the failure kinds shipped with it.
//!
//! # Examples
//!
//! ```
//! use rop::types::{Outcome, PlainError};
//!
//! let outcome: Outcome<u8> = rop::failure_from(PlainError::new("checksum mismatch"));
//! assert_eq!(outcome.error_message().as_deref(), Some("checksum mismatch"));
//! ```
pub mod alloc_type;
pub mod outcome;
pub mod plain_error;

pub use outcome::*;
pub use plain_error::*;

/// Boxed failure payload carried by [`Outcome::Failure`].
pub type BoxedError = alloc_type::Box<dyn crate::traits::DescriptiveError>;
