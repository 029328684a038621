//! Core traits for failure rendering.
//!
//! - [`DescriptiveError`]: the single capability a failure must provide to be
//!   carried by an [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use rop::traits::DescriptiveError;
//! use rop::types::PlainError;
//!
//! let err = PlainError::new("disk full");
//! assert_eq!(err.error_message(), "disk full");
//! ```

pub mod descriptive_error;

pub use descriptive_error::DescriptiveError;
