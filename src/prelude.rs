//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rop::prelude::*;
//!
//! fn greet(name: &str) -> Outcome<String> {
//!     if name.is_empty() {
//!         return failure!("empty name");
//!     }
//!     success(format!("hello {name}"))
//! }
//!
//! assert_eq!(greet("rop").into_value().as_deref(), Some("hello rop"));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure!`]
//! - **Types**: [`Outcome`], [`PlainError`]
//! - **Traits**: [`DescriptiveError`]
//! - **Functions**: [`success`], [`failure()`], [`failure_from`], [`forward_failure`]

pub use crate::failure;
pub use crate::factory::{failure_from, forward_failure, success};
pub use crate::traits::DescriptiveError;
pub use crate::types::{Outcome, PlainError};

#[cfg(feature = "std")]
pub use crate::shell::{shell, ProcessError};
