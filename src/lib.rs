//! Railway-oriented error propagation.
//!
//! An [`Outcome<T>`] is either `Success(T)` or `Failure` holding any error that
//! implements [`DescriptiveError`]. Chaining [`map`](Outcome::map),
//! [`flat_map`](Outcome::flat_map) and [`inspect`](Outcome::inspect) keeps a
//! computation on the success track until the first failure, after which every
//! step is skipped and that failure reaches the caller unchanged.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rop::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use rop::{failure, success, Outcome};
//!
//! fn parse(input: &str) -> Outcome<u32> {
//!     match input.trim().parse() {
//!         Ok(n) => success(n),
//!         Err(_) => failure(format!("cannot parse {input:?}")),
//!     }
//! }
//!
//! fn non_zero(n: u32) -> Outcome<u32> {
//!     if n == 0 { failure("zero is not allowed") } else { success(n) }
//! }
//!
//! let ok = parse("12").flat_map(non_zero).map(|n| 120 / n);
//! assert_eq!(ok.into_value(), Some(10));
//!
//! let stopped = parse("0").flat_map(non_zero).map(|n| 120 / n);
//! assert_eq!(stopped.error_message().as_deref(), Some("zero is not allowed"));
//! ```
//!
//! ## Custom error kinds
//!
//! ```
//! use rop::{failure_from, DescriptiveError, Outcome};
//!
//! struct HttpError(u16);
//!
//! impl DescriptiveError for HttpError {
//!     fn error_message(&self) -> String {
//!         format!("http status {}", self.0)
//!     }
//! }
//!
//! let fetched: Outcome<Vec<u8>> = failure_from(HttpError(503));
//! let size = fetched.map(|body| body.len());
//! assert_eq!(size.error_message().as_deref(), Some("http status 503"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and `Result`
pub mod convert;
/// Free-function constructors
pub mod factory;
/// Formatting macro for failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The failure capability trait
pub mod traits;
/// Outcome and the built-in failure kinds
pub mod types;

/// Process execution reporting through `Outcome` (requires `std` feature)
#[cfg(feature = "std")]
pub mod shell;

pub use convert::*;
pub use factory::*;
pub use traits::*;
pub use types::{BoxedError, Outcome, PlainError};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
