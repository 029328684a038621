//! Free-function constructors for [`Outcome`].
//!
//! These are the discoverable entry points for building outcomes without
//! naming the enum variants directly. The success type of a failure is picked
//! up from the calling context.
//!
//! # Examples
//!
//! ```
//! use rop::{failure, forward_failure, success, Outcome};
//!
//! fn load(id: u32) -> Outcome<String> {
//!     if id == 0 {
//!         return failure("id must be non-zero");
//!     }
//!     success(format!("record {id}"))
//! }
//!
//! fn load_len(id: u32) -> Outcome<usize> {
//!     let record = load(id);
//!     if record.is_failure() {
//!         return forward_failure(record);
//!     }
//!     record.map(|r| r.len())
//! }
//!
//! assert_eq!(load_len(0).error_message().as_deref(), Some("id must be non-zero"));
//! ```
use crate::traits::DescriptiveError;
use crate::types::alloc_type::{Box, String};
use crate::types::{BoxedError, Outcome, PlainError};

/// Message carried by [`forward_failure`] when handed a successful outcome.
pub const FORWARD_MISUSE_MESSAGE: &str = "WARNING: parent was not bad!";

#[inline]
pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Builds a failure holding a [`PlainError`] with `message`.
#[inline]
pub fn failure<T>(message: impl Into<String>) -> Outcome<T> {
    failure_from(PlainError::new(message))
}

/// Builds a failure from any error kind, keeping its concrete type behind the box.
#[inline]
pub fn failure_from<T, E>(error: E) -> Outcome<T>
where
    E: DescriptiveError + 'static,
{
    Outcome::Failure(Box::new(error))
}

#[inline]
pub fn failure_boxed<T>(error: BoxedError) -> Outcome<T> {
    Outcome::from_boxed(error)
}

/// Retypes a failure to another success type, moving the same error object.
///
/// Meant to be called on outcomes already known to be failures. A successful
/// `from` does not panic: it is turned into a failure carrying
/// [`FORWARD_MISUSE_MESSAGE`] and its value is dropped.
///
/// # Examples
///
/// ```
/// use rop::{failure, forward_failure, success, Outcome, FORWARD_MISUSE_MESSAGE};
///
/// let parent: Outcome<i32> = failure("boom");
/// let child: Outcome<String> = forward_failure(parent);
/// assert_eq!(child.error_message().as_deref(), Some("boom"));
///
/// let misused: Outcome<String> = forward_failure(success(5));
/// assert_eq!(misused.error_message().as_deref(), Some(FORWARD_MISUSE_MESSAGE));
/// ```
#[inline]
pub fn forward_failure<T, P>(from: Outcome<P>) -> Outcome<T> {
    match from {
        Outcome::Failure(error) => Outcome::Failure(error),
        Outcome::Success(_) => {
            tracing::warn!(target: "rop::forward", "{}", FORWARD_MISUSE_MESSAGE);
            failure(FORWARD_MISUSE_MESSAGE)
        }
    }
}
