//! Formatting shortcut for building failures.
//!
//! - [`macro@crate::failure`] - Formats its arguments like `format!` and wraps the
//!   text in a [`PlainError`](crate::types::PlainError) failure.
//!
//! # Examples
//!
//! ```
//! use rop::Outcome;
//!
//! let path = "/etc/app.toml";
//! let outcome: Outcome<String> = rop::failure!("missing config at {}", path);
//! assert_eq!(
//!     outcome.error_message().as_deref(),
//!     Some("missing config at /etc/app.toml")
//! );
//! ```

/// Builds a failed [`Outcome`](crate::Outcome) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro. The success
/// type is inferred from context, as with [`failure`](crate::failure()).
///
/// # Examples
///
/// ```
/// use rop::Outcome;
///
/// fn check(port: u16) -> Outcome<u16> {
///     if port < 1024 {
///         return rop::failure!("port {} is privileged", port);
///     }
///     rop::success(port)
/// }
///
/// assert_eq!(check(80).error_message().as_deref(), Some("port 80 is privileged"));
/// assert_eq!(check(8080).into_value(), Some(8080));
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::failure($crate::__private::format!($($arg)*))
    };
}
