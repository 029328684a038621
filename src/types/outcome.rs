use crate::traits::DescriptiveError;
use crate::types::alloc_type::{Box, String};

/// Fixed prefix of the notice [`Outcome::inspect`] emits for a failure.
pub const INSPECT_NOTICE_PREFIX: &str = "ERROR HAS HAPPENED: ";

/// Railway-style result that either carries a value or a descriptive failure.
///
/// `Outcome<T>` is the two-track type of this crate. Producers build one with
/// [`success`](crate::success) or [`failure`](crate::failure); consumers chain
/// [`map`](Outcome::map), [`flat_map`](Outcome::flat_map) and
/// [`inspect`](Outcome::inspect) onto it. Once an outcome is on the failure
/// track every later step is skipped and the original error object is moved
/// along untouched.
///
/// The failure payload is typed to [`DescriptiveError`], not to `T`, so
/// retyping an outcome never rebuilds the error.
///
/// # Type Parameters
///
/// * `T` - The success value type
///
/// # Variants
///
/// * `Success(T)` - Contains the successful value
/// * `Failure(Box<dyn DescriptiveError>)` - Contains the error that stopped the chain
///
/// # Examples
///
/// ```
/// use rop::{failure, success, Outcome};
///
/// fn parse(input: &str) -> Outcome<i32> {
///     match input.parse() {
///         Ok(n) => success(n),
///         Err(_) => failure(format!("not a number: {input}")),
///     }
/// }
///
/// let doubled = parse("21").map(|n| n * 2);
/// assert_eq!(doubled.value(), Some(&42));
///
/// let broken = parse("x").map(|n| n * 2);
/// assert_eq!(broken.error_message().as_deref(), Some("not a number: x"));
/// ```
#[must_use]
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(Box<dyn DescriptiveError>),
}

impl<T> Outcome<T> {
    /// Wraps `value` on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::Outcome;
    ///
    /// let outcome = Outcome::success("ready");
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an already-boxed error on the failure track.
    #[inline]
    pub fn from_boxed(error: Box<dyn DescriptiveError>) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{failure, success, Outcome};
    ///
    /// assert!(success(1).is_success());
    /// assert!(!failure::<i32>("nope").is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the held value, or returns `None` on the failure track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{failure, success, Outcome};
    ///
    /// assert_eq!(success(7).value(), Some(&7));
    /// assert_eq!(failure::<i32>("nope").value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome and returns the held value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Renders the held error through [`DescriptiveError::error_message`].
    ///
    /// Returns `None` on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{failure, success, Outcome};
    ///
    /// assert_eq!(failure::<()>("boom").error_message().as_deref(), Some("boom"));
    /// assert_eq!(success(()).error_message(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|error| error.error_message())
    }

    /// Borrows the held error object, or returns `None` on the success track.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&dyn DescriptiveError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(&**error),
        }
    }

    /// Consumes the outcome and returns the held error object, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Box<dyn DescriptiveError>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Transforms the held value with an infallible function.
    ///
    /// On the failure track `f` is never called; the same error object is
    /// moved into an `Outcome<U>`. If `f` can itself fail, use
    /// [`flat_map`](Outcome::flat_map) instead.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{success, Outcome};
    ///
    /// let len = success("hello").map(str::len);
    /// assert_eq!(len.into_value(), Some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// On the success track the outcome returned by `f` is passed through as
    /// is, with no extra wrapping. On the failure track `f` is skipped and the
    /// error is forwarded, which is what makes a chain stop at its first
    /// failure.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step's outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{failure, success, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         success(n / 2)
    ///     } else {
    ///         failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(success(8).flat_map(half).flat_map(half).into_value(), Some(2));
    ///
    /// let stopped = success(6).flat_map(half).flat_map(half).flat_map(half);
    /// assert_eq!(stopped.error_message().as_deref(), Some("3 is odd"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Observes the outcome without changing it.
    ///
    /// On the success track `f` is called with a borrow of the value. On the
    /// failure track `f` is skipped and a `WARN` event is emitted under the
    /// `rop::inspect` target carrying the notice
    /// `ERROR HAS HAPPENED: <message>`. Either way `self` is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{success, Outcome};
    ///
    /// let mut seen = Vec::new();
    /// let outcome = success(3).inspect(|v| seen.push(*v)).map(|v| v + 1);
    ///
    /// assert_eq!(seen, vec![3]);
    /// assert_eq!(outcome.into_value(), Some(4));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        match &self {
            Self::Success(value) => f(value),
            Self::Failure(error) => {
                tracing::warn!(target: "rop::inspect", "{}{}", INSPECT_NOTICE_PREFIX, error);
            }
        }
        self
    }

    /// Converts into a standard `Result`, keeping the boxed error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rop::{failure, success, Outcome};
    ///
    /// assert_eq!(success(1).into_result().ok(), Some(1));
    /// assert!(failure::<i32>("nope").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Box<dyn DescriptiveError>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: DescriptiveError + 'static,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Box::new(error)),
        }
    }
}
