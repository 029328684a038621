use crate::traits::DescriptiveError;
use crate::types::{BoxedError, Outcome};

#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, BoxedError> {
    outcome.into_result()
}

#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: DescriptiveError + 'static,
{
    result.into()
}

/// Turns a result whose error is already boxed back into an outcome without re-boxing.
#[inline]
pub fn boxed_result_to_outcome<T>(result: Result<T, BoxedError>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(error),
    }
}

/// Collapses nested outcomes, keeping the first failure encountered.
#[inline]
pub fn flatten_outcome<T>(outcome: Outcome<Outcome<T>>) -> Outcome<T> {
    outcome.flat_map(|inner| inner)
}
