use rop::convert::{boxed_result_to_outcome, flatten_outcome, outcome_to_result, result_to_outcome};
use rop::{failure, success, Outcome, PlainError};

#[test]
fn result_ok_becomes_success() {
    let outcome = result_to_outcome(Ok::<_, PlainError>(3));
    assert_eq!(outcome.into_value(), Some(3));
}

#[test]
fn result_err_becomes_failure() {
    let outcome: Outcome<i32> = result_to_outcome(Err(PlainError::new("bad")));
    assert_eq!(outcome.error_message().as_deref(), Some("bad"));
}

#[test]
fn from_impl_matches_free_function() {
    let outcome: Outcome<i32> = Err(PlainError::new("via from")).into();
    assert_eq!(outcome.error_message().as_deref(), Some("via from"));
}

#[test]
fn outcome_to_result_keeps_case() {
    assert_eq!(outcome_to_result(success(1)).ok(), Some(1));

    let err = outcome_to_result(failure::<i32>("gone")).unwrap_err();
    assert_eq!(err.error_message(), "gone");
}

#[test]
fn boxed_round_trip_keeps_message() {
    let original: Outcome<()> = failure("round trip");
    let back = boxed_result_to_outcome(original.into_result());
    assert_eq!(back.error_message().as_deref(), Some("round trip"));
}

#[test]
fn question_mark_through_into_result() {
    fn step(n: i32) -> Outcome<i32> {
        if n > 0 { success(n) } else { failure("not positive") }
    }

    fn total(a: i32, b: i32) -> Result<i32, rop::BoxedError> {
        let a = step(a).into_result()?;
        let b = step(b).into_result()?;
        Ok(a + b)
    }

    assert_eq!(total(1, 2).ok(), Some(3));
    assert_eq!(total(1, -2).unwrap_err().error_message(), "not positive");
}

#[test]
fn flatten_keeps_outer_then_inner_failure() {
    let nested_ok: Outcome<Outcome<i32>> = success(success(9));
    assert_eq!(flatten_outcome(nested_ok).into_value(), Some(9));

    let inner_bad: Outcome<Outcome<i32>> = success(failure("inner"));
    assert_eq!(flatten_outcome(inner_bad).error_message().as_deref(), Some("inner"));

    let outer_bad: Outcome<Outcome<i32>> = failure("outer");
    assert_eq!(flatten_outcome(outer_bad).error_message().as_deref(), Some("outer"));
}
