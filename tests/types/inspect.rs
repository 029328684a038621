use crate::common::{capture_logs, snapshot};
use rop::types::INSPECT_NOTICE_PREFIX;
use rop::{failure, success, Outcome};

#[test]
fn inspect_calls_side_effect_on_success() {
    let mut seen = Vec::new();
    let outcome = success(5).inspect(|v| seen.push(*v));

    assert_eq!(seen, vec![5]);
    assert_eq!(snapshot(&outcome), (true, Some(5), None));
}

#[test]
fn inspect_skips_side_effect_on_failure() {
    let mut calls = 0;
    let outcome: Outcome<i32> = failure("nope");
    let inspected = outcome.inspect(|_| calls += 1);

    assert_eq!(calls, 0);
    assert_eq!(snapshot(&inspected), (false, None, Some("nope".to_string())));
}

#[test]
fn inspect_emits_notice_for_failure() {
    let (outcome, logs) = capture_logs(|| failure::<i32>("disk on fire").inspect(|_| {}));

    assert!(outcome.is_failure());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("rop::inspect"));
    assert!(logs.contains(&format!("{INSPECT_NOTICE_PREFIX}disk on fire")));
}

#[test]
fn inspect_is_silent_on_success() {
    let (outcome, logs) = capture_logs(|| success("fine").inspect(|_| {}));

    assert!(outcome.is_success());
    assert!(!logs.contains(INSPECT_NOTICE_PREFIX));
}

#[test]
fn inspect_in_the_middle_of_a_chain() {
    let mut trace = Vec::new();
    let outcome = success(2)
        .map(|n| n * 10)
        .inspect(|n| trace.push(format!("after map: {n}")))
        .flat_map(|n| if n > 10 { failure::<i32>("too big") } else { success(n) })
        .inspect(|n| trace.push(format!("after check: {n}")));

    assert_eq!(trace, vec!["after map: 20".to_string()]);
    assert_eq!(outcome.error_message().as_deref(), Some("too big"));
}
