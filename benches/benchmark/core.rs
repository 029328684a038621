use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion};
use rop::{failure, failure_from, forward_failure, success, Outcome};
use std::hint::black_box;

pub fn bench_construction(c: &mut Criterion) {
    c.bench_function("core/success", |b| b.iter(|| black_box(success(black_box(42u64)))));

    c.bench_function("core/failure_plain", |b| {
        b.iter(|| black_box(failure::<u64>(black_box("Connection pool exhausted"))))
    });

    c.bench_function("core/failure_custom", |b| {
        b.iter(|| {
            black_box(failure_from::<u64, _>(DomainError::Database(
                "Connection pool exhausted".to_string(),
            )))
        })
    });
}

pub fn bench_accessors(c: &mut Criterion) {
    let failed: Outcome<u64> = failure_from(DomainError::Validation("bad email".to_string()));

    c.bench_function("core/error_message", |b| b.iter(|| black_box(failed.error_message())));
    c.bench_function("core/is_success", |b| b.iter(|| black_box(failed.is_success())));
}

pub fn bench_forward_failure(c: &mut Criterion) {
    c.bench_function("core/forward_failure", |b| {
        b.iter(|| {
            let parent: Outcome<u64> = failure("upstream failed");
            black_box(forward_failure::<String, _>(parent))
        })
    });
}

pub fn bench_map_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/map_depth");

    for depth in [5u64, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("success", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome = success(0u64);
                for i in 0..depth {
                    outcome = outcome.map(|v| v.wrapping_add(i));
                }
                black_box(outcome)
            })
        });

        group.bench_with_input(BenchmarkId::new("failure", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut outcome: Outcome<u64> = failure("early");
                for i in 0..depth {
                    outcome = outcome.map(|v| v.wrapping_add(i));
                }
                black_box(outcome)
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_construction,
        bench_accessors,
        bench_forward_failure,
        bench_map_depth,
}
