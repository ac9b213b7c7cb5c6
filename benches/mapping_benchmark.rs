/*!
 * Priority Mapping Benchmarks
 *
 * Cost of the step function and of a full apply against a no-op host
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rt_priority::{
    decide, AbstractPriority, NoopBackend, PriorityScheduler, ProcessSchedulingState, ThreadRef,
    ThreadRegistry,
};
use std::sync::Arc;

fn bench_decide(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide");

    for level in [
        AbstractPriority::IDLE,
        AbstractPriority::NORMAL,
        AbstractPriority::TIME_CRITICAL,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(level), &level, |b, level| {
            b.iter(|| decide(black_box(20), black_box(*level)));
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let registry = ThreadRegistry::new();
    registry.register(ThreadRef(1), 1);

    let enabled = PriorityScheduler::new(
        Arc::new(ProcessSchedulingState::with_base(20)),
        Arc::new(NoopBackend),
        Arc::new(registry.clone()),
    );
    let disabled = PriorityScheduler::new(
        Arc::new(ProcessSchedulingState::disabled()),
        Arc::new(NoopBackend),
        Arc::new(registry),
    );

    c.bench_function("apply_disabled", |b| {
        b.iter(|| disabled.apply(black_box(ThreadRef(1)), AbstractPriority::HIGHEST));
    });
    c.bench_function("apply_rejected", |b| {
        b.iter(|| enabled.apply(black_box(ThreadRef(1)), AbstractPriority::HIGHEST));
    });
}

criterion_group!(benches, bench_decide, bench_apply);
criterion_main!(benches);
