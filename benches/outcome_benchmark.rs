use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outcome::Outcome;

mod workloads;

fn checked_step(x: i64) -> Outcome<i64, &'static str> {
    if x < 1_000_000 {
        Outcome::from_value(x + 1)
    } else {
        Outcome::from_error("overflow")
    }
}

fn checked_step_std(x: i64) -> Result<i64, &'static str> {
    if x < 1_000_000 {
        Ok(x + 1)
    } else {
        Err("overflow")
    }
}

fn bench_combinator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinator_chain");

    group.bench_function("outcome_and_then_x8", |b| {
        b.iter(|| {
            let out = Outcome::<i64, &str>::from_value(black_box(1))
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step)
                .and_then(checked_step);
            black_box(out.join_with(|v| v, |_| -1))
        });
    });

    group.bench_function("std_and_then_x8", |b| {
        b.iter(|| {
            let out = Ok::<i64, &str>(black_box(1))
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std)
                .and_then(checked_step_std);
            black_box(out.unwrap_or(-1))
        });
    });

    group.finish();
}

fn bench_take(c: &mut Criterion) {
    let mut group = c.benchmark_group("take");

    group.bench_function("outcome_take_vec", |b| {
        let mut slot = Outcome::<Vec<u8>, String>::from_value(Vec::new());
        b.iter(|| {
            let taken = slot.take();
            black_box(taken);
        });
    });

    group.bench_function("std_take_vec", |b| {
        let mut slot = Ok::<Vec<u8>, String>(Vec::new());
        b.iter(|| {
            let taken = std::mem::replace(&mut slot, Ok(Vec::new()));
            black_box(taken);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_combinator_chain,
    bench_take,
    workloads::trivial::run,
    workloads::pipeline::run
);
criterion_main!(benches);
