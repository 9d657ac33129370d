use criterion::{black_box, Criterion, Throughput};
use outcome::Outcome;

const STEPS: u64 = 1_000;

pub fn run(c: &mut Criterion) {
    bench_map_chain(c);
    bench_assign(c);
}

fn halve(x: u64) -> Outcome<u64, u32> {
    if x % 2 == 0 {
        Outcome::from_value(x / 2)
    } else {
        Outcome::from_error(1)
    }
}

fn halve_std(x: u64) -> Result<u64, u32> {
    if x % 2 == 0 {
        Ok(x / 2)
    } else {
        Err(1)
    }
}

fn bench_map_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("trivial_chain");
    group.warm_up_time(std::time::Duration::from_millis(500));
    group.measurement_time(std::time::Duration::from_secs(1));
    group.sample_size(10);
    group.throughput(Throughput::Elements(STEPS));

    group.bench_function("outcome_map_and_then_1000", |b| {
        b.iter(|| {
            for i in 0..STEPS {
                let out = Outcome::<u64, u32>::from_value(black_box(i))
                    .map(|x| x.wrapping_mul(3))
                    .and_then(halve)
                    .map_error(|e| e + 1);
                black_box(out);
            }
        })
    });

    group.bench_function("std_map_and_then_1000", |b| {
        b.iter(|| {
            for i in 0..STEPS {
                let out = Ok::<u64, u32>(black_box(i))
                    .map(|x| x.wrapping_mul(3))
                    .and_then(halve_std)
                    .map_err(|e| e + 1);
                black_box(out);
            }
        })
    });

    group.finish();
}

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("trivial_assign");
    group.throughput(Throughput::Elements(STEPS));

    group.bench_function("outcome_assign_1000", |b| {
        let source = Outcome::<u64, u32>::from_error(7);
        b.iter(|| {
            let mut slot = Outcome::<u64, u32>::from_value(0);
            for _ in 0..STEPS {
                slot = black_box(source);
            }
            black_box(slot);
        })
    });

    group.bench_function("std_assign_1000", |b| {
        let source = Err::<u64, u32>(7);
        b.iter(|| {
            let mut slot = Ok::<u64, u32>(0);
            for _ in 0..STEPS {
                slot = black_box(source);
            }
            black_box(slot);
        })
    });

    group.finish();
}
