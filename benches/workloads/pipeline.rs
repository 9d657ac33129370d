use criterion::{black_box, Criterion, Throughput};
use outcome::Outcome;

const RECORDS: u64 = 1_000;

pub fn run(c: &mut Criterion) {
    bench_string_pipeline(c);
    bench_clone_from(c);
}

fn parse(line: String) -> Outcome<u64, String> {
    match line.parse::<u64>() {
        Ok(n) => Outcome::from_value(n),
        Err(e) => Outcome::from_error(format!("{line}: {e}")),
    }
}

fn parse_std(line: String) -> Result<u64, String> {
    line.parse::<u64>().map_err(|e| format!("{line}: {e}"))
}

fn bench_string_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_heap");
    group.throughput(Throughput::Elements(RECORDS));

    let lines: Vec<String> = (0..RECORDS)
        .map(|i| if i % 10 == 0 { format!("bad{i}") } else { i.to_string() })
        .collect();

    group.bench_function("outcome_parse_validate_1000", |b| {
        b.iter(|| {
            for line in &lines {
                let out = Outcome::<String, String>::from_value(line.clone())
                    .and_then(parse)
                    .map(|n| n * 2)
                    .or_else(|e| Outcome::<u64, usize>::from_error(e.len()));
                black_box(out);
            }
        })
    });

    group.bench_function("std_parse_validate_1000", |b| {
        b.iter(|| {
            for line in &lines {
                let out = Ok::<String, String>(line.clone())
                    .and_then(parse_std)
                    .map(|n| n * 2)
                    .or_else(|e| Err::<u64, usize>(e.len()));
                black_box(out);
            }
        })
    });

    group.finish();
}

fn bench_clone_from(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_assign");
    group.throughput(Throughput::Elements(RECORDS));

    let value = Outcome::<String, String>::from_value("x".repeat(64));
    let error = Outcome::<String, String>::from_error("e".repeat(64));
    let value_std = Ok::<String, String>("x".repeat(64));
    let error_std = Err::<String, String>("e".repeat(64));

    group.bench_function("outcome_clone_from_same_variant_1000", |b| {
        b.iter(|| {
            let mut slot = value.clone();
            for _ in 0..RECORDS {
                slot.clone_from(black_box(&value));
            }
            black_box(slot);
        })
    });

    group.bench_function("std_clone_from_same_variant_1000", |b| {
        b.iter(|| {
            let mut slot = value_std.clone();
            for _ in 0..RECORDS {
                slot.clone_from(black_box(&value_std));
            }
            black_box(slot);
        })
    });

    group.bench_function("outcome_clone_from_alternating_1000", |b| {
        b.iter(|| {
            let mut slot = value.clone();
            for i in 0..RECORDS {
                let source = if i % 2 == 0 { &error } else { &value };
                slot.clone_from(black_box(source));
            }
            black_box(slot);
        })
    });

    group.bench_function("std_clone_from_alternating_1000", |b| {
        b.iter(|| {
            let mut slot = value_std.clone();
            for i in 0..RECORDS {
                let source = if i % 2 == 0 { &error_std } else { &value_std };
                slot.clone_from(black_box(source));
            }
            black_box(slot);
        })
    });

    group.finish();
}
