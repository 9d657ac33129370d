use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Outcome workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark `Outcome` against `core::result::Result` and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save and report on
        #[arg(long, default_value = "outcome-vs-result")]
        baseline: String,
    },
}

const BENCH_TARGET: &str = "outcome_benchmark";
const OUTCOME_PREFIX: &str = "outcome_";
const STD_PREFIX: &str = "std_";

/// Throughput of one case, measured for both implementations.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Pair {
    outcome: Option<f64>,
    std: Option<f64>,
}

impl Pair {
    /// `outcome / std`, when both sides were measured.
    fn ratio(&self) -> Option<f64> {
        match (self.outcome, self.std) {
            (Some(o), Some(s)) if s > 0.0 => Some(o / s),
            _ => None,
        }
    }
}

/// `group -> case -> ops/s for each side`
type Results = BTreeMap<String, BTreeMap<String, Pair>>;

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkMeta {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, baseline } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(Path::new("target/criterion"), &baseline)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!(">>> Benchmarking {BENCH_TARGET} into baseline {baseline}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0")
        .args(["bench", "--bench", BENCH_TARGET])
        .arg("--")
        .args(["--save-baseline", baseline]);

    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(criterion_dir: &Path, baseline: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, baseline, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;
    write_report(&mut file, &results)?;

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn write_report(out: &mut impl Write, results: &Results) -> Result<()> {
    writeln!(out, "# Outcome vs Result Benchmark Report")?;
    writeln!(out)?;
    writeln!(out, "| Group | Case | Outcome (Ops/s) | Result (Ops/s) | Outcome / Result |")?;
    writeln!(out, "|---|---|---|---|---|")?;

    for (group, cases) in results {
        for (case, pair) in cases {
            let ratio = pair.ratio().map_or_else(|| "-".to_owned(), |r| format!("**{r:.2}x**"));
            writeln!(
                out,
                "| {group} | {case} | {} | {} | {ratio} |",
                pair.outcome.map_or_else(|| "N/A".to_owned(), format_ops),
                pair.std.map_or_else(|| "N/A".to_owned(), format_ops),
            )?;
        }
    }
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks a criterion output tree, reading
/// `<group>/<function>/<baseline>/{estimates,benchmark}.json`.
fn collect_results(dir: &Path, baseline: &str, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, baseline, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        if dir_name(baseline_dir).as_deref() != Some(baseline) {
            continue;
        }
        let Some(function_dir) = baseline_dir.parent() else { continue };
        let Some(group_dir) = function_dir.parent() else { continue };
        let (Some(function), Some(group)) = (dir_name(function_dir), dir_name(group_dir)) else {
            continue;
        };

        let Some((is_outcome, case)) = split_side(&function) else { continue };

        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("malformed {}", path.display()))?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let ops = read_elements(baseline_dir) * 1e9 / time_ns;
        let pair = results.entry(group).or_default().entry(case.to_owned()).or_default();
        if is_outcome {
            pair.outcome = Some(ops);
        } else {
            pair.std = Some(ops);
        }
    }
    Ok(())
}

/// Elements per iteration recorded next to the estimates; 1 when absent.
#[allow(clippy::cast_precision_loss)]
fn read_elements(baseline_dir: &Path) -> f64 {
    fs::read_to_string(baseline_dir.join("benchmark.json"))
        .ok()
        .and_then(|content| serde_json::from_str::<BenchmarkMeta>(&content).ok())
        .and_then(|meta| meta.throughput)
        .map_or(1.0, |t| match t {
            Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
        })
}

/// Splits `outcome_<case>` / `std_<case>` into the side and the shared case name.
fn split_side(function: &str) -> Option<(bool, &str)> {
    if let Some(case) = function.strip_prefix(OUTCOME_PREFIX) {
        Some((true, case))
    } else {
        function.strip_prefix(STD_PREFIX).map(|case| (false, case))
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_owned)
}
