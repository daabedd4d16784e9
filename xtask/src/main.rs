use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride matching workspace",
    long_about = "A unified CLI for generating sample data, running the matcher,\n\
                  benchmarks, and CI checks in the ride matching workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the matcher against the data directory
    Run {
        /// Directory holding drivers.txt and riders.txt
        #[arg(long, default_value = "data")]
        data_dir: String,
        /// Output format passed through to the matcher
        #[arg(value_enum, long, default_value_t = Format::Text)]
        format: Format,
    },
    /// Write randomised sample data into the data directory
    Sample {
        /// Directory to write into
        #[arg(long, default_value = "data")]
        data_dir: String,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    HttpJson,
}

impl Format {
    fn as_arg(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::HttpJson => "http-json",
        }
    }
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run benchmarks
    Bench,
    /// Run check + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .unwrap_or_else(|err| {
            eprintln!("failed to execute cargo: {err}");
            exit(1)
        })
}

fn git(args: &[&str]) -> ExitStatus {
    eprintln!("+ git {}", args.join(" "));
    Command::new("git")
        .args(args)
        .status()
        .unwrap_or_else(|err| {
            eprintln!("failed to execute git: {err}");
            exit(1)
        })
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_git(args: &[&str]) {
    let status = git(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test match_core");
    run_cargo(&["test", "-p", "match_core"]);

    step("Test match_cli");
    run_cargo(&["test", "-p", "match_cli"]);
}

fn ci_bench() {
    step("Benchmarks (compile only)");
    run_cargo(&["bench", "-p", "match_core", "--no-run"]);
}

fn bench_performance(extra: &[&str]) {
    let mut args = vec!["bench", "--package", "match_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { data_dir, format } => {
            run_cargo(&[
                "run",
                "-p",
                "match_cli",
                "--release",
                "--",
                "--data-dir",
                &data_dir,
                "--format",
                format.as_arg(),
            ]);
        }
        Commands::Sample { data_dir, seed } => {
            let seed = seed.to_string();
            run_cargo(&[
                "run",
                "-p",
                "match_cli",
                "--",
                "sample",
                "--data-dir",
                &data_dir,
                "--seed",
                &seed,
            ]);
        }
        Commands::Bench => bench_performance(&[]),
        Commands::BenchCompare => {
            let baseline_dir = Path::new("target/criterion");
            if baseline_dir.exists() {
                step("Removing existing benchmark data");
                if let Err(err) = std::fs::remove_dir_all(baseline_dir) {
                    eprintln!("failed to remove target/criterion: {err}");
                    exit(1);
                }
            }

            step("Stashing current changes");
            run_git(&[
                "stash",
                "push",
                "-m",
                "Temporary stash for benchmark comparison",
            ]);

            step("Running benchmark to create baseline");
            bench_performance(&["--save-baseline", "main"]);

            step("Reapplying changes");
            run_git(&["stash", "pop"]);

            step("Running benchmark comparing against baseline");
            bench_performance(&["--baseline", "main"]);

            eprintln!("\nDone! Check the output above to see performance comparison.");
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
