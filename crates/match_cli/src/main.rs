use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::error;
use match_core::config::{RunConfig, DEFAULT_DATA_DIR};
use match_core::records::{LoadOptions, MalformedRowPolicy};
use match_core::render::OutputFormat;
use match_core::runner::{run, EXIT_FAILURE};
use match_core::sample::write_sample_data;

/// Set by web servers when the program is invoked as a CGI script.
const CGI_REQUEST_ENV: &str = "REQUEST_METHOD";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_match",
    about = "Match riders to the nearest driver with free seats",
    long_about = "Loads drivers and riders from whitespace-delimited files, assigns each rider\n\
                  to the closest driver that still has room, and prints the matches.\n\
                  Emits JSON with a Content-Type header when REQUEST_METHOD is set."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Write randomised sample drivers.txt and riders.txt
    Sample {
        /// Directory to write into
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Directory holding drivers.txt and riders.txt
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Drivers file (overrides --data-dir)
    #[arg(long)]
    drivers: Option<PathBuf>,
    /// Riders file (overrides --data-dir)
    #[arg(long)]
    riders: Option<PathBuf>,
    /// Output format; defaults to http-json under CGI, text otherwise
    #[arg(value_enum, long)]
    format: Option<FormatArg>,
    /// Skip malformed rows instead of stopping at the first one
    #[arg(long)]
    skip_malformed: bool,
    /// Treat out-of-range coordinates as malformed rows
    #[arg(long)]
    validate_coordinates: bool,
    /// Any value means we were invoked as a CGI script
    #[arg(long, env = CGI_REQUEST_ENV, hide = true)]
    request_method: Option<OsString>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    HttpJson,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::HttpJson => OutputFormat::HttpJson,
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

/// An explicit `--format` wins; otherwise a CGI invocation gets JSON.
fn resolve_format(explicit: Option<FormatArg>, cgi_request: bool) -> OutputFormat {
    match explicit {
        Some(format) => format.into(),
        None if cgi_request => OutputFormat::HttpJson,
        None => OutputFormat::Text,
    }
}

fn build_config(args: RunArgs) -> RunConfig {
    let cgi_request = args.request_method.is_some();
    let mut config = RunConfig::from_data_dir(&args.data_dir)
        .with_format(resolve_format(args.format, cgi_request))
        .with_load_options(LoadOptions {
            on_malformed: if args.skip_malformed {
                MalformedRowPolicy::Skip
            } else {
                MalformedRowPolicy::Truncate
            },
            validate_coordinates: args.validate_coordinates,
        });
    if let Some(path) = args.drivers {
        config = config.with_drivers_path(path);
    }
    if let Some(path) = args.riders {
        config = config.with_riders_path(path);
    }
    config
}

fn run_matching(args: RunArgs) -> i32 {
    let config = build_config(args);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            error!("{err}");
            EXIT_FAILURE
        }
    }
}

fn run_sample(data_dir: PathBuf, seed: u64) -> i32 {
    match write_sample_data(&data_dir, seed) {
        Ok(summary) => {
            let _ = writeln!(
                io::stdout(),
                "Wrote {} drivers and {} riders to {}",
                summary.drivers,
                summary.riders,
                data_dir.display()
            );
            0
        }
        Err(err) => {
            error!("failed to write sample data to {}: {err}", data_dir.display());
            EXIT_FAILURE
        }
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let code = match cli.command {
        Some(Commands::Sample { data_dir, seed }) => run_sample(data_dir, seed),
        None => run_matching(cli.run),
    };
    exit(code);
}
