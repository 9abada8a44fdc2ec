//! Cache simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Sweep:** Replay a trace against every configuration of a sweep and write the result table.
//! 2. **Single run:** Replay a trace against one configuration and print its result row.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cachesim_core::common::SimError;
use cachesim_core::config::{
    CacheConfig, DEFAULT_RESULT_FILE, DEFAULT_TRACE_FILE, Placement, SweepConfig, WritePolicy,
};
use cachesim_core::sim::{load_trace, run_sweep, simulate, write_results};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a memory-access trace against one cache configuration or a whole sweep.\n\nTrace lines are `<op> <hex address>`; `write` is a write, any other op a read.\nMalformed lines are skipped. Set RUST_LOG=debug to see them.\n\nExamples:\n  cachesim\n  cachesim sweep --trace gcc.trace --output gcc.result --config sweep.json\n  cachesim run --trace gcc.trace --size 8192 --block 32 --placement 4W --write-policy WB"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full parameter sweep and write one result row per configuration.
    Sweep {
        /// Trace file to replay.
        #[arg(short, long, default_value = DEFAULT_TRACE_FILE)]
        trace: PathBuf,

        /// Result file to write.
        #[arg(short, long, default_value = DEFAULT_RESULT_FILE)]
        output: PathBuf,

        /// JSON sweep description; omitted fields use the built-in sweep.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Simulate a single cache configuration and print its result row.
    Run {
        /// Trace file to replay.
        #[arg(short, long, default_value = DEFAULT_TRACE_FILE)]
        trace: PathBuf,

        /// Cache capacity in bytes.
        #[arg(short, long)]
        size: u64,

        /// Block size in bytes.
        #[arg(short, long)]
        block: u64,

        /// Placement policy (DM, 2W, 4W, FA).
        #[arg(short, long)]
        placement: Placement,

        /// Write policy (WB, WT).
        #[arg(short, long)]
        write_policy: WritePolicy,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Sweep {
            trace,
            output,
            config,
        }) => cmd_sweep(&trace, &output, config.as_deref()),
        Some(Commands::Run {
            trace,
            size,
            block,
            placement,
            write_policy,
        }) => cmd_run(
            &trace,
            &CacheConfig::new(size, block, placement, write_policy),
        ),
        None => cmd_sweep(
            Path::new(DEFAULT_TRACE_FILE),
            Path::new(DEFAULT_RESULT_FILE),
            None,
        ),
    };

    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Runs the sweep over `trace` and writes the result table to `output`.
///
/// Uses the built-in sweep unless `config` names a JSON sweep file.
fn cmd_sweep(trace: &Path, output: &Path, config: Option<&Path>) -> Result<(), SimError> {
    let sweep = match config {
        Some(path) => SweepConfig::from_json(&fs::read_to_string(path)?)?,
        None => SweepConfig::default(),
    };

    let events = load_trace(trace)?;
    let rows = run_sweep(&sweep, &events)?;

    let mut out = BufWriter::new(File::create(output)?);
    write_results(&mut out, &rows)?;
    info!(rows = rows.len(), output = %output.display(), "results written");
    Ok(())
}

/// Replays `trace` against a single configuration and prints the result row.
fn cmd_run(trace: &Path, config: &CacheConfig) -> Result<(), SimError> {
    let events = load_trace(trace)?;
    let row = simulate(config, &events)?;
    println!("{row}");
    Ok(())
}
