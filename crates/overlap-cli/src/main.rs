//! `overlap` CLI: find the days when enough people are free together.
//!
//! ## Usage
//!
//! ```sh
//! # Search a roster (stdin → stdout) with the default 60 min / 2 people
//! overlap find < roster.json
//!
//! # Search from file to file, with explicit thresholds
//! overlap find -i roster.json -o groups.txt --min-duration 45 --min-group-size 3
//!
//! # Thresholds from a TOML file, JSON output, one thread per weekday
//! overlap find -i roster.json --config finder.toml --format json --parallel
//!
//! # Generate a reproducible sample roster
//! overlap sample --count 8 --seed 42 -o roster.json
//! ```
//!
//! Logs go to stderr. `-v` shows info, `-vv` debug, `-vvv` trace; without
//! `-v`, `RUST_LOG` is honored.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use overlap_engine::roster::to_roster_json;
use overlap_engine::{
    run, FinderConfig, GroupFinder, JsonRoster, JsonSink, ParticipantSource, SampleRoster,
    SearchMode, TextSink,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Find common free time across weekly schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find, per weekday, a group with common free time
    Find {
        /// Roster JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// TOML file with min_slot_duration and min_group_size
        #[arg(short, long)]
        config: Option<String>,
        /// Shortest usable free range in minutes (overrides the config file)
        #[arg(long)]
        min_duration: Option<i64>,
        /// Fewest participants that form a group (overrides the config file)
        #[arg(long)]
        min_group_size: Option<usize>,
        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Search the seven weekdays on separate threads
        #[arg(long)]
        parallel: bool,
    },
    /// Generate a random roster as JSON
    Sample {
        /// Number of participants
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// Seed for reproducible output (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            config,
            min_duration,
            min_group_size,
            format,
            parallel,
        } => {
            let config = build_config(config.as_deref(), min_duration, min_group_size)?;
            let finder = GroupFinder::new(config).context("Invalid finder configuration")?;

            let mut source = match input.as_deref() {
                Some(path) => JsonRoster::from_path(path),
                None => JsonRoster::from_reader(io::stdin()).context("Failed to read from stdin")?,
            };

            let mode = if parallel {
                SearchMode::Parallel
            } else {
                SearchMode::Sequential
            };
            let context = || match input.as_deref() {
                Some(path) => format!("Failed to find groups in roster: {}", path),
                None => "Failed to find groups in roster from stdin".to_string(),
            };
            let (days, report) = match format {
                Format::Text => {
                    let mut sink = TextSink::new(Vec::new());
                    let days = run(&mut source, &finder, mode, &mut sink).with_context(context)?;
                    (days, sink.into_inner())
                }
                Format::Json => {
                    let mut sink = JsonSink::new(Vec::new());
                    let days = run(&mut source, &finder, mode, &mut sink).with_context(context)?;
                    (days, sink.into_inner())
                }
            };

            write_output(output.as_deref(), &report)?;
            info!(days, "report written");
        }
        Commands::Sample {
            count,
            seed,
            output,
        } => {
            let seed = seed.unwrap_or_else(rand::random::<u64>);
            info!(count, seed, "generating sample roster");

            let participants = SampleRoster::new(count, seed)
                .load()
                .context("Failed to generate sample roster")?;
            let json = to_roster_json(&participants).context("Failed to serialize roster")?;

            write_output(output.as_deref(), format!("{}\n", json).as_bytes())?;
        }
    }

    Ok(())
}

/// Defaults, then the config file, then explicit flags.
fn build_config(
    path: Option<&str>,
    min_duration: Option<i64>,
    min_group_size: Option<usize>,
) -> Result<FinderConfig> {
    let mut config = match path {
        Some(path) => FinderConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => FinderConfig::default(),
    };
    if let Some(minutes) = min_duration {
        config.min_slot_duration = minutes;
    }
    if let Some(size) = min_group_size {
        config.min_group_size = size;
    }
    Ok(config)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
