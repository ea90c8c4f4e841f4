// crates/mstat-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use mstat_core::io::{read_table_csv, write_table_auto};
use mstat_massif::io::{parse_file, write_snapshots_auto};
use mstat_stats::{compare_profiles, compare_total, group_stats, histogram, stats_report, ProfileColumns};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "mstat",
    about = "Massif report parsing and benchmark CSV statistics",
    long_about = "Massif report parsing and benchmark CSV statistics.\n\nParse Valgrind massif snapshot text into CSV, summarize numeric CSV columns, and compare two runs. Outputs ending in .json are written as JSON records; anything else is CSV.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    /// TOML config with column names, profile labels, and histogram bins
    #[arg(long, global = true, env = "MSTAT_CONFIG")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace) when RUST_LOG is unset
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse a massif snapshot report into a six-column table
    Massif {
        /// Path to the massif output text
        input: PathBuf,
        /// Path for the parsed table (CSV, or JSON by extension)
        output: PathBuf,
    },

    /// Statistics for every numeric column of two CSV files, side by side
    Stats {
        /// First CSV file
        input1: PathBuf,
        /// Second CSV file
        input2: PathBuf,
        /// Output path
        output: PathBuf,
    },

    /// Compare the total-bytes column of two CSV files
    CompareTotal {
        /// First CSV file (baseline)
        input1: PathBuf,
        /// Second CSV file
        input2: PathBuf,
        /// Output path
        output: PathBuf,
        /// Column to compare [config: columns.total]
        #[arg(long)]
        column: Option<String>,
    },

    /// Per-thread duration statistics, with an optional histogram table
    ThreadStats {
        /// Input CSV
        #[arg(long, default_value = "results.csv")]
        input: PathBuf,
        /// Output path
        #[arg(long, default_value = "thread_stats.csv")]
        output: PathBuf,
        /// Grouping column [config: columns.group]
        #[arg(long)]
        group_column: Option<String>,
        /// Value column [config: columns.duration]
        #[arg(long)]
        value_column: Option<String>,
        /// Also write per-thread histogram bin counts here
        #[arg(long)]
        histogram: Option<PathBuf>,
        /// Histogram bins [config: histogram.bins]
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        bins: Option<u32>,
    },

    /// Compare duration and visited-node statistics of two implementations
    CompareProfiles {
        /// CSV for the old implementation
        old: PathBuf,
        /// CSV for the new implementation
        new: PathBuf,
        /// Output path
        output: PathBuf,
        /// Label for the old input [config: profiles.old_label]
        #[arg(long)]
        old_label: Option<String>,
        /// Label for the new input [config: profiles.new_label]
        #[arg(long)]
        new_label: Option<String>,
        /// Duration column [config: columns.duration]
        #[arg(long)]
        duration_column: Option<String>,
        /// Visited-nodes column [config: columns.visited]
        #[arg(long)]
        visited_column: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = Config::load(cli.config.as_deref())?;
    match cli.cmd {
        Cmd::Massif { input, output } => massif(&input, &output),

        Cmd::Stats {
            input1,
            input2,
            output,
        } => stats(&input1, &input2, &output),

        Cmd::CompareTotal {
            input1,
            input2,
            output,
            column,
        } => {
            let column = column.unwrap_or(cfg.columns.total);
            total(&input1, &input2, &output, &column)
        }

        Cmd::ThreadStats {
            input,
            output,
            group_column,
            value_column,
            histogram,
            bins,
        } => {
            let group = group_column.unwrap_or(cfg.columns.group);
            let value = value_column.unwrap_or(cfg.columns.duration);
            let bins = bins.map_or(cfg.histogram.bins, |b| b as usize);
            thread_stats(&input, &output, &group, &value, histogram.as_deref(), bins)
        }

        Cmd::CompareProfiles {
            old,
            new,
            output,
            old_label,
            new_label,
            duration_column,
            visited_column,
        } => {
            let cols = ProfileColumns {
                duration: duration_column.unwrap_or(cfg.columns.duration),
                visited: visited_column.unwrap_or(cfg.columns.visited),
            };
            let old_label = old_label.unwrap_or(cfg.profiles.old_label);
            let new_label = new_label.unwrap_or(cfg.profiles.new_label);
            profiles(&old, &new, &output, &cols, (&old_label, &new_label))
        }
    }
}

/// Initialize tracing on stderr with an env-driven filter (default INFO).
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let fallback = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn massif(input: &Path, output: &Path) -> Result<()> {
    info!(input=%input.display(), output=%output.display(), "parsing massif report");
    let table = parse_file(input)?;
    write_snapshots_auto(output, &table)
        .with_context(|| format!("writing snapshots to {}", output.display()))?;

    info!(records = table.len(), "massif report parsed");
    println!("Parsed data saved to {}", output.display());
    Ok(())
}

fn stats(input1: &Path, input2: &Path, output: &Path) -> Result<()> {
    println!("Processing {}...", input1.display());
    let a = read_table_csv(input1)?;
    println!("Processing {}...", input2.display());
    let b = read_table_csv(input2)?;

    let report = stats_report(&a, &b)
        .with_context(|| format!("comparing {} with {}", input1.display(), input2.display()))?;
    write_table_auto(output, &report)
        .with_context(|| format!("writing statistics to {}", output.display()))?;

    println!("Statistics saved to {}", output.display());
    Ok(())
}

fn total(input1: &Path, input2: &Path, output: &Path, column: &str) -> Result<()> {
    info!(input1=%input1.display(), input2=%input2.display(), column, "comparing column");
    let a = read_table_csv(input1)?;
    let b = read_table_csv(input2)?;

    let report = compare_total(&a, &b, column)
        .with_context(|| format!("comparing {} with {}", input1.display(), input2.display()))?;
    write_table_auto(output, &report)
        .with_context(|| format!("writing comparison to {}", output.display()))?;

    println!("Statistics and comparison saved to {}", output.display());
    Ok(())
}

fn thread_stats(
    input: &Path,
    output: &Path,
    group: &str,
    value: &str,
    histogram_out: Option<&Path>,
    bins: usize,
) -> Result<()> {
    info!(input=%input.display(), group, value, "per-thread statistics");
    let table = read_table_csv(input)?;

    let report = group_stats(&table, group, value)
        .with_context(|| format!("grouping {} by '{group}'", input.display()))?;
    println!("Statistical Summary:");
    print!("{}", render::aligned(&report));

    if let Some(path) = histogram_out {
        let groups = table.group_by(group, value)?;
        let hist = histogram(&groups, bins).context("building histogram")?;
        write_table_auto(path, &hist)
            .with_context(|| format!("writing histogram to {}", path.display()))?;
        println!("\nHistogram ({bins} bins) saved to {}", path.display());
    }

    write_table_auto(output, &report)
        .with_context(|| format!("writing statistics to {}", output.display()))?;
    println!("\nStatistical data saved to {}", output.display());
    Ok(())
}

fn profiles(
    old: &Path,
    new: &Path,
    output: &Path,
    cols: &ProfileColumns,
    labels: (&str, &str),
) -> Result<()> {
    info!(old=%old.display(), new=%new.display(), ?labels, "comparing profiles");
    let a = read_table_csv(old)?;
    let b = read_table_csv(new)?;

    let report = compare_profiles(&a, &b, cols, labels)
        .with_context(|| format!("comparing {} with {}", old.display(), new.display()))?;
    write_table_auto(output, &report)
        .with_context(|| format!("writing profile comparison to {}", output.display()))?;

    println!("Statistical results saved to {}", output.display());
    Ok(())
}
