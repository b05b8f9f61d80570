//! Command-line argument definitions for the HYSPLIT output parser
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::{CompressionAlgorithm, ReaderConfig};
use crate::constants::{DEFAULT_CENTURY_PIVOT, DEFAULT_TRAJECTORY_PATTERN};
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the HYSPLIT output parser
///
/// Converts HYSPLIT trajectory and particle dump text output into
/// Parquet or CSV tables for analysis.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hysplit-parser",
    version,
    about = "Parse HYSPLIT trajectory and particle dump output into tables",
    long_about = "Reads HYSPLIT trajectory files (standard or extended meteorology) and text \
                  particle dumps, either one file at a time or a whole run directory, and \
                  writes them as Parquet or CSV. Malformed lines are skipped so truncated \
                  runs still yield every complete record."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Read trajectory output (a file or a run directory)
    Trajectory(ReadArgs),
    /// Read particle dump output (a file or a run directory)
    Dispersion(ReadArgs),
    /// Report how much of a single output file is usable
    Inspect(InspectArgs),
}

/// Arguments shared by the trajectory and dispersion commands
#[derive(Debug, Clone, Parser)]
pub struct ReadArgs {
    /// Output file or run directory to read
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Write the table here (.parquet or .csv)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of files parsed concurrently
    #[arg(short = 'w', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Glob for trajectory files inside a run directory
    #[arg(long = "pattern", default_value = DEFAULT_TRAJECTORY_PATTERN)]
    pub pattern: String,

    /// Two-digit years below this are 20xx, the rest 19xx
    #[arg(long = "century-pivot", default_value_t = DEFAULT_CENTURY_PIVOT)]
    pub century_pivot: i32,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long = "compression", default_value = "snappy")]
    pub compression: String,

    /// Rows to print as a preview
    #[arg(long = "preview", default_value_t = 10)]
    pub preview: usize,
}

impl ReadArgs {
    /// Build a reader configuration from defaults, environment and flags
    pub fn to_config(&self, show_progress: bool) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::default()
            .with_env_overrides()?
            .with_century_pivot(self.century_pivot)
            .with_compression(CompressionAlgorithm::from_name(&self.compression)?);

        if self.pattern != DEFAULT_TRAJECTORY_PATTERN {
            config = config.with_trajectory_pattern(self.pattern.clone());
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if show_progress {
            config = config.with_progress();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Output file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat the file as a particle dump instead of a trajectory
    #[arg(long = "pardump")]
    pub pardump: bool,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
