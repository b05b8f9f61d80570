//! Command implementations for the HYSPLIT output parser CLI

use crate::cli::args::{Args, Commands, InspectArgs, ReadArgs};
use crate::models::OutputVariant;
use crate::particle::parse_pardump_file_with_stats;
use crate::reader::OutputReader;
use crate::stats::ParseStats;
use crate::table::ParseResult;
use crate::trajectory::parse_trajectory_file_with_stats;
use crate::writer::write_frame;

use anyhow::{Context, Result};
use colored::*;
use polars::prelude::DataFrame;
use std::time::Instant;
use tracing::{debug, info};

/// Which reader a read command drives
#[derive(Debug, Clone, Copy)]
enum OutputKind {
    Trajectory,
    Dispersion,
}

/// Dispatch the parsed command line
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    let show_progress = args.show_progress();

    match args.command {
        Some(Commands::Trajectory(read)) => {
            run_read(&read, OutputKind::Trajectory, show_progress).await
        }
        Some(Commands::Dispersion(read)) => {
            run_read(&read, OutputKind::Dispersion, show_progress).await
        }
        Some(Commands::Inspect(inspect)) => run_inspect(&inspect),
        None => Ok(()),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hysplit_parser={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

async fn run_read(args: &ReadArgs, kind: OutputKind, show_progress: bool) -> Result<()> {
    let start_time = Instant::now();
    let config = args.to_config(show_progress)?;
    let compression = config.compression;
    let reader = OutputReader::new(config)?;

    info!("Reading {:?} output from {}", kind, args.path.display());
    let mut df = match kind {
        OutputKind::Trajectory => reader.read_trajectories(&args.path).await,
        OutputKind::Dispersion => reader.read_dispersion(&args.path).await,
    }
    .with_context(|| format!("Failed to read {}", args.path.display()))?;

    print_frame_summary(&df, args.preview);

    if let Some(output) = &args.output {
        let size = write_frame(&mut df, output, compression)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!(
            "  {} {} ({})",
            "Wrote".bright_green(),
            output.display(),
            format_size(size)
        );
    }

    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        start_time.elapsed().as_millis().to_string().bright_white()
    );
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> Result<()> {
    let (table, stats) = if args.pardump {
        parse_pardump_file_with_stats(&args.file)
    } else {
        parse_trajectory_file_with_stats(&args.file)
    }
    .with_context(|| format!("Failed to inspect {}", args.file.display()))?;

    print_inspect_report(args, &table, &stats);
    Ok(())
}

fn print_frame_summary(df: &DataFrame, preview: usize) {
    println!("{}", "Parsed output".bright_green().bold());
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        df.height().to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Columns:".bright_cyan(),
        df.width().to_string().bright_white()
    );
    if preview > 0 && df.height() > 0 {
        println!("{}", df.head(Some(preview)));
    }
}

fn print_inspect_report(args: &InspectArgs, table: &ParseResult, stats: &ParseStats) {
    println!(
        "{} {}",
        "Inspecting".bright_green().bold(),
        args.file.display()
    );

    if !args.pardump {
        let layout = match OutputVariant::from_column_count(table.cols()) {
            Some(OutputVariant::Standard) => "standard".to_string(),
            Some(OutputVariant::Extended) => "extended meteorology".to_string(),
            None => "unrecognized (no PRESSURE header)".bright_red().to_string(),
        };
        println!("  {} {}", "Layout:".bright_cyan(), layout);
        if let Some(header_line) = stats.header_line {
            println!("  {} {}", "Header line:".bright_cyan(), header_line + 1);
        }
    }

    println!("  {} {}", "Lines read:".bright_cyan(), stats.total_lines);
    println!("  {} {}", "Candidate lines:".bright_cyan(), stats.candidate_lines);
    println!(
        "  {} {} x {}",
        "Table shape:".bright_cyan(),
        table.rows().to_string().bright_white().bold(),
        table.cols()
    );
    if stats.rows_skipped() > 0 {
        println!(
            "  {} {} ({} too short, {} missing columns)",
            "Skipped:".bright_red(),
            stats.rows_skipped().to_string().bright_red().bold(),
            stats.short_lines,
            stats.missing_columns
        );
    }
    println!(
        "  {} {:.1}%",
        "Usable:".bright_cyan(),
        stats.success_rate()
    );
}

/// Format a byte count in human-readable form
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
