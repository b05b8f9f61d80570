use clap::Parser;
use hysplit_parser::HysplitError;
use hysplit_parser::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(HysplitError::interrupted("Interrupted by user").into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HYSPLIT Parser - trajectory and particle dump output reader");
    println!("===========================================================");
    println!();
    println!("USAGE:");
    println!("    hysplit-parser <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    trajectory  Read a trajectory file or a directory of traj-* files");
    println!("    dispersion  Read a particle dump file or a run directory's PARDUMP");
    println!("    inspect     Report layout and skipped lines for a single file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    hysplit-parser trajectory ./runs/2023-07 -o trajectories.parquet");
    println!("    hysplit-parser dispersion ./runs/plume -o particles.csv");
    println!("    hysplit-parser inspect ./runs/2023-07/traj-001");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hysplit-parser <COMMAND> --help");
}
