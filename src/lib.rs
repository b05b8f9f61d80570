//! HYSPLIT Output Parser Library
//!
//! Fast, forgiving parsing of the text output written by the HYSPLIT
//! atmospheric transport model into dense numeric tables.
//!
//! This library provides tools for:
//! - Parsing trajectory files in the standard or extended-meteorology layout
//! - Parsing text particle dumps into `(id, lat, lon, height)` tables
//! - Skipping malformed lines without failing the whole file
//! - Reading whole run directories in parallel into polars frames
//! - Writing results as Parquet or CSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hysplit_parser::parse_trajectory_file;
//! use std::path::Path;
//!
//! # fn example() -> hysplit_parser::Result<()> {
//! let table = parse_trajectory_file(Path::new("traj-001"))?;
//! let (rows, cols) = table.shape();
//! println!("{} points, {} columns", rows, cols);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod lines;
pub mod models;
pub mod numeric;
pub mod particle;
pub mod reader;
pub mod stats;
pub mod table;
pub mod tokenizer;
pub mod trajectory;
pub mod writer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{CompressionAlgorithm, ReaderConfig};
pub use error::{HysplitError, Result};
pub use models::{OutputVariant, ParticleRow, RowDefect};
pub use numeric::parse_number;
pub use particle::{parse_pardump_file, parse_pardump_file_with_stats};
pub use reader::OutputReader;
pub use stats::ParseStats;
pub use table::{ParseResult, TableAssembler};
pub use tokenizer::{TokenBuffer, Tokens};
pub use trajectory::{parse_trajectory_file, parse_trajectory_file_with_stats};
