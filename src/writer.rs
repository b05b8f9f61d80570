//! Writing parsed frames to disk.
//!
//! The output format follows the file extension: `.parquet` or `.csv`.

use crate::config::CompressionAlgorithm;
use crate::error::{HysplitError, Result};
use polars::prelude::{CsvWriter, DataFrame, ParquetWriter, SerWriter};
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Parquet,
    Csv,
}

impl OutputFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_ascii_lowercase();
        match extension.as_str() {
            "parquet" | "pq" => Some(OutputFormat::Parquet),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Write `df` to `path`, creating parent directories as needed.
///
/// Returns the size of the written file in bytes.
pub fn write_frame(
    df: &mut DataFrame,
    path: &Path,
    compression: CompressionAlgorithm,
) -> Result<u64> {
    let format = OutputFormat::from_path(path).ok_or_else(|| HysplitError::UnsupportedOutput {
        path: path.to_path_buf(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    match format {
        OutputFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(compression.to_polars_compression())
                .finish(df)?;
        }
        OutputFormat::Csv => {
            CsvWriter::new(file).include_header(true).finish(df)?;
        }
    }

    let size = fs::metadata(path)?.len();
    debug!(
        "Wrote {} rows to {} ({:?}, {} bytes)",
        df.height(),
        path.display(),
        format,
        size
    );
    Ok(size)
}
