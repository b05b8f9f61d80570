//! Configuration management and validation.
//!
//! Settings for the path-level readers: how run directories are searched,
//! how many files are parsed at once, how two-digit years are expanded and
//! how frames are compressed when written.

use crate::constants::{
    DEFAULT_CENTURY_PIVOT, DEFAULT_PARDUMP_FILE_NAME, DEFAULT_TRAJECTORY_PATTERN, env_vars,
};
use crate::error::{HysplitError, Result};
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }

    /// Parse a CLI name such as `zstd` or `none`
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "snappy" => Ok(CompressionAlgorithm::Snappy),
            "zstd" => Ok(CompressionAlgorithm::Zstd),
            "lz4" => Ok(CompressionAlgorithm::Lz4),
            "none" | "uncompressed" => Ok(CompressionAlgorithm::Uncompressed),
            other => Err(HysplitError::configuration(format!(
                "Unknown compression '{}' (expected snappy, zstd, lz4 or none)",
                other
            ))),
        }
    }
}

/// Configuration for reading model output files and directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Number of files parsed concurrently when reading a directory
    pub workers: usize,

    /// Glob matched against file names in a trajectory run directory
    pub trajectory_pattern: String,

    /// Particle dump file name in a dispersion run directory
    pub pardump_file_name: String,

    /// Two-digit years below this are 20xx, the rest 19xx
    pub century_pivot: i32,

    /// Show a progress bar while reading directories
    pub show_progress: bool,

    /// Compression for parquet output
    pub compression: CompressionAlgorithm,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            trajectory_pattern: DEFAULT_TRAJECTORY_PATTERN.to_string(),
            pardump_file_name: DEFAULT_PARDUMP_FILE_NAME.to_string(),
            century_pivot: DEFAULT_CENTURY_PIVOT,
            show_progress: false,
            compression: CompressionAlgorithm::Snappy,
        }
    }
}

impl ReaderConfig {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the trajectory file glob
    pub fn with_trajectory_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.trajectory_pattern = pattern.into();
        self
    }

    /// Set the particle dump file name
    pub fn with_pardump_file_name(mut self, name: impl Into<String>) -> Self {
        self.pardump_file_name = name.into();
        self
    }

    /// Set the two-digit year pivot
    pub fn with_century_pivot(mut self, pivot: i32) -> Self {
        self.century_pivot = pivot;
        self
    }

    /// Enable progress bars
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Set parquet compression
    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Apply overrides from `HYSPLIT_*` environment variables
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var(env_vars::WORKERS) {
            self.workers = value.trim().parse().map_err(|_| {
                HysplitError::configuration(format!(
                    "{} must be a positive integer, got '{}'",
                    env_vars::WORKERS,
                    value
                ))
            })?;
            debug!("Worker count overridden from environment: {}", self.workers);
        }
        if let Ok(value) = std::env::var(env_vars::TRAJECTORY_PATTERN) {
            self.trajectory_pattern = value;
        }
        if let Ok(value) = std::env::var(env_vars::PARDUMP_FILE) {
            self.pardump_file_name = value;
        }
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(HysplitError::configuration("workers must be at least 1"));
        }
        if self.trajectory_pattern.trim().is_empty() {
            return Err(HysplitError::configuration(
                "trajectory_pattern must not be empty",
            ));
        }
        if self.pardump_file_name.trim().is_empty() {
            return Err(HysplitError::configuration(
                "pardump_file_name must not be empty",
            ));
        }
        if !(0..=99).contains(&self.century_pivot) {
            return Err(HysplitError::configuration(format!(
                "century_pivot must be between 0 and 99, got {}",
                self.century_pivot
            )));
        }
        Ok(())
    }

    /// Expand a two-digit year using the century pivot.
    ///
    /// Four-digit years pass through unchanged.
    pub fn expand_year(&self, year: i32) -> i32 {
        if year >= 100 {
            year
        } else if year < self.century_pivot {
            year + 2000
        } else {
            year + 1900
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReaderConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.workers >= 1);
        assert_eq!(config.trajectory_pattern, "traj-*");
        assert_eq!(config.pardump_file_name, "PARDUMP");
    }

    #[test]
    fn test_builder_and_validation() {
        let config = ReaderConfig::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(HysplitError::Configuration { .. })
        ));

        let config = ReaderConfig::default().with_trajectory_pattern("  ");
        assert!(config.validate().is_err());

        let config = ReaderConfig::default().with_century_pivot(150);
        assert!(config.validate().is_err());

        let config = ReaderConfig::default()
            .with_workers(2)
            .with_pardump_file_name("PARDUMP.txt")
            .with_compression(CompressionAlgorithm::Zstd)
            .with_progress();
        assert!(config.validate().is_ok());
        assert!(config.show_progress);
    }

    #[test]
    fn test_expand_year() {
        let config = ReaderConfig::default();
        assert_eq!(config.expand_year(95), 1995);
        assert_eq!(config.expand_year(5), 2005);
        assert_eq!(config.expand_year(49), 2049);
        assert_eq!(config.expand_year(50), 1950);
        assert_eq!(config.expand_year(2021), 2021);
    }

    #[test]
    fn test_compression_names() {
        assert_eq!(
            CompressionAlgorithm::from_name("ZSTD").unwrap(),
            CompressionAlgorithm::Zstd
        );
        assert_eq!(
            CompressionAlgorithm::from_name("none").unwrap(),
            CompressionAlgorithm::Uncompressed
        );
        assert!(CompressionAlgorithm::from_name("brotli").is_err());
    }
}
