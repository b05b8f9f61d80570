//! Path-level readers for model output.
//!
//! A trajectory run directory holds one `traj-*` file per trajectory; a
//! dispersion run directory holds a `PARDUMP` file. These readers accept
//! either a single file or such a directory and return named frames.
//! Files of one directory are parsed concurrently on the blocking pool;
//! each individual file is still parsed by a single thread.

use crate::config::ReaderConfig;
use crate::error::{HysplitError, Result};
use crate::frame::{empty_particle_frame, particle_frame, trajectory_frame};
use crate::particle::parse_pardump_file;
use crate::trajectory::parse_trajectory_file;

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, info, warn};

/// Reads trajectory and particle dump output from files or run directories
#[derive(Debug, Clone, Default)]
pub struct OutputReader {
    config: ReaderConfig,
}

impl OutputReader {
    /// Create a reader after validating `config`
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read one trajectory file, or every matching file in a directory.
    ///
    /// Directory files are read in name order and concatenated; files that
    /// yield no rows are dropped, and mixed standard/extended files fill the
    /// missing meteorology columns with nulls.
    pub async fn read_trajectories(&self, path: &Path) -> Result<DataFrame> {
        if path.is_file() {
            let table = parse_blocking(path.to_path_buf(), parse_trajectory_file).await?;
            return trajectory_frame(&table, &self.config);
        }
        if !path.is_dir() {
            return Err(HysplitError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        let files = self.discover_trajectory_files(path)?;
        if files.is_empty() {
            warn!(
                "No files matching '{}' in {}",
                self.config.trajectory_pattern,
                path.display()
            );
            return Ok(DataFrame::empty());
        }
        info!(
            "Reading {} trajectory files from {}",
            files.len(),
            path.display()
        );

        let progress = self.progress_bar(files.len() as u64);
        let tables: Vec<Result<_>> = stream::iter(files)
            .map(|file| {
                let progress = progress.clone();
                async move {
                    let table = parse_blocking(file, parse_trajectory_file).await;
                    progress.inc(1);
                    table
                }
            })
            .buffered(self.config.workers)
            .collect()
            .await;
        progress.finish_and_clear();

        let mut frames = Vec::new();
        for table in tables {
            let table = table?;
            if table.is_empty() {
                continue;
            }
            frames.push(trajectory_frame(&table, &self.config)?.lazy());
        }

        debug!("{} trajectory files contained data", frames.len());
        if frames.is_empty() {
            return Ok(DataFrame::empty());
        }

        Ok(concat_lf_diagonal(frames, UnionArgs::default())?.collect()?)
    }

    /// Read a particle dump file, or the dump inside a run directory.
    ///
    /// A directory without a dump yields an empty four-column frame.
    pub async fn read_dispersion(&self, path: &Path) -> Result<DataFrame> {
        let file = if path.is_file() {
            path.to_path_buf()
        } else if path.is_dir() {
            let candidate = path.join(&self.config.pardump_file_name);
            if !candidate.is_file() {
                warn!("No {} in {}", self.config.pardump_file_name, path.display());
                return empty_particle_frame();
            }
            candidate
        } else {
            return Err(HysplitError::PathNotFound {
                path: path.to_path_buf(),
            });
        };

        let table = parse_blocking(file, parse_pardump_file).await?;
        particle_frame(&table)
    }

    /// List files in `dir` whose names match the trajectory pattern, sorted
    pub fn discover_trajectory_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let pattern = dir.join(&self.config.trajectory_pattern);
        let pattern_str = pattern.to_string_lossy();
        debug!("Searching for trajectory files with pattern: {}", pattern_str);

        let entries = glob::glob(&pattern_str).map_err(|e| HysplitError::InvalidPattern {
            pattern: self.config.trajectory_pattern.clone(),
            reason: e.to_string(),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        Ok(files)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar
    }
}

/// Run a synchronous file parser on the blocking pool
async fn parse_blocking<T, F>(path: PathBuf, parse: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Path) -> Result<T> + Send + 'static,
{
    task::spawn_blocking(move || parse(&path))
        .await
        .map_err(|e| HysplitError::TaskFailed {
            reason: e.to_string(),
        })?
}

#[cfg(test)]
mod tests;
