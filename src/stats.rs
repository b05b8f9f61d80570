//! Per-call parsing statistics
//!
//! Skipped lines are not errors, but callers that want to know how much of
//! a file was usable can ask for these counters alongside the table.

use crate::models::RowDefect;
use serde::{Deserialize, Serialize};

/// Counters collected while parsing one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Lines read from the file
    pub total_lines: usize,

    /// Zero-based index of the header marker line, for trajectory files
    pub header_line: Option<usize>,

    /// Non-empty lines considered as data
    pub candidate_lines: usize,

    /// Rows that made it into the table
    pub rows_accepted: usize,

    /// Candidate lines with too few tokens
    pub short_lines: usize,

    /// Candidate lines missing a required column
    pub missing_columns: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a dropped line under its reason
    pub fn record_defect(&mut self, defect: RowDefect) {
        match defect {
            RowDefect::TooFewTokens { .. } => self.short_lines += 1,
            RowDefect::MissingColumn { .. } => self.missing_columns += 1,
        }
    }

    /// Candidate lines dropped for any reason
    pub fn rows_skipped(&self) -> usize {
        self.short_lines + self.missing_columns
    }

    /// Accepted rows as a percentage of candidate lines
    pub fn success_rate(&self) -> f64 {
        if self.candidate_lines == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.candidate_lines as f64) * 100.0
        }
    }

    /// Whether every candidate line was accepted
    pub fn is_clean(&self) -> bool {
        self.rows_skipped() == 0
    }
}
