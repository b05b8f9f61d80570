//! Trajectory file parsing.
//!
//! A trajectory file is a block of metadata lines ending with the line that
//! names the diagnostic variables (it always contains `PRESSURE`), followed
//! by one line per trajectory point. Files written with extra meteorology
//! list `AIR_TEMP` among the variables and carry nine more fields per line.
//!
//! Every line after the header is a candidate row. Lines that are too short
//! or lack a required field are dropped and counted, so a run killed
//! mid-write still yields all of its complete points.

use crate::constants::{
    EXTENDED_MARKER, HEADER_MARKER, MAX_TRAJECTORY_COLUMNS, MIN_TRAJECTORY_TOKENS,
};
use crate::error::{HysplitError, Result};
use crate::lines::read_all_lines;
use crate::models::{OutputVariant, RowDefect};
use crate::numeric::parse_number;
use crate::stats::ParseStats;
use crate::table::{ParseResult, TableAssembler};
use crate::tokenizer::{TokenBuffer, Tokens};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// What a single pass over the lines found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderScan {
    /// Index of the first line containing the header marker
    pub header_line: Option<usize>,
    /// Whether any line contains the extended marker
    pub extended: bool,
}

impl HeaderScan {
    /// Scan `lines` once for both markers
    pub fn scan<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut header_line = None;
        let mut extended = false;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if header_line.is_none() && line.contains(HEADER_MARKER) {
                header_line = Some(index);
            }
            if !extended && line.contains(EXTENDED_MARKER) {
                extended = true;
            }
        }

        Self {
            header_line,
            extended,
        }
    }

    /// Layout of the data lines, or `None` when there is no header
    pub fn variant(&self) -> Option<OutputVariant> {
        self.header_line.map(|_| OutputVariant::detect(self.extended))
    }
}

/// Parse a trajectory file into a `(rows, 9)` or `(rows, 18)` table.
///
/// A file without a header line gives a `(0, 0)` table. Only failing to open
/// or read the file is an error.
pub fn parse_trajectory_file(path: &Path) -> Result<ParseResult> {
    parse_trajectory_file_with_stats(path).map(|(table, _)| table)
}

/// Like [`parse_trajectory_file`], also returning line counters
pub fn parse_trajectory_file_with_stats(path: &Path) -> Result<(ParseResult, ParseStats)> {
    let file = File::open(path).map_err(|e| HysplitError::unreadable(path, e))?;
    let (table, stats) = parse_trajectory_reader(BufReader::new(file))
        .map_err(|e| HysplitError::unreadable(path, e))?;

    debug!(
        "Parsed trajectory {}: {} rows x {} cols, {} lines skipped",
        path.display(),
        table.rows(),
        table.cols(),
        stats.rows_skipped()
    );

    Ok((table, stats))
}

/// Parse trajectory text from any buffered reader
pub fn parse_trajectory_reader<R: BufRead>(reader: R) -> io::Result<(ParseResult, ParseStats)> {
    let lines = read_all_lines(reader)?;
    Ok(parse_trajectory_lines(&lines))
}

/// Parse trajectory text already split into lines
pub fn parse_trajectory_lines<S: AsRef<str>>(lines: &[S]) -> (ParseResult, ParseStats) {
    let scan = HeaderScan::scan(lines);
    let mut stats = ParseStats {
        total_lines: lines.len(),
        header_line: scan.header_line,
        ..ParseStats::default()
    };

    let (Some(header_line), Some(variant)) = (scan.header_line, scan.variant()) else {
        debug!("No {} header line found, returning empty table", HEADER_MARKER);
        return (ParseResult::empty(0), stats);
    };

    let data_lines = &lines[header_line + 1..];
    let indices = variant.column_indices();
    let mut assembler = TableAssembler::with_capacity(variant.column_count(), data_lines.len());
    let mut tokens = TokenBuffer::with_capacity(indices.len() + 4);
    let mut row = [0.0_f64; MAX_TRAJECTORY_COLUMNS];

    for (offset, line) in data_lines.iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        stats.candidate_lines += 1;

        match extract_row(&tokens.split(line), indices, &mut row) {
            Ok(filled) => {
                assembler.push_row(&row[..filled]);
                stats.rows_accepted += 1;
            }
            Err(defect) => {
                trace!("Skipping line {}: {}", header_line + 1 + offset, defect);
                stats.record_defect(defect);
            }
        }
    }

    (assembler.finish(), stats)
}

/// Convert the tokens at `indices` into `row`.
///
/// Returns how many values were written. Nothing partial is ever committed:
/// on a defect the caller discards `row`.
pub fn extract_row(
    tokens: &Tokens<'_>,
    indices: &[usize],
    row: &mut [f64],
) -> std::result::Result<usize, RowDefect> {
    if tokens.len() < MIN_TRAJECTORY_TOKENS {
        return Err(RowDefect::TooFewTokens {
            found: tokens.len(),
            required: MIN_TRAJECTORY_TOKENS,
        });
    }

    let mut filled = 0;
    for (slot, &index) in row.iter_mut().zip(indices) {
        let token = tokens.get(index).ok_or(RowDefect::MissingColumn {
            index,
            found: tokens.len(),
        })?;
        *slot = parse_number(token);
        filled += 1;
    }

    Ok(filled)
}
