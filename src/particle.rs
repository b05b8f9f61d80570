//! Particle dump parsing.
//!
//! Text particle dumps have no header: every non-empty line with at least
//! four fields is a `(particle id, lat, lon, height)` record. Lines are
//! streamed, so large dumps never sit in memory as text.

use crate::constants::PARTICLE_COLUMN_COUNT;
use crate::error::{HysplitError, Result};
use crate::lines::LineReader;
use crate::models::{ParticleRow, RowDefect};
use crate::stats::ParseStats;
use crate::table::{ParseResult, TableAssembler};
use crate::tokenizer::TokenBuffer;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Parse a particle dump into a `(rows, 4)` table
pub fn parse_pardump_file(path: &Path) -> Result<ParseResult> {
    parse_pardump_file_with_stats(path).map(|(table, _)| table)
}

/// Like [`parse_pardump_file`], also returning line counters
pub fn parse_pardump_file_with_stats(path: &Path) -> Result<(ParseResult, ParseStats)> {
    let file = File::open(path).map_err(|e| HysplitError::unreadable(path, e))?;
    let (table, stats) = parse_pardump_reader(BufReader::new(file))
        .map_err(|e| HysplitError::unreadable(path, e))?;

    debug!(
        "Parsed particle dump {}: {} particles, {} lines skipped",
        path.display(),
        table.rows(),
        stats.rows_skipped()
    );

    Ok((table, stats))
}

/// Parse particle dump text from any buffered reader
pub fn parse_pardump_reader<R: BufRead>(reader: R) -> io::Result<(ParseResult, ParseStats)> {
    let mut lines = LineReader::new(reader);
    let mut tokens = TokenBuffer::with_capacity(8);
    let mut assembler = TableAssembler::new(PARTICLE_COLUMN_COUNT);
    let mut stats = ParseStats::new();

    while let Some(line) = lines.next_line()? {
        stats.total_lines += 1;
        if line.is_empty() {
            continue;
        }
        stats.candidate_lines += 1;

        let split = tokens.split(&line);
        match ParticleRow::from_tokens(&split) {
            Some(particle) => {
                assembler.push_row(&particle.to_array());
                stats.rows_accepted += 1;
            }
            None => {
                let defect = RowDefect::TooFewTokens {
                    found: split.len(),
                    required: PARTICLE_COLUMN_COUNT,
                };
                trace!("Skipping line {}: {}", stats.total_lines - 1, defect);
                stats.record_defect(defect);
            }
        }
    }

    Ok((assembler.finish(), stats))
}
