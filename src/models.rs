//! Core data types for HYSPLIT output parsing.
//!
//! Defines the trajectory output layouts, the per-line defect taxonomy and
//! the particle dump record.

use crate::constants::{
    EXTENDED_COLUMN_COUNT, EXTENDED_COLUMN_INDICES, EXTENDED_COLUMN_NAMES, PARTICLE_COLUMN_COUNT,
    STANDARD_COLUMN_COUNT, STANDARD_COLUMN_INDICES, STANDARD_COLUMN_NAMES,
};
use crate::numeric::parse_number;
use crate::tokenizer::Tokens;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column layout of a trajectory file, detected from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputVariant {
    /// Date, age, position and pressure only
    Standard,
    /// Standard plus nine meteorological fields along the path
    Extended,
}

impl OutputVariant {
    /// Pick the layout from whether the extended marker was seen
    pub fn detect(extended_marker_seen: bool) -> Self {
        if extended_marker_seen {
            OutputVariant::Extended
        } else {
            OutputVariant::Standard
        }
    }

    /// Recover the layout from a table's column count
    pub fn from_column_count(cols: usize) -> Option<Self> {
        match cols {
            STANDARD_COLUMN_COUNT => Some(OutputVariant::Standard),
            EXTENDED_COLUMN_COUNT => Some(OutputVariant::Extended),
            _ => None,
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            OutputVariant::Standard => STANDARD_COLUMN_COUNT,
            OutputVariant::Extended => EXTENDED_COLUMN_COUNT,
        }
    }

    /// Token positions read from each data line, in output order
    pub fn column_indices(&self) -> &'static [usize] {
        match self {
            OutputVariant::Standard => STANDARD_COLUMN_INDICES,
            OutputVariant::Extended => EXTENDED_COLUMN_INDICES,
        }
    }

    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            OutputVariant::Standard => STANDARD_COLUMN_NAMES,
            OutputVariant::Extended => EXTENDED_COLUMN_NAMES,
        }
    }
}

/// Why a candidate data line was left out of a table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDefect {
    #[error("line has {found} tokens, need at least {required}")]
    TooFewTokens { found: usize, required: usize },

    #[error("column {index} missing from line with {found} tokens")]
    MissingColumn { index: usize, found: usize },
}

/// One particle position from a particle dump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRow {
    pub particle_id: f64,
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl ParticleRow {
    /// Read the first four tokens of a line, or `None` if there are fewer
    pub fn from_tokens(tokens: &Tokens<'_>) -> Option<Self> {
        if tokens.len() < PARTICLE_COLUMN_COUNT {
            return None;
        }
        Some(Self {
            particle_id: parse_number(tokens.get(0)?),
            lat: parse_number(tokens.get(1)?),
            lon: parse_number(tokens.get(2)?),
            height: parse_number(tokens.get(3)?),
        })
    }

    pub fn to_array(&self) -> [f64; PARTICLE_COLUMN_COUNT] {
        [self.particle_id, self.lat, self.lon, self.height]
    }
}
