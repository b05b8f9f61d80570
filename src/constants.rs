//! Format constants for HYSPLIT output files
//!
//! Markers, column index tables and column names for the trajectory and
//! particle dump layouts, plus reader defaults.

// =============================================================================
// Trajectory Format
// =============================================================================

/// Token whose presence marks the last header line before data lines
pub const HEADER_MARKER: &str = "PRESSURE";

/// Token whose presence anywhere in a file switches to the extended layout
pub const EXTENDED_MARKER: &str = "AIR_TEMP";

/// Minimum whitespace-separated tokens for a trajectory data line
pub const MIN_TRAJECTORY_TOKENS: usize = 13;

/// Token positions kept from each standard data line.
///
/// Positions 0, 1, 6 and 7 (trajectory number, grid number, minute and
/// forecast hour) are dropped.
pub const STANDARD_COLUMN_INDICES: &[usize] = &[2, 3, 4, 5, 8, 9, 10, 11, 12];

/// Token positions kept from each extended data line
pub const EXTENDED_COLUMN_INDICES: &[usize] = &[
    2, 3, 4, 5, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21,
];

/// Output column count for the standard layout
pub const STANDARD_COLUMN_COUNT: usize = 9;

/// Output column count for the extended layout
pub const EXTENDED_COLUMN_COUNT: usize = 18;

/// Widest row any layout produces
pub const MAX_TRAJECTORY_COLUMNS: usize = EXTENDED_COLUMN_COUNT;

/// Column names for the standard layout
pub const STANDARD_COLUMN_NAMES: &[&str] = &[
    "year",
    "month",
    "day",
    "hour",
    "hour_along",
    "lat",
    "lon",
    "height",
    "pressure",
];

/// Column names for the extended layout
pub const EXTENDED_COLUMN_NAMES: &[&str] = &[
    "year",
    "month",
    "day",
    "hour",
    "hour_along",
    "lat",
    "lon",
    "height",
    "pressure",
    "theta",
    "air_temp",
    "rainfall",
    "mixdepth",
    "rh",
    "sp_humidity",
    "h2o_mixrate",
    "terr_msl",
    "sun_flux",
];

/// Columns converted to integers when building trajectory frames
pub const TRAJECTORY_INTEGER_COLUMNS: &[&str] = &["year", "month", "day", "hour", "hour_along"];

/// Datetime of each trajectory point
pub const TRAJECTORY_DATETIME_COLUMN: &str = "traj_dt";

/// Start datetime of the trajectory, repeated on every row
pub const TRAJECTORY_START_COLUMN: &str = "traj_dt_i";

// =============================================================================
// Particle Dump Format
// =============================================================================

/// Column count of a particle dump table
pub const PARTICLE_COLUMN_COUNT: usize = 4;

/// Column names for particle dump tables
pub const PARTICLE_COLUMN_NAMES: &[&str] = &["particle_i", "lat", "lon", "height"];

// =============================================================================
// Reader Defaults
// =============================================================================

/// Glob for trajectory outputs inside a run directory
pub const DEFAULT_TRAJECTORY_PATTERN: &str = "traj-*";

/// Particle dump file name inside a run directory
pub const DEFAULT_PARDUMP_FILE_NAME: &str = "PARDUMP";

/// Two-digit years below this are 20xx, the rest 19xx
pub const DEFAULT_CENTURY_PIVOT: i32 = 50;

/// Environment overrides for [`crate::config::ReaderConfig`]
pub mod env_vars {
    pub const WORKERS: &str = "HYSPLIT_WORKERS";
    pub const TRAJECTORY_PATTERN: &str = "HYSPLIT_TRAJECTORY_PATTERN";
    pub const PARDUMP_FILE: &str = "HYSPLIT_PARDUMP_FILE";
}
