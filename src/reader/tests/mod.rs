//! Tests for the path-level readers
//!
//! Each test builds a throwaway run directory with synthetic output files.

use std::fs;
use std::path::Path;

mod directory_reading;

/// Header block of a standard trajectory file
pub const STANDARD_HEADER: &str = "     1     1
    EDAS     95    10    16     0     0
     1 BACKWARD OMEGA
    95    10    16     0    40.000    -90.000    500.0
     1 PRESSURE
";

/// Header block of a trajectory file with extra meteorology
pub const EXTENDED_HEADER: &str = "     1     1
    EDAS     95    10    16     0     0
     1 BACKWARD OMEGA
    95    10    16     0    40.000    -90.000    500.0
     9 PRESSURE THETA    AIR_TEMP RAINFALL MIXDEPTH RELHUMID SPCHUMID H2OMIXRA TERR_MSL SUN_FLUX
";

/// A standard data line for hour `hour` going back `age` hours
pub fn standard_line(hour: u32, age: f64) -> String {
    format!(
        "     1     1    95    10    16 {hour:5}     0     0 {age:7.1}   40.000  -90.000    500.0    955.8"
    )
}

/// An extended data line for hour `hour` going back `age` hours
pub fn extended_line(hour: u32, age: f64) -> String {
    format!(
        "{} 301.2 288.1 0.0 812.4 65.0 0.0081 8.1 177.0 412.5",
        standard_line(hour, age)
    )
}

/// Write a trajectory file from a header and data lines
pub fn write_trajectory(path: &Path, header: &str, lines: &[String]) {
    let mut content = header.to_string();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}
