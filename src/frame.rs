//! Conversion of parsed tables into named polars frames.

use crate::config::ReaderConfig;
use crate::constants::{
    PARTICLE_COLUMN_COUNT, PARTICLE_COLUMN_NAMES, TRAJECTORY_DATETIME_COLUMN,
    TRAJECTORY_INTEGER_COLUMNS, TRAJECTORY_START_COLUMN,
};
use crate::error::{HysplitError, Result};
use crate::models::OutputVariant;
use crate::table::ParseResult;
use chrono::NaiveDate;
use polars::prelude::*;

/// Build a trajectory frame with named columns.
///
/// Date and age columns become integers, two-digit years are expanded, and
/// `traj_dt` / `traj_dt_i` hold the point and start datetimes. A table with
/// no recognized layout (no header) becomes an empty frame.
pub fn trajectory_frame(table: &ParseResult, config: &ReaderConfig) -> Result<DataFrame> {
    if table.cols() == 0 {
        return Ok(DataFrame::empty());
    }
    let variant = OutputVariant::from_column_count(table.cols())
        .ok_or(HysplitError::UnsupportedShape { cols: table.cols() })?;

    let mut columns = Vec::with_capacity(variant.column_count() + 2);
    let mut years = Vec::new();
    let mut months = Vec::new();
    let mut days = Vec::new();
    let mut hours = Vec::new();

    for (index, &name) in variant.column_names().iter().enumerate() {
        let values = table.column(index).unwrap_or_default();
        if !TRAJECTORY_INTEGER_COLUMNS.contains(&name) {
            columns.push(Column::new(name.into(), values));
            continue;
        }

        let mut integers: Vec<i32> = values.iter().map(|v| *v as i32).collect();
        match name {
            "year" => {
                for year in integers.iter_mut() {
                    *year = config.expand_year(*year);
                }
                years = integers.clone();
            }
            "month" => months = integers.clone(),
            "day" => days = integers.clone(),
            "hour" => hours = integers.clone(),
            _ => {}
        }
        columns.push(Column::new(name.into(), integers));
    }

    let timestamps: Vec<Option<i64>> = years
        .iter()
        .zip(&months)
        .zip(&days)
        .zip(&hours)
        .map(|(((&year, &month), &day), &hour)| timestamp_millis(year, month, day, hour))
        .collect();
    let start = vec![timestamps.first().copied().flatten(); timestamps.len()];

    columns.push(datetime_column(TRAJECTORY_DATETIME_COLUMN, timestamps)?);
    columns.push(datetime_column(TRAJECTORY_START_COLUMN, start)?);

    Ok(DataFrame::new(columns)?)
}

/// Build a particle frame with `particle_i, lat, lon, height` columns
pub fn particle_frame(table: &ParseResult) -> Result<DataFrame> {
    if table.cols() != PARTICLE_COLUMN_COUNT {
        return Err(HysplitError::UnsupportedShape { cols: table.cols() });
    }

    let columns = PARTICLE_COLUMN_NAMES
        .iter()
        .enumerate()
        .map(|(index, &name)| {
            Column::new(name.into(), table.column(index).unwrap_or_default())
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// An empty particle frame that still carries the four columns
pub fn empty_particle_frame() -> Result<DataFrame> {
    particle_frame(&ParseResult::empty(PARTICLE_COLUMN_COUNT))
}

/// Milliseconds since the epoch, or `None` for an impossible date
fn timestamp_millis(year: i32, month: i32, day: i32, hour: i32) -> Option<i64> {
    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let datetime = date.and_hms_opt(u32::try_from(hour).ok()?, 0, 0)?;
    Some(datetime.and_utc().timestamp_millis())
}

fn datetime_column(name: &str, millis: Vec<Option<i64>>) -> Result<Column> {
    let series = Series::new(name.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    Ok(Column::from(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableAssembler;

    fn standard_table() -> ParseResult {
        let mut assembler = TableAssembler::new(9);
        assembler.push_row(&[95.0, 10.0, 16.0, 0.0, 0.0, 40.0, -90.0, 500.0, 955.8]);
        assembler.push_row(&[95.0, 10.0, 15.0, 23.0, -1.0, 40.1, -90.4, 512.3, 952.1]);
        assembler.finish()
    }

    #[test]
    fn test_standard_trajectory_frame() {
        let df = trajectory_frame(&standard_table(), &ReaderConfig::default()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 11);
        assert_eq!(df.column("year").unwrap().dtype(), &DataType::Int32);
        assert_eq!(df.column("lat").unwrap().dtype(), &DataType::Float64);

        let years: Vec<Option<i32>> = df
            .column("year")
            .unwrap()
            .as_materialized_series()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(years, vec![Some(1995), Some(1995)]);

        let hour_along: Vec<Option<i32>> = df
            .column("hour_along")
            .unwrap()
            .as_materialized_series()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(hour_along, vec![Some(0), Some(-1)]);
    }

    #[test]
    fn test_datetime_columns() {
        let df = trajectory_frame(&standard_table(), &ReaderConfig::default()).unwrap();

        let point = df.column(TRAJECTORY_DATETIME_COLUMN).unwrap();
        assert!(matches!(
            point.dtype(),
            DataType::Datetime(TimeUnit::Milliseconds, None)
        ));
        assert_eq!(point.null_count(), 0);

        let expected_start = timestamp_millis(1995, 10, 16, 0);
        let expected_second = timestamp_millis(1995, 10, 15, 23);
        let physical: Vec<Option<i64>> = point
            .cast(&DataType::Int64)
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(physical, vec![expected_start, expected_second]);

        let start: Vec<Option<i64>> = df
            .column(TRAJECTORY_START_COLUMN)
            .unwrap()
            .cast(&DataType::Int64)
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(start, vec![expected_start, expected_start]);
    }

    #[test]
    fn test_invalid_date_becomes_null() {
        let mut assembler = TableAssembler::new(9);
        assembler.push_row(&[95.0, 13.0, 40.0, 0.0, 0.0, 40.0, -90.0, 500.0, 955.8]);
        let df = trajectory_frame(&assembler.finish(), &ReaderConfig::default()).unwrap();

        assert_eq!(df.column(TRAJECTORY_DATETIME_COLUMN).unwrap().null_count(), 1);
    }

    #[test]
    fn test_extended_frame_has_meteorology_columns() {
        let mut assembler = TableAssembler::new(18);
        assembler.push_row(&[5.0; 18]);
        let df = trajectory_frame(&assembler.finish(), &ReaderConfig::default()).unwrap();

        assert_eq!(df.width(), 20);
        assert!(df.column("air_temp").is_ok());
        assert!(df.column("sun_flux").is_ok());
        let years: Vec<Option<i32>> = df
            .column("year")
            .unwrap()
            .as_materialized_series()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(years, vec![Some(2005)]);
    }

    #[test]
    fn test_empty_tables() {
        let df = trajectory_frame(&ParseResult::empty(0), &ReaderConfig::default()).unwrap();
        assert_eq!(df.shape(), (0, 0));

        let df = trajectory_frame(&ParseResult::empty(9), &ReaderConfig::default()).unwrap();
        assert_eq!(df.shape(), (0, 11));

        let df = empty_particle_frame().unwrap();
        assert_eq!(df.shape(), (0, 4));
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let result = trajectory_frame(&ParseResult::empty(5), &ReaderConfig::default());
        assert!(matches!(
            result,
            Err(HysplitError::UnsupportedShape { cols: 5 })
        ));

        let result = particle_frame(&ParseResult::empty(9));
        assert!(matches!(
            result,
            Err(HysplitError::UnsupportedShape { cols: 9 })
        ));
    }

    #[test]
    fn test_particle_frame() {
        let mut assembler = TableAssembler::new(4);
        assembler.push_row(&[1.0, 42.0, -80.0, 100.0]);
        let df = particle_frame(&assembler.finish()).unwrap();

        assert_eq!(df.shape(), (1, 4));
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["particle_i", "lat", "lon", "height"]);
    }
}
