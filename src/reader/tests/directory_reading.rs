//! Directory and single-file reading

use super::*;
use crate::config::ReaderConfig;
use crate::reader::OutputReader;
use polars::prelude::*;
use tempfile::TempDir;

fn reader() -> OutputReader {
    OutputReader::new(ReaderConfig::default().with_workers(2)).unwrap()
}

fn hour_along(df: &DataFrame) -> Vec<Option<i32>> {
    df.column("hour_along")
        .unwrap()
        .as_materialized_series()
        .i32()
        .unwrap()
        .into_iter()
        .collect()
}

#[tokio::test]
async fn test_single_trajectory_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("traj-single");
    write_trajectory(
        &file,
        STANDARD_HEADER,
        &[standard_line(0, 0.0), standard_line(23, -1.0)],
    );

    let df = reader().read_trajectories(&file).await.unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(hour_along(&df), vec![Some(0), Some(-1)]);
}

#[tokio::test]
async fn test_directory_files_concatenated_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    write_trajectory(
        &temp_dir.path().join("traj-b"),
        STANDARD_HEADER,
        &[standard_line(0, -10.0)],
    );
    write_trajectory(
        &temp_dir.path().join("traj-a"),
        STANDARD_HEADER,
        &[standard_line(0, 0.0), standard_line(23, -1.0)],
    );
    write_trajectory(
        &temp_dir.path().join("traj-c"),
        STANDARD_HEADER,
        &[standard_line(0, -20.0)],
    );
    // Not a trajectory output
    fs::write(temp_dir.path().join("CONTROL"), "1 PRESSURE\n").unwrap();

    let df = reader().read_trajectories(temp_dir.path()).await.unwrap();

    assert_eq!(df.height(), 4);
    assert_eq!(
        hour_along(&df),
        vec![Some(0), Some(-1), Some(-10), Some(-20)]
    );
}

#[tokio::test]
async fn test_directory_drops_files_without_rows() {
    let temp_dir = TempDir::new().unwrap();
    write_trajectory(
        &temp_dir.path().join("traj-1"),
        STANDARD_HEADER,
        &[standard_line(0, 0.0)],
    );
    fs::write(temp_dir.path().join("traj-2"), "no header here\n").unwrap();
    write_trajectory(&temp_dir.path().join("traj-3"), STANDARD_HEADER, &[]);

    let df = reader().read_trajectories(temp_dir.path()).await.unwrap();

    assert_eq!(df.height(), 1);
}

#[tokio::test]
async fn test_mixed_layouts_fill_missing_columns() {
    let temp_dir = TempDir::new().unwrap();
    write_trajectory(
        &temp_dir.path().join("traj-1"),
        STANDARD_HEADER,
        &[standard_line(0, 0.0)],
    );
    write_trajectory(
        &temp_dir.path().join("traj-2"),
        EXTENDED_HEADER,
        &[extended_line(0, 0.0)],
    );

    let df = reader().read_trajectories(temp_dir.path()).await.unwrap();

    assert_eq!(df.height(), 2);
    let air_temp = df.column("air_temp").unwrap();
    assert_eq!(air_temp.null_count(), 1);
}

#[tokio::test]
async fn test_directory_without_matches_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tdump"), "1 PRESSURE\n").unwrap();

    let df = reader().read_trajectories(temp_dir.path()).await.unwrap();
    assert_eq!(df.shape(), (0, 0));
}

#[tokio::test]
async fn test_custom_pattern() {
    let temp_dir = TempDir::new().unwrap();
    write_trajectory(
        &temp_dir.path().join("tdump.001"),
        STANDARD_HEADER,
        &[standard_line(0, 0.0)],
    );

    let reader =
        OutputReader::new(ReaderConfig::default().with_trajectory_pattern("tdump.*")).unwrap();
    let files = reader.discover_trajectory_files(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 1);

    let df = reader.read_trajectories(temp_dir.path()).await.unwrap();
    assert_eq!(df.height(), 1);
}

#[tokio::test]
async fn test_dispersion_file_and_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("PARDUMP"),
        "1 42.0 -80.0 100.0\n2 42.5 -80.5 250.0\n",
    )
    .unwrap();

    let from_dir = reader().read_dispersion(temp_dir.path()).await.unwrap();
    let from_file = reader()
        .read_dispersion(&temp_dir.path().join("PARDUMP"))
        .await
        .unwrap();

    assert_eq!(from_dir.shape(), (2, 4));
    assert!(from_dir.equals(&from_file));
}

#[tokio::test]
async fn test_dispersion_directory_without_dump() {
    let temp_dir = TempDir::new().unwrap();

    let df = reader().read_dispersion(temp_dir.path()).await.unwrap();

    assert_eq!(df.shape(), (0, 4));
}
