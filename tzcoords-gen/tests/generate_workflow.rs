//! end-to-end runs of the generator against temporary output directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tzcoords_core::{table::table_ops, zone::ChronoTzResolver};
use tzcoords_gen::{
    app::{GenAppArguments, GenError},
    emit::OutputFormat,
    BUNDLED_ZONE1970,
};

fn arguments(output: &Path, input: Option<&Path>, format: Option<OutputFormat>) -> GenAppArguments {
    GenAppArguments {
        output: output.to_string_lossy().to_string(),
        input: input.map(|p| p.to_string_lossy().to_string()),
        configuration_file: None,
        format,
        precision: None,
    }
}

fn write_table(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("zone1970.tab");
    fs::write(&path, contents).expect("write input table");
    path
}

#[test]
fn bundled_table_resolves_against_chrono_tz() {
    let table = table_ops::build_zone_table_from_bytes(BUNDLED_ZONE1970, &ChronoTzResolver)
        .expect("bundled zone1970.tab should validate");
    assert!(table.len() > 300, "found only {} zones", table.len());
    let ny = table.get("America/New_York").expect("new york listed");
    assert!((ny.lat() - 40.71417).abs() < 1e-5);
    assert!((ny.lon() - -74.00639).abs() < 1e-5);

    let keys = table.keys().to_vec();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn generates_rust_source_from_bundled_table() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("coords.rs");
    let args = arguments(&output, None, None);
    args.run("--output coords.rs").expect("generation should succeed");

    let src = fs::read_to_string(&output).unwrap();
    let mut lines = src.lines();
    assert_eq!(
        lines.next(),
        Some("// Code generated by \"tzcoords-gen --output coords.rs\"; DO NOT EDIT.")
    );
    assert!(src.contains("use crate::LatLon;"));
    assert!(src.contains("(\"America/New_York\", LatLon { lat: 40.714167, lon: -74.006389 }),"));

    // entries are written in sorted zone order
    let zones = src
        .lines()
        .filter_map(|l| l.trim().strip_prefix("(\""))
        .filter_map(|l| l.split('"').next())
        .collect::<Vec<_>>();
    let mut sorted = zones.clone();
    sorted.sort();
    assert_eq!(zones, sorted);
    assert!(!zones.is_empty());
}

#[test]
fn generates_csv_from_input_file() {
    let dir = TempDir::new().unwrap();
    let input = write_table(
        &dir,
        "#codes\tcoordinates\tTZ\tcomments\n\
         US\t+404251-0740023\tAmerica/New_York\tEastern (most areas)\n\
         AD\t+4230+00131\tEurope/Andorra\n",
    );
    let output = dir.path().join("coords.csv");
    let args = arguments(&output, Some(&input), Some(OutputFormat::Csv));
    args.run("").expect("generation should succeed");

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "zone,lat,lon\nAmerica/New_York,40.714167,-74.006389\nEurope/Andorra,42.5,1.516667\n"
    );
}

#[test]
fn malformed_row_writes_no_artifact() {
    let dir = TempDir::new().unwrap();
    let input = write_table(
        &dir,
        "AD\t+4230+00131\tEurope/Andorra\n\
         US\t+404251--740023\tAmerica/New_York\n",
    );
    let output = dir.path().join("coords.rs");
    let args = arguments(&output, Some(&input), None);
    match args.run("") {
        Err(GenError::TableError { .. }) => {}
        other => panic!("expected table error, found {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn unresolvable_zone_keeps_previous_artifact() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "XX\t+0000+00000\tAtlantis/Capital\n");
    let output = dir.path().join("coords.rs");
    fs::write(&output, "previous").unwrap();
    let args = arguments(&output, Some(&input), None);
    let err = args.run("").expect_err("unknown zone must fail");
    assert!(err.to_string().contains("Atlantis/Capital"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn missing_input_is_read_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("coords.rs");
    let missing = dir.path().join("missing.tab");
    let args = arguments(&output, Some(&missing), None);
    match args.run("") {
        Err(GenError::InputReadError { path, .. }) => {
            assert!(path.ends_with("missing.tab"))
        }
        other => panic!("expected input read error, found {other:?}"),
    }
    assert!(!output.exists());
}
