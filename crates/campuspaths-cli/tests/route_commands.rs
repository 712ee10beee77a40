use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture directory present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campuspaths-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("CAMPUSPATHS_DATA_DIR")
        .env_remove("CAMPUSPATHS_BUILDINGS_FILE")
        .env_remove("CAMPUSPATHS_PATHS_FILE")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn route_prints_walk_and_total() {
    cli()
        .args(["route", "--from", "CSE", "--to", "SUZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path from Paul G. Allen Center for Computer Science to Suzzallo Library:",
        ))
        .stdout(predicate::str::contains("\tWalk 71 feet EastNorth to (1050, 950)"))
        .stdout(predicate::str::contains("\tWalk 71 feet EastNorth to (1100, 900)"))
        .stdout(predicate::str::contains("Total distance: 142 feet"));
}

#[test]
fn route_json_contains_segments_and_directions() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "CSE", "--to", "HUB"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["total_distance"], 383.0);
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["directions"][2], "East");
    assert_eq!(value["end"]["short_name"], "HUB");
}

#[test]
fn unknown_building_error_is_friendly() {
    cli()
        .args(["route", "--from", "SUZZ", "--to", "CSE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'SUZZ'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn unreachable_building_fails() {
    cli()
        .args(["route", "--from", "HUB", "--to", "CSE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between HUB and CSE"));
}

#[test]
fn same_building_route_is_empty() {
    cli()
        .args(["route", "--from", "PAR", "--to", "PAR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 0 feet"))
        .stdout(predicate::str::contains("Walk").not());
}

#[test]
fn buildings_are_sorted_by_long_name() {
    let output = cli().arg("buildings").output().expect("command runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Buildings:");
    assert_eq!(lines[1], "\tHUB: Husky Union Building");
    assert_eq!(lines.len(), 8);
}

#[test]
fn buildings_json_lists_every_building() {
    let output = cli()
        .args(["buildings", "--format", "json"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 7);
    assert!(entries.iter().any(|e| e["short_name"] == "PAR"));
}

#[test]
fn interactive_session_over_stdin() {
    cli()
        .arg("interactive")
        .write_stdin("b\nr\nCSE\nKNE\nr\nXYZ\nCSE\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu:"))
        .stdout(predicate::str::contains("\tKNE: Kane Hall"))
        .stdout(predicate::str::contains("Total distance: 242 feet"))
        .stdout(predicate::str::contains("Unknown building: XYZ"));
}

#[test]
fn missing_dataset_reports_location() {
    let temp = tempdir().expect("temp dir");
    let mut cmd = cargo_bin_cmd!("campuspaths-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("CAMPUSPATHS_BUILDINGS_FILE")
        .env_remove("CAMPUSPATHS_PATHS_FILE")
        .arg("--data-dir")
        .arg(temp.path())
        .arg("buildings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load campus dataset"));
}

#[test]
fn data_dir_can_come_from_environment() {
    let mut cmd = cargo_bin_cmd!("campuspaths-cli");
    cmd.env("RUST_LOG", "error")
        .env("CAMPUSPATHS_DATA_DIR", fixtures_dir())
        .env_remove("CAMPUSPATHS_BUILDINGS_FILE")
        .env_remove("CAMPUSPATHS_PATHS_FILE")
        .args(["route", "--from", "CSE", "--to", "KNE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 242 feet"));
}
