use std::fs;
use std::process::{Command, Output};
use std::{env, path::PathBuf};

use serde_json::Value;
use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_cragsift") {
        return PathBuf::from(path);
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("workspace root");
    let bin_name = if cfg!(windows) {
        "cragsift.exe"
    } else {
        "cragsift"
    };
    let fallback = workspace_root.join("target").join("debug").join(bin_name);
    assert!(
        fallback.exists(),
        "cragsift binary not found at {}",
        fallback.display()
    );
    fallback
}

fn fixture_corpus() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("cragsift-core")
        .join("tests")
        .join("fixtures")
        .join("sample_corpus.json")
}

fn cragsift() -> Command {
    let mut command = Command::new(cli_bin_path());
    for name in [
        "CRAGSIFT_DATA",
        "CRAGSIFT_GRADE_SCALE",
        "CRAGSIFT_PAGE_SIZE",
        "CRAGSIFT_QUERY_CACHE_ENTRIES",
        "CRAGSIFT_SEARCH_AREA_LIMIT",
        "CRAGSIFT_SEARCH_ROUTE_LIMIT",
        "CRAGSIFT_SEARCH_MIN_QUERY_CHARS",
        "CRAGSIFT_LOG",
    ] {
        command.env_remove(name);
    }
    command
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn grade_normalize_process_contract_maps_raw_tokens() {
    // Given no corpus at all
    // When running `cragsift grade normalize 5.10- 5.9+ 5.frobnicate`
    // Then each input gets a row and unparseable input is flagged.
    let output = cragsift()
        .args(["grade", "normalize", "5.10-", "5.9+", "5.frobnicate"])
        .output()
        .expect("run grade normalize");

    let rows = stdout_json(&output);
    assert_eq!(rows[0]["canonical"], "5.10a");
    assert_eq!(rows[1]["canonical"], "5.9");
    assert_eq!(rows[2]["parseable"], false);
    assert!(rows[2].get("canonical").is_none());
}

#[test]
fn routes_process_contract_filters_and_sorts_fixture_corpus() {
    let output = cragsift()
        .args(["--data"])
        .arg(fixture_corpus())
        .args(["routes", "--style", "sport"])
        .output()
        .expect("run routes");

    let body = stdout_json(&output);
    let names: Vec<&str> = body["items"]
        .as_array()
        .expect("items array")
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    assert_eq!(names, ["Sunday Bolts", "Mystery Slab"]);
    assert_eq!(body["total"], 2);
    assert_eq!(body["has_more"], false);
    assert_eq!(
        body["corpus_version"].as_str().map(str::len),
        Some(64),
        "blake3 hex digest"
    );
}

#[test]
fn routes_process_contract_reads_directory_from_env() {
    let root = tempdir().expect("tempdir");
    fs::copy(fixture_corpus(), root.path().join("areas.json")).expect("copy fixture");
    fs::write(root.path().join("notes.txt"), "not a corpus").expect("write notes");

    let output = cragsift()
        .env("CRAGSIFT_DATA", root.path())
        .args(["routes", "--area", "USA/California/Yosemite", "--limit", "2"])
        .output()
        .expect("run routes from env");

    let body = stdout_json(&output);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["has_more"], true);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
}

#[test]
fn search_process_contract_honors_hierarchy_terms_and_env_limit() {
    let output = cragsift()
        .arg("--data")
        .arg(fixture_corpus())
        .args(["search", "squamish crack"])
        .output()
        .expect("run search");
    let body = stdout_json(&output);
    let routes = body["routes"].as_array().expect("routes array");
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["route_id"], "105805900");

    let limited = cragsift()
        .env("CRAGSIFT_SEARCH_ROUTE_LIMIT", "1")
        .arg("--data")
        .arg(fixture_corpus())
        .args(["search", "crack"])
        .output()
        .expect("run limited search");
    let body = stdout_json(&limited);
    assert_eq!(body["routes"].as_array().map(Vec::len), Some(1));
}

#[test]
fn missing_data_process_contract_exits_non_zero() {
    let output = cragsift()
        .args(["routes"])
        .output()
        .expect("run routes without data");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no corpus path"), "stderr: {stderr}");
}

#[test]
fn invalid_grade_process_contract_reports_error_code() {
    // Given a grade bound that is not on the scale
    // When running `cragsift routes --min-grade 5.frobnicate`
    // Then the process fails before loading and stderr carries the payload.
    let output = cragsift()
        .args(["--data", "does-not-exist.json"])
        .args(["routes", "--min-grade", "5.frobnicate"])
        .output()
        .expect("run routes with bad grade");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INVALID_GRADE"), "stderr: {stderr}");
    assert!(stderr.contains("\"operation\":\"routes\""), "stderr: {stderr}");
}
