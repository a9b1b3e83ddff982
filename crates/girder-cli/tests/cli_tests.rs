//! CLI integration tests
//!
//! Drives the girder binary end to end against real manifests on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const OBJ_MANIFEST: &str = r#"
module = "obj"
organization = "maniccoder"
sources = ["obj.c", "mesh.c", "version.c"]
depend-libs = ["mesh", "vector", "foundation"]
test-cases = ["obj"]
"#;

fn girder() -> Command {
    let mut cmd = Command::cargo_bin("girder").unwrap();
    cmd.env_remove("GIRDER_JSON");
    cmd
}

#[test]
fn test_plan_json_for_ios() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("girder.toml"), OBJ_MANIFEST).unwrap();

    girder()
        .current_dir(dir.path())
        .args(["plan", "--platform", "ios", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"app-bundle\""))
        .stdout(predicate::str::contains("test-all"))
        .stdout(predicate::str::contains("viewcontroller.m"));
}

#[test]
fn test_plan_writes_plan_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("girder.toml"), OBJ_MANIFEST).unwrap();

    girder()
        .current_dir(dir.path())
        .args(["plan", "--platform", "desktop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan written to girder-plan.json"));

    let written = fs::read_to_string(dir.path().join("girder-plan.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(document["platform"], "desktop");
    assert_eq!(document["linkage"], "per-artifact");
    let names: Vec<&str> = document["artifacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["obj", "test-obj", "test-all"]);
}

#[test]
fn test_plan_submodule_exits_zero_with_library_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("girder.toml"), OBJ_MANIFEST).unwrap();

    let assert = girder()
        .current_dir(dir.path())
        .args(["plan", "--platform", "android", "--submodule", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let artifacts = document["artifacts"].as_array().unwrap();

    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0]["kind"], "library");
}

#[test]
fn test_plan_unknown_platform_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("girder.toml"), OBJ_MANIFEST).unwrap();

    girder()
        .current_dir(dir.path())
        .args(["plan", "--platform", "beos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported platform kind: beos"));
}

#[test]
fn test_plan_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();

    girder()
        .current_dir(dir.path())
        .args(["plan", "--platform", "desktop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load girder.toml"));
}

#[test]
fn test_init_creates_manifest_once() {
    let dir = tempfile::tempdir().unwrap();

    girder()
        .current_dir(dir.path())
        .args(["init", "obj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created girder.toml"));

    let manifest = fs::read_to_string(dir.path().join("girder.toml")).unwrap();
    assert!(manifest.contains("module = \"obj\""));

    girder()
        .current_dir(dir.path())
        .args(["init", "obj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
