//! Integration tests for the PRDM CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tempfile::TempDir;

/// Empty home directory shared by every test, so no user config is read
fn isolated_home() -> &'static Path {
    static HOME: OnceLock<TempDir> = OnceLock::new();
    HOME.get_or_init(|| TempDir::new().unwrap()).path()
}

/// Helper to get a prdm command isolated from the caller's environment
fn prdm() -> Command {
    prdm_with_home(isolated_home())
}

/// A prdm command whose home and config directories live under `home`
fn prdm_with_home(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prdm").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("PRDM_FORMAT")
        .env_remove("PRDM_AUTHOR")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Create a single PRD in a fresh snapshot and return (tempdir, snapshot path, id)
fn setup_single_prd() -> (TempDir, std::path::PathBuf, String) {
    let tmp = TempDir::new().unwrap();
    let snap = tmp.path().join("snapshot.json");
    let id = stdout_of(prdm().args([
        "--empty",
        "new",
        "--title",
        "Login",
        "--description",
        "desc",
        "--author",
        "Dev",
        "--format",
        "id",
        "--save",
    ])
    .arg(&snap))
    .trim()
    .to_string();
    assert!(id.starts_with("PRD-"), "unexpected id output: {}", id);
    (tmp, snap, id)
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    prdm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Requirements Documents"));
}

#[test]
fn test_version_displays() {
    prdm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prdm"));
}

#[test]
fn test_unknown_command_fails() {
    prdm()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_input_conflicts_with_empty() {
    prdm()
        .args(["--empty", "--input", "x.json", "list"])
        .assert()
        .failure();
}

// ============================================================================
// List / Search Tests
// ============================================================================

#[test]
fn test_list_sample_data_ids() {
    let out = stdout_of(prdm().args(["list", "--format", "id"]));
    let ids: Vec<&str> = out.lines().collect();
    assert_eq!(ids.len(), 8);
    assert!(ids.iter().all(|id| id.starts_with("PRD-")));
}

#[test]
fn test_list_count_by_status() {
    prdm()
        .args(["list", "--status", "draft", "--count"])
        .assert()
        .success()
        .stdout("3\n");

    prdm()
        .args(["list", "--status", "in-development", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_list_invalid_status_rejected() {
    prdm()
        .args(["list", "--status", "shipped"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown status"));
}

#[test]
fn test_list_csv_has_header() {
    prdm()
        .args(["list", "--format", "csv", "--tag", "security"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,title,status,priority,done,author,tags"))
        .stdout(predicate::str::contains("API Rate Limiting"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_global_config_sets_default_format() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("prdm");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), "default_format: json\n").unwrap();

    let configured = stdout_of(prdm_with_home(home.path()).arg("list"));
    let parsed: serde_json::Value = serde_json::from_str(&configured).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 8);

    // The shared test home carries no config, so the table format applies
    let isolated = stdout_of(prdm().arg("list"));
    assert!(!isolated.trim_start().starts_with('['));
    assert!(isolated.contains("PRD(s) found"));
}

#[test]
fn test_list_empty() {
    prdm()
        .args(["--empty", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No PRDs found"));
}

#[test]
fn test_search_is_case_insensitive() {
    prdm()
        .args(["search", "AUTHENTICATION", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_search_empty_term_matches_all() {
    prdm()
        .args(["search", "", "--count"])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_search_matches_tags_once() {
    // "security" is a tag on two PRDs and also in one description
    let out = stdout_of(prdm().args(["search", "security", "--format", "id"]));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_search_no_results() {
    prdm()
        .args(["search", "blockchain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

// ============================================================================
// New / Update / Show Tests
// ============================================================================

#[test]
fn test_new_defaults() {
    let (_tmp, snap, id) = setup_single_prd();

    let out = stdout_of(
        prdm()
            .arg("--input")
            .arg(&snap)
            .args(["show", &id, "--format", "json"]),
    );
    let prd: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(prd["id"], id.as_str());
    assert_eq!(prd["title"], "Login");
    assert_eq!(prd["author"], "Dev");
    assert_eq!(prd["status"], "Draft");
    assert_eq!(prd["priority"], "Medium");
    assert_eq!(prd["completionPercentage"], 0);
    assert_eq!(prd["tags"].as_array().unwrap().len(), 0);
}

#[test]
fn test_new_with_tags_and_priority() {
    prdm()
        .args([
            "--empty",
            "new",
            "--title",
            "Secure",
            "--priority",
            "critical",
            "--tags",
            " Security ,security,API",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Critical\""))
        .stdout(predicate::str::contains("\"security\""))
        .stdout(predicate::str::contains("\"api\""));
}

#[test]
fn test_update_status_moves_record() {
    let (_tmp, snap, id) = setup_single_prd();

    prdm()
        .arg("--input")
        .arg(&snap)
        .args(["update", &id, "--status", "approved", "--save"])
        .arg(&snap)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status=Approved"));

    let approved = stdout_of(
        prdm()
            .arg("--input")
            .arg(&snap)
            .args(["list", "--status", "approved", "--format", "id"]),
    );
    assert_eq!(approved.trim(), id);

    prdm()
        .arg("--input")
        .arg(&snap)
        .args(["list", "--status", "draft", "--count"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_update_completion_clamps() {
    let (_tmp, snap, id) = setup_single_prd();

    for (value, expected) in [("250", 100), ("-5", 0), ("42", 42)] {
        let out = stdout_of(
            prdm()
                .arg("--input")
                .arg(&snap)
                .args(["update", &id, "--completion", value, "--format", "json"]),
        );
        let prd: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(prd["completionPercentage"], expected, "input {}", value);
    }
}

#[test]
fn test_update_unknown_id_fails() {
    prdm()
        .args(["update", "PRD-1-1000", "--status", "testing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no PRD found"));
}

#[test]
fn test_update_requires_a_change() {
    let (_tmp, snap, id) = setup_single_prd();
    prdm()
        .arg("--input")
        .arg(&snap)
        .args(["update", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_show_unknown_id_fails() {
    prdm()
        .args(["show", "PRD-1-1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No PRD found"));
}

#[test]
fn test_show_details() {
    let (_tmp, snap, id) = setup_single_prd();
    prdm()
        .arg("--input")
        .arg(&snap)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login"))
        .stdout(predicate::str::contains("0% complete"));
}

#[test]
fn test_show_accepts_lowercase_id() {
    let (_tmp, snap, id) = setup_single_prd();
    prdm()
        .arg("--input")
        .arg(&snap)
        .args(["show", &id.to_lowercase()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login"));
}

// ============================================================================
// Export / Import Tests
// ============================================================================

#[test]
fn test_export_stdout() {
    let out = stdout_of(prdm().arg("export"));
    let records: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(records.len(), 8);
    for field in [
        "id",
        "title",
        "description",
        "author",
        "status",
        "priority",
        "createdAt",
        "updatedAt",
        "completionPercentage",
        "tags",
    ] {
        assert!(records[0].get(field).is_some(), "missing field {}", field);
    }
}

#[test]
fn test_export_to_file_roundtrips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.json");

    prdm()
        .args(["export", "-o"])
        .arg(&path)
        .assert()
        .success();

    let first = fs::read_to_string(&path).unwrap();
    let again = stdout_of(prdm().arg("--input").arg(&path).arg("export"));
    assert_eq!(first.trim(), again.trim());
}

#[test]
fn test_invalid_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    prdm()
        .arg("--input")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid snapshot"));
}

#[test]
fn test_missing_snapshot_fails() {
    prdm()
        .args(["--input", "/definitely/not/here.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

// ============================================================================
// Dashboard / Analytics / Report Tests
// ============================================================================

#[test]
fn test_dashboard() {
    prdm()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("PRD MANAGEMENT SYSTEM - DASHBOARD"))
        .stdout(predicate::str::contains("Total PRDs: 8"))
        .stdout(predicate::str::contains("Top Authors:"))
        .stdout(predicate::str::contains("Recent PRDs:"));
}

#[test]
fn test_dashboard_json() {
    let out = stdout_of(prdm().args(["dashboard", "--format", "json", "--limit", "3"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["analytics"]["totalCount"], 8);
    assert_eq!(value["recent"].as_array().unwrap().len(), 3);
    assert_eq!(value["topAuthors"].as_array().unwrap().len(), 3);
}

#[test]
fn test_analytics_json() {
    let out = stdout_of(prdm().arg("analytics"));
    let analytics: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(analytics["totalCount"], 8);
    assert_eq!(analytics["statusCounts"]["Draft"], 3);
    assert_eq!(analytics["priorityCounts"]["Medium"], 8);
    assert_eq!(analytics["tagFrequency"]["security"], 2);
    assert_eq!(analytics["averageCompletion"], 31.875);
    let authored: u64 = analytics["topAuthors"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(authored, 8);
}

#[test]
fn test_analytics_empty() {
    let out = stdout_of(prdm().args(["--empty", "analytics"]));
    let analytics: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(analytics["totalCount"], 0);
    assert_eq!(analytics["averageCompletion"], 0.0);
}

#[test]
fn test_report_attention() {
    prdm()
        .args(["report", "attention"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PRDs Needing Attention"))
        .stdout(predicate::str::contains("Nothing needs attention."));
}

#[test]
fn test_report_progress_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("progress.md");
    prdm()
        .args(["report", "progress", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Status Progress Report"));
    assert!(content.contains("Implemented"));
}

#[test]
fn test_report_completion_json() {
    let out = stdout_of(prdm().args(["report", "completion", "--format", "json"]));
    let stats: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(stats["min"], 0);
    assert_eq!(stats["max"], 100);
}

#[test]
fn test_demo_runs() {
    prdm()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEMO OPERATIONS"))
        .stdout(predicate::str::contains("Draft PRDs (3):"))
        .stdout(predicate::str::contains("Found: PRD{"));
}

#[test]
fn test_completions_bash() {
    prdm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prdm"));
}
