//! CLI end-to-end tests that invoke the compiled `devformat` binary.
//!
//! Every test points `DEVFORMAT_CONFIG` at a temporary file so the user's
//! real config is never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `devformat` command with an isolated config file.
fn devformat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devformat").expect("Failed to find devformat binary");
    cmd.env("DEVFORMAT_CONFIG", dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("COLORFGBG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and completions
// ============================================================================

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("devformat --help"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devformat"));
}

// ============================================================================
// list / routes / show
// ============================================================================

#[test]
fn test_list_shows_every_category() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Tools"))
        .stdout(predicate::str::contains("Formatters:"))
        .stdout(predicate::str::contains("Converters:"))
        .stdout(predicate::str::contains("json-formatter"))
        .stdout(predicate::str::contains("Total: 28 tools"));
}

#[test]
fn test_list_category_filter() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["list", "--category", "escapers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sql-escaper"))
        .stdout(predicate::str::contains("json-formatter").not())
        .stdout(predicate::str::contains("Total: 5 tools"));
}

#[test]
fn test_list_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["list", "--category", "widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'widgets'"))
        .stderr(predicate::str::contains("converters"));
}

#[test]
fn test_list_json_is_array_of_definitions() {
    let dir = TempDir::new().unwrap();
    let output = devformat(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tools = value.as_array().unwrap();
    assert_eq!(tools.len(), 28);
    assert_eq!(tools[0]["id"], "json-formatter");
    assert_eq!(tools[0]["route"], "/formatters/json");
}

#[test]
fn test_routes_lists_route_table() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/encoders/md5"))
        .stdout(predicate::str::contains("md5-generator"));
}

#[test]
fn test_show_by_route() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["show", "/generators/uuid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UUID Generator - Free Online Tool"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_show_unknown_tool_fails() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'nope'"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_groups_matches() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["search", "hash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoders:"))
        .stdout(predicate::str::contains("md5-generator"))
        .stdout(predicate::str::contains("sha256-generator"));
}

#[test]
fn test_search_without_matches() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tools found for \"zzzz\""));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_json_formatter_with_indent() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "json-formatter", r#"{"a":1}"#, "--indent", "4"])
        .assert()
        .success()
        .stdout("{\n    \"a\": 1\n}\n");
}

#[test]
fn test_run_reads_stdin() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "/encoders/url", "-"])
        .write_stdin("a b&c")
        .assert()
        .success()
        .stdout(predicate::str::contains("a%20b%26c"));
}

#[test]
fn test_run_reads_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    std::fs::write(&input, "hello").unwrap();
    devformat(&dir)
        .args(["run", "sha256-generator", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ));
}

#[test]
fn test_run_invalid_input_exits_one() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "json-validator", "{"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("json-validator:"));
}

#[test]
fn test_run_blank_input_is_user_error() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "json-formatter", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs input"));
}

#[test]
fn test_run_generator_without_input() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "uuid-generator", "3"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));
}

#[test]
fn test_run_sample() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["run", "number-base-converter", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hexadecimal"));
}

// ============================================================================
// prefs and config
// ============================================================================

#[test]
fn test_prefs_toggle_persists() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["prefs", "--theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    let saved = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("theme = \"dark\""));

    devformat(&dir)
        .args(["prefs", "--theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn test_config_indent_size_used_by_run() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[tools]\nindent_size = 0\n").unwrap();
    devformat(&dir)
        .args(["run", "json-formatter", r#"{ "a" : [1, 2] }"#])
        .assert()
        .success()
        .stdout("{\"a\":[1,2]}\n");
}

#[test]
fn test_compact_hides_descriptions() {
    let dir = TempDir::new().unwrap();
    devformat(&dir)
        .args(["prefs", "--compact", "true"])
        .assert()
        .success();

    let description = "Format and beautify JSON";
    let listing = devformat(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(listing.stdout).unwrap();
    assert!(!stdout.contains(description));
}

#[test]
fn test_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[tools\n").unwrap();
    devformat(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}
