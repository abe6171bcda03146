//! Tests for error handling, exit codes and suggestions.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn readmegen(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("readmegen");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env_remove("READMEGEN_AI_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_error_with_suggestions_unknown_license() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .args(["generate", "-n", "demo", "--license", "wtfpl"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown license 'wtfpl'"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_invalid_repository() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .args(["generate", "-n", "demo", "--repo", "not-a-repo"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid repository reference"));
}

#[test]
fn test_error_empty_description() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .args(["generate", "-n", "demo", "-d", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid description"));
}

#[test]
fn test_error_bad_config_env() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .env("READMEGEN_DEFAULTS__TEMPLATE", "bogus")
        .args(["templates"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("defaults.template"));
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_unknown_subcommand() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp).arg("frobnicate").assert().failure().code(2);
}

#[test]
fn test_verbose_error_omits_hint() {
    let temp = TempDir::new().unwrap();

    readmegen(&temp)
        .args(["-v", "generate", "-n", "demo", "-t", "bogus"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Caused by: Template not found"))
        .stderr(predicate::str::contains("Run with -v").not());
}

#[test]
fn test_fatal_error_is_reported_once() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("out.md"), "keep me").unwrap();

    let assert = readmegen(&temp)
        .args(["generate", "-n", "Demo", "-t", "minimal", "-o", "out.md"])
        .assert()
        .failure()
        .code(2);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("already exists").count(), 1, "{stderr}");
    assert!(!stderr.contains("WARN"), "{stderr}");
}

#[test]
fn test_not_found_lists_templates_hint_once() {
    let temp = TempDir::new().unwrap();

    let assert = readmegen(&temp)
        .args(["generate", "-n", "demo", "-t", "bogus"])
        .assert()
        .failure()
        .code(3);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("Template not found").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("readmegen templates").count(), 1, "{stderr}");
}
