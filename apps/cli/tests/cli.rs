use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

fn policy_page(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("policy-page").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    let dir = tempdir().unwrap();
    policy_page(&dir).assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn export_defaults_to_global_binding_script() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("window.APP_CONFIG = {"))
        .stdout(predicate::str::contains("\"lastUpdated\": \"November 30, 2025\""))
        .stdout(predicate::str::ends_with("};\n"));
}

#[test]
fn export_module_and_json() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .args(["export", "--format", "module"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("module.exports = {"));

    policy_page(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"company\":"))
        .stdout(predicate::str::contains("\"collapsibleSections\":false"));
}

#[test]
fn export_reads_the_given_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("acme.toml");
    fs::write(&path, "[company]\nname = \"Acme Widgets\"\n").unwrap();

    policy_page(&dir)
        .args(["export", "--format", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"Acme Widgets\""));
}

#[test]
fn environment_overrides_the_record() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .env("POLICY__COMPANY__NAME", "Env Corp")
        .env("POLICY__FEATURES__COLLAPSIBLE_SECTIONS", "true")
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"Env Corp\""))
        .stdout(predicate::str::contains("\"collapsibleSections\":true"));
}

#[test]
fn numeric_environment_values_stay_strings() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .env("POLICY__CONTACT__ADDRESS__ZIP_CODE", "110001")
        .env("POLICY__CONTACT__PHONE", "5551234")
        .env("POLICY__UI__SHOW_PRINT_BUTTON", "false")
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"zipCode\":\"110001\""))
        .stdout(predicate::str::contains("\"phone\":\"5551234\""))
        .stdout(predicate::str::contains("\"showPrintButton\":false"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .args(["export", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load policy config"));
}

#[test]
fn freshness_prints_elapsed_days() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .args(["freshness", "--today", "2025-12-30"])
        .assert()
        .success()
        .stdout("November 30, 2025 (30 days ago)\n");
}

#[test]
fn freshness_without_elapsed_days_prints_the_date() {
    let dir = tempdir().unwrap();
    policy_page(&dir)
        .args(["freshness", "--today", "2025-11-30"])
        .assert()
        .success()
        .stdout("November 30, 2025\n");
}

#[test]
fn freshness_rejects_unparsable_dates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{ "legal": { "lastUpdated": "next spring" } }"#).unwrap();

    policy_page(&dir)
        .args(["freshness", "--today", "2025-11-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("next spring"));
}

#[test]
fn log_dir_receives_log_files() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");
    policy_page(&dir)
        .args(["--log-level", "info", "--log-dir"])
        .arg(&logs)
        .args(["freshness", "--today", "2025-12-30"])
        .assert()
        .success()
        .stdout("November 30, 2025 (30 days ago)\n");

    let written = fs::read_dir(&logs).unwrap().count();
    assert!(written > 0, "expected a rolling log file in {}", logs.display());
}
