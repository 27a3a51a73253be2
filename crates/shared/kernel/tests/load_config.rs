use policy_kernel::config::load_config;
use policy_kernel::ConfigError;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_explicit_file_is_reported() {
    let dir = tempdir().unwrap();
    let err = load_config(Some(dir.path().join("absent.toml"))).expect_err("should fail");
    assert!(matches!(err, ConfigError::NotFound { .. }), "unexpected error: {err}");
}

#[test]
#[serial]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("policy.toml");
    fs::write(
        &path,
        r#"
[company]
name = "Acme Widgets"

[legal]
lastUpdated = "January 15, 2026"

[features]
collapsibleSections = true
"#,
    )?;

    let cfg = load_config(Some(&path))?;
    assert_eq!(cfg.company.name, "Acme Widgets");
    assert_eq!(cfg.company.legal_name, "Your Company Legal Name Inc.");
    assert_eq!(cfg.legal.last_updated, "January 15, 2026");
    assert!(cfg.features.collapsible_sections);
    assert!(cfg.ui.show_print_button);
    Ok(())
}

#[test]
#[serial]
fn malformed_file_is_config_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{ "contact": { "responseTime": "soon" } }"#)?;

    let err = load_config(Some(&path)).expect_err("should fail");
    assert!(matches!(err, ConfigError::Config { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
