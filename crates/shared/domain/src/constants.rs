/// Name of the global binding the browser layer reads the record from.
pub const GLOBAL_BINDING: &str = "APP_CONFIG";

/// Prefix for environment overrides (e.g. `POLICY__COMPANY__NAME`).
pub const ENV_PREFIX: &str = "POLICY";

/// Default base name of the configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "policy";

/// Textual date format used by `legal.lastUpdated` and `legal.effectiveDate`.
pub const POLICY_DATE_FORMAT: &str = "%B %d, %Y";
