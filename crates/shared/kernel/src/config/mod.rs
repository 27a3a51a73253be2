use crate::error::{ConfigError, ConfigErrorExt};
use config::{Config, Environment, File};
use policy_domain::config::PolicyConfig;
use policy_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads the policy record from a base file with environment overrides.
///
/// Layers, later wins:
/// 1. **Built-in defaults**: the shipped record ([`PolicyConfig::default`]) via serde defaults.
/// 2. **Base File**: `path` (format picked from the extension: TOML, JSON, YAML...).
///    Without a path the optional `policy` file in the working directory is used.
/// 3. **Environment Overrides**: variables prefixed with `POLICY__`, nested with `__`
///    (e.g. `POLICY__COMPANY__LEGAL_NAME` maps to `company.legalName`).
///
/// # Errors
/// Returns [`ConfigError::NotFound`] when an explicit `path` does not exist and
/// [`ConfigError::Config`] when a source cannot be parsed or does not match the record.
///
/// # Example
/// ```rust
/// use policy_kernel::config::load_config;
///
/// let cfg = load_config(None::<&str>).unwrap_or_default();
/// assert!(!cfg.company.name.is_empty());
/// ```
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<PolicyConfig, ConfigError> {
    let explicit = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    if explicit && !effective_path.exists() {
        return Err(ConfigError::NotFound {
            message: effective_path.display().to_string().into(),
            context: Some("Explicit config path".into()),
        });
    }

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(explicit))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Camel), // POLICY__LEGAL__LAST_UPDATED -> legal.lastUpdated
        );

    info!("Loading policy config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<PolicyConfig>()
        .context("Failed to deserialize config")?;

    debug!(company = %config.company.name, updated = %config.legal.last_updated, "Policy config loaded");

    Ok(config)
}
