//! Renders the policy record for the page and for static-site tooling.
//!
//! The browser layer reads the record from `window.APP_CONFIG`; CommonJS consumers
//! `require` it. Both renderings carry the same camelCase JSON body.

use crate::error::ExportError;
use policy_domain::config::PolicyConfig;
use policy_domain::constants::GLOBAL_BINDING;

/// Serializes the record as JSON.
///
/// # Errors
/// Returns [`ExportError::Serialize`] if serialization fails.
pub fn to_json(config: &PolicyConfig, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(json)
}

/// Renders the record as a script assigning the well-known global binding.
///
/// # Errors
/// Returns [`ExportError::Serialize`] if serialization fails.
pub fn global_script(config: &PolicyConfig) -> Result<String, ExportError> {
    Ok(format!("window.{GLOBAL_BINDING} = {};\n", to_json(config, true)?))
}

/// Renders the record as a CommonJS module.
///
/// # Errors
/// Returns [`ExportError::Serialize`] if serialization fails.
pub fn module_script(config: &PolicyConfig) -> Result<String, ExportError> {
    Ok(format!("module.exports = {};\n", to_json(config, true)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_script_assigns_binding() {
        let script = global_script(&PolicyConfig::default()).unwrap();
        assert!(script.starts_with("window.APP_CONFIG = {"));
        assert!(script.trim_end().ends_with("};"));
        assert!(script.contains("\"lastUpdated\": \"November 30, 2025\""));
    }

    #[test]
    fn module_script_exports_same_body() {
        let cfg = PolicyConfig::default();
        let module = module_script(&cfg).unwrap();
        let body = module.trim_start_matches("module.exports = ").trim_end().trim_end_matches(';');
        let parsed: PolicyConfig = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn compact_json_is_single_line() {
        let json = to_json(&PolicyConfig::default(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"thirdPartyServices\""));
    }
}
