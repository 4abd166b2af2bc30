//! Provider configuration, read from a `provider.toml` file.
//!
//! ```toml
//! runtime_mode = "deployment"
//! strict_registration = false
//! log_filter = "kite_provider=debug"
//! ```

use crate::error::ProviderResult;
use crate::plugin::RuntimeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub runtime_mode: RuntimeMode,
    /// When `true`, registering a schema name twice is an error. Otherwise the
    /// duplicate is logged and the first registration kept.
    #[serde(default = "default_strict_registration")]
    pub strict_registration: bool,
    /// `tracing` filter directives applied by
    /// [`init_from_config`](crate::logging::init_from_config) when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_strict_registration() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            runtime_mode: RuntimeMode::default(),
            strict_registration: default_strict_registration(),
            log_filter: default_log_filter(),
        }
    }
}

impl ProviderConfig {
    pub fn from_toml_str(contents: &str) -> ProviderResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses `path`, failing on any error.
    pub fn read(path: &Path) -> ProviderResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` if it exists. Falls back to defaults with a warning when
    /// the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No provider config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!("Loaded provider config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load provider config {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    fn load_config_from_str(toml_content: &str) -> ProviderConfig {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provider.toml");
        std::fs::write(&path, toml_content).unwrap();
        ProviderConfig::load_from(path)
    }

    #[test]
    fn defaults_are_strict_development() {
        let config = ProviderConfig::default();
        assert_eq!(config.runtime_mode, RuntimeMode::Development);
        assert!(config.strict_registration);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(ProviderConfig::from_toml_str("").unwrap(), ProviderConfig::default());
    }

    #[test]
    fn parses_full_document() {
        let config = ProviderConfig::from_toml_str(r#"
runtime_mode = "deployment"
strict_registration = false
log_filter = "kite_provider=debug"
"#)
        .unwrap();
        assert_eq!(config.runtime_mode, RuntimeMode::Deployment);
        assert!(!config.strict_registration);
        assert_eq!(config.log_filter, "kite_provider=debug");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = ProviderConfig::from_toml_str("strict_registration = false\n").unwrap();
        assert_eq!(config.runtime_mode, RuntimeMode::Development);
        assert!(!config.strict_registration);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_runtime_mode_is_rejected() {
        let err = ProviderConfig::from_toml_str("runtime_mode = \"staging\"\n").unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = ProviderConfig {
            runtime_mode: RuntimeMode::Deployment,
            strict_registration: false,
            log_filter: "warn".into(),
        };
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("runtime_mode = \"deployment\""));
        assert_eq!(ProviderConfig::from_toml_str(&text).unwrap(), config);
    }

    // ================================================================
    // File loading
    // ================================================================

    #[test]
    fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProviderConfig::read(&dir.path().join("nonexistent.toml")).unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProviderConfig::load_from(dir.path().join("nonexistent.toml"));
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn load_from_file() {
        let config = load_config_from_str(r#"
runtime_mode = "deployment"
log_filter = "debug"
"#);
        assert_eq!(config.runtime_mode, RuntimeMode::Deployment);
        assert!(config.strict_registration);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn load_from_malformed_file_uses_defaults() {
        let config = load_config_from_str("runtime_mode = [not toml");
        assert_eq!(config, ProviderConfig::default());
    }

    #[test]
    fn load_from_wrongly_typed_file_uses_defaults() {
        let config = load_config_from_str("strict_registration = \"yes\"\n");
        assert_eq!(config, ProviderConfig::default());
    }
}
