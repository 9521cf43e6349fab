//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dobby/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The model, persona and generation parameters are fixed constants of the
//! gateway and deliberately not configurable here.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DobbyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub fireworks: FireworksConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FireworksConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "dobby.log";

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Bearer token. Absence is only an error once a request is made.
    pub api_key: Option<String>,
    pub base_url: String,
    pub log_level: String,
    pub log_file: String,
    /// Skip the landing page.
    pub start_in_chat: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dobby/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dobby").join("config.toml"))
}

/// Load config from `~/.dobby/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DobbyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DobbyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DobbyConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DobbyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DobbyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DobbyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!(
        "Config: api_key set={}, base_url={:?}, log_level={:?}",
        config.fireworks.api_key.is_some(),
        config.fireworks.base_url,
        config.general.log_level
    );
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Dobby Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "dobby.log"             # Or set DOBBY_LOG_FILE env var

# [fireworks]
# api_key = "fw_..."                 # Or set FIREWORKS_API_KEY env var
# base_url = "https://api.fireworks.ai/inference/v1"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
/// CLI flags are applied by the caller on the returned value.
pub fn resolve(config: &DobbyConfig) -> ResolvedConfig {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(config: &DobbyConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    // API key: env → config. Blank values count as unset.
    let api_key = env("FIREWORKS_API_KEY")
        .or_else(|| config.fireworks.api_key.clone())
        .filter(|key| !key.trim().is_empty());

    // Base URL: env → config → default
    let base_url = env("FIREWORKS_BASE_URL")
        .or_else(|| config.fireworks.base_url.clone())
        .unwrap_or_else(|| crate::inference::DEFAULT_FIREWORKS_BASE_URL.to_string());

    let log_level = env("DOBBY_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_file = env("DOBBY_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        log_level,
        log_file,
        start_in_chat: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with(&DobbyConfig::default(), no_env);
        assert!(resolved.api_key.is_none());
        assert_eq!(resolved.base_url, "https://api.fireworks.ai/inference/v1");
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
        assert!(!resolved.start_in_chat);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DobbyConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/d.log".to_string()),
            },
            fireworks: FireworksConfig {
                api_key: Some("fw_file".to_string()),
                base_url: Some("http://localhost:9999/v1".to_string()),
            },
        };
        let resolved = resolve_with(&config, no_env);
        assert_eq!(resolved.api_key.as_deref(), Some("fw_file"));
        assert_eq!(resolved.base_url, "http://localhost:9999/v1");
        assert_eq!(resolved.log_level, "warn");
        assert_eq!(resolved.log_file, "/tmp/d.log");
    }

    #[test]
    fn test_resolve_env_wins_over_file() {
        let config = DobbyConfig {
            fireworks: FireworksConfig {
                api_key: Some("fw_file".to_string()),
                base_url: None,
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [
            ("FIREWORKS_API_KEY", "fw_env"),
            ("DOBBY_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let resolved = resolve_with(&config, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(resolved.api_key.as_deref(), Some("fw_env"));
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = DobbyConfig {
            fireworks: FireworksConfig {
                api_key: Some("   ".to_string()),
                base_url: None,
            },
            ..Default::default()
        };
        assert!(resolve_with(&config, no_env).api_key.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "info"

[fireworks]
api_key = "fw_test_123"
base_url = "http://127.0.0.1:8080/v1"
"#;
        let config: DobbyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert!(config.general.log_file.is_none());
        assert_eq!(config.fireworks.api_key.as_deref(), Some("fw_test_123"));
        assert_eq!(
            config.fireworks.base_url.as_deref(),
            Some("http://127.0.0.1:8080/v1")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: DobbyConfig = toml::from_str("[fireworks]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.fireworks.api_key.as_deref(), Some("k"));
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: DobbyConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.fireworks.api_key.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("dobby-bad-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[fireworks\napi_key = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("dobby-cfg-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let config = load_config_from(&path).unwrap();

        assert!(config.fireworks.api_key.is_none());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
