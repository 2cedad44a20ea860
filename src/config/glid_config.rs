//! GLID Configuration - deployment settings as TOML values
//!
//! The screening rules themselves are fixed. Configuration only covers the
//! identity of the well being screened, the HTTP bind address and the default
//! output format. Every struct implements `Default`, so a missing file or a
//! missing section behaves exactly like the built-in defaults.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "GLID_CONFIG";

/// Config file looked up in the current working directory
pub const DEFAULT_CONFIG_FILE: &str = "glid.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `GlidConfig::load()` which searches:
/// 1. An explicit path (`--config`)
/// 2. `$GLID_CONFIG` env var
/// 3. `./glid.toml`
/// 4. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlidConfig {
    /// Well identification
    #[serde(default)]
    pub well: WellInfo,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Output defaults for the CLI
    #[serde(default)]
    pub output: OutputConfig,
}

impl GlidConfig {
    /// Load configuration using the standard search order.
    ///
    /// An explicit path must load cleanly. Files found through the
    /// environment or the working directory fall back to defaults on error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // 1. Explicit path
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), well = %config.well.name, "Loaded config");
            return Ok(config);
        }

        // 2. Env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded config from GLID_CONFIG");
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from GLID_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %p.display(), "GLID_CONFIG points to a missing file, falling back");
            }
        }

        // 3. Working directory
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(path = %local.display(), well = %config.well.name, "Loaded config");
                    return Ok(config);
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load glid.toml, using defaults");
                }
            }
        }

        // 4. Defaults
        info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(&contents) {
            warn!(path = %path.display(), "{}", w);
        }

        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are ignored here; see `validation::validate_unknown_keys`.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all settings.
    ///
    /// Rules:
    /// - Server address must parse as HOST:PORT with a numeric IP
    /// - Well name must not be blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.server.addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "server.addr = '{}' is not a valid socket address (expected e.g. 0.0.0.0:8080)",
                self.server.addr
            ));
        }

        if self.well.name.trim().is_empty() {
            errors.push("well.name must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({0:?}): {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({0:?}): {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata - not used for logic, but appears in logs and responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WellInfo {
    /// Well name / identifier
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Field name
    #[serde(default)]
    pub field: String,
}

fn default_well_name() -> String {
    "DEFAULT".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address for `glid serve`
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Rendering used for CLI results
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GlidConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.well.name, "DEFAULT");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GlidConfig::from_toml_str(
            r#"
[well]
name = "Bonga-12"
"#,
        )
        .unwrap();
        assert_eq!(config.well.name, "Bonga-12");
        assert_eq!(config.server.addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_bad_addr_fails_validation() {
        let err = GlidConfig::from_toml_str(
            r#"
[server]
addr = "localhost"
"#,
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("server.addr"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_unknown_output_format_is_parse_error() {
        let err = GlidConfig::from_toml_str(
            r#"
[output]
format = "yaml"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(..)));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = GlidConfig::default();
        config.output.format = OutputFormat::Json;
        let text = config.to_toml().unwrap();
        assert_eq!(GlidConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_validation_message_lists_every_error() {
        let config = GlidConfig {
            well: WellInfo {
                name: "  ".to_string(),
                field: String::new(),
            },
            server: ServerConfig {
                addr: "nowhere".to_string(),
            },
            output: OutputConfig::default(),
        };
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("server.addr"));
        assert!(msg.contains("well.name"));
    }
}
