//! Engine configuration loaded from TOML
//!
//! Every section and field has a default, so a config file only needs to name the values it
//! changes:
//!
//! ```toml
//! [time]
//! fixed_timestep = 0.02
//!
//! [log]
//! level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::time::TimeConfig;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub time: TimeConfig,
    pub log: LogConfig,
    pub run: RunConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. `"info"`, `"tessera_ecs=debug"`)
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// How long the runtime drives the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to run
    pub frames: u32,
    /// Simulated real time between frames, in seconds
    pub frame_delta: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            frame_delta: 1.0 / 60.0,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the given file if any, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("No config file given, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::GameTime;

    #[test]
    fn empty_config_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.run.frames, 120);
    }

    #[test]
    fn partial_sections() {
        let config = EngineConfig::from_toml_str(
            r#"
            [time]
            fixed_timestep = 0.02

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!((config.time.fixed_timestep - 0.02).abs() < 1e-6);
        assert_eq!(config.time.max_delta_time, 0.25);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.run, RunConfig::default());
    }

    #[test]
    fn parse_error() {
        let err = EngineConfig::from_toml_str("[time]\nfixed_timestep = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_time_values_drive_a_safe_clock() {
        let config = EngineConfig::from_toml_str(
            "[time]\nmax_delta_time = -1.0\nfixed_timestep = 1e-9",
        )
        .unwrap();
        let mut clock = GameTime::new(config.time);
        clock.update(0.016);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.fixed_steps(), 0);
    }

    #[test]
    fn missing_file() {
        let err = EngineConfig::load("/definitely/not/here/tessera.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let config = EngineConfig::load_or_default(Some(Path::new("/definitely/not/here.toml")));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn toml_roundtrip_keeps_overrides() {
        let mut config = EngineConfig::default();
        config.run.frames = 7;
        config.time.time_scale = 0.5;
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
