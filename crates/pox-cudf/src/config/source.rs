use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{CudfError, Result};

/// Highest accepted verbosity, which maps to trace logging
pub const MAX_VERBOSITY: u8 = 4;

/// Represents the source of a configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default built-in value
    Default,
    /// From a configuration file
    File,
    /// From environment variable
    Environment(String),
}

impl ConfigSource {
    pub fn as_str(&self) -> &str {
        match self {
            ConfigSource::Default => "default",
            ConfigSource::File => "file",
            ConfigSource::Environment(var) => var,
        }
    }
}

/// Partial configuration as read from a JSON file; absent keys keep the
/// value from the previous layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce: Option<bool>,
}

/// Loads configuration from files and `CUDF_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    use_environment: bool,
}

impl ConfigLoader {
    pub fn new(use_environment: bool) -> Self {
        Self { use_environment }
    }

    /// Get a non-empty environment variable, if the environment is enabled
    pub fn get_env(&self, var: &str) -> Option<String> {
        if !self.use_environment {
            return None;
        }

        env::var(var).ok().filter(|s| !s.is_empty())
    }

    /// Get a configuration value from environment variable
    /// Converts "foo-bar" to "CUDF_FOO_BAR"
    pub fn get_env_config(&self, key: &str) -> Option<String> {
        let env_var = format!("CUDF_{}", key.replace('-', "_").to_uppercase());
        self.get_env(&env_var)
    }

    /// Get boolean value from environment variable
    pub fn get_env_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get_env_config(key) {
            Some(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(CudfError::Config(format!("Invalid value {:?} for {}", val, key))),
            },
            None => Ok(None),
        }
    }

    /// Get a small unsigned value from environment variable
    pub fn get_env_u8(&self, key: &str) -> Result<Option<u8>> {
        match self.get_env_config(key) {
            Some(val) => val.trim().parse().map(Some).map_err(|_| {
                CudfError::Config(format!("Invalid value {:?} for {}", val, key))
            }),
            None => Ok(None),
        }
    }

    /// Load configuration from a JSON file. A missing file yields an empty layer.
    pub fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<RawConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(RawConfig::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| CudfError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: RawConfig = serde_json::from_str(&contents)
            .map_err(|e| CudfError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        check_verbosity(config.verbosity, &path.display().to_string())?;
        Ok(config)
    }

    /// Collect the environment layer
    pub fn load_env_config(&self) -> Result<RawConfig> {
        let verbosity = self.get_env_u8("verbosity")?;
        check_verbosity(verbosity, "CUDF_VERBOSITY")?;

        Ok(RawConfig {
            criteria: self.get_env_config("criteria"),
            verbosity,
            reduce: self.get_env_bool("reduce")?,
        })
    }
}

fn check_verbosity(verbosity: Option<u8>, origin: &str) -> Result<()> {
    match verbosity {
        Some(v) if v > MAX_VERBOSITY => Err(CudfError::Config(format!(
            "Verbosity {} from {} is out of range 0-{}",
            v, origin, MAX_VERBOSITY
        ))),
        _ => Ok(()),
    }
}
