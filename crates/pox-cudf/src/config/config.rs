use serde::{Deserialize, Serialize};
use std::path::Path;

use super::source::{ConfigLoader, ConfigSource, RawConfig};
use crate::error::Result;
use crate::solver::Criteria;

/// Criteria used when the caller does not supply one: avoid removals, then
/// outdated packages, then any change
pub const DEFAULT_CRITERIA: &str = "-removed,-notuptodate,-changed";

/// Solve-pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Optimization criteria used when none is given to `solve`
    pub criteria: Criteria,
    /// 0 = silent, 1 = warnings, 2 = info, 3 = debug, 4 = trace
    pub verbosity: u8,
    /// Run the configured reducer before solving
    pub reduce: bool,

    #[serde(skip)]
    sources: Vec<(&'static str, ConfigSource)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            criteria: Criteria::new(DEFAULT_CRITERIA),
            verbosity: 1,
            reduce: true,
            sources: Vec::new(),
        }
    }
}

impl Config {
    /// Build configuration from defaults, an optional JSON file and, when
    /// `use_environment` is set, `CUDF_*` variables (highest priority)
    pub fn build(file: Option<&Path>, use_environment: bool) -> Result<Self> {
        let loader = ConfigLoader::new(use_environment);
        let mut config = Self::default();

        if let Some(path) = file {
            let raw = loader.load_config_file(path)?;
            config.merge(raw, ConfigSource::File);
        }

        let env = loader.load_env_config()?;
        config.merge_env(env);

        log::debug!(
            "Loaded config: criteria={}, verbosity={}, reduce={}",
            config.criteria,
            config.verbosity,
            config.reduce
        );
        Ok(config)
    }

    /// Apply a configuration layer on top of this one
    pub fn merge(&mut self, raw: RawConfig, source: ConfigSource) {
        if let Some(criteria) = raw.criteria {
            self.criteria = Criteria::new(criteria);
            self.sources.push(("criteria", source.clone()));
        }
        if let Some(verbosity) = raw.verbosity {
            self.verbosity = verbosity;
            self.sources.push(("verbosity", source.clone()));
        }
        if let Some(reduce) = raw.reduce {
            self.reduce = reduce;
            self.sources.push(("reduce", source));
        }
    }

    fn merge_env(&mut self, raw: RawConfig) {
        let RawConfig {
            criteria,
            verbosity,
            reduce,
        } = raw;
        self.merge(
            RawConfig { criteria, ..Default::default() },
            ConfigSource::Environment("CUDF_CRITERIA".to_string()),
        );
        self.merge(
            RawConfig { verbosity, ..Default::default() },
            ConfigSource::Environment("CUDF_VERBOSITY".to_string()),
        );
        self.merge(
            RawConfig { reduce, ..Default::default() },
            ConfigSource::Environment("CUDF_REDUCE".to_string()),
        );
    }

    /// Where a key's current value came from
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.sources
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s.clone())
            .unwrap_or(ConfigSource::Default)
    }

    /// Log level filter matching `verbosity`, for hosts that install a logger
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.criteria.as_str(), DEFAULT_CRITERIA);
        assert_eq!(config.verbosity, 1);
        assert!(config.reduce);
        assert_eq!(config.source_of("criteria"), ConfigSource::Default);
    }

    #[test]
    fn test_merge_layer() {
        let mut config = Config::default();
        config.merge(
            RawConfig {
                criteria: Some("-new".to_string()),
                verbosity: None,
                reduce: Some(false),
            },
            ConfigSource::File,
        );

        assert_eq!(config.criteria.as_str(), "-new");
        assert_eq!(config.verbosity, 1);
        assert!(!config.reduce);
        assert_eq!(config.source_of("criteria"), ConfigSource::File);
        assert_eq!(config.source_of("verbosity"), ConfigSource::Default);
    }

    #[test]
    fn test_log_level_mapping() {
        let mut config = Config::default();
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        config.verbosity = 0;
        assert_eq!(config.log_level(), log::LevelFilter::Off);
        config.verbosity = 3;
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.verbosity = 9;
        assert_eq!(config.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"verbosity":2}"#).unwrap();
        assert_eq!(config.verbosity, 2);
        assert_eq!(config.criteria.as_str(), DEFAULT_CRITERIA);
        assert!(config.reduce);
    }
}
