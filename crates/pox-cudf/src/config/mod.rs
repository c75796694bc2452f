//! Configuration for the solve pipeline
//!
//! # Configuration Sources (in priority order, highest to lowest)
//!
//! 1. Environment variables (`CUDF_CRITERIA`, `CUDF_VERBOSITY`, `CUDF_REDUCE`)
//! 2. A JSON configuration file
//! 3. Built-in defaults

mod config;
mod source;

pub use config::{Config, DEFAULT_CRITERIA};
pub use source::{ConfigLoader, ConfigSource, RawConfig, MAX_VERBOSITY};
