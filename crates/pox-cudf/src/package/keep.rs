use serde::{Deserialize, Serialize};
use std::fmt;

/// Retention directive limiting how the solver may change a package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepPolicy {
    /// No restriction
    #[default]
    None,
    /// Keep this exact version installed
    Version,
    /// Keep at least one version of this package installed
    Package,
    /// Keep the features this package provides available
    Feature,
}

impl KeepPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(KeepPolicy::None),
            "version" => Some(KeepPolicy::Version),
            "package" => Some(KeepPolicy::Package),
            "feature" => Some(KeepPolicy::Feature),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeepPolicy::None => "none",
            KeepPolicy::Version => "version",
            KeepPolicy::Package => "package",
            KeepPolicy::Feature => "feature",
        }
    }
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
