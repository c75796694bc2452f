use serde::{Deserialize, Serialize};

use super::keep::KeepPolicy;
use super::vpkg::{Version, VpkgSpec};
use crate::property::TypedValue;

/// A package as it crosses the boundary to the calling environment.
///
/// References are by name; `depends` is a list of clauses, each clause a
/// list of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageRecord {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub depends: Vec<Vec<VpkgSpec>>,
    #[serde(default)]
    pub conflicts: Vec<VpkgSpec>,
    #[serde(default)]
    pub provides: Vec<VpkgSpec>,
    #[serde(default)]
    pub installed: bool,
    #[serde(default)]
    pub was_installed: bool,
    #[serde(default)]
    pub keep: KeepPolicy,
    /// Extra properties as `(name, value)` pairs
    #[serde(default)]
    pub extra: Vec<(String, TypedValue)>,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            depends: Vec::new(),
            conflicts: Vec::new(),
            provides: Vec::new(),
            installed: false,
            was_installed: false,
            keep: KeepPolicy::None,
            extra: Vec::new(),
        }
    }

    /// Add a dependency clause (any one of `alternatives` satisfies it)
    pub fn depends_on(mut self, alternatives: Vec<VpkgSpec>) -> Self {
        self.depends.push(alternatives);
        self
    }

    pub fn conflicts_with(mut self, spec: VpkgSpec) -> Self {
        self.conflicts.push(spec);
        self
    }

    pub fn provide(mut self, spec: VpkgSpec) -> Self {
        self.provides.push(spec);
        self
    }

    pub fn installed(mut self, installed: bool) -> Self {
        self.installed = installed;
        self
    }

    pub fn was_installed(mut self, was_installed: bool) -> Self {
        self.was_installed = was_installed;
        self
    }

    pub fn keep(mut self, keep: KeepPolicy) -> Self {
        self.keep = keep;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: TypedValue) -> Self {
        self.extra.push((name.into(), value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::RelOp;

    #[test]
    fn test_record_builder() {
        let record = PackageRecord::new("app", 3)
            .depends_on(vec![VpkgSpec::with("libc", RelOp::Geq, 2)])
            .conflicts_with(VpkgSpec::any("legacy-app"))
            .provide(VpkgSpec::with("app-api", RelOp::Eq, 1))
            .installed(true)
            .keep(KeepPolicy::Version)
            .with_property("priority", TypedValue::Int(5));

        assert_eq!(record.depends.len(), 1);
        assert_eq!(record.conflicts[0].name, "legacy-app");
        assert_eq!(record.provides[0].constraint.map(|c| c.version), Some(1));
        assert!(record.installed);
        assert!(!record.was_installed);
        assert_eq!(record.keep, KeepPolicy::Version);
        assert_eq!(record.extra, vec![("priority".to_string(), TypedValue::Int(5))]);
    }

    #[test]
    fn test_record_defaults_from_json() {
        let record: PackageRecord = serde_json::from_str(r#"{"name":"a","version":1}"#).unwrap();
        assert_eq!(record, PackageRecord::new("a", 1));

        let record: PackageRecord = serde_json::from_str(
            r#"{"name":"a","version":2,"was-installed":true,"keep":"feature",
                "extra":[["priority",{"type":"int","value":3}]]}"#,
        )
        .unwrap();
        assert!(record.was_installed);
        assert_eq!(record.keep, KeepPolicy::Feature);
        assert_eq!(record.extra[0].1, TypedValue::Int(3));
    }
}
