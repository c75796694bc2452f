use serde::{Deserialize, Serialize};

use crate::package::{Vpkg, VpkgSpec};
use crate::property::TypedValue;

/// What the caller wants changed: packages to install, remove and upgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub install: Vec<VpkgSpec>,
    #[serde(default)]
    pub remove: Vec<VpkgSpec>,
    #[serde(default)]
    pub upgrade: Vec<VpkgSpec>,
    /// Extra request properties. Not supported; ignored with a warning.
    #[serde(default)]
    pub extra: Vec<(String, TypedValue)>,
}

impl Request {
    /// Create a new empty request
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, spec: VpkgSpec) -> &mut Self {
        self.install.push(spec);
        self
    }

    pub fn remove(&mut self, spec: VpkgSpec) -> &mut Self {
        self.remove.push(spec);
        self
    }

    pub fn upgrade(&mut self, spec: VpkgSpec) -> &mut Self {
        self.upgrade.push(spec);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.install.is_empty() && self.remove.is_empty() && self.upgrade.is_empty()
    }
}

/// A request whose references have been resolved against the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub install: Vec<Vpkg>,
    pub remove: Vec<Vpkg>,
    pub upgrade: Vec<Vpkg>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::RelOp;

    #[test]
    fn test_request_new() {
        let request = Request::new();
        assert!(request.is_empty());
        assert!(request.extra.is_empty());
    }

    #[test]
    fn test_request_builders() {
        let mut request = Request::new();
        request
            .install(VpkgSpec::any("a"))
            .remove(VpkgSpec::with("b", RelOp::Lt, 2))
            .upgrade(VpkgSpec::any("c"));

        assert!(!request.is_empty());
        assert_eq!(request.install, vec![VpkgSpec::any("a")]);
        assert_eq!(request.remove[0].constraint.map(|c| c.op), Some(RelOp::Lt));
        assert_eq!(request.upgrade[0].name, "c");
    }
}
