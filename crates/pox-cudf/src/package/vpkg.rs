use serde::{Deserialize, Serialize};
use std::fmt;

use super::virtual_package::VirtualPackageId;

/// Package versions are plain positive integers in CUDF.
pub type Version = u64;

/// Relational operator of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelOp {
    /// Equal (=)
    #[serde(rename = "=")]
    Eq,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Geq,
    /// Greater than (>)
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    Leq,
    /// Less than (<)
    #[serde(rename = "<")]
    Lt,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    Neq,
}

impl RelOp {
    /// Parse operator from its CUDF spelling
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "=" => Some(RelOp::Eq),
            ">=" => Some(RelOp::Geq),
            ">" => Some(RelOp::Gt),
            "<=" => Some(RelOp::Leq),
            "<" => Some(RelOp::Lt),
            "!=" => Some(RelOp::Neq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Geq => ">=",
            RelOp::Gt => ">",
            RelOp::Leq => "<=",
            RelOp::Lt => "<",
            RelOp::Neq => "!=",
        }
    }

    /// Check whether `version <op> bound` holds
    pub fn holds(&self, version: Version, bound: Version) -> bool {
        match self {
            RelOp::Eq => version == bound,
            RelOp::Geq => version >= bound,
            RelOp::Gt => version > bound,
            RelOp::Leq => version <= bound,
            RelOp::Lt => version < bound,
            RelOp::Neq => version != bound,
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An `(operator, version)` pair restricting which versions a reference accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constraint {
    pub op: RelOp,
    pub version: Version,
}

impl Constraint {
    pub fn new(op: RelOp, version: Version) -> Self {
        Self { op, version }
    }

    pub fn matches(&self, version: Version) -> bool {
        self.op.holds(version, self.version)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}

/// A package reference as supplied by the caller, before name resolution.
///
/// `constraint = None` means any version of the named package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VpkgSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl VpkgSpec {
    /// Reference any version of `name`
    pub fn any(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
        }
    }

    /// Reference versions of `name` satisfying `op version`
    pub fn with(name: impl Into<String>, op: RelOp, version: Version) -> Self {
        Self {
            name: name.into(),
            constraint: Some(Constraint::new(op, version)),
        }
    }
}

impl fmt::Display for VpkgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(c) => write!(f, "{} {}", self.name, c),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A version-constrained reference to a virtual package, resolved against
/// the problem's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vpkg {
    pub virtual_package: VirtualPackageId,
    pub constraint: Option<Constraint>,
}

impl Vpkg {
    pub fn new(virtual_package: VirtualPackageId, constraint: Option<Constraint>) -> Self {
        Self {
            virtual_package,
            constraint,
        }
    }

    /// The relational operator, or `None` when any version is accepted
    pub fn op(&self) -> Option<RelOp> {
        self.constraint.map(|c| c.op)
    }

    /// The constrained version; 0 when unconstrained
    pub fn version(&self) -> Version {
        self.constraint.map(|c| c.version).unwrap_or(0)
    }

    /// Check whether a concrete version of the referenced name satisfies this reference
    pub fn matches(&self, version: Version) -> bool {
        self.constraint.map_or(true, |c| c.matches(version))
    }
}
