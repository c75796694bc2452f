use std::fmt;

use super::formula::Formula;
use super::keep::KeepPolicy;
use super::virtual_package::VirtualPackageId;
use super::vpkg::{Version, Vpkg};
use crate::property::{PropertyId, PropertyValue};

/// Index of a [`VersionedPackage`] in its problem; equal to its global rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageId(u32);

impl PackageId {
    pub(crate) fn from_rank(rank: usize) -> Self {
        Self(rank as u32)
    }

    /// Insertion rank across the whole universe
    pub fn rank(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// One concrete release of a virtual package.
#[derive(Debug, Clone)]
pub struct VersionedPackage {
    pub name: String,
    pub version: Version,
    pub rank: PackageId,
    /// Back-link to the name's identity
    pub virtual_package: VirtualPackageId,
    pub depends: Formula,
    pub conflicts: Vec<Vpkg>,
    pub provides: Vec<Vpkg>,
    pub installed: bool,
    pub was_installed: bool,
    pub keep: KeepPolicy,
    /// Extra properties, in the order they were supplied
    pub properties: Vec<PropertyValue>,
}

impl VersionedPackage {
    /// Get the value of an extra property, if it was supplied for this package
    pub fn property(&self, id: PropertyId) -> Option<&PropertyValue> {
        self.properties.iter().find(|p| p.property == id)
    }

    /// Mark this package as selected by a solution, remembering its prior state
    pub(crate) fn mark_selected(&mut self) {
        self.was_installed = self.installed;
        self.installed = true;
    }

    /// Human-readable `name (= version)` form
    pub fn pretty_string(&self) -> String {
        format!("{} (= {})", self.name, self.version)
    }
}

impl fmt::Display for VersionedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}
