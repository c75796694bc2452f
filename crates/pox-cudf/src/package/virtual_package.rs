use std::fmt;

use super::versioned::PackageId;
use super::vpkg::Version;

/// Index of a [`VirtualPackage`] in its problem; equal to its rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualPackageId(u32);

impl VirtualPackageId {
    pub(crate) fn from_rank(rank: usize) -> Self {
        Self(rank as u32)
    }

    /// First-seen rank (0, 1, 2, ...)
    pub fn rank(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VirtualPackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The identity of a package name, aggregating every version released under it.
#[derive(Debug, Clone)]
pub struct VirtualPackage {
    pub name: String,
    pub rank: VirtualPackageId,
    /// Every versioned package registered under this name, in insertion order
    pub versions: Vec<PackageId>,
    /// Highest version seen so far; 0 until a version is registered
    pub highest_version: Version,
    /// First package registered with `installed = true`.
    ///
    /// This is not necessarily the highest installed version.
    pub highest_installed: Option<PackageId>,
}

impl VirtualPackage {
    pub(crate) fn new(name: impl Into<String>, rank: VirtualPackageId) -> Self {
        Self {
            name: name.into(),
            rank,
            versions: Vec::new(),
            highest_version: 0,
            highest_installed: None,
        }
    }

    /// Record a newly created versioned package under this name
    pub(crate) fn register(&mut self, package: PackageId, version: Version, installed: bool) {
        self.versions.push(package);
        if version > self.highest_version {
            self.highest_version = version;
        }
        if installed && self.highest_installed.is_none() {
            self.highest_installed = Some(package);
        }
    }

    /// Whether only referenced, never registered as a concrete package
    pub fn is_pure_virtual(&self) -> bool {
        self.versions.is_empty()
    }
}
