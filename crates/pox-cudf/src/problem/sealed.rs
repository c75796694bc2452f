use super::request::ResolvedRequest;
use crate::package::{
    PackageId, PackageRecord, VersionedPackage, VirtualPackage, VirtualPackageId, Vpkg, VpkgSpec,
};
use crate::property::{Schema, TypedValue};

/// A finalized, solve-ready problem.
///
/// The problem owns every property, virtual package and versioned package it
/// was built with; all cross references are ids into these collections.
/// Structure is frozen; only the install flags of packages change, and only
/// through [`Problem::solve`](crate::solver).
#[derive(Debug, Clone)]
pub struct Problem {
    schema: Schema,
    packages: Vec<VersionedPackage>,
    virtual_packages: Vec<VirtualPackage>,
    request: ResolvedRequest,
}

impl Problem {
    pub(crate) fn new(
        schema: Schema,
        packages: Vec<VersionedPackage>,
        virtual_packages: Vec<VirtualPackage>,
        request: ResolvedRequest,
    ) -> Self {
        Self {
            schema,
            packages,
            virtual_packages,
            request,
        }
    }

    /// A problem with nothing in it
    pub(crate) fn empty() -> Self {
        Self::new(Schema::new(), Vec::new(), Vec::new(), ResolvedRequest::default())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn request(&self) -> &ResolvedRequest {
        &self.request
    }

    /// All versioned packages in rank order
    pub fn packages(&self) -> &[VersionedPackage] {
        &self.packages
    }

    pub fn package(&self, id: PackageId) -> Option<&VersionedPackage> {
        self.packages.get(id.rank())
    }

    pub(crate) fn package_mut(&mut self, id: PackageId) -> Option<&mut VersionedPackage> {
        self.packages.get_mut(id.rank())
    }

    /// All virtual packages in rank order
    pub fn virtual_packages(&self) -> &[VirtualPackage] {
        &self.virtual_packages
    }

    pub fn virtual_package(&self, id: VirtualPackageId) -> Option<&VirtualPackage> {
        self.virtual_packages.get(id.rank())
    }

    pub fn find_virtual_package(&self, name: &str) -> Option<&VirtualPackage> {
        self.virtual_packages.iter().find(|vp| vp.name == name)
    }

    /// Packages currently flagged as installed
    pub fn installed_packages(&self) -> impl Iterator<Item = &VersionedPackage> {
        self.packages.iter().filter(|p| p.installed)
    }

    /// Packages currently flagged as not installed
    pub fn uninstalled_packages(&self) -> impl Iterator<Item = &VersionedPackage> {
        self.packages.iter().filter(|p| !p.installed)
    }

    /// Name a resolved reference
    pub fn vpkg_spec(&self, vpkg: &Vpkg) -> VpkgSpec {
        VpkgSpec {
            name: self
                .virtual_package(vpkg.virtual_package)
                .map(|vp| vp.name.clone())
                .unwrap_or_default(),
            constraint: vpkg.constraint,
        }
    }

    /// Export a package in caller-facing form. Relation and property order
    /// is preserved.
    pub fn to_record(&self, id: PackageId) -> Option<PackageRecord> {
        let pkg = self.package(id)?;
        let name_of = |vpkg: &Vpkg| self.vpkg_spec(vpkg);

        let extra: Vec<(String, TypedValue)> = pkg
            .properties
            .iter()
            .filter_map(|pv| {
                self.schema
                    .get(pv.property)
                    .map(|prop| (prop.name.clone(), pv.value.to_typed(&prop.kind, name_of)))
            })
            .collect();

        Some(PackageRecord {
            name: pkg.name.clone(),
            version: pkg.version,
            depends: pkg
                .depends
                .clauses()
                .iter()
                .map(|clause| clause.iter().map(name_of).collect())
                .collect(),
            conflicts: pkg.conflicts.iter().map(name_of).collect(),
            provides: pkg.provides.iter().map(name_of).collect(),
            installed: pkg.installed,
            was_installed: pkg.was_installed,
            keep: pkg.keep,
            extra,
        })
    }
}
