use super::request::{Request, ResolvedRequest};
use super::sealed::Problem;
use crate::error::{CudfError, Result};
use crate::package::{PackageId, PackageRecord, VersionedPackage, VirtualPackage, VirtualPackageId};
use crate::property::{PropertyDecl, Schema};
use crate::registry::VirtualPackageRegistry;

/// A problem that is still being populated.
///
/// The builder owns the virtual package registry; [`ProblemBuilder::finalize`]
/// consumes both and yields a sealed [`Problem`], so packages cannot be added
/// to a finalized problem and a problem cannot be finalized twice.
#[derive(Debug)]
pub struct ProblemBuilder {
    schema: Schema,
    registry: VirtualPackageRegistry,
    packages: Vec<VersionedPackage>,
}

impl ProblemBuilder {
    /// Create an empty problem with a fixed property schema
    pub fn new(decls: &[PropertyDecl]) -> Result<Self> {
        let mut registry = VirtualPackageRegistry::new();
        let schema = Schema::from_decls(decls, &mut registry)?;
        log::debug!(
            "Created problem with {} properties ({} virtual packages from defaults)",
            schema.len(),
            registry.len()
        );

        Ok(Self {
            schema,
            registry,
            packages: Vec::new(),
        })
    }

    /// Add a concrete package version to the universe.
    ///
    /// Everything that can fail is checked before the problem is touched, so
    /// a rejected record leaves no trace: no package, no virtual package.
    pub fn add_package(&mut self, record: &PackageRecord) -> Result<PackageId> {
        self.validate(record)?;

        let virtual_package = self.registry.get_or_create(&record.name);
        let id = PackageId::from_rank(self.packages.len());

        let depends = self.registry.build_formula(&record.depends)?;
        let conflicts = self.registry.build_list(&record.conflicts);
        let provides = self.registry.build_list(&record.provides);

        let mut properties = Vec::with_capacity(record.extra.len());
        for (name, value) in &record.extra {
            properties.push(self.schema.resolve(name, value, &mut self.registry)?);
        }

        if let Some(vp) = self.registry.get_mut(virtual_package) {
            vp.register(id, record.version, record.installed);
        }

        self.packages.push(VersionedPackage {
            name: record.name.clone(),
            version: record.version,
            rank: id,
            virtual_package,
            depends,
            conflicts,
            provides,
            installed: record.installed,
            was_installed: record.was_installed,
            keep: record.keep,
            properties,
        });

        log::trace!("Added package {} {} as {}", record.name, record.version, id);
        Ok(id)
    }

    fn validate(&self, record: &PackageRecord) -> Result<()> {
        if record.depends.iter().any(|clause| clause.is_empty()) {
            return Err(CudfError::EmptyClause);
        }
        for (name, value) in &record.extra {
            self.schema.check(name, value)?;
        }
        Ok(())
    }

    /// Seal the problem with its request.
    ///
    /// Request references are resolved through the registry, which is then
    /// frozen into the problem's ordered virtual package list.
    pub fn finalize(mut self, request: &Request) -> Problem {
        if !request.extra.is_empty() {
            log::warn!(
                "Extra request fields are not supported, ignoring {} field(s)",
                request.extra.len()
            );
        }

        let resolved = ResolvedRequest {
            install: self.registry.build_list(&request.install),
            remove: self.registry.build_list(&request.remove),
            upgrade: self.registry.build_list(&request.upgrade),
        };

        let virtual_packages = self.registry.snapshot();
        log::debug!(
            "Finalized problem: {} packages, {} virtual packages, \
             request {}/{}/{} (install/remove/upgrade)",
            self.packages.len(),
            virtual_packages.len(),
            resolved.install.len(),
            resolved.remove.len(),
            resolved.upgrade.len()
        );

        Problem::new(self.schema, self.packages, virtual_packages, resolved)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn package(&self, id: PackageId) -> Option<&VersionedPackage> {
        self.packages.get(id.rank())
    }

    pub fn packages(&self) -> &[VersionedPackage] {
        &self.packages
    }

    pub fn virtual_package(&self, id: VirtualPackageId) -> Option<&VirtualPackage> {
        self.registry.get(id)
    }

    /// Find a virtual package by name without creating it
    pub fn find_virtual_package(&self, name: &str) -> Option<&VirtualPackage> {
        self.registry.find(name).and_then(|id| self.registry.get(id))
    }

    /// Rank the next added package will receive
    pub fn next_package_rank(&self) -> usize {
        self.packages.len()
    }
}
