//! Deduplicating, insertion-ordered table of virtual packages.
//!
//! The registry only lives while a problem is being populated. Every name
//! mentioned anywhere (a package, a dependency, a provide, a property
//! default, the request) is resolved through it, and the first mention of a
//! name fixes its rank. Finalizing the problem consumes the registry via
//! [`VirtualPackageRegistry::snapshot`].

use indexmap::IndexMap;

use crate::error::Result;
use crate::package::{Clause, Formula, VirtualPackage, VirtualPackageId, Vpkg, VpkgSpec};

#[derive(Debug, Default)]
pub struct VirtualPackageRegistry {
    /// Uses IndexMap so that the entry index is the first-seen rank
    packages: IndexMap<String, VirtualPackage>,
}

impl VirtualPackageRegistry {
    pub fn new() -> Self {
        Self {
            packages: IndexMap::new(),
        }
    }

    /// Get the virtual package for `name`, creating it with the next rank on first use
    pub fn get_or_create(&mut self, name: &str) -> VirtualPackageId {
        if let Some(index) = self.packages.get_index_of(name) {
            return VirtualPackageId::from_rank(index);
        }

        let rank = VirtualPackageId::from_rank(self.packages.len());
        log::trace!("New virtual package {} with rank {}", name, rank.rank());
        self.packages.insert(name.to_string(), VirtualPackage::new(name, rank));
        rank
    }

    /// Look up an existing entry without creating it
    pub fn find(&self, name: &str) -> Option<VirtualPackageId> {
        self.packages.get_index_of(name).map(VirtualPackageId::from_rank)
    }

    pub fn get(&self, id: VirtualPackageId) -> Option<&VirtualPackage> {
        self.packages.get_index(id.rank()).map(|(_, vp)| vp)
    }

    pub(crate) fn get_mut(&mut self, id: VirtualPackageId) -> Option<&mut VirtualPackage> {
        self.packages.get_index_mut(id.rank()).map(|(_, vp)| vp)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Resolve a single reference, attaching its optional constraint
    pub fn build_ref(&mut self, spec: &VpkgSpec) -> Vpkg {
        let id = self.get_or_create(&spec.name);
        Vpkg::new(id, spec.constraint)
    }

    /// Resolve a flat reference list, order preserved
    pub fn build_list(&mut self, specs: &[VpkgSpec]) -> Vec<Vpkg> {
        specs.iter().map(|spec| self.build_ref(spec)).collect()
    }

    /// Resolve a list of clauses into a formula.
    ///
    /// No clauses yields the "no constraint" formula; a clause without any
    /// reference is rejected.
    pub fn build_formula(&mut self, clauses: &[Vec<VpkgSpec>]) -> Result<Formula> {
        if clauses.is_empty() {
            return Ok(Formula::unconstrained());
        }

        let mut resolved = Vec::with_capacity(clauses.len());
        for clause in clauses {
            resolved.push(Clause::new(self.build_list(clause))?);
        }
        Ok(Formula::from_clauses(resolved))
    }

    /// All entries in creation order. Consumes the registry.
    pub fn snapshot(self) -> Vec<VirtualPackage> {
        self.packages.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CudfError;
    use crate::package::RelOp;

    #[test]
    fn test_ranks_follow_first_seen_order() {
        let mut registry = VirtualPackageRegistry::new();
        let names = ["c", "a", "c", "b", "a", "d"];
        let ranks: Vec<usize> = names.iter().map(|n| registry.get_or_create(n).rank()).collect();

        assert_eq!(ranks, vec![0, 1, 0, 2, 1, 3]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_repeated_lookup_returns_same_identity() {
        let mut registry = VirtualPackageRegistry::new();
        let first = registry.get_or_create("libfoo");
        registry.get_or_create("libbar");
        let again = registry.get_or_create("libfoo");

        assert_eq!(first, again);
        assert_eq!(registry.find("libbar").map(|id| id.rank()), Some(1));
        assert_eq!(registry.find("missing"), None);
    }

    #[test]
    fn test_snapshot_in_creation_order() {
        let mut registry = VirtualPackageRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.get_or_create(name);
        }

        let all = registry.snapshot();
        let names: Vec<&str> = all.iter().map(|vp| vp.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        for (index, vp) in all.iter().enumerate() {
            assert_eq!(vp.rank.rank(), index);
        }
    }

    #[test]
    fn test_build_ref_without_constraint() {
        let mut registry = VirtualPackageRegistry::new();
        let vpkg = registry.build_ref(&VpkgSpec::any("a"));
        assert_eq!(vpkg.op(), None);
        assert_eq!(vpkg.virtual_package.rank(), 0);
    }

    #[test]
    fn test_build_formula_round_trip() {
        let mut registry = VirtualPackageRegistry::new();
        let clauses = vec![
            vec![VpkgSpec::with("a", RelOp::Geq, 2), VpkgSpec::any("b")],
            vec![VpkgSpec::with("c", RelOp::Neq, 1)],
            vec![VpkgSpec::any("b"), VpkgSpec::any("a")],
        ];

        let formula = registry.build_formula(&clauses).unwrap();
        let flattened: Vec<Vec<VpkgSpec>> = formula
            .to_lists()
            .iter()
            .map(|clause| {
                clause
                    .iter()
                    .map(|vpkg| VpkgSpec {
                        name: registry.get(vpkg.virtual_package).unwrap().name.clone(),
                        constraint: vpkg.constraint,
                    })
                    .collect()
            })
            .collect();

        assert_eq!(flattened, clauses);
    }

    #[test]
    fn test_empty_formula_is_distinct_from_empty_clause() {
        let mut registry = VirtualPackageRegistry::new();

        let none = registry.build_formula(&[]).unwrap();
        assert!(none.is_unconstrained());

        let err = registry.build_formula(&[vec![]]).unwrap_err();
        assert!(matches!(err, CudfError::EmptyClause));
    }
}
