use crate::package::{PackageId, VersionedPackage, VirtualPackage};
use crate::problem::{Problem, ResolvedRequest};
use crate::property::Schema;

/// The part of a sealed problem handed to the external solver
#[derive(Debug, Clone)]
pub struct Universe<'a> {
    problem: &'a Problem,
    packages: Vec<PackageId>,
}

impl<'a> Universe<'a> {
    /// Every package of the problem
    pub fn full(problem: &'a Problem) -> Self {
        Self {
            problem,
            packages: problem.packages().iter().map(|p| p.rank).collect(),
        }
    }

    /// A subset of the problem's packages. Ids are kept in rank order.
    pub fn subset(problem: &'a Problem, mut packages: Vec<PackageId>) -> Self {
        packages.retain(|id| problem.package(*id).is_some());
        packages.sort();
        packages.dedup();
        Self { problem, packages }
    }

    pub fn problem(&self) -> &'a Problem {
        self.problem
    }

    pub fn schema(&self) -> &'a Schema {
        self.problem.schema()
    }

    pub fn request(&self) -> &'a ResolvedRequest {
        self.problem.request()
    }

    pub fn virtual_packages(&self) -> &'a [VirtualPackage] {
        self.problem.virtual_packages()
    }

    pub fn package_ids(&self) -> &[PackageId] {
        &self.packages
    }

    pub fn packages(&self) -> impl Iterator<Item = &'a VersionedPackage> + '_ {
        self.packages.iter().filter_map(|id| self.problem.package(*id))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Simplifies a problem before it is solved.
///
/// Reduction only narrows the set of packages the solver sees; solutions are
/// applied to those packages only.
pub trait Reducer {
    fn reduce<'a>(&self, problem: &'a Problem) -> Universe<'a>;
}

/// Hands the whole problem to the solver
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReduction;

impl Reducer for NoReduction {
    fn reduce<'a>(&self, problem: &'a Problem) -> Universe<'a> {
        Universe::full(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageRecord;
    use crate::problem::{ProblemBuilder, Request};

    fn problem() -> Problem {
        let mut builder = ProblemBuilder::new(&[]).unwrap();
        for (name, version) in [("a", 1), ("a", 2), ("b", 1)] {
            builder.add_package(&PackageRecord::new(name, version)).unwrap();
        }
        builder.finalize(&Request::new())
    }

    #[test]
    fn test_no_reduction_keeps_everything() {
        let problem = problem();
        let universe = NoReduction.reduce(&problem);
        assert_eq!(universe.len(), 3);
        assert_eq!(universe.virtual_packages().len(), 2);
    }

    #[test]
    fn test_subset_is_sorted_and_bounded() {
        let problem = problem();
        let universe = Universe::subset(
            &problem,
            vec![
                PackageId::from_rank(2),
                PackageId::from_rank(0),
                PackageId::from_rank(2),
                PackageId::from_rank(9),
            ],
        );

        let names: Vec<String> = universe.packages().map(|p| p.pretty_string()).collect();
        assert_eq!(names, vec!["a (= 1)", "b (= 1)"]);
    }
}
