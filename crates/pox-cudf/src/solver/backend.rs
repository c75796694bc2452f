use std::collections::HashSet;

use super::reduce::Universe;
use crate::package::PackageId;

/// The set of packages a solution installs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    selected: HashSet<PackageId>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: PackageId) {
        self.selected.insert(id);
    }

    /// Whether the solution installs `id`
    pub fn is_installed(&self, id: PackageId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<PackageId> for Solution {
    fn from_iter<I: IntoIterator<Item = PackageId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// What an external solver reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutcome {
    /// The solver itself failed; the message is surfaced verbatim
    Failed(String),
    /// The solver ran but found no solution
    NoSolution,
    /// A solution was found
    Solved(Solution),
}

/// An external constraint solver.
///
/// Receives the (possibly reduced) universe of a sealed problem and the
/// bracketed criteria expression. The call is synchronous and may block for
/// as long as the solver runs.
pub trait ExternalSolver {
    fn solve(&self, universe: &Universe<'_>, criteria: &str) -> SolverOutcome;
}

impl<F> ExternalSolver for F
where
    F: Fn(&Universe<'_>, &str) -> SolverOutcome,
{
    fn solve(&self, universe: &Universe<'_>, criteria: &str) -> SolverOutcome {
        self(universe, criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_membership() {
        let solution: Solution = [PackageId::from_rank(1), PackageId::from_rank(3)]
            .into_iter()
            .collect();

        assert_eq!(solution.len(), 2);
        assert!(solution.is_installed(PackageId::from_rank(3)));
        assert!(!solution.is_installed(PackageId::from_rank(0)));
        assert!(Solution::new().is_empty());
    }
}
