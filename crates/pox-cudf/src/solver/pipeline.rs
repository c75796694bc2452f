use std::time::Instant;

use super::backend::{ExternalSolver, SolverOutcome};
use super::criteria::Criteria;
use super::reduce::{NoReduction, Reducer};
use crate::error::{CudfError, Result};
use crate::package::PackageId;
use crate::problem::Problem;

impl Problem {
    /// Solve the problem with `solver` and fold the solution back into the
    /// packages' install state.
    ///
    /// Returns `Ok(None)` when the solver finds no solution, and the packages
    /// the solution installs (possibly none) otherwise, in rank order.
    pub fn solve<S>(&mut self, solver: &S, criteria: &Criteria) -> Result<Option<Vec<PackageId>>>
    where
        S: ExternalSolver + ?Sized,
    {
        self.solve_with(solver, &NoReduction, criteria)
    }

    /// Like [`Problem::solve`], running `reducer` first.
    ///
    /// For every selected package `was_installed` takes the previous value of
    /// `installed`, and `installed` becomes true. Packages that are not
    /// selected are left untouched. On failure or when there is no solution,
    /// nothing is modified.
    pub fn solve_with<S, R>(
        &mut self,
        solver: &S,
        reducer: &R,
        criteria: &Criteria,
    ) -> Result<Option<Vec<PackageId>>>
    where
        S: ExternalSolver + ?Sized,
        R: Reducer + ?Sized,
    {
        let start = Instant::now();

        let selected = {
            let universe = reducer.reduce(self);
            log::debug!(
                "Solving {} of {} packages with criteria {}",
                universe.len(),
                self.packages().len(),
                criteria.bracketed()
            );

            match solver.solve(&universe, &criteria.bracketed()) {
                SolverOutcome::Failed(message) => {
                    log::debug!("Solver failed in {:?}: {}", start.elapsed(), message);
                    return Err(CudfError::SolveError(message));
                }
                SolverOutcome::NoSolution => {
                    log::info!("No solution found in {:.3} seconds", start.elapsed().as_secs_f64());
                    return Ok(None);
                }
                SolverOutcome::Solved(solution) => universe
                    .package_ids()
                    .iter()
                    .copied()
                    .filter(|id| solution.is_installed(*id))
                    .collect::<Vec<_>>(),
            }
        };

        for id in &selected {
            if let Some(pkg) = self.package_mut(*id) {
                pkg.mark_selected();
            }
        }

        log::info!(
            "Solution with {} installed packages found in {:.3} seconds",
            selected.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(Some(selected))
    }
}
