//! Solving a sealed problem with an external solver.
//!
//! The solving algorithm itself is not part of this crate. An
//! [`ExternalSolver`] receives a [`Universe`] (the sealed problem, optionally
//! narrowed by a [`Reducer`]) and the bracketed [`Criteria`], and reports a
//! [`SolverOutcome`]. [`Problem::solve`](crate::problem::Problem::solve)
//! applies the outcome back onto the problem's packages.
//!
//! # Example
//!
//! ```
//! use pox_cudf::package::{PackageRecord, VpkgSpec};
//! use pox_cudf::problem::{ProblemBuilder, Request};
//! use pox_cudf::solver::{Criteria, SolverOutcome, Universe};
//!
//! let mut builder = ProblemBuilder::new(&[]).unwrap();
//! builder.add_package(&PackageRecord::new("a", 1)).unwrap();
//!
//! let mut request = Request::new();
//! request.install(VpkgSpec::any("a"));
//! let mut problem = builder.finalize(&request);
//!
//! let install_all = |universe: &Universe<'_>, _criteria: &str| {
//!     SolverOutcome::Solved(universe.packages().map(|p| p.rank).collect())
//! };
//! let installed = problem.solve(&install_all, &Criteria::new("-changed")).unwrap();
//! assert_eq!(installed.map(|ids| ids.len()), Some(1));
//! ```

mod backend;
mod criteria;
mod pipeline;
mod reduce;

pub use backend::{ExternalSolver, Solution, SolverOutcome};
pub use criteria::Criteria;
pub use reduce::{NoReduction, Reducer, Universe};
