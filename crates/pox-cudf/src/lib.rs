//! CUDF package-universe model and solve pipeline.
//!
//! Builds an in-memory problem (packages, virtual packages, dependency
//! formulas, typed extra properties and an install/remove/upgrade request),
//! hands it to an external solver and applies the returned solution to the
//! package set.

pub mod config;
pub mod error;
pub mod handle;
pub mod package;
pub mod problem;
pub mod property;
pub mod registry;
pub mod solver;

pub use config::Config;
pub use error::{CudfError, Result};
pub use handle::{create_problem, ProblemHandle};
pub use package::{
    KeepPolicy, PackageId, PackageRecord, RelOp, Version, VersionedPackage, VirtualPackage,
    VirtualPackageId, Vpkg, VpkgSpec,
};
pub use problem::{Problem, ProblemBuilder, Request};
pub use property::{PropertyDecl, PropertyKind, TypedValue};
pub use registry::VirtualPackageRegistry;
pub use solver::{Criteria, ExternalSolver, Reducer, Solution, SolverOutcome, Universe};
