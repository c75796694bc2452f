// Package model for CUDF problems
//
// Virtual packages (name identities), versioned packages (concrete releases),
// version-constrained references and dependency formulas. Cross references
// are ids into the owning problem's collections.

mod formula;
mod keep;
mod record;
mod versioned;
mod virtual_package;
mod vpkg;

pub use formula::{Clause, Formula};
pub use keep::KeepPolicy;
pub use record::PackageRecord;
pub use versioned::{PackageId, VersionedPackage};
pub use virtual_package::{VirtualPackage, VirtualPackageId};
pub use vpkg::{Constraint, RelOp, Version, Vpkg, VpkgSpec};
