//! Problem construction and lifecycle.
//!
//! A problem moves through two phases:
//!
//! 1. [`ProblemBuilder`]: created with a property schema, populated with
//!    packages. Owns the virtual package registry.
//! 2. [`Problem`]: sealed by [`ProblemBuilder::finalize`] with a [`Request`].
//!    The registry is gone, the virtual package list is frozen, and the
//!    problem can be solved.
//!
//! Because finalizing consumes the builder, adding packages to a sealed
//! problem or sealing it twice does not compile. Callers holding a dynamic
//! handle use [`ProblemHandle`](crate::handle::ProblemHandle) instead, which
//! reports those violations as errors.

mod builder;
mod request;
mod sealed;

pub use builder::ProblemBuilder;
pub use request::{Request, ResolvedRequest};
pub use sealed::Problem;
