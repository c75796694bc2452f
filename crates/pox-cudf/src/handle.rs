//! Problem handle for callers that drive the lifecycle dynamically.
//!
//! The typed API ([`ProblemBuilder`] → [`Problem`]) rules out phase
//! violations at compile time. A [`ProblemHandle`] carries the phase at
//! runtime instead and reports violations as
//! [`CudfError::AlreadyFinalized`] / [`CudfError::NotFinalized`]. All data
//! crosses this boundary as records and names.

use crate::config::Config;
use crate::error::{CudfError, Result};
use crate::package::PackageRecord;
use crate::problem::{Problem, ProblemBuilder, Request};
use crate::property::PropertyDecl;
use crate::solver::{Criteria, ExternalSolver, NoReduction, Reducer};

enum Phase {
    /// Registry live, packages may be added
    Open(ProblemBuilder),
    /// Request set, solving allowed
    Sealed(Problem),
}

/// A problem owned by the calling environment.
///
/// Dropping the handle releases the problem and everything it owns.
pub struct ProblemHandle {
    phase: Phase,
    config: Config,
    reducer: Box<dyn Reducer>,
}

impl std::fmt::Debug for ProblemHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProblemHandle")
            .field("sealed", &self.is_sealed())
            .field("config", &self.config)
            .finish()
    }
}

/// Create a problem with the given property schema and default configuration
pub fn create_problem(schema: &[PropertyDecl]) -> Result<ProblemHandle> {
    ProblemHandle::new(schema, Config::default())
}

impl ProblemHandle {
    pub fn new(schema: &[PropertyDecl], config: Config) -> Result<Self> {
        Ok(Self {
            phase: Phase::Open(ProblemBuilder::new(schema)?),
            config,
            reducer: Box::new(NoReduction),
        })
    }

    /// Use `reducer` before solving when `Config::reduce` is set
    pub fn with_reducer(mut self, reducer: Box<dyn Reducer>) -> Self {
        self.reducer = reducer;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_sealed(&self) -> bool {
        matches!(self.phase, Phase::Sealed(_))
    }

    /// The sealed problem, once the request has been finalized
    pub fn problem(&self) -> Option<&Problem> {
        match &self.phase {
            Phase::Sealed(problem) => Some(problem),
            Phase::Open(_) => None,
        }
    }

    /// The open builder, until the request is finalized
    pub fn builder(&self) -> Option<&ProblemBuilder> {
        match &self.phase {
            Phase::Open(builder) => Some(builder),
            Phase::Sealed(_) => None,
        }
    }

    /// Add a package to an open problem
    pub fn add_package(&mut self, record: &PackageRecord) -> Result<()> {
        match &mut self.phase {
            Phase::Open(builder) => builder.add_package(record).map(|_| ()),
            Phase::Sealed(_) => Err(CudfError::NotFinalized(
                "packages cannot be added after the request is finalized".to_string(),
            )),
        }
    }

    /// Set the request and seal the problem. Allowed exactly once.
    pub fn finalize_request(&mut self, request: &Request) -> Result<()> {
        let phase = std::mem::replace(&mut self.phase, Phase::Sealed(Problem::empty()));
        match phase {
            Phase::Open(builder) => {
                self.phase = Phase::Sealed(builder.finalize(request));
                Ok(())
            }
            sealed => {
                self.phase = sealed;
                Err(CudfError::AlreadyFinalized)
            }
        }
    }

    /// Solve the sealed problem.
    ///
    /// `criteria` falls back to the configured criteria. Returns `None` when
    /// there is no solution, otherwise the records of the packages the
    /// solution installs, with their updated flags.
    pub fn solve<S>(
        &mut self,
        solver: &S,
        criteria: Option<&str>,
    ) -> Result<Option<Vec<PackageRecord>>>
    where
        S: ExternalSolver + ?Sized,
    {
        let problem = match &mut self.phase {
            Phase::Sealed(problem) => problem,
            Phase::Open(_) => {
                return Err(CudfError::NotFinalized(
                    "the request must be finalized before solving".to_string(),
                ))
            }
        };

        let criteria = criteria
            .map(Criteria::from)
            .unwrap_or_else(|| self.config.criteria.clone());

        let selected = if self.config.reduce {
            problem.solve_with(solver, self.reducer.as_ref(), &criteria)?
        } else {
            problem.solve(solver, &criteria)?
        };

        Ok(selected.map(|ids| ids.into_iter().filter_map(|id| problem.to_record(id)).collect()))
    }
}
