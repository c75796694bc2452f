use super::vpkg::Vpkg;
use crate::error::{CudfError, Result};

/// A disjunction of package references. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause(Vec<Vpkg>);

impl Clause {
    /// Create a clause, rejecting an empty reference list
    pub fn new(refs: Vec<Vpkg>) -> Result<Self> {
        if refs.is_empty() {
            return Err(CudfError::EmptyClause);
        }
        Ok(Self(refs))
    }

    pub fn refs(&self) -> &[Vpkg] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vpkg> {
        self.0.iter()
    }
}

/// A conjunction of [`Clause`]s.
///
/// A formula with no clauses means "no constraint". A clause with no
/// references cannot be represented, so an unsatisfiable formula never
/// arises from this model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    /// The "no constraint" formula
    pub fn unconstrained() -> Self {
        Self { clauses: Vec::new() }
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Flatten back into nested reference lists, clause order and
    /// in-clause order preserved
    pub fn to_lists(&self) -> Vec<Vec<Vpkg>> {
        self.clauses.iter().map(|c| c.refs().to_vec()).collect()
    }

    /// Every reference mentioned anywhere in the formula
    pub fn refs(&self) -> impl Iterator<Item = &Vpkg> {
        self.clauses.iter().flat_map(|c| c.iter())
    }
}
