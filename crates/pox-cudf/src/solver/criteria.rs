use serde::{Deserialize, Serialize};
use std::fmt;

/// Optimization criteria handed to the external solver.
///
/// The text is opaque to this crate. It is the interior of a bracketed
/// expression: `-removed,-changed` reaches the solver as `[-removed,-changed]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(String);

impl Criteria {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The criteria wrapped in its enclosing bracket pair
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.0)
    }
}

impl From<&str> for Criteria {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Criteria {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed() {
        assert_eq!(Criteria::new("-removed,-changed").bracketed(), "[-removed,-changed]");
        assert_eq!(Criteria::new("").bracketed(), "[]");
    }

    #[test]
    fn test_existing_brackets_are_kept_as_interior() {
        assert_eq!(Criteria::from("[x]").bracketed(), "[[x]]");
    }
}
