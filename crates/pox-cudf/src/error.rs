use thiserror::Error;

#[derive(Error, Debug)]
pub enum CudfError {
    // Schema errors
    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    #[error("Property {name} is already defined")]
    DuplicateProperty { name: String },

    #[error("Invalid default for property {property}: {reason}")]
    InvalidDefault { property: String, reason: String },

    #[error("Unsupported property type: {0}")]
    UnsupportedPropertyType(String),

    // Value errors
    #[error("Type mismatch for property {property}: expected {expected}, found {found}")]
    TypeMismatch {
        property: String,
        expected: String,
        found: String,
    },

    #[error("Invalid enum value {value:?} for property {property}")]
    InvalidEnumValue { property: String, value: String },

    // Formula errors
    #[error("Formula clause must contain at least one package reference")]
    EmptyClause,

    // Lifecycle errors
    #[error("Problem request has already been finalized")]
    AlreadyFinalized,

    #[error("Problem is in the wrong phase: {0}")]
    NotFinalized(String),

    // Solver errors
    #[error("Solver failed: {0}")]
    SolveError(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CudfError>;
