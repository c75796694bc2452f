// Extensible property (attribute) system
//
// A schema of typed declarations, the caller-facing tagged values, and the
// resolved values stored on packages. All typing rules are enforced by
// `Property::check`.

mod kind;
mod schema;
mod value;

pub use kind::{PropertyKind, PropertyType};
pub use schema::{Property, PropertyDecl, PropertyId, Schema};
pub use value::{PropertyValue, TypedValue, Value};
