use serde::{Deserialize, Serialize};

use super::kind::{PropertyKind, PropertyType};
use super::schema::PropertyId;
use crate::package::{Formula, Vpkg, VpkgSpec};

/// A property value as supplied by the caller, tagged with its type.
///
/// Package references are still names at this point; they are resolved
/// through the registry when the value is attached to a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    Bool(bool),
    Int(i64),
    Nat(i64),
    Posint(i64),
    #[serde(alias = "pkgname", alias = "ident")]
    String(String),
    Enum(String),
    Vpkg(VpkgSpec),
    Veqpkg(VpkgSpec),
    Vpkglist(Vec<VpkgSpec>),
    Veqpkglist(Vec<VpkgSpec>),
    Vpkgformula(Vec<Vec<VpkgSpec>>),
}

impl TypedValue {
    pub fn ty(&self) -> PropertyType {
        match self {
            TypedValue::Bool(_) => PropertyType::Bool,
            TypedValue::Int(_) => PropertyType::Int,
            TypedValue::Nat(_) => PropertyType::Nat,
            TypedValue::Posint(_) => PropertyType::Posint,
            TypedValue::String(_) => PropertyType::String,
            TypedValue::Enum(_) => PropertyType::Enum,
            TypedValue::Vpkg(_) => PropertyType::Vpkg,
            TypedValue::Veqpkg(_) => PropertyType::Veqpkg,
            TypedValue::Vpkglist(_) => PropertyType::Vpkglist,
            TypedValue::Veqpkglist(_) => PropertyType::Veqpkglist,
            TypedValue::Vpkgformula(_) => PropertyType::Vpkgformula,
        }
    }
}

/// A validated property value with its references resolved.
///
/// `int`, `nat` and `posint` share [`Value::Int`]; the declaring property
/// keeps the precise type. Enum values are positions in the declared set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    String(String),
    Enum(usize),
    Vpkg(Vpkg),
    Vpkglist(Vec<Vpkg>),
    Formula(Formula),
}

impl Value {
    /// Convert back to the caller-facing form, naming references with `name_of`
    pub fn to_typed<F>(&self, kind: &PropertyKind, name_of: F) -> TypedValue
    where
        F: Fn(&Vpkg) -> VpkgSpec,
    {
        match (self, kind.ty()) {
            (Value::Bool(b), _) => TypedValue::Bool(*b),
            (Value::Int(i), PropertyType::Nat) => TypedValue::Nat(*i),
            (Value::Int(i), PropertyType::Posint) => TypedValue::Posint(*i),
            (Value::Int(i), _) => TypedValue::Int(*i),
            (Value::String(s), _) => TypedValue::String(s.clone()),
            (Value::Enum(_), _) => {
                TypedValue::Enum(self.enum_label(kind).unwrap_or_default().to_string())
            }
            (Value::Vpkg(v), PropertyType::Veqpkg) => TypedValue::Veqpkg(name_of(v)),
            (Value::Vpkg(v), _) => TypedValue::Vpkg(name_of(v)),
            (Value::Vpkglist(l), PropertyType::Veqpkglist) => {
                TypedValue::Veqpkglist(l.iter().map(&name_of).collect())
            }
            (Value::Vpkglist(l), _) => TypedValue::Vpkglist(l.iter().map(&name_of).collect()),
            (Value::Formula(f), _) => TypedValue::Vpkgformula(
                f.clauses()
                    .iter()
                    .map(|clause| clause.iter().map(&name_of).collect())
                    .collect(),
            ),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_enum_index(&self) -> Option<usize> {
        match self {
            Value::Enum(i) => Some(*i),
            _ => None,
        }
    }

    /// The declared name of an enum value
    pub fn enum_label<'k>(&self, kind: &'k PropertyKind) -> Option<&'k str> {
        let index = self.as_enum_index()?;
        kind.enum_values()?.get(index).map(String::as_str)
    }
}

/// A value attached to a package, bound to its schema property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValue {
    pub property: PropertyId,
    pub value: Value,
}
