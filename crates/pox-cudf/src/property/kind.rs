use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CudfError, Result};

/// Type tag of a property or a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Bool,
    Int,
    Nat,
    Posint,
    String,
    Enum,
    Vpkg,
    Veqpkg,
    Vpkglist,
    Veqpkglist,
    Vpkgformula,
}

impl PropertyType {
    /// Parse a CUDF type name. `pkgname` and `ident` are stored as strings.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bool" => Ok(PropertyType::Bool),
            "int" => Ok(PropertyType::Int),
            "nat" => Ok(PropertyType::Nat),
            "posint" => Ok(PropertyType::Posint),
            "string" | "pkgname" | "ident" => Ok(PropertyType::String),
            "enum" => Ok(PropertyType::Enum),
            "vpkg" => Ok(PropertyType::Vpkg),
            "veqpkg" => Ok(PropertyType::Veqpkg),
            "vpkglist" => Ok(PropertyType::Vpkglist),
            "veqpkglist" => Ok(PropertyType::Veqpkglist),
            "vpkgformula" => Ok(PropertyType::Vpkgformula),
            "typedecl" => Err(CudfError::UnsupportedPropertyType(
                "recursive property type declarations are not supported".to_string(),
            )),
            other => Err(CudfError::UnsupportedPropertyType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Nat => "nat",
            PropertyType::Posint => "posint",
            PropertyType::String => "string",
            PropertyType::Enum => "enum",
            PropertyType::Vpkg => "vpkg",
            PropertyType::Veqpkg => "veqpkg",
            PropertyType::Vpkglist => "vpkglist",
            PropertyType::Veqpkglist => "veqpkglist",
            PropertyType::Vpkgformula => "vpkgformula",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared type of a property. Enums carry their closed value set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum PropertyKind {
    Bool,
    Int,
    Nat,
    Posint,
    #[serde(alias = "pkgname", alias = "ident")]
    String,
    Enum(Vec<String>),
    Vpkg,
    Veqpkg,
    Vpkglist,
    Veqpkglist,
    Vpkgformula,
}

impl PropertyKind {
    /// Build a kind from a CUDF type name; `enum_values` is only used for `enum`
    pub fn parse(type_name: &str, enum_values: Vec<String>) -> Result<Self> {
        Ok(match PropertyType::from_str(type_name)? {
            PropertyType::Bool => PropertyKind::Bool,
            PropertyType::Int => PropertyKind::Int,
            PropertyType::Nat => PropertyKind::Nat,
            PropertyType::Posint => PropertyKind::Posint,
            PropertyType::String => PropertyKind::String,
            PropertyType::Enum => PropertyKind::Enum(enum_values),
            PropertyType::Vpkg => PropertyKind::Vpkg,
            PropertyType::Veqpkg => PropertyKind::Veqpkg,
            PropertyType::Vpkglist => PropertyKind::Vpkglist,
            PropertyType::Veqpkglist => PropertyKind::Veqpkglist,
            PropertyType::Vpkgformula => PropertyKind::Vpkgformula,
        })
    }

    pub fn ty(&self) -> PropertyType {
        match self {
            PropertyKind::Bool => PropertyType::Bool,
            PropertyKind::Int => PropertyType::Int,
            PropertyKind::Nat => PropertyType::Nat,
            PropertyKind::Posint => PropertyType::Posint,
            PropertyKind::String => PropertyType::String,
            PropertyKind::Enum(_) => PropertyType::Enum,
            PropertyKind::Vpkg => PropertyType::Vpkg,
            PropertyKind::Veqpkg => PropertyType::Veqpkg,
            PropertyKind::Vpkglist => PropertyType::Vpkglist,
            PropertyKind::Veqpkglist => PropertyType::Veqpkglist,
            PropertyKind::Vpkgformula => PropertyType::Vpkgformula,
        }
    }

    /// Declared values of an enum kind
    pub fn enum_values(&self) -> Option<&[String]> {
        match self {
            PropertyKind::Enum(values) => Some(values),
            _ => None,
        }
    }

    /// Position of `value` in the declared enum set
    pub fn enum_index(&self, value: &str) -> Option<usize> {
        self.enum_values()?.iter().position(|v| v == value)
    }
}
