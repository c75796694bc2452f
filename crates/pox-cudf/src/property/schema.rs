use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::kind::{PropertyKind, PropertyType};
use super::value::{PropertyValue, TypedValue, Value};
use crate::error::{CudfError, Result};
use crate::package::RelOp;
use crate::registry::VirtualPackageRegistry;

/// Index of a property in its schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(u32);

impl PropertyId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Property declaration as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<TypedValue>,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    pub fn with_default(mut self, default: TypedValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// A named, typed attribute definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub kind: PropertyKind,
    pub default: Option<Value>,
}

impl Property {
    pub fn ty(&self) -> PropertyType {
        self.kind.ty()
    }

    /// Validate a caller-supplied value against this declaration.
    ///
    /// This is the single place where value typing rules live: the value's
    /// tag must equal the declared type, `nat` must not be negative, `posint`
    /// must be positive, `veqpkg` references may only use `=`, enum values
    /// must belong to the declared set and formula clauses must not be empty.
    pub fn check(&self, value: &TypedValue) -> Result<()> {
        if value.ty() != self.ty() {
            return Err(self.mismatch(value.ty().as_str()));
        }

        match value {
            TypedValue::Nat(i) if *i < 0 => Err(self.mismatch("negative int")),
            TypedValue::Posint(i) if *i <= 0 => Err(self.mismatch("non-positive int")),
            TypedValue::Enum(v) => {
                let allowed = self.kind.enum_values().unwrap_or(&[]);
                if allowed.iter().any(|a| a == v) {
                    Ok(())
                } else {
                    Err(CudfError::InvalidEnumValue {
                        property: self.name.clone(),
                        value: v.clone(),
                    })
                }
            }
            TypedValue::Veqpkg(spec) => self.check_equality_ref(spec.constraint.map(|c| c.op)),
            TypedValue::Veqpkglist(specs) => specs
                .iter()
                .try_for_each(|spec| self.check_equality_ref(spec.constraint.map(|c| c.op))),
            TypedValue::Vpkgformula(clauses) => {
                if clauses.iter().any(|clause| clause.is_empty()) {
                    Err(CudfError::EmptyClause)
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    /// Validate a value and resolve its package references
    pub(crate) fn resolve(
        &self,
        value: &TypedValue,
        registry: &mut VirtualPackageRegistry,
    ) -> Result<Value> {
        self.check(value)?;

        Ok(match value {
            TypedValue::Bool(b) => Value::Bool(*b),
            TypedValue::Int(i) | TypedValue::Nat(i) | TypedValue::Posint(i) => Value::Int(*i),
            TypedValue::String(s) => Value::String(s.clone()),
            TypedValue::Enum(s) => {
                Value::Enum(self.kind.enum_index(s).ok_or_else(|| CudfError::InvalidEnumValue {
                    property: self.name.clone(),
                    value: s.clone(),
                })?)
            }
            TypedValue::Vpkg(spec) | TypedValue::Veqpkg(spec) => {
                Value::Vpkg(registry.build_ref(spec))
            }
            TypedValue::Vpkglist(specs) | TypedValue::Veqpkglist(specs) => {
                Value::Vpkglist(registry.build_list(specs))
            }
            TypedValue::Vpkgformula(clauses) => Value::Formula(registry.build_formula(clauses)?),
        })
    }

    fn check_equality_ref(&self, op: Option<RelOp>) -> Result<()> {
        match op {
            None | Some(RelOp::Eq) => Ok(()),
            Some(op) => Err(self.mismatch(&format!("vpkg with operator {}", op))),
        }
    }

    fn mismatch(&self, found: &str) -> CudfError {
        CudfError::TypeMismatch {
            property: self.name.clone(),
            expected: self.ty().to_string(),
            found: found.to_string(),
        }
    }
}

/// The set of property declarations of a problem.
///
/// Names are unique. The schema is populated when the problem is created
/// and is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    properties: IndexMap<String, Property>,
}

impl Schema {
    pub fn new() -> Self {
        Self {
            properties: IndexMap::new(),
        }
    }

    /// Build a schema from declarations, resolving package-valued defaults
    /// through `registry`
    pub fn from_decls(
        decls: &[PropertyDecl],
        registry: &mut VirtualPackageRegistry,
    ) -> Result<Self> {
        let mut schema = Self::new();
        for decl in decls {
            schema.define(decl, registry)?;
        }
        Ok(schema)
    }

    /// Declare a property
    pub fn define(
        &mut self,
        decl: &PropertyDecl,
        registry: &mut VirtualPackageRegistry,
    ) -> Result<PropertyId> {
        if self.properties.contains_key(&decl.name) {
            return Err(CudfError::DuplicateProperty {
                name: decl.name.clone(),
            });
        }

        let mut property = Property {
            name: decl.name.clone(),
            kind: decl.kind.clone(),
            default: None,
        };

        if let Some(default) = &decl.default {
            let value = property
                .resolve(default, registry)
                .map_err(|e| CudfError::InvalidDefault {
                    property: decl.name.clone(),
                    reason: e.to_string(),
                })?;
            property.default = Some(value);
        }

        let (index, _) = self.properties.insert_full(decl.name.clone(), property);
        Ok(PropertyId(index as u32))
    }

    /// Find a property by name
    pub fn lookup(&self, name: &str) -> Result<PropertyId> {
        self.properties
            .get_index_of(name)
            .map(|index| PropertyId(index as u32))
            .ok_or_else(|| CudfError::UnknownProperty {
                name: name.to_string(),
            })
    }

    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get_index(id.index()).map(|(_, p)| p)
    }

    /// Validate a named value without touching any registry
    pub fn check(&self, name: &str, value: &TypedValue) -> Result<PropertyId> {
        let id = self.lookup(name)?;
        if let Some(property) = self.get(id) {
            property.check(value)?;
        }
        Ok(id)
    }

    /// Validate a named value and resolve it into a [`PropertyValue`]
    pub(crate) fn resolve(
        &self,
        name: &str,
        value: &TypedValue,
        registry: &mut VirtualPackageRegistry,
    ) -> Result<PropertyValue> {
        let id = self.lookup(name)?;
        let property = self.get(id).ok_or_else(|| CudfError::UnknownProperty {
            name: name.to_string(),
        })?;
        Ok(PropertyValue {
            property: id,
            value: property.resolve(value, registry)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Property)> {
        self.properties
            .values()
            .enumerate()
            .map(|(index, p)| (PropertyId(index as u32), p))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::VpkgSpec;

    fn schema(decls: &[PropertyDecl]) -> (Schema, VirtualPackageRegistry) {
        let mut registry = VirtualPackageRegistry::new();
        let schema = Schema::from_decls(decls, &mut registry).unwrap();
        (schema, registry)
    }

    #[test]
    fn test_define_and_lookup() {
        let (schema, _) = schema(&[
            PropertyDecl::new("priority", PropertyKind::Int),
            PropertyDecl::new("essential", PropertyKind::Bool)
                .with_default(TypedValue::Bool(false)),
        ]);

        assert_eq!(schema.len(), 2);
        let id = schema.lookup("essential").unwrap();
        let property = schema.get(id).unwrap();
        assert_eq!(property.ty(), PropertyType::Bool);
        assert_eq!(property.default, Some(Value::Bool(false)));
    }

    #[test]
    fn test_duplicate_property() {
        let mut registry = VirtualPackageRegistry::new();
        let mut schema = Schema::new();
        schema
            .define(&PropertyDecl::new("size", PropertyKind::Nat), &mut registry)
            .unwrap();

        let err = schema
            .define(&PropertyDecl::new("size", PropertyKind::Int), &mut registry)
            .unwrap_err();
        assert!(matches!(err, CudfError::DuplicateProperty { name } if name == "size"));
    }

    #[test]
    fn test_unknown_property() {
        let (schema, _) = schema(&[]);
        let err = schema.lookup("priority").unwrap_err();
        assert!(matches!(err, CudfError::UnknownProperty { name } if name == "priority"));
    }

    #[test]
    fn test_enum_default_must_be_declared() {
        let mut registry = VirtualPackageRegistry::new();
        let kind = PropertyKind::Enum(vec!["low".into(), "high".into()]);

        let schema = Schema::from_decls(
            &[PropertyDecl::new("level", kind.clone())
                .with_default(TypedValue::Enum("high".into()))],
            &mut registry,
        )
        .unwrap();
        let level = schema.get(schema.lookup("level").unwrap()).unwrap();
        assert_eq!(level.default, Some(Value::Enum(1)));

        let err = Schema::from_decls(
            &[PropertyDecl::new("level", kind).with_default(TypedValue::Enum("medium".into()))],
            &mut registry,
        )
        .unwrap_err();
        assert!(matches!(err, CudfError::InvalidDefault { property, .. } if property == "level"));
    }

    #[test]
    fn test_default_type_mismatch() {
        let mut registry = VirtualPackageRegistry::new();
        let err = Schema::from_decls(
            &[PropertyDecl::new("size", PropertyKind::Nat).with_default(TypedValue::Bool(true))],
            &mut registry,
        )
        .unwrap_err();
        assert!(matches!(err, CudfError::InvalidDefault { .. }));
    }

    #[test]
    fn test_package_defaults_allocate_ranks() {
        let (schema, registry) = schema(&[PropertyDecl::new("recommends", PropertyKind::Vpkgformula)
            .with_default(TypedValue::Vpkgformula(vec![vec![
                VpkgSpec::any("docs"),
                VpkgSpec::any("manpages"),
            ]]))]);

        assert_eq!(registry.find("docs").map(|id| id.rank()), Some(0));
        assert_eq!(registry.find("manpages").map(|id| id.rank()), Some(1));

        let property = schema.get(schema.lookup("recommends").unwrap()).unwrap();
        match &property.default {
            Some(Value::Formula(formula)) => assert_eq!(formula.clauses().len(), 1),
            other => panic!("unexpected default: {:?}", other),
        }
    }

    #[test]
    fn test_check_rules() {
        let (schema, _) = schema(&[
            PropertyDecl::new("size", PropertyKind::Nat),
            PropertyDecl::new("count", PropertyKind::Posint),
            PropertyDecl::new("level", PropertyKind::Enum(vec!["low".into()])),
            PropertyDecl::new("pin", PropertyKind::Veqpkg),
        ]);

        assert!(schema.check("size", &TypedValue::Nat(0)).is_ok());
        assert!(matches!(
            schema.check("size", &TypedValue::Nat(-1)),
            Err(CudfError::TypeMismatch { .. })
        ));
        assert!(matches!(
            schema.check("size", &TypedValue::Int(1)),
            Err(CudfError::TypeMismatch { .. })
        ));
        assert!(matches!(
            schema.check("count", &TypedValue::Posint(0)),
            Err(CudfError::TypeMismatch { .. })
        ));
        assert!(matches!(
            schema.check("level", &TypedValue::Enum("high".into())),
            Err(CudfError::InvalidEnumValue { .. })
        ));
        assert!(schema
            .check("pin", &TypedValue::Veqpkg(VpkgSpec::with("a", RelOp::Eq, 1)))
            .is_ok());
        assert!(matches!(
            schema.check("pin", &TypedValue::Veqpkg(VpkgSpec::with("a", RelOp::Geq, 1))),
            Err(CudfError::TypeMismatch { .. })
        ));
    }
}
