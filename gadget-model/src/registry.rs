//! Type lookup by name.
//!
//! Field kinds refer to enumerations and nested gadgets by name. The
//! registry maps those names to an [`EnumMapping`] or to a constructor plus
//! schema, so the codec can build "the right type" for a nested object or
//! list element without any runtime reflection.

use crate::{FieldKind, Gadget, GadgetEnum, Schema};
use gadget_types::EnumMapping;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised while populating or validating a [`TypeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type '{0}' is already registered")]
    Duplicate(&'static str),

    #[error("{type_name} reports schema '{schema_name}'")]
    SchemaMismatch {
        type_name: &'static str,
        schema_name: &'static str,
    },

    #[error("{owner}.{field} refers to unregistered type '{type_name}'")]
    Unresolved {
        owner: &'static str,
        field: &'static str,
        type_name: &'static str,
    },

    #[error("{owner}.{field} expects '{type_name}' to be {expected}")]
    WrongCategory {
        owner: &'static str,
        field: &'static str,
        type_name: &'static str,
        expected: &'static str,
    },

    #[error("{owner}.{field} nests a list inside a list")]
    NestedList {
        owner: &'static str,
        field: &'static str,
    },
}

/// A registered gadget type: its name, schema and default constructor.
#[derive(Debug, Clone, Copy)]
pub struct GadgetType {
    name: &'static str,
    schema: &'static Schema,
    construct: fn() -> Box<dyn Gadget>,
}

impl GadgetType {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Builds a default-constructed instance.
    pub fn construct(&self) -> Box<dyn Gadget> {
        (self.construct)()
    }
}

/// What a type name resolves to.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'r> {
    Enum(&'r EnumMapping),
    Gadget(&'r GadgetType),
    Unknown,
}

fn construct<G: Gadget + Default>() -> Box<dyn Gadget> {
    Box::new(G::default())
}

/// Name → type table consulted by the codec for enumerations and nested
/// gadgets. Populated once at start-up, read-only afterwards.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    gadgets: BTreeMap<&'static str, GadgetType>,
    enums: BTreeMap<&'static str, EnumMapping>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_free(&self, name: &'static str) -> Result<(), RegistryError> {
        if self.gadgets.contains_key(name) || self.enums.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }
        Ok(())
    }

    /// Registers a gadget type under its `type_name()`.
    pub fn register<G: Gadget + Default>(&mut self) -> Result<(), RegistryError> {
        let prototype = G::default();
        let name = prototype.type_name();
        let schema = prototype.schema();
        if schema.type_name() != name {
            return Err(RegistryError::SchemaMismatch {
                type_name: name,
                schema_name: schema.type_name(),
            });
        }
        self.ensure_free(name)?;
        debug!(type_name = name, fields = schema.len(), "registered gadget type");
        self.gadgets.insert(
            name,
            GadgetType {
                name,
                schema,
                construct: construct::<G>,
            },
        );
        Ok(())
    }

    /// Registers an enumeration under its mapping's name.
    pub fn register_enum<E: GadgetEnum>(&mut self) -> Result<(), RegistryError> {
        let mapping = E::mapping();
        self.ensure_free(mapping.name())?;
        debug!(enum_name = mapping.name(), enumerators = mapping.len(), "registered enumeration");
        self.enums.insert(mapping.name(), mapping.clone());
        Ok(())
    }

    /// Resolves a name declared by a field kind.
    pub fn resolve(&self, name: &str) -> Resolved<'_> {
        if let Some(mapping) = self.enums.get(name) {
            Resolved::Enum(mapping)
        } else if let Some(gadget) = self.gadgets.get(name) {
            Resolved::Gadget(gadget)
        } else {
            Resolved::Unknown
        }
    }

    pub fn gadget(&self, name: &str) -> Option<&GadgetType> {
        self.gadgets.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumMapping> {
        self.enums.get(name)
    }

    /// Builds a default instance of a registered gadget type.
    pub fn construct(&self, name: &str) -> Option<Box<dyn Gadget>> {
        self.gadgets.get(name).map(GadgetType::construct)
    }

    /// Registered gadget types, sorted by name.
    pub fn gadgets(&self) -> impl Iterator<Item = &GadgetType> {
        self.gadgets.values()
    }

    /// Registered enumerations, sorted by name.
    pub fn enums(&self) -> impl Iterator<Item = &EnumMapping> {
        self.enums.values()
    }

    /// Checks that every field kind of every registered schema refers to a
    /// registered type of the right category.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for gadget in self.gadgets.values() {
            for field in gadget.schema.fields() {
                self.check_kind(gadget.name, field.name(), field.kind(), false)?;
            }
        }
        Ok(())
    }

    fn check_kind(
        &self,
        owner: &'static str,
        field: &'static str,
        kind: &FieldKind,
        in_list: bool,
    ) -> Result<(), RegistryError> {
        let (type_name, want_enum) = match kind {
            FieldKind::Enum(name) => (*name, true),
            FieldKind::NestedObject(name) => (*name, false),
            FieldKind::ListOf(_) if in_list => {
                return Err(RegistryError::NestedList { owner, field });
            }
            FieldKind::ListOf(inner) => return self.check_kind(owner, field, inner, true),
            _ => return Ok(()),
        };
        match (self.resolve(type_name), want_enum) {
            (Resolved::Enum(_), true) | (Resolved::Gadget(_), false) => Ok(()),
            (Resolved::Unknown, _) => Err(RegistryError::Unresolved {
                owner,
                field,
                type_name,
            }),
            (_, want_enum) => Err(RegistryError::WrongCategory {
                owner,
                field,
                type_name,
                expected: if want_enum { "an enumeration" } else { "a gadget" },
            }),
        }
    }
}
