//! Gadget → JSON, minimal diff.
//!
//! Only required fields and fields whose value differs from a freshly
//! default-constructed instance of the same type are written, in schema
//! order.

use crate::error::{EncodeError, EncodeResult};
use crate::{CodecConfig, path};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gadget_model::{EnumMapping, FieldKind, Gadget, ModelError, Resolved, TypeRegistry, Value};
use serde_json::{Map, Value as Json};

pub(crate) struct Encoder<'c> {
    registry: &'c TypeRegistry,
    config: &'c CodecConfig,
}

impl<'c> Encoder<'c> {
    pub(crate) fn new(registry: &'c TypeRegistry, config: &'c CodecConfig) -> Self {
        Self { registry, config }
    }

    pub(crate) fn encode_object(
        &self,
        source: &dyn Gadget,
        at: &str,
        depth: usize,
    ) -> EncodeResult<Map<String, Json>> {
        let reference = source.new_default();
        let mut object = Map::new();

        for field in source.schema().fields() {
            let field_path = path::field(at, field.name());
            let read_error = |err: ModelError| EncodeError::Model {
                path: field_path.clone(),
                source: err,
            };
            let value = field.read(source).map_err(read_error)?;
            if !field.is_required() && value == field.read(reference.as_ref()).map_err(read_error)? {
                continue;
            }
            let json = self.encode_value(field.kind(), value, &field_path, depth)?;
            object.insert(field.name().to_owned(), json);
        }
        Ok(object)
    }

    fn encode_value(
        &self,
        kind: &FieldKind,
        value: Value,
        at: &str,
        depth: usize,
    ) -> EncodeResult<Json> {
        match (kind, value) {
            (FieldKind::Bool, Value::Bool(b)) => Ok(Json::Bool(b)),
            (FieldKind::Int, Value::Int(i)) => Ok(Json::from(i)),
            (FieldKind::Text, Value::Text(s)) => Ok(Json::String(s)),
            (FieldKind::Bytes, Value::Bytes(b)) => Ok(Json::String(STANDARD.encode(b))),
            (FieldKind::OpaqueJson, Value::Json(j)) => Ok(j),
            (FieldKind::Enum(name), Value::Enum(raw)) => {
                let mapping = self.enum_mapping(*name, at)?;
                enumerator_name(mapping, raw, at)
            }
            (FieldKind::NestedObject(name), Value::Object(gadget)) => {
                self.ensure_gadget_type(*name, at)?;
                if gadget.type_name() != *name {
                    return Err(EncodeError::Model {
                        path: at.to_owned(),
                        source: ModelError::WrongObject {
                            expected: *name,
                            found: gadget.type_name(),
                        },
                    });
                }
                self.encode_nested(gadget.as_ref(), at, depth + 1)
            }
            (FieldKind::ListOf(element), Value::List(items)) => {
                self.encode_list(kind, element, items, at, depth)
            }
            (kind, other) => Err(EncodeError::Model {
                path: at.to_owned(),
                source: ModelError::ValueKind {
                    expected: kind.value_kind(),
                    found: other.kind_name(),
                },
            }),
        }
    }

    fn encode_list(
        &self,
        kind: &FieldKind,
        element: &FieldKind,
        items: Vec<Value>,
        at: &str,
        depth: usize,
    ) -> EncodeResult<Json> {
        // Resolve the element type once, even for empty lists.
        match element {
            FieldKind::Enum(name) => {
                self.enum_mapping(*name, at)?;
            }
            FieldKind::NestedObject(name) => self.ensure_gadget_type(*name, at)?,
            FieldKind::ListOf(_) => {
                return Err(EncodeError::UnsupportedKind {
                    path: at.to_owned(),
                    kind: kind.to_string(),
                });
            }
            _ => {}
        }

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| self.encode_value(element, item, &path::index(at, i), depth))
            .collect::<EncodeResult<Vec<_>>>()
            .map(Json::Array)
    }

    fn encode_nested(&self, gadget: &dyn Gadget, at: &str, depth: usize) -> EncodeResult<Json> {
        if depth > self.config.max_depth {
            return Err(EncodeError::DepthExceeded {
                path: at.to_owned(),
                max_depth: self.config.max_depth,
            });
        }
        self.encode_object(gadget, at, depth)
            .map(Json::Object)
            .map_err(|source| EncodeError::Nested {
                path: at.to_owned(),
                type_name: gadget.type_name(),
                source: Box::new(source),
            })
    }

    fn enum_mapping(&self, name: &'static str, at: &str) -> EncodeResult<&'c EnumMapping> {
        match self.registry.resolve(name) {
            Resolved::Enum(mapping) => Ok(mapping),
            _ => Err(EncodeError::UnknownType {
                path: at.to_owned(),
                type_name: name,
            }),
        }
    }

    fn ensure_gadget_type(&self, name: &'static str, at: &str) -> EncodeResult<()> {
        match self.registry.resolve(name) {
            Resolved::Gadget(_) => Ok(()),
            _ => Err(EncodeError::UnknownType {
                path: at.to_owned(),
                type_name: name,
            }),
        }
    }
}

fn enumerator_name(mapping: &EnumMapping, raw: i32, at: &str) -> EncodeResult<Json> {
    mapping
        .name_of(raw)
        .map(|name| Json::String(name.to_owned()))
        .ok_or_else(|| EncodeError::UnresolvableEnumValue {
            path: at.to_owned(),
            enum_name: mapping.name(),
            value: raw,
        })
}
