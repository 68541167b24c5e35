//! JSON → gadget.
//!
//! Walks the target's schema in declaration order. Absent optional fields
//! and `null` values are skipped, leaving the gadget's current value. Each
//! field's value is built completely before the gadget's mutator runs, so a
//! failing field is never half-written; fields visited before a hard failure
//! keep their decoded values.

use crate::error::{DecodeError, DecodeResult};
use crate::report::{DecodeReport, Diagnostic, DiagnosticKind};
use crate::{CodecConfig, json_kind, path};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gadget_model::{EnumMapping, FieldKind, Gadget, GadgetType, Resolved, TypeRegistry, Value};
use serde_json::{Map, Value as Json};
use tracing::{debug, warn};

pub(crate) struct Decoder<'c> {
    registry: &'c TypeRegistry,
    config: &'c CodecConfig,
    report: DecodeReport,
}

impl<'c> Decoder<'c> {
    pub(crate) fn new(registry: &'c TypeRegistry, config: &'c CodecConfig) -> Self {
        Self {
            registry,
            config,
            report: DecodeReport::default(),
        }
    }

    pub(crate) fn finish(self) -> DecodeReport {
        self.report
    }

    /// Decodes `object` into `target`, field by field.
    pub(crate) fn decode_object(
        &mut self,
        target: &mut dyn Gadget,
        object: &Map<String, Json>,
        at: &str,
        depth: usize,
    ) -> DecodeResult<()> {
        let schema = target.schema();
        debug!(type_name = schema.type_name(), path = at, "decoding object");

        for field in schema.fields() {
            let field_path = path::field(at, field.name());
            let Some(json) = object.get(field.name()) else {
                if field.is_required() {
                    return Err(DecodeError::MissingRequiredField {
                        type_name: schema.type_name(),
                        path: field_path,
                    });
                }
                continue;
            };
            if json.is_null() {
                debug!(path = %field_path, "null value, field skipped");
                continue;
            }

            if let Some(value) = self.decode_value(field.kind(), json, &field_path, depth)? {
                field
                    .write(target, value)
                    .map_err(|source| DecodeError::Model {
                        path: field_path,
                        source,
                    })?;
            }
        }
        Ok(())
    }

    /// Converts one JSON value. `None` means a soft failure was recorded and
    /// the field must be left alone.
    fn decode_value(
        &mut self,
        kind: &FieldKind,
        json: &Json,
        at: &str,
        depth: usize,
    ) -> DecodeResult<Option<Value>> {
        match kind {
            FieldKind::Bool | FieldKind::Int | FieldKind::Text | FieldKind::Bytes => {
                match scalar(kind, json) {
                    Some(value) => Ok(Some(value)),
                    None => self.scalar_mismatch(kind, json, at),
                }
            }
            FieldKind::OpaqueJson => Ok(Some(Value::Json(json.clone()))),
            FieldKind::Enum(name) => {
                let mapping = self.enum_mapping(*name, at)?;
                enumerator(mapping, json, at).map(Some)
            }
            FieldKind::NestedObject(name) => {
                let gadget_type = self.gadget_type(*name, at)?;
                let object = json.as_object().ok_or_else(|| shape(at, "object", json))?;
                let child = self.decode_nested(gadget_type, object, at, depth + 1)?;
                Ok(Some(Value::Object(child)))
            }
            FieldKind::ListOf(element) => self.decode_list(kind, element, json, at, depth),
        }
    }

    fn decode_list(
        &mut self,
        kind: &FieldKind,
        element: &FieldKind,
        json: &Json,
        at: &str,
        depth: usize,
    ) -> DecodeResult<Option<Value>> {
        let Some(items) = json.as_array() else {
            return if element.is_scalar() {
                self.scalar_mismatch(kind, json, at)
            } else {
                Err(shape(at, "array", json))
            };
        };

        match element {
            FieldKind::Bool | FieldKind::Int | FieldKind::Text | FieldKind::Bytes => {
                let converted: Option<Vec<Value>> =
                    items.iter().map(|item| scalar(element, item)).collect();
                match converted {
                    Some(values) => Ok(Some(Value::List(values))),
                    None => {
                        let found = items
                            .iter()
                            .find(|item| scalar(element, item).is_none())
                            .unwrap_or(json);
                        self.scalar_mismatch(kind, found, at)
                    }
                }
            }
            FieldKind::OpaqueJson => Ok(Some(Value::List(
                items.iter().cloned().map(Value::Json).collect(),
            ))),
            FieldKind::Enum(name) => {
                let mapping = self.enum_mapping(*name, at)?;
                let values = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| enumerator(mapping, item, &path::index(at, i)))
                    .collect::<DecodeResult<Vec<_>>>()?;
                Ok(Some(Value::List(values)))
            }
            FieldKind::NestedObject(name) => {
                let gadget_type = self.gadget_type(*name, at)?;
                let mut values = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let item_path = path::index(at, i);
                    let object = item
                        .as_object()
                        .ok_or_else(|| shape(&item_path, "object", item))?;
                    let child = self.decode_nested(gadget_type, object, &item_path, depth + 1)?;
                    values.push(Value::Object(child));
                }
                Ok(Some(Value::List(values)))
            }
            FieldKind::ListOf(_) => Err(DecodeError::UnsupportedKind {
                path: at.to_owned(),
                kind: kind.to_string(),
            }),
        }
    }

    fn decode_nested(
        &mut self,
        gadget_type: &GadgetType,
        object: &Map<String, Json>,
        at: &str,
        depth: usize,
    ) -> DecodeResult<Box<dyn Gadget>> {
        if depth > self.config.max_depth {
            return Err(DecodeError::DepthExceeded {
                path: at.to_owned(),
                max_depth: self.config.max_depth,
            });
        }
        let mut child = gadget_type.construct();
        self.decode_object(child.as_mut(), object, at, depth)
            .map_err(|source| DecodeError::Nested {
                path: at.to_owned(),
                type_name: gadget_type.name(),
                source: Box::new(source),
            })?;
        Ok(child)
    }

    fn scalar_mismatch(
        &mut self,
        kind: &FieldKind,
        found: &Json,
        at: &str,
    ) -> DecodeResult<Option<Value>> {
        let expected = kind.to_string();
        let found = json_kind(found);
        if self.config.strict_scalars {
            return Err(DecodeError::ScalarTypeMismatch {
                path: at.to_owned(),
                expected,
                found,
            });
        }
        warn!(path = at, %expected, found, "scalar type mismatch, field skipped");
        self.report.push(Diagnostic {
            path: at.to_owned(),
            kind: DiagnosticKind::ScalarTypeMismatch { expected, found },
        });
        Ok(None)
    }

    fn enum_mapping(&self, name: &'static str, at: &str) -> DecodeResult<&'c EnumMapping> {
        match self.registry.resolve(name) {
            Resolved::Enum(mapping) => Ok(mapping),
            _ => Err(DecodeError::UnknownType {
                path: at.to_owned(),
                type_name: name,
            }),
        }
    }

    fn gadget_type(&self, name: &'static str, at: &str) -> DecodeResult<&'c GadgetType> {
        match self.registry.resolve(name) {
            Resolved::Gadget(gadget_type) => Ok(gadget_type),
            _ => Err(DecodeError::UnknownType {
                path: at.to_owned(),
                type_name: name,
            }),
        }
    }
}

/// Converts a JSON scalar to the field's scalar kind.
fn scalar(kind: &FieldKind, json: &Json) -> Option<Value> {
    match kind {
        FieldKind::Bool => json.as_bool().map(Value::Bool),
        FieldKind::Int => integer(json).map(Value::Int),
        FieldKind::Text => json.as_str().map(|s| Value::Text(s.to_owned())),
        FieldKind::Bytes => json
            .as_str()
            .and_then(|s| STANDARD.decode(s).ok())
            .map(Value::Bytes),
        _ => None,
    }
}

/// Accepts integers, and floats without a fractional part that fit `i64`.
fn integer(json: &Json) -> Option<i64> {
    if let Some(i) = json.as_i64() {
        return Some(i);
    }
    let f = json.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn enumerator(mapping: &EnumMapping, json: &Json, at: &str) -> DecodeResult<Value> {
    let name = json.as_str().ok_or_else(|| shape(at, "string", json))?;
    mapping
        .value_of(name)
        .map(Value::Enum)
        .ok_or_else(|| DecodeError::UnresolvableEnumName {
            path: at.to_owned(),
            enum_name: mapping.name(),
            name: name.to_owned(),
        })
}

fn shape(at: &str, expected: &'static str, found: &Json) -> DecodeError {
    DecodeError::UnexpectedShape {
        path: at.to_owned(),
        expected,
        found: json_kind(found),
    }
}
