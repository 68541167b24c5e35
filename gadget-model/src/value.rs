//! Dynamic field values.
//!
//! Accessors in a [`FieldDescriptor`](crate::FieldDescriptor) exchange
//! `Value`s with the codec. Typed constructors build them from gadget
//! fields and the `into_*` extractors convert them back, failing with
//! [`ModelError::ValueKind`] when the variant does not match.

use crate::{Gadget, GadgetEnum, ModelError, ModelResult, equals};

/// A field value in its dynamic form.
#[derive(Debug, Clone)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    /// Raw integer of an enumerator.
    Enum(i32),
    Object(Box<dyn Gadget>),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Json(_) => "json",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::List(_) => "list",
        }
    }

    pub fn object<G: Gadget>(gadget: G) -> Self {
        Self::Object(Box::new(gadget))
    }

    pub fn enumeration<E: GadgetEnum>(value: E) -> Self {
        Self::Enum(value.to_raw())
    }

    /// Builds a list from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn enum_list<E: GadgetEnum>(items: &[E]) -> Self {
        Self::List(items.iter().map(|e| Self::Enum(e.to_raw())).collect())
    }

    pub fn object_list<G: Gadget + Clone>(items: &[G]) -> Self {
        Self::List(items.iter().cloned().map(Self::object).collect())
    }

    fn mismatch<T>(expected: &'static str, found: &Value) -> ModelResult<T> {
        Err(ModelError::ValueKind {
            expected,
            found: found.kind_name(),
        })
    }

    pub fn into_bool(self) -> ModelResult<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Self::mismatch("bool", &other),
        }
    }

    pub fn into_int(self) -> ModelResult<i64> {
        match self {
            Self::Int(i) => Ok(i),
            other => Self::mismatch("int", &other),
        }
    }

    pub fn into_text(self) -> ModelResult<String> {
        match self {
            Self::Text(s) => Ok(s),
            other => Self::mismatch("text", &other),
        }
    }

    pub fn into_bytes(self) -> ModelResult<Vec<u8>> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Self::mismatch("bytes", &other),
        }
    }

    pub fn into_json(self) -> ModelResult<serde_json::Value> {
        match self {
            Self::Json(j) => Ok(j),
            other => Self::mismatch("json", &other),
        }
    }

    pub fn into_enum<E: GadgetEnum>(self) -> ModelResult<E> {
        match self {
            Self::Enum(raw) => E::from_raw(raw).ok_or(ModelError::UnknownEnumValue {
                enum_name: E::mapping().name(),
                value: raw,
            }),
            other => Self::mismatch("enum", &other),
        }
    }

    pub fn into_object<G: Gadget>(self) -> ModelResult<G> {
        match self {
            Self::Object(gadget) => {
                let found = gadget.type_name();
                gadget
                    .into_any()
                    .downcast::<G>()
                    .map(|boxed| *boxed)
                    .map_err(|_| ModelError::WrongObject {
                        expected: std::any::type_name::<G>(),
                        found,
                    })
            }
            other => Self::mismatch("object", &other),
        }
    }

    pub fn into_list(self) -> ModelResult<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            other => Self::mismatch("list", &other),
        }
    }

    /// Converts a list value element by element.
    pub fn into_list_of<T>(self, convert: fn(Value) -> ModelResult<T>) -> ModelResult<Vec<T>> {
        self.into_list()?.into_iter().map(convert).collect()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => equals(a.as_ref(), b.as_ref()),
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Self::Json(j)
    }
}
