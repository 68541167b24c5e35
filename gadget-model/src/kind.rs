use std::fmt;

/// The shape of a field, resolved once when the schema is built.
///
/// `Enum` and `NestedObject` carry the registered type name; the codec
/// resolves it through its type registry. `ListOf` is only ever one level
/// deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Text,
    Bytes,
    OpaqueJson,
    Enum(&'static str),
    NestedObject(&'static str),
    ListOf(Box<FieldKind>),
}

impl FieldKind {
    /// Shorthand for `ListOf(Box::new(element))`.
    #[must_use]
    pub fn list(element: FieldKind) -> Self {
        Self::ListOf(Box::new(element))
    }

    /// The element kind of a list field.
    #[must_use]
    pub fn element(&self) -> Option<&FieldKind> {
        match self {
            Self::ListOf(inner) => Some(inner),
            _ => None,
        }
    }

    /// True for `Bool`, `Int`, `Text` and `Bytes`.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Text | Self::Bytes)
    }

    /// The [`Value`](crate::Value) variant name fields of this kind hold.
    #[must_use]
    pub fn value_kind(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::OpaqueJson => "json",
            Self::Enum(_) => "enum",
            Self::NestedObject(_) => "object",
            Self::ListOf(_) => "list",
        }
    }

    /// The registered type this kind depends on, looking through lists.
    #[must_use]
    pub fn referenced_type(&self) -> Option<&'static str> {
        match self {
            Self::Enum(name) | Self::NestedObject(name) => Some(*name),
            Self::ListOf(inner) => inner.referenced_type(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Text => f.write_str("text"),
            Self::Bytes => f.write_str("bytes"),
            Self::OpaqueJson => f.write_str("json"),
            Self::Enum(name) | Self::NestedObject(name) => f.write_str(name),
            Self::ListOf(inner) => write!(f, "list<{inner}>"),
        }
    }
}
