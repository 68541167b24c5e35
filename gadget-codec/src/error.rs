//! Error types for the codec.
//!
//! Every variant here is a hard failure: it aborts the enclosing decode or
//! encode call. Soft failures are reported through
//! [`DecodeReport`](crate::DecodeReport) instead.

use gadget_model::ModelError;
use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encode operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Hard failures while decoding JSON into a gadget.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A required field is absent from the source object.
    #[error("{type_name}: required field '{path}' is missing")]
    MissingRequiredField {
        type_name: &'static str,
        path: String,
    },

    /// A string does not name any enumerator of the target enumeration.
    #[error("'{name}' at '{path}' is not an enumerator of {enum_name}")]
    UnresolvableEnumName {
        path: String,
        enum_name: &'static str,
        name: String,
    },

    /// The JSON value has the wrong structure for an enum, object or list.
    #[error("expected {expected} at '{path}', found {found}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A scalar of the wrong kind, in strict mode.
    #[error("expected {expected} at '{path}', found {found}")]
    ScalarTypeMismatch {
        path: String,
        expected: String,
        found: &'static str,
    },

    /// A field kind names a type the registry cannot resolve.
    #[error("'{path}' refers to unknown type '{type_name}'")]
    UnknownType {
        path: String,
        type_name: &'static str,
    },

    /// A nested gadget failed to decode.
    #[error("failed to decode {type_name} at '{path}': {source}")]
    Nested {
        path: String,
        type_name: &'static str,
        #[source]
        source: Box<DecodeError>,
    },

    /// Nesting is deeper than the configured limit.
    #[error("'{path}' exceeds the maximum nesting depth of {max_depth}")]
    DepthExceeded { path: String, max_depth: usize },

    /// A field kind the codec does not support (lists of lists).
    #[error("'{path}' has unsupported kind {kind}")]
    UnsupportedKind { path: String, kind: String },

    /// The gadget's mutator rejected the decoded value.
    #[error("cannot set '{path}': {source}")]
    Model {
        path: String,
        #[source]
        source: ModelError,
    },

    /// The source text is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Follows `Nested` wrappers down to the failure that started it.
    pub fn innermost(&self) -> &DecodeError {
        match self {
            Self::Nested { source, .. } => source.innermost(),
            other => other,
        }
    }
}

/// Hard failures while encoding a gadget to JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// An enumeration field holds an integer without a symbolic name.
    #[error("{value} at '{path}' is not an enumerator of {enum_name}")]
    UnresolvableEnumValue {
        path: String,
        enum_name: &'static str,
        value: i32,
    },

    /// A field kind names a type the registry cannot resolve.
    #[error("'{path}' refers to unknown type '{type_name}'")]
    UnknownType {
        path: String,
        type_name: &'static str,
    },

    /// A nested gadget failed to encode.
    #[error("failed to encode {type_name} at '{path}': {source}")]
    Nested {
        path: String,
        type_name: &'static str,
        #[source]
        source: Box<EncodeError>,
    },

    /// Nesting is deeper than the configured limit.
    #[error("'{path}' exceeds the maximum nesting depth of {max_depth}")]
    DepthExceeded { path: String, max_depth: usize },

    /// A field kind the codec does not support (lists of lists).
    #[error("'{path}' has unsupported kind {kind}")]
    UnsupportedKind { path: String, kind: String },

    /// A getter returned a value that does not match the field kind.
    #[error("cannot read '{path}': {source}")]
    Model {
        path: String,
        #[source]
        source: ModelError,
    },

    /// Serialising the encoded document failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EncodeError {
    /// Follows `Nested` wrappers down to the failure that started it.
    pub fn innermost(&self) -> &EncodeError {
        match self {
            Self::Nested { source, .. } => source.innermost(),
            other => other,
        }
    }
}

/// Errors loading a [`CodecConfig`](crate::CodecConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid codec config: {0}")]
    Parse(#[from] toml::de::Error),
}
