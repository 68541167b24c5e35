//! Schema-driven JSON codec for gadgets.
//!
//! [`Codec`] converts between `serde_json` documents and gadgets without
//! per-type marshalling code: it walks each gadget's
//! [`Schema`](gadget_model::Schema) and resolves enumeration and nested
//! gadget names through a [`TypeRegistry`].
//!
//! - decode fails on hard errors ([`DecodeError`]) and records soft ones
//!   (scalar type mismatches) in the returned [`DecodeReport`]
//! - encode writes only required and non-default fields

mod config;
mod decode;
mod encode;
mod error;
mod report;

pub use config::CodecConfig;
pub use error::{ConfigError, DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use report::{DecodeReport, Diagnostic, DiagnosticKind};

use decode::Decoder;
use encode::Encoder;
use gadget_model::{Gadget, TypeRegistry};
use serde_json::{Map, Value as Json};

/// Decodes and encodes gadgets registered in a [`TypeRegistry`].
#[derive(Debug, Clone)]
pub struct Codec<'r> {
    registry: &'r TypeRegistry,
    config: CodecConfig,
}

impl<'r> Codec<'r> {
    /// A codec with the default configuration.
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_config(registry, CodecConfig::default())
    }

    pub fn with_config(registry: &'r TypeRegistry, config: CodecConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a JSON object into `target` in place.
    ///
    /// On error, fields decoded before the failing one keep their new
    /// values; the caller should discard `target`.
    pub fn decode(&self, target: &mut dyn Gadget, json: &Json) -> DecodeResult<DecodeReport> {
        let object = json.as_object().ok_or_else(|| DecodeError::UnexpectedShape {
            path: String::new(),
            expected: "object",
            found: json_kind(json),
        })?;
        self.decode_object(target, object)
    }

    /// Decodes a JSON object map into `target` in place.
    pub fn decode_object(
        &self,
        target: &mut dyn Gadget,
        object: &Map<String, Json>,
    ) -> DecodeResult<DecodeReport> {
        let mut decoder = Decoder::new(self.registry, &self.config);
        decoder.decode_object(target, object, "", 0)?;
        Ok(decoder.finish())
    }

    /// Parses JSON text and decodes it into `target`.
    pub fn decode_str(&self, target: &mut dyn Gadget, text: &str) -> DecodeResult<DecodeReport> {
        let json: Json = serde_json::from_str(text)?;
        self.decode(target, &json)
    }

    /// Encodes `source` as a JSON object holding its required and
    /// non-default fields.
    pub fn encode(&self, source: &dyn Gadget) -> EncodeResult<Map<String, Json>> {
        Encoder::new(self.registry, &self.config).encode_object(source, "", 0)
    }

    /// Like [`Codec::encode`], wrapped as a `serde_json::Value`.
    pub fn encode_value(&self, source: &dyn Gadget) -> EncodeResult<Json> {
        self.encode(source).map(Json::Object)
    }

    pub fn encode_to_string(&self, source: &dyn Gadget) -> EncodeResult<String> {
        Ok(serde_json::to_string(&self.encode(source)?)?)
    }

    pub fn encode_to_string_pretty(&self, source: &dyn Gadget) -> EncodeResult<String> {
        Ok(serde_json::to_string_pretty(&self.encode(source)?)?)
    }
}

/// Name of a JSON value's type, for messages.
pub(crate) fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Dotted field paths, e.g. `children[1].value`.
pub(crate) mod path {
    pub(crate) fn field(parent: &str, name: &str) -> String {
        if parent.is_empty() {
            name.to_owned()
        } else {
            format!("{parent}.{name}")
        }
    }

    pub(crate) fn index(parent: &str, i: usize) -> String {
        format!("{parent}[{i}]")
    }
}
