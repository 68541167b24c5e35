//! Building blocks of the `gadget` command: registry listing, document
//! decoding and the copy-on-write walkthrough.

use anyhow::{Context, Result, anyhow};
use gadget_catalog::{Color, ColorGadget, CompositeGadget};
use gadget_codec::{Codec, CodecConfig, DecodeReport};
use gadget_model::{Gadget, TypeRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// One registered type, as printed by `gadget types`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum TypeSummary {
    Gadget { name: String, fields: Vec<FieldSummary> },
    Enum { name: String, enumerators: Vec<String> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldSummary {
    pub name: String,
    pub kind: String,
    pub required: bool,
}

impl fmt::Display for TypeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gadget { name, fields } => {
                write!(f, "{name} {{")?;
                for (i, field) in fields.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{sep}{}: {}", field.name, field.kind)?;
                    if field.required {
                        f.write_str(" (required)")?;
                    }
                }
                f.write_str(if fields.is_empty() { "}" } else { " }" })
            }
            Self::Enum { name, enumerators } => {
                write!(f, "{name} = {}", enumerators.join(" | "))
            }
        }
    }
}

/// Summaries of every registered enumeration and gadget type, enumerations
/// first, each group sorted by name.
pub fn describe_types(registry: &TypeRegistry) -> Vec<TypeSummary> {
    let enums = registry.enums().map(|mapping| TypeSummary::Enum {
        name: mapping.name().to_owned(),
        enumerators: mapping.iter().map(|(name, _)| name.to_owned()).collect(),
    });
    let gadgets = registry.gadgets().map(|gadget_type| TypeSummary::Gadget {
        name: gadget_type.name().to_owned(),
        fields: gadget_type
            .schema()
            .fields()
            .iter()
            .map(|field| FieldSummary {
                name: field.name().to_owned(),
                kind: field.kind().to_string(),
                required: field.is_required(),
            })
            .collect(),
    });
    enums.chain(gadgets).collect()
}

/// A decoded document and the fields decode had to skip.
#[derive(Debug)]
pub struct Decoded {
    pub gadget: Box<dyn Gadget>,
    pub report: DecodeReport,
}

/// Decodes JSON text into a fresh instance of the named gadget type.
pub fn decode_document(codec: &Codec<'_>, type_name: &str, text: &str) -> Result<Decoded> {
    let mut gadget = codec
        .registry()
        .construct(type_name)
        .ok_or_else(|| anyhow!("unknown gadget type '{type_name}'"))?;
    let report = codec
        .decode_str(gadget.as_mut(), text)
        .with_context(|| format!("Failed to decode {type_name}"))?;
    debug!(type_name, diagnostics = report.diagnostics().len(), "decoded document");
    Ok(Decoded { gadget, report })
}

/// Reads the codec config, or the defaults when no path is given. A path
/// that was given must exist.
pub fn load_config(path: Option<&Path>) -> Result<CodecConfig> {
    match path {
        Some(path) => CodecConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(CodecConfig::default()),
    }
}

/// Walks through copy-on-write behaviour of plain and composite gadgets and
/// returns what it observed, one line per step.
pub fn demo() -> Vec<String> {
    let mut lines = Vec::new();

    let mut first = ColorGadget::default();
    first.set_color(Color::BLUE);
    let mut second = first.clone();
    lines.push(format!(
        "copy shares payload: {}",
        first.payload_addr() == second.payload_addr()
    ));
    second.set_color(Color::RED);
    lines.push(format!("first color: {}", first.color()));
    lines.push(format!("second color: {}", second.color()));

    let mut original = CompositeGadget::default();
    original.set_priority(100);
    original.set_advanced(ColorGadget::new(Color::BLUE));

    let mut copy = original.clone();
    let mut advanced = copy.advanced();
    advanced.set_color(Color::RED);
    copy.set_advanced(advanced);

    lines.push(format!("original priority: {}", original.priority()));
    lines.push(format!("original color: {}", original.advanced().color()));
    lines.push(format!("modified color: {}", copy.advanced().color()));
    lines.push(format!("composites equal: {}", original == copy));
    lines
}
