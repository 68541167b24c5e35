//! Text gadgets.

use gadget_model::{FieldDescriptor, FieldKind, Schema, Shared, Value, impl_gadget};
use std::sync::OnceLock;

#[derive(Clone, Default)]
struct TextData {
    content: String,
}

/// A single block of text.
#[derive(Clone, Default)]
pub struct TextGadget {
    d: Shared<TextData>,
}

impl TextGadget {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let mut gadget = Self::default();
        gadget.set_content(content);
        gadget
    }

    pub fn content(&self) -> &str {
        &self.d.read().content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.d.mutate().content = content.into();
    }
}

fn text_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("TextGadget")
            .field(FieldDescriptor::new::<TextGadget>(
                "content",
                FieldKind::Text,
                |g| Value::from(g.content()),
                |g, v| {
                    g.set_content(v.into_text()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(TextGadget, "TextGadget", text_schema, d);

#[derive(Clone, Default)]
struct SpecialTextData {
    content: String,
    format: String,
}

/// Text with a format tag. Shares `TextGadget`'s `content` field but is a
/// distinct type: the two never compare equal.
#[derive(Clone, Default)]
pub struct SpecialText {
    d: Shared<SpecialTextData>,
}

impl SpecialText {
    pub fn content(&self) -> &str {
        &self.d.read().content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.d.mutate().content = content.into();
    }

    pub fn format(&self) -> &str {
        &self.d.read().format
    }

    /// The plain-text view of this gadget, without the format tag.
    #[must_use]
    pub fn to_text(&self) -> TextGadget {
        TextGadget::new(self.content())
    }

    pub fn set_format(&mut self, format: impl Into<String>) {
        let format = format.into();
        if self.format() == format {
            return;
        }
        self.d.mutate().format = format;
    }
}

fn special_text_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("SpecialText")
            .field(FieldDescriptor::new::<SpecialText>(
                "content",
                FieldKind::Text,
                |g| Value::from(g.content()),
                |g, v| {
                    g.set_content(v.into_text()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<SpecialText>(
                "format",
                FieldKind::Text,
                |g| Value::from(g.format()),
                |g, v| {
                    g.set_format(v.into_text()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(SpecialText, "SpecialText", special_text_schema, d);
