//! A document made of two text gadgets.

use crate::TextGadget;
use gadget_model::{FieldDescriptor, FieldKind, Schema, Shared, Value, impl_gadget};
use std::sync::OnceLock;

#[derive(Clone, Default)]
struct DocumentData {
    header: TextGadget,
    body: TextGadget,
}

#[derive(Clone, Default)]
pub struct DocumentGadget {
    d: Shared<DocumentData>,
}

impl DocumentGadget {
    #[must_use]
    pub fn new(header: TextGadget, body: TextGadget) -> Self {
        let mut document = Self::default();
        document.set_header(header);
        document.set_body(body);
        document
    }

    pub fn header(&self) -> TextGadget {
        self.d.read().header.clone()
    }

    pub fn set_header(&mut self, header: TextGadget) {
        self.d.mutate().header = header;
    }

    pub fn body(&self) -> TextGadget {
        self.d.read().body.clone()
    }

    pub fn set_body(&mut self, body: TextGadget) {
        self.d.mutate().body = body;
    }
}

fn document_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("DocumentGadget")
            .field(FieldDescriptor::new::<DocumentGadget>(
                "header",
                FieldKind::NestedObject("TextGadget"),
                |g| Value::object(g.header()),
                |g, v| {
                    g.set_header(v.into_object()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<DocumentGadget>(
                "body",
                FieldKind::NestedObject("TextGadget"),
                |g| Value::object(g.body()),
                |g, v| {
                    g.set_body(v.into_object()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(DocumentGadget, "DocumentGadget", document_schema, d);
