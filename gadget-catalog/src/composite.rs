//! A gadget embedding another gadget by value.

use crate::ColorGadget;
use gadget_model::{FieldDescriptor, FieldKind, Schema, Shared, Value, impl_gadget};
use std::sync::OnceLock;

#[derive(Clone, Default)]
struct CompositeData {
    advanced: ColorGadget,
    priority: i64,
}

/// A colour gadget plus a priority.
///
/// `advanced()` returns the nested gadget by value: modifying the returned
/// copy never touches this composite until it is written back with
/// `set_advanced`.
#[derive(Clone, Default)]
pub struct CompositeGadget {
    d: Shared<CompositeData>,
}

impl CompositeGadget {
    pub fn advanced(&self) -> ColorGadget {
        self.d.read().advanced.clone()
    }

    pub fn set_advanced(&mut self, advanced: ColorGadget) {
        if self.d.read().advanced == advanced {
            return;
        }
        self.d.mutate().advanced = advanced;
    }

    pub fn priority(&self) -> i64 {
        self.d.read().priority
    }

    pub fn set_priority(&mut self, priority: i64) {
        if self.priority() == priority {
            return;
        }
        self.d.mutate().priority = priority;
    }
}

fn composite_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("CompositeGadget")
            .field(FieldDescriptor::new::<CompositeGadget>(
                "advanced",
                FieldKind::NestedObject("ColorGadget"),
                |g| Value::object(g.advanced()),
                |g, v| {
                    g.set_advanced(v.into_object()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<CompositeGadget>(
                "priority",
                FieldKind::Int,
                |g| Value::Int(g.priority()),
                |g, v| {
                    g.set_priority(v.into_int()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(CompositeGadget, "CompositeGadget", composite_schema, d);
