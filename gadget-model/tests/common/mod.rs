//! Small gadgets shared by the model tests.

#![allow(dead_code)]

use gadget_model::{
    EnumMapping, FieldDescriptor, FieldKind, GadgetEnum, Schema, Shared, Value, impl_gadget,
};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Calm,
    Busy,
}

impl GadgetEnum for Mood {
    fn mapping() -> &'static EnumMapping {
        static MAPPING: OnceLock<EnumMapping> = OnceLock::new();
        MAPPING.get_or_init(|| {
            EnumMapping::new("Mood", &[("calm", 0), ("busy", 1)]).expect("bijective")
        })
    }

    fn to_raw(self) -> i32 {
        self as i32
    }

    fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Calm),
            1 => Some(Self::Busy),
            _ => None,
        }
    }
}

#[derive(Clone, Default)]
struct LabelData {
    text: String,
    mood: Mood,
}

/// One text field, one enum field.
#[derive(Clone, Default)]
pub struct Label {
    d: Shared<LabelData>,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.d.read().text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.d.mutate().text = text.into();
    }

    pub fn mood(&self) -> Mood {
        self.d.read().mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.d.mutate().mood = mood;
    }

    pub fn share_count(&self) -> usize {
        self.d.share_count()
    }
}

fn label_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Label")
            .field(FieldDescriptor::new::<Label>(
                "text",
                FieldKind::Text,
                |g| Value::from(g.text()),
                |g, v| {
                    g.set_text(v.into_text()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Label>(
                "mood",
                FieldKind::Enum("Mood"),
                |g| Value::enumeration(g.mood()),
                |g, v| {
                    g.set_mood(v.into_enum()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(Label, "Label", label_schema, d);

#[derive(Clone, Default)]
struct TagData {
    text: String,
    mood: Mood,
}

/// Same field table as [`Label`], different type.
#[derive(Clone, Default)]
pub struct Tag {
    d: Shared<TagData>,
}

impl Tag {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.d.mutate().text = text.into();
    }
}

fn tag_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Tag")
            .field(FieldDescriptor::new::<Tag>(
                "text",
                FieldKind::Text,
                |g| Value::from(g.d.read().text.as_str()),
                |g, v| {
                    g.set_text(v.into_text()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Tag>(
                "mood",
                FieldKind::Enum("Mood"),
                |g| Value::enumeration(g.d.read().mood),
                |g, v| {
                    g.d.mutate().mood = v.into_enum()?;
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(Tag, "Tag", tag_schema, d);

#[derive(Clone, Default)]
struct BoardData {
    title: String,
    labels: Vec<Label>,
    pinned: Label,
}

/// Holds nested gadgets, one required field.
#[derive(Clone, Default)]
pub struct Board {
    d: Shared<BoardData>,
}

impl Board {
    pub fn labels(&self) -> &[Label] {
        &self.d.read().labels
    }

    pub fn push_label(&mut self, label: Label) {
        self.d.mutate().labels.push(label);
    }

    pub fn pinned(&self) -> Label {
        self.d.read().pinned.clone()
    }

    pub fn set_pinned(&mut self, label: Label) {
        self.d.mutate().pinned = label;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.d.mutate().title = title.into();
    }
}

fn board_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Board")
            .field(
                FieldDescriptor::new::<Board>(
                    "title",
                    FieldKind::Text,
                    |g| Value::from(g.d.read().title.as_str()),
                    |g, v| {
                        g.set_title(v.into_text()?);
                        Ok(())
                    },
                )
                .required(),
            )
            .field(FieldDescriptor::new::<Board>(
                "labels",
                FieldKind::list(FieldKind::NestedObject("Label")),
                |g| Value::object_list(g.labels()),
                |g, v| {
                    g.d.mutate().labels = v.into_list_of(Value::into_object)?;
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Board>(
                "pinned",
                FieldKind::NestedObject("Label"),
                |g| Value::object(g.pinned()),
                |g, v| {
                    g.set_pinned(v.into_object()?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(Board, "Board", board_schema, d);
