//! Shared fixtures for the codec tests.

#![allow(dead_code)]

use gadget_catalog::LogLevel;
use gadget_model::{
    FieldDescriptor, FieldKind, ModelError, ModelResult, Schema, Shared, TypeRegistry, Value,
    impl_gadget,
};
use std::sync::OnceLock;

/// The catalog registry.
pub fn catalog() -> TypeRegistry {
    gadget_catalog::registry().expect("catalog registry is consistent")
}

/// A registry with the `Probe`, `Haunted` and `Mimic` gadgets and the
/// `LogLevel` enumeration only. `Ghost` stays unregistered.
pub fn probe_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_enum::<LogLevel>().unwrap();
    registry.register::<Probe>().unwrap();
    registry.register::<Haunted>().unwrap();
    registry.register::<Mimic>().unwrap();
    registry
}

fn raw_enum(value: Value) -> ModelResult<i32> {
    match value {
        Value::Enum(raw) => Ok(raw),
        other => Err(ModelError::ValueKind {
            expected: "enum",
            found: other.kind_name(),
        }),
    }
}

#[derive(Clone, Default)]
struct ProbeData {
    level: i32,
    ghost: i32,
    grid: Vec<Vec<i64>>,
}

/// Holds raw enumerator values and a list of lists, for the error paths the
/// catalog gadgets cannot reach through their typed API.
#[derive(Clone, Default)]
pub struct Probe {
    d: Shared<ProbeData>,
}

impl Probe {
    pub fn set_level_raw(&mut self, raw: i32) {
        self.d.mutate().level = raw;
    }

    pub fn level_raw(&self) -> i32 {
        self.d.read().level
    }

    pub fn set_ghost_raw(&mut self, raw: i32) {
        self.d.mutate().ghost = raw;
    }

    pub fn set_grid(&mut self, grid: Vec<Vec<i64>>) {
        self.d.mutate().grid = grid;
    }
}

fn probe_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Probe")
            .field(FieldDescriptor::new::<Probe>(
                "level",
                FieldKind::Enum("LogLevel"),
                |g| Value::Enum(g.d.read().level),
                |g, v| {
                    g.d.mutate().level = raw_enum(v)?;
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Probe>(
                "ghost",
                FieldKind::Enum("Ghost"),
                |g| Value::Enum(g.d.read().ghost),
                |g, v| {
                    g.d.mutate().ghost = raw_enum(v)?;
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<Probe>(
                "grid",
                FieldKind::list(FieldKind::list(FieldKind::Int)),
                |g| {
                    Value::List(
                        g.d.read()
                            .grid
                            .iter()
                            .map(|row| Value::list(row.iter().copied()))
                            .collect(),
                    )
                },
                |g, v| {
                    let rows = v
                        .into_list()?
                        .into_iter()
                        .map(|row| row.into_list_of(Value::into_int))
                        .collect::<ModelResult<Vec<_>>>()?;
                    g.d.mutate().grid = rows;
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(Probe, "Probe", probe_schema, d);

#[derive(Clone, Default)]
struct HauntedData {
    moods: Vec<i32>,
}

/// List fields whose element type `Ghost` is never registered. `spirits`
/// is required, so encode has to resolve its element type even when the
/// list is empty.
#[derive(Clone, Default)]
pub struct Haunted {
    d: Shared<HauntedData>,
}

impl Haunted {
    pub fn set_moods_raw(&mut self, moods: Vec<i32>) {
        self.d.mutate().moods = moods;
    }
}

fn haunted_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Haunted")
            .field(FieldDescriptor::new::<Haunted>(
                "moods",
                FieldKind::list(FieldKind::Enum("Ghost")),
                |g| Value::List(g.d.read().moods.iter().copied().map(Value::Enum).collect()),
                |g, v| {
                    g.d.mutate().moods = v.into_list_of(raw_enum)?;
                    Ok(())
                },
            ))
            .field(
                FieldDescriptor::new::<Haunted>(
                    "spirits",
                    FieldKind::list(FieldKind::NestedObject("Ghost")),
                    |_| Value::List(Vec::new()),
                    |_, v| v.into_list().map(drop),
                )
                .required(),
            )
            .build()
    })
}

impl_gadget!(Haunted, "Haunted", haunted_schema, d);

#[derive(Clone, Default)]
struct MimicData {
    disguised: bool,
}

/// Declares a nested `Probe` but hands out a `Haunted` once disguised.
#[derive(Clone, Default)]
pub struct Mimic {
    d: Shared<MimicData>,
}

impl Mimic {
    pub fn disguise(&mut self) {
        self.d.mutate().disguised = true;
    }
}

fn mimic_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("Mimic")
            .field(FieldDescriptor::new::<Mimic>(
                "twin",
                FieldKind::NestedObject("Probe"),
                |g| {
                    if g.d.read().disguised {
                        Value::object(Haunted::default())
                    } else {
                        Value::object(Probe::default())
                    }
                },
                |_, v| v.into_object::<Probe>().map(drop),
            ))
            .build()
    })
}

impl_gadget!(Mimic, "Mimic", mimic_schema, d);
