//! Log settings, the gadget exercising enumerations and opaque JSON.

use gadget_model::{
    EnumMapping, FieldDescriptor, FieldKind, GadgetEnum, Schema, Shared, Value, impl_gadget,
};
use std::fmt;
use std::sync::OnceLock;

/// Severity of a log record. Written on the wire by name (`"debug"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Critical = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Critical];
}

impl GadgetEnum for LogLevel {
    fn mapping() -> &'static EnumMapping {
        static MAPPING: OnceLock<EnumMapping> = OnceLock::new();
        MAPPING.get_or_init(|| {
            EnumMapping::new(
                "LogLevel",
                &[("debug", 0), ("info", 1), ("warning", 2), ("critical", 3)],
            )
            .expect("LogLevel enumerators are distinct")
        })
    }

    fn to_raw(self) -> i32 {
        self as i32
    }

    fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.to_raw() == raw)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::mapping().name_of(self.to_raw()).unwrap_or("?"))
    }
}

#[derive(Clone, Default)]
struct LogSettingsData {
    enumeration: LogLevel,
    levels: Vec<LogLevel>,
    verbose: bool,
    extra: serde_json::Value,
    categories: Vec<String>,
}

/// Logging configuration for a component.
///
/// `extra` is carried through the codec untouched; the default is JSON
/// `null`, so any other value is written on encode.
#[derive(Clone, Default)]
pub struct LogSettings {
    d: Shared<LogSettingsData>,
}

impl LogSettings {
    /// The threshold level.
    pub fn enumeration(&self) -> LogLevel {
        self.d.read().enumeration
    }

    pub fn set_enumeration(&mut self, level: LogLevel) {
        if self.enumeration() == level {
            return;
        }
        self.d.mutate().enumeration = level;
    }

    /// Additional levels always recorded regardless of the threshold.
    pub fn levels(&self) -> &[LogLevel] {
        &self.d.read().levels
    }

    pub fn set_levels(&mut self, levels: Vec<LogLevel>) {
        self.d.mutate().levels = levels;
    }

    pub fn verbose(&self) -> bool {
        self.d.read().verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        if self.verbose() == verbose {
            return;
        }
        self.d.mutate().verbose = verbose;
    }

    pub fn extra(&self) -> &serde_json::Value {
        &self.d.read().extra
    }

    pub fn set_extra(&mut self, extra: serde_json::Value) {
        self.d.mutate().extra = extra;
    }

    pub fn categories(&self) -> &[String] {
        &self.d.read().categories
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.d.mutate().categories = categories;
    }
}

fn log_settings_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("LogSettings")
            .field(FieldDescriptor::new::<LogSettings>(
                "enumeration",
                FieldKind::Enum("LogLevel"),
                |g| Value::enumeration(g.enumeration()),
                |g, v| {
                    g.set_enumeration(v.into_enum()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<LogSettings>(
                "levels",
                FieldKind::list(FieldKind::Enum("LogLevel")),
                |g| Value::enum_list(g.levels()),
                |g, v| {
                    g.set_levels(v.into_list_of(Value::into_enum)?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<LogSettings>(
                "verbose",
                FieldKind::Bool,
                |g| Value::Bool(g.verbose()),
                |g, v| {
                    g.set_verbose(v.into_bool()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<LogSettings>(
                "extra",
                FieldKind::OpaqueJson,
                |g| Value::Json(g.extra().clone()),
                |g, v| {
                    g.set_extra(v.into_json()?);
                    Ok(())
                },
            ))
            .field(FieldDescriptor::new::<LogSettings>(
                "categories",
                FieldKind::list(FieldKind::Text),
                |g| Value::list(g.categories().iter().map(String::as_str)),
                |g, v| {
                    g.set_categories(v.into_list_of(Value::into_text)?);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(LogSettings, "LogSettings", log_settings_schema, d);
