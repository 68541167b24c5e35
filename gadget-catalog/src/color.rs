//! An RGB colour and the gadget that carries one.

use gadget_model::{FieldDescriptor, FieldKind, ModelError, Schema, Shared, Value, impl_gadget};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// An opaque RGB colour, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error parsing a colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a #rgb or #rrggbb colour")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` and the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

#[derive(Clone)]
struct ColorData {
    color: Color,
}

impl Default for ColorData {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}

/// A gadget holding a single colour, black by default.
#[derive(Clone, Default)]
pub struct ColorGadget {
    d: Shared<ColorData>,
}

impl ColorGadget {
    #[must_use]
    pub fn new(color: Color) -> Self {
        let mut gadget = Self::default();
        gadget.set_color(color);
        gadget
    }

    pub fn color(&self) -> Color {
        self.d.read().color
    }

    pub fn set_color(&mut self, color: Color) {
        if self.color() == color {
            return;
        }
        self.d.mutate().color = color;
    }
}

fn color_schema() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::builder("ColorGadget")
            .field(FieldDescriptor::new::<ColorGadget>(
                "color",
                FieldKind::Text,
                |g| Value::Text(g.color().to_string()),
                |g, v| {
                    let color = v.into_text()?.parse::<Color>().map_err(|e| {
                        ModelError::Invalid {
                            field: "color",
                            reason: e.to_string(),
                        }
                    })?;
                    g.set_color(color);
                    Ok(())
                },
            ))
            .build()
    })
}

impl_gadget!(ColorGadget, "ColorGadget", color_schema, d);
