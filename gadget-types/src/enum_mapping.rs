//! Symbolic name ↔ integer mapping for one enumeration type.

use crate::{Error, Result};

/// Bijective mapping between the symbolic names of an enumeration and its
/// integer values.
///
/// The codec writes enumerations as their symbolic name and stores them as
/// the integer value, so both directions must be unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMapping {
    name: &'static str,
    entries: Vec<(&'static str, i32)>,
}

impl EnumMapping {
    /// Creates a mapping, rejecting duplicate names or duplicate values.
    pub fn new(name: &'static str, entries: &[(&'static str, i32)]) -> Result<Self> {
        for (i, (key, value)) in entries.iter().enumerate() {
            for (other_key, other_value) in &entries[..i] {
                if key == other_key {
                    return Err(Error::NotBijective {
                        enum_name: name,
                        detail: format!("duplicate name '{key}'"),
                    });
                }
                if value == other_value {
                    return Err(Error::NotBijective {
                        enum_name: name,
                        detail: format!("'{other_key}' and '{key}' both map to {value}"),
                    });
                }
            }
        }
        Ok(Self {
            name,
            entries: entries.to_vec(),
        })
    }

    /// The enumeration's type name, as referenced by field kinds.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolves a symbolic name to its value.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Resolves a value to its symbolic name.
    #[must_use]
    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(k, _)| *k)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of enumerators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the enumeration declares no enumerators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
