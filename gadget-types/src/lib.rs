//! Core type definitions for gadgets.
//!
//! This crate defines the fundamental, schema-agnostic building blocks used
//! throughout the codec:
//! - [`Shared`] — the copy-on-write payload handle every gadget is built on
//! - [`EnumMapping`] — bijection between symbolic enumeration names and values
//!
//! Schemas, field descriptors and the gadget trait live in `gadget-model`.

mod enum_mapping;
mod shared;

pub use enum_mapping::EnumMapping;
pub use shared::Shared;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("enumeration {enum_name}: {detail}")]
    NotBijective {
        enum_name: &'static str,
        detail: String,
    },
}
