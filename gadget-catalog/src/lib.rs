//! Example gadget types.
//!
//! Each gadget keeps its fields in a [`Shared`](gadget_model::Shared)
//! payload and declares a [`Schema`](gadget_model::Schema) for the codec.
//! [`registry()`] returns a [`TypeRegistry`] holding every type defined
//! here.

mod color;
mod composite;
mod contact;
mod document;
mod logging;
mod text;
mod tree;

pub use color::{Color, ColorGadget, ParseColorError};
pub use composite::CompositeGadget;
pub use contact::Contact;
pub use document::DocumentGadget;
pub use logging::{LogLevel, LogSettings};
pub use text::{SpecialText, TextGadget};
pub use tree::TreeNode;

use gadget_model::{RegistryError, TypeRegistry};

/// Builds a registry of all catalog gadgets and enumerations and checks
/// that every field reference resolves.
pub fn registry() -> Result<TypeRegistry, RegistryError> {
    let mut registry = TypeRegistry::new();
    registry.register_enum::<LogLevel>()?;
    registry.register::<ColorGadget>()?;
    registry.register::<CompositeGadget>()?;
    registry.register::<Contact>()?;
    registry.register::<DocumentGadget>()?;
    registry.register::<LogSettings>()?;
    registry.register::<SpecialText>()?;
    registry.register::<TextGadget>()?;
    registry.register::<TreeNode>()?;
    registry.validate()?;
    Ok(registry)
}
