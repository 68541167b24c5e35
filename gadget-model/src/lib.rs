//! Schema model for gadgets.
//!
//! Defines the contract between gadget types and the generic codec:
//! - [`Gadget`] — a copy-on-write value object that exposes its [`Schema`]
//! - [`Schema`] — the ordered, immutable field table of one gadget type
//! - [`FieldDescriptor`] — name, [`FieldKind`], required flag and accessor pair
//! - [`Value`] — the dynamic value exchanged through field accessors
//! - [`GadgetEnum`] — enumerations stored as integers, written as names
//! - [`TypeRegistry`] — resolves the type names used by field kinds
//!
//! [`equals`] implements structural equality over schemas and [`debug_gadget`]
//! prints a gadget as `TypeName(field: value, ...)`.

mod error;
mod gadget;
mod kind;
mod registry;
mod schema;
mod value;

pub use error::{ModelError, ModelResult};
pub use gadget::{Gadget, GadgetEnum, debug_gadget, equals};
pub use kind::FieldKind;
pub use registry::{GadgetType, RegistryError, Resolved, TypeRegistry};
pub use schema::{FieldDescriptor, Schema, SchemaBuilder};
pub use value::Value;

/// Re-exported so gadget implementations only depend on this crate.
pub use gadget_types::{EnumMapping, Shared};

/// Implements [`Gadget`], `PartialEq` and `Debug` for a gadget type whose
/// payload lives in a `Shared` field.
///
/// ```ignore
/// impl_gadget!(TextGadget, "TextGadget", text_schema, d);
/// ```
#[macro_export]
macro_rules! impl_gadget {
    ($ty:ty, $name:literal, $schema:path, $payload:ident) => {
        impl $crate::Gadget for $ty {
            fn type_name(&self) -> &'static str {
                $name
            }

            fn schema(&self) -> &'static $crate::Schema {
                $schema()
            }

            fn new_default(&self) -> ::std::boxed::Box<dyn $crate::Gadget> {
                ::std::boxed::Box::new(<$ty as ::std::default::Default>::default())
            }

            fn clone_gadget(&self) -> ::std::boxed::Box<dyn $crate::Gadget> {
                ::std::boxed::Box::new(::std::clone::Clone::clone(self))
            }

            fn payload_addr(&self) -> usize {
                self.$payload.addr()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::equals(self, other)
            }
        }

        impl ::std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::debug_gadget(self, f)
            }
        }
    };
}
