use crate::Schema;
use gadget_types::EnumMapping;
use std::any::Any;
use std::fmt;

/// A copy-on-write value object described by a [`Schema`].
///
/// Implementations keep their fields in a `Shared` payload so that copies
/// are cheap and mutation detaches. Most types implement this trait through
/// [`impl_gadget!`](crate::impl_gadget), which also derives `PartialEq` from
/// [`equals`] and `Debug` from [`debug_gadget`].
pub trait Gadget: Any + Send + Sync + fmt::Debug {
    /// Registered type name, referenced by `FieldKind::NestedObject`.
    fn type_name(&self) -> &'static str;

    /// The type's field table.
    fn schema(&self) -> &'static Schema;

    /// A default-constructed instance of the same concrete type.
    fn new_default(&self) -> Box<dyn Gadget>;

    /// A copy sharing this gadget's payload.
    fn clone_gadget(&self) -> Box<dyn Gadget>;

    /// Address of the payload, equal for handles that share it.
    fn payload_addr(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl Clone for Box<dyn Gadget> {
    fn clone(&self) -> Self {
        self.clone_gadget()
    }
}

/// An enumeration whose values are stored as integers and written as their
/// symbolic names.
pub trait GadgetEnum: Copy + Send + Sync + 'static {
    /// The name ↔ value bijection for this enumeration.
    fn mapping() -> &'static EnumMapping;

    fn to_raw(self) -> i32;

    fn from_raw(raw: i32) -> Option<Self>;
}

/// Structural equality between two gadgets.
///
/// Gadgets of different concrete types are never equal, even when their
/// field tables coincide. Handles sharing one payload are equal without
/// comparing fields.
pub fn equals(a: &dyn Gadget, b: &dyn Gadget) -> bool {
    if Any::type_id(a.as_any()) != Any::type_id(b.as_any()) {
        return false;
    }
    if a.payload_addr() == b.payload_addr() {
        return true;
    }
    a.schema().fields().iter().all(|field| {
        match (field.read(a), field.read(b)) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    })
}

/// Formats a gadget as `TypeName(field: value, ...)` in schema order.
pub fn debug_gadget(gadget: &dyn Gadget, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(", gadget.type_name())?;
    for (i, field) in gadget.schema().fields().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match field.read(gadget) {
            Ok(value) => write!(f, "{}: {value:?}", field.name())?,
            Err(err) => write!(f, "{}: <{err}>", field.name())?,
        }
    }
    f.write_str(")")
}
