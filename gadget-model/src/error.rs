use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised when a value does not fit the shape a field expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A descriptor was applied to a gadget of another concrete type.
    #[error("field '{field}' does not belong to {found}")]
    WrongGadget {
        field: &'static str,
        found: &'static str,
    },

    /// A `Value` variant did not match the requested kind.
    #[error("expected {expected} value, found {found}")]
    ValueKind {
        expected: &'static str,
        found: &'static str,
    },

    /// An object value held a gadget of another type.
    #[error("expected {expected} object, found {found}")]
    WrongObject {
        expected: &'static str,
        found: &'static str,
    },

    /// The value has the right kind but the gadget's mutator rejects it.
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    /// An integer has no enumerator in the target enumeration.
    #[error("{value} is not an enumerator of {enum_name}")]
    UnknownEnumValue { enum_name: &'static str, value: i32 },
}
