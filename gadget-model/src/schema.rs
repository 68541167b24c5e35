use crate::{FieldKind, Gadget, ModelError, ModelResult, Value};
use std::fmt;

type Getter = Box<dyn Fn(&dyn Gadget) -> ModelResult<Value> + Send + Sync>;
type Setter = Box<dyn Fn(&mut dyn Gadget, Value) -> ModelResult<()> + Send + Sync>;

/// One named, typed field of a gadget schema.
///
/// The accessor pair is written against the concrete gadget type and erased
/// here, so the codec can read and write fields through `&dyn Gadget`.
pub struct FieldDescriptor {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    get: Getter,
    set: Setter,
}

impl FieldDescriptor {
    /// Creates an optional field from typed accessors.
    pub fn new<G: Gadget>(
        name: &'static str,
        kind: FieldKind,
        get: fn(&G) -> Value,
        set: fn(&mut G, Value) -> ModelResult<()>,
    ) -> Self {
        Self {
            name,
            kind,
            required: false,
            get: Box::new(move |gadget: &dyn Gadget| {
                gadget
                    .as_any()
                    .downcast_ref::<G>()
                    .map(get)
                    .ok_or(ModelError::WrongGadget {
                        field: name,
                        found: gadget.type_name(),
                    })
            }),
            set: Box::new(move |gadget: &mut dyn Gadget, value: Value| {
                let found = gadget.type_name();
                let typed = gadget
                    .as_any_mut()
                    .downcast_mut::<G>()
                    .ok_or(ModelError::WrongGadget { field: name, found })?;
                set(typed, value)
            }),
        }
    }

    /// Marks the field as required: decode fails when it is absent and
    /// encode always writes it.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The wire-format key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Reads the field's current value.
    pub fn read(&self, gadget: &dyn Gadget) -> ModelResult<Value> {
        (self.get)(gadget)
    }

    /// Writes the field through the gadget's mutator.
    pub fn write(&self, gadget: &mut dyn Gadget, value: Value) -> ModelResult<()> {
        (self.set)(gadget, value)
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable field table for one gadget type.
#[derive(Debug)]
pub struct Schema {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn builder(type_name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks a field up by its wire name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that must be present on decode and are always encoded.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builds a [`Schema`], keeping fields in insertion order.
pub struct SchemaBuilder {
    type_name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    /// Appends a field.
    ///
    /// # Panics
    ///
    /// Panics if the schema already declares a field with the same name.
    /// Schemas are constants of the program, so a clash is a coding error.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        assert!(
            self.fields.iter().all(|f| f.name != field.name),
            "{} declares field '{}' twice",
            self.type_name,
            field.name
        );
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            type_name: self.type_name,
            fields: self.fields,
        }
    }
}
