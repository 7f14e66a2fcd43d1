//! Data Definitions
//!
//! A data definition describes one entity type as a named, ordered set of
//! fields. Field types discriminate between scalars and the two relation
//! kinds, each of which carries the definition it points at.

use std::sync::Arc;

use indexmap::IndexMap;

/// The type of a schema field.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// A plain value (string, number, boolean, date, ...).
    Scalar,

    /// A reference to a single entity of the given definition.
    BelongsTo(Arc<DataDefinition>),

    /// A reference to an ordered collection of entities of the given
    /// definition.
    HasMany(Arc<DataDefinition>),
}

/// One field of a data definition.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    field_type: FieldType,
}

impl FieldDefinition {
    /// Create a scalar field.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Scalar,
        }
    }

    /// Create a belongs-to field pointing at `target`.
    pub fn belongs_to(name: impl Into<String>, target: Arc<DataDefinition>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::BelongsTo(target),
        }
    }

    /// Create a has-many field pointing at `target`.
    pub fn has_many(name: impl Into<String>, target: Arc<DataDefinition>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::HasMany(target),
        }
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's type.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// The definition a relation field points at, `None` for scalars.
    pub fn related_definition(&self) -> Option<&Arc<DataDefinition>> {
        match &self.field_type {
            FieldType::Scalar => None,
            FieldType::BelongsTo(target) | FieldType::HasMany(target) => Some(target),
        }
    }
}

/// A named set of fields describing one entity type.
#[derive(Debug)]
pub struct DataDefinition {
    name: String,
    fields: IndexMap<String, FieldDefinition>,
}

impl DataDefinition {
    /// Create an empty definition with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field, consuming and returning the definition for chaining.
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    /// The definition's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Iterate over the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }
}
