//! Entity Instances
//!
//! An entity is one record of a data definition: an optional persistent
//! identity, an ordered map of field values and the validation errors
//! attached to individual fields. Relation fields hold nested entities,
//! which is what makes dotted-path traversal possible.
//!
//! Entities here are plain values. Persistence and query execution live
//! behind this boundary and hand fully materialized instances to the engine.

use std::collections::HashMap;

use indexmap::IndexMap;

/// A validation error attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    message: String,
    vars: Vec<String>,
}

impl ErrorMessage {
    /// Create an error with the given message key.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            vars: Vec::new(),
        }
    }

    /// Attach substitution variables.
    pub fn with_vars(mut self, vars: Vec<String>) -> Self {
        self.vars = vars;
        self
    }

    /// The message key.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The substitution variables.
    pub fn vars(&self) -> &[String] {
        &self.vars
    }
}

/// The value held by one entity field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A plain JSON-compatible scalar.
    Scalar(serde_json::Value),

    /// A nested entity (belongs-to).
    Entity(Box<Entity>),

    /// An ordered collection of entities (has-many).
    Collection(Vec<Entity>),

    /// A hierarchical collection of entities.
    Tree(Vec<Entity>),
}

impl FieldValue {
    /// The nested entity, if this value is one.
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            FieldValue::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    /// The scalar payload, if this value is one.
    pub fn as_scalar(&self) -> Option<&serde_json::Value> {
        match self {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<Entity> for FieldValue {
    fn from(entity: Entity) -> Self {
        FieldValue::Entity(Box::new(entity))
    }
}

impl From<Vec<Entity>> for FieldValue {
    fn from(entities: Vec<Entity>) -> Self {
        FieldValue::Collection(entities)
    }
}

/// One instance of a data definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: String,
    id: Option<i64>,
    fields: IndexMap<String, FieldValue>,
    errors: HashMap<String, ErrorMessage>,
}

impl Entity {
    /// Create an unsaved entity of the named definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            fields: IndexMap::new(),
            errors: HashMap::new(),
        }
    }

    /// Assign a persistent identity, consuming and returning the entity.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The definition name this entity belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The persistent identity, `None` for unsaved entities.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Set a field value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Set a field value, consuming and returning the entity for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Look up a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The nested entity behind a belongs-to field, `None` when the field is
    /// absent or not an entity.
    pub fn get_belongs_to_field(&self, name: &str) -> Option<&Entity> {
        self.fields.get(name).and_then(FieldValue::as_entity)
    }

    /// The collection behind a has-many field, empty when the field is absent
    /// or not a collection.
    pub fn get_has_many_field(&self, name: &str) -> &[Entity] {
        match self.fields.get(name) {
            Some(FieldValue::Collection(entities)) => entities,
            _ => &[],
        }
    }

    /// The hierarchical collection behind a tree field, empty when the field
    /// is absent or not a tree.
    pub fn get_tree_field(&self, name: &str) -> &[Entity] {
        match self.fields.get(name) {
            Some(FieldValue::Tree(entities)) => entities,
            _ => &[],
        }
    }

    /// Attach a validation error to a field.
    pub fn add_error(&mut self, field: impl Into<String>, error: ErrorMessage) {
        self.errors.insert(field.into(), error);
    }

    /// The validation error attached to a field, if any.
    pub fn get_error(&self, field: &str) -> Option<&ErrorMessage> {
        self.errors.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_fields_round_trip() {
        let entity = Entity::new("order").with_field("number", json!("ORD-1"));
        let value = entity.get_field("number").expect("field");
        assert_eq!(value.as_scalar(), Some(&json!("ORD-1")));
    }

    #[test]
    fn belongs_to_returns_nested_entity() {
        let technology = Entity::new("technology").with_id(9);
        let order = Entity::new("order").with_id(5).with_field("technology", technology);

        let nested = order.get_belongs_to_field("technology").expect("nested");
        assert_eq!(nested.id(), Some(9));
    }

    #[test]
    fn belongs_to_on_scalar_field_is_none() {
        let order = Entity::new("order").with_field("number", json!(12));
        assert!(order.get_belongs_to_field("number").is_none());
    }

    #[test]
    fn has_many_returns_ordered_rows() {
        let rows = vec![Entity::new("item").with_id(1), Entity::new("item").with_id(2)];
        let order = Entity::new("order").with_field("items", rows);

        let items = order.get_has_many_field("items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), Some(1));
        assert_eq!(items[1].id(), Some(2));
    }

    #[test]
    fn tree_field_is_distinct_from_collection() {
        let mut technology = Entity::new("technology");
        technology.set_field(
            "operationComponents",
            FieldValue::Tree(vec![Entity::new("operationComponent").with_id(3)]),
        );

        assert_eq!(technology.get_tree_field("operationComponents").len(), 1);
        assert!(technology.get_has_many_field("operationComponents").is_empty());
    }

    #[test]
    fn errors_attach_to_fields() {
        let mut order = Entity::new("order");
        order.add_error("number", ErrorMessage::new("core.validate.field.error.missing"));

        let error = order.get_error("number").expect("error");
        assert_eq!(error.message(), "core.validate.field.error.missing");
        assert!(order.get_error("state").is_none());
    }
}
