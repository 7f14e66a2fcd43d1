//! Computed Presentation Values
//!
//! A `ComponentValue` is the request-scoped output of one component: the
//! tri-state enabled/visible flags, the update mode negotiated with the
//! client, an optional scalar payload, an optional (translated) validation
//! error and, for containers, the sparse tree of child values.
//!
//! Values are created fresh on every resolution pass and never persisted.
//! The wire mapping is the client JSON contract: unset flags are omitted so
//! the client can distinguish "unchanged" from "explicitly false".

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// How the client wants this value treated on the next pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Recompute and overwrite as usual.
    #[default]
    Update,

    /// Leave the client-held value alone.
    Ignore,
}

impl UpdateMode {
    /// Decode the wire literal. Only `"ignore"` maps to ignore mode; any
    /// other string, or absence, maps to update mode.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("ignore") => UpdateMode::Ignore,
            _ => UpdateMode::Update,
        }
    }
}

/// The computed presentation state of one component for one request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComponentValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,

    #[serde(rename = "updateMode")]
    update_mode: UpdateMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    components: IndexMap<String, ComponentValue>,
}

impl ComponentValue {
    /// Create an empty value: both flags unset, update mode, no payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value carrying a scalar payload.
    pub fn scalar(value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// The tri-state enabled flag.
    pub fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Set or clear the enabled flag.
    pub fn set_enabled(&mut self, enabled: Option<bool>) {
        self.enabled = enabled;
    }

    /// The tri-state visible flag.
    pub fn visible(&self) -> Option<bool> {
        self.visible
    }

    /// Set or clear the visible flag.
    pub fn set_visible(&mut self, visible: Option<bool>) {
        self.visible = visible;
    }

    /// The negotiated update mode.
    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    /// Set the update mode.
    pub fn set_update_mode(&mut self, mode: UpdateMode) {
        self.update_mode = mode;
    }

    /// Whether the client asked for this value to be left alone.
    pub fn is_ignore_mode(&self) -> bool {
        self.update_mode == UpdateMode::Ignore
    }

    /// The scalar payload, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Set the scalar payload.
    pub fn set_value(&mut self, value: Value) {
        self.value = Some(value);
    }

    /// The translated validation error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Attach a translated validation error.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Insert a child value under the given component name.
    pub fn add_component(&mut self, name: impl Into<String>, value: ComponentValue) {
        self.components.insert(name.into(), value);
    }

    /// The child value for the given component name.
    pub fn component(&self, name: &str) -> Option<&ComponentValue> {
        self.components.get(name)
    }

    /// Mutable access to the child value for the given component name.
    pub fn component_mut(&mut self, name: &str) -> Option<&mut ComponentValue> {
        self.components.get_mut(name)
    }

    /// The full child map, in component declaration order.
    pub fn components(&self) -> &IndexMap<String, ComponentValue> {
        &self.components
    }

    /// Walk a dotted component path down the value tree.
    pub fn lookup(&self, path: &str) -> Option<&ComponentValue> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.component(segment)?;
        }
        Some(current)
    }

    /// Walk a dotted component path down the value tree, mutably.
    pub fn lookup_mut(&mut self, path: &str) -> Option<&mut ComponentValue> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.component_mut(segment)?;
        }
        Some(current)
    }
}
