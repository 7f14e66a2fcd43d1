//! Static Component Options
//!
//! Raw options are the declarative key/value pairs carried over from a view
//! definition. During initialization each component promotes them into its
//! computed options map, which is what gets serialized (once, then cached)
//! into the static options blob sent to the client.

use serde_json::Value;

/// One declarative option as written in a view definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOption {
    name: String,
    value: Value,
}

impl ComponentOption {
    /// Create an option.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The option's key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option's value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
