//! Ribbon Menus
//!
//! A ribbon is the static menu strip a window component can carry: groups of
//! action items, where combo items nest further items. The engine does not
//! render ribbons; it serializes them into the options blob and aggregates
//! their translation keys.

use serde::Serialize;

/// One actionable ribbon entry. Combo items carry nested entries.
#[derive(Debug, Clone, Serialize)]
pub struct RibbonActionItem {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<RibbonActionItem>,
}

impl RibbonActionItem {
    /// Create a plain action item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: None,
            items: Vec::new(),
        }
    }

    /// Attach the client-side action hook.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Nest an item, turning this into a combo item.
    pub fn with_item(mut self, item: RibbonActionItem) -> Self {
        self.items.push(item);
        self
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nested items, empty for plain actions.
    pub fn items(&self) -> &[RibbonActionItem] {
        &self.items
    }
}

/// A named group of ribbon items.
#[derive(Debug, Clone, Serialize)]
pub struct RibbonGroup {
    name: String,
    items: Vec<RibbonActionItem>,
}

impl RibbonGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add an item, consuming and returning the group for chaining.
    pub fn with_item(mut self, item: RibbonActionItem) -> Self {
        self.items.push(item);
        self
    }

    /// The group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group's items in declaration order.
    pub fn items(&self) -> &[RibbonActionItem] {
        &self.items
    }
}

/// The full ribbon attached to a component.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ribbon {
    groups: Vec<RibbonGroup>,
}

impl Ribbon {
    /// Create an empty ribbon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, consuming and returning the ribbon for chaining.
    pub fn with_group(mut self, group: RibbonGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// The ribbon's groups in declaration order.
    pub fn groups(&self) -> &[RibbonGroup] {
        &self.groups
    }

    /// The JSON shape embedded into a component's options blob.
    pub fn as_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ribbon_serializes_groups_and_nested_items() {
        let ribbon = Ribbon::new().with_group(
            RibbonGroup::new("actions")
                .with_item(RibbonActionItem::new("save").with_action("#{form}.performSave"))
                .with_item(
                    RibbonActionItem::new("saveCombo")
                        .with_item(RibbonActionItem::new("saveAndClose")),
                ),
        );

        let value = ribbon.as_json();
        assert_eq!(
            value,
            json!({
                "groups": [{
                    "name": "actions",
                    "items": [
                        { "name": "save", "action": "#{form}.performSave" },
                        { "name": "saveCombo", "items": [{ "name": "saveAndClose" }] }
                    ]
                }]
            })
        );
    }
}
