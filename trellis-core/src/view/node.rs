//! Component Nodes
//!
//! This module defines the unit of the view tree: one bound component with
//! its identity, binding declarations, resolved schema state and static
//! options. The tree itself (registry, initialization fixed point, value
//! resolution pass) lives in [`crate::view::tree`]; everything here is
//! per-node state and the per-node pieces of the algorithms.
//!
//! # Kinds
//!
//! Components come in a closed set of kinds. All kind-sensitive branching in
//! the shared algorithms goes through the capability predicates on
//! [`NodeKind`] — never through string comparisons or ad hoc type tests.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::schema::path::{resolve_field_error, resolve_field_value};
use crate::schema::{DataDefinition, Entity, FieldValue};
use crate::view::options::ComponentOption;
use crate::view::ribbon::Ribbon;
use crate::view::translate::Translator;
use crate::view::value::{ComponentValue, UpdateMode};

/// The closed set of component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A form bound to one entity; owns child components.
    Form,

    /// A layout region; owns child components.
    BorderLayout,

    /// A layout grid; owns child components.
    GridLayout,

    /// A repeating list of sub-forms; owns child components.
    DynamicList,

    /// A tabular listing of related entities. A leaf: rows are data, not
    /// child components.
    Grid,

    /// A free text input.
    TextField,

    /// A boolean input.
    CheckBox,

    /// An entity selector with server-driven option lookup.
    Lookup,

    /// A combo box whose option list is recomputed from data.
    DynamicComboBox,

    /// A combo box listing entities of the effective schema.
    EntityComboBox,
}

impl NodeKind {
    /// Whether this kind owns child components.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Form | NodeKind::BorderLayout | NodeKind::GridLayout | NodeKind::DynamicList
        )
    }

    /// Whether this kind is exempt from the skip rule: it refreshes on every
    /// pass so its option list never goes stale.
    pub fn always_refreshes(self) -> bool {
        matches!(self, NodeKind::Lookup)
    }

    /// Whether this kind recomputes even when the previous value is in
    /// ignore mode. Both combo kinds need live option lists.
    pub fn recomputes_under_ignore(self) -> bool {
        matches!(self, NodeKind::DynamicComboBox | NodeKind::EntityComboBox)
    }

    /// The kind's name, for diagnostics and translation fallback keys.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Form => "form",
            NodeKind::BorderLayout => "borderLayout",
            NodeKind::GridLayout => "gridLayout",
            NodeKind::DynamicList => "dynamicList",
            NodeKind::Grid => "grid",
            NodeKind::TextField => "textField",
            NodeKind::CheckBox => "checkBox",
            NodeKind::Lookup => "lookup",
            NodeKind::DynamicComboBox => "dynamicComboBox",
            NodeKind::EntityComboBox => "entityComboBox",
        }
    }
}

/// One component of the view tree.
///
/// Identity (`name`, `path`) is fixed when the component is registered with
/// its tree. Binding declarations come from the view definition. Resolved
/// state (`source_component`, `data_definition`, `initialized`) is written
/// exactly once by the initialization pass and read-only afterwards.
#[derive(Debug)]
pub struct Component {
    name: String,
    path: String,
    kind: NodeKind,
    reference_name: Option<String>,

    field_path: Option<String>,
    source_field_path: Option<String>,
    display_field: Option<String>,

    parent: Option<String>,
    children: IndexMap<String, String>,

    source_component: Option<String>,
    data_definition: Option<Arc<DataDefinition>>,
    initialized: bool,

    // Installed (frozen) by the initialization pass; the mutable builder
    // lives inside the pass itself.
    listeners: Arc<std::collections::BTreeSet<String>>,

    default_enabled: bool,
    default_visible: bool,
    has_description: bool,

    raw_options: Vec<ComponentOption>,
    options: IndexMap<String, Value>,
    options_json: OnceLock<String>,
    ribbon: Option<Ribbon>,
}

impl Component {
    /// Create a component of the given kind. The path is assigned when the
    /// component is added to a tree.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind,
            reference_name: None,
            field_path: None,
            source_field_path: None,
            display_field: None,
            parent: None,
            children: IndexMap::new(),
            source_component: None,
            data_definition: None,
            initialized: false,
            listeners: Arc::new(std::collections::BTreeSet::new()),
            default_enabled: true,
            default_visible: true,
            has_description: false,
            raw_options: Vec::new(),
            options: IndexMap::new(),
            options_json: OnceLock::new(),
            ribbon: None,
        }
    }

    /// Bind to a field of the container's entity context.
    pub fn with_field_path(mut self, field_path: impl Into<String>) -> Self {
        self.field_path = Some(field_path.into());
        self
    }

    /// Bind to a plain source path, or a `#{otherNode}` cross-reference.
    pub fn with_source_field_path(mut self, source_field_path: impl Into<String>) -> Self {
        self.source_field_path = Some(source_field_path.into());
        self
    }

    /// Designate the field of the bound entity whose value selector kinds
    /// show as their display text.
    pub fn with_display_field(mut self, display_field: impl Into<String>) -> Self {
        self.display_field = Some(display_field.into());
        self
    }

    /// Register a reference name for `component_by_reference` lookups.
    pub fn with_reference_name(mut self, reference_name: impl Into<String>) -> Self {
        self.reference_name = Some(reference_name.into());
        self
    }

    /// Override the enabled floor.
    pub fn with_default_enabled(mut self, default_enabled: bool) -> Self {
        self.default_enabled = default_enabled;
        self.options
            .insert("defaultEnabled".to_string(), json!(default_enabled));
        self
    }

    /// Override the visible default.
    pub fn with_default_visible(mut self, default_visible: bool) -> Self {
        self.default_visible = default_visible;
        self
    }

    /// Mark the component as carrying a description.
    pub fn with_description(mut self) -> Self {
        self.has_description = true;
        self
    }

    /// Add a raw declarative option.
    pub fn with_raw_option(mut self, option: ComponentOption) -> Self {
        self.raw_options.push(option);
        self
    }

    /// Attach a ribbon.
    pub fn with_ribbon(mut self, ribbon: Ribbon) -> Self {
        self.ribbon = Some(ribbon);
        self
    }

    /// The component's name, unique among its siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The component's globally unique tree path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The component's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The registered reference name, if any.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference_name.as_deref()
    }

    /// The declared field path, if any.
    pub fn field_path(&self) -> Option<&str> {
        self.field_path.as_deref()
    }

    /// The designated display field, if any.
    pub fn display_field(&self) -> Option<&str> {
        self.display_field.as_deref()
    }

    /// The source field path. After initialization a cross-reference has
    /// been consumed and only its remainder (if any) is left here.
    pub fn source_field_path(&self) -> Option<&str> {
        self.source_field_path.as_deref()
    }

    /// The parent container's path, `None` for roots.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The ordered child map: name to path. Empty for non-containers.
    pub fn children(&self) -> &IndexMap<String, String> {
        &self.children
    }

    /// The resolved source component's path, if any. Write-once.
    pub fn source_component(&self) -> Option<&str> {
        self.source_component.as_deref()
    }

    /// The effective schema reached at initialization, if any.
    pub fn data_definition(&self) -> Option<&Arc<DataDefinition>> {
        self.data_definition.as_ref()
    }

    /// Whether the initialization pass has resolved this component.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Paths of the components that declared this one as their source.
    /// Frozen before the first resolution pass.
    pub fn listeners(&self) -> &std::collections::BTreeSet<String> {
        &self.listeners
    }

    /// The configured enabled floor.
    pub fn is_default_enabled(&self) -> bool {
        self.default_enabled
    }

    /// The configured visible default.
    pub fn is_default_visible(&self) -> bool {
        self.default_visible
    }

    /// Whether the component carries a description.
    pub fn has_description(&self) -> bool {
        self.has_description
    }

    /// The attached ribbon, if any.
    pub fn ribbon(&self) -> Option<&Ribbon> {
        self.ribbon.as_ref()
    }

    /// Whether this component reads the main entity directly: no field path,
    /// no source component, no source field path. Derived on every call;
    /// never cached, so it can't go stale against the three fields.
    pub fn is_related_to_main_entity(&self) -> bool {
        self.field_path.is_none()
            && self.source_component.is_none()
            && self.source_field_path.is_none()
    }

    // ------------------------------------------------------------------
    // Tree wiring (crate-internal)
    // ------------------------------------------------------------------

    pub(crate) fn attach(&mut self, path: String, parent: Option<String>) {
        self.path = path;
        self.parent = parent;
    }

    pub(crate) fn add_child(&mut self, name: String, path: String) {
        self.children.insert(name, path);
    }

    /// Commit the resolved state computed by the initialization pass. The
    /// whole binding is published at once so readers never observe a
    /// half-resolved component.
    pub(crate) fn commit_bindings(
        &mut self,
        source_component: Option<String>,
        source_field_path: Option<String>,
        data_definition: Option<Arc<DataDefinition>>,
    ) {
        self.source_component = source_component;
        self.source_field_path = source_field_path;
        self.data_definition = data_definition;
        self.on_initialized();
        self.initialized = true;
    }

    pub(crate) fn install_listeners(&mut self, listeners: std::collections::BTreeSet<String>) {
        self.listeners = Arc::new(listeners);
    }

    /// Kind-specific post-initialization hook: promote raw options into the
    /// computed map, and let selector kinds advertise the entity model their
    /// option list is drawn from.
    fn on_initialized(&mut self) {
        let raw = std::mem::take(&mut self.raw_options);
        for option in &raw {
            self.options
                .insert(option.name().to_string(), option.value().clone());
        }
        self.raw_options = raw;

        if matches!(self.kind, NodeKind::Lookup | NodeKind::EntityComboBox) {
            if let Some(definition) = &self.data_definition {
                self.options
                    .insert("model".to_string(), json!(definition.name()));
            }
        }
        if self.has_description {
            self.options.insert("hasDescription".to_string(), json!(true));
        }
    }

    // ------------------------------------------------------------------
    // Static options
    // ------------------------------------------------------------------

    /// The computed options map, always carrying at least `name` and
    /// `listeners`.
    pub fn options(&self) -> IndexMap<String, Value> {
        let mut options = self.options.clone();
        options.insert("name".to_string(), json!(self.name));
        let listeners: Vec<&String> = self.listeners.iter().collect();
        options.insert("listeners".to_string(), json!(listeners));
        options
    }

    /// The static options blob for the client, computed once and cached.
    pub fn options_as_json(&self) -> &str {
        self.options_json.get_or_init(|| {
            let mut object = serde_json::Map::new();
            for (name, value) in self.options() {
                if !value.is_null() {
                    object.insert(name, value);
                }
            }
            if let Some(ribbon) = &self.ribbon {
                object.insert("ribbon".to_string(), ribbon.as_json());
            }
            Value::Object(object).to_string()
        })
    }

    // ------------------------------------------------------------------
    // Per-kind value computation
    // ------------------------------------------------------------------

    /// The binding used to read data: the field path when present, else the
    /// (post-initialization) source field path remainder.
    fn data_binding(&self) -> Option<&str> {
        self.field_path.as_deref().or(self.source_field_path.as_deref())
    }

    /// Compute the kind-specific payload for a non-container component.
    ///
    /// A missing selected entity or an unresolvable binding leaves the
    /// payload empty; the flags overlay still applies to the returned value.
    pub(crate) fn compute_field_value(
        &self,
        selected_entity: Option<&Entity>,
        translator: &dyn Translator,
        locale: &str,
    ) -> ComponentValue {
        let mut value = ComponentValue::new();
        let Some(binding) = self.data_binding() else {
            return value;
        };

        match resolve_field_value(selected_entity, binding) {
            Some(FieldValue::Scalar(scalar)) => value.set_value(scalar.clone()),
            Some(FieldValue::Entity(entity)) => {
                if let Some(id) = entity.id() {
                    // Lookups carry the display text next to the id so the
                    // client can render the selection without another trip.
                    if self.kind == NodeKind::Lookup {
                        value.set_value(json!({ "id": id, "text": self.display_text(entity) }));
                    } else {
                        value.set_value(json!(id));
                    }
                }
            }
            Some(FieldValue::Collection(rows)) | Some(FieldValue::Tree(rows)) => {
                let ids: Vec<i64> = rows.iter().filter_map(Entity::id).collect();
                value.set_value(json!(ids));
            }
            None => {}
        }

        if let Some(error) = resolve_field_error(selected_entity, binding) {
            value.set_error(translator.translate(&[error.message().to_string()], locale));
        }

        value
    }

    /// The text shown for a selected entity: the designated display field's
    /// scalar when configured and present, else the entity's definition name.
    fn display_text(&self, entity: &Entity) -> String {
        let scalar = self
            .display_field
            .as_deref()
            .and_then(|field| entity.get_field(field))
            .and_then(FieldValue::as_scalar);
        match scalar {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => entity.name().to_string(),
        }
    }

    /// Interpret a client-submitted value for this component's kind, then
    /// apply the shared overlays: `enabled` and `visible` straight from the
    /// raw JSON (absent means unset), and the update-mode literal.
    ///
    /// Child values of containers are cast by the owning tree; this only
    /// covers the component itself.
    pub(crate) fn cast_value(
        &self,
        selected_entities: &HashMap<String, Entity>,
        raw: Option<&Value>,
    ) -> Option<ComponentValue> {
        let raw = raw?;
        if raw.is_null() {
            return None;
        }

        let mut value = self.cast_component_value(selected_entities, raw)?;

        if let Some(enabled) = raw.get("enabled").and_then(Value::as_bool) {
            value.set_enabled(Some(enabled));
        }
        if let Some(visible) = raw.get("visible").and_then(Value::as_bool) {
            value.set_visible(Some(visible));
        }
        value.set_update_mode(UpdateMode::from_wire(
            raw.get("updateMode").and_then(Value::as_str),
        ));

        Some(value)
    }

    /// The kind-specific part of the cast.
    fn cast_component_value(
        &self,
        selected_entities: &HashMap<String, Entity>,
        raw: &Value,
    ) -> Option<ComponentValue> {
        if self.kind.is_container() {
            return Some(ComponentValue::new());
        }

        let mut value = ComponentValue::new();
        match raw.get("value") {
            Some(payload) if !payload.is_null() => value.set_value(payload.clone()),
            _ => {
                // Selection-carrying kinds fall back to the server-held
                // selection when the client sent no payload.
                if matches!(self.kind, NodeKind::Lookup | NodeKind::Grid) {
                    if let Some(id) = selected_entities.get(&self.path).and_then(Entity::id) {
                        value.set_value(json!(id));
                    }
                }
            }
        }
        Some(value)
    }

    // ------------------------------------------------------------------
    // Enabled/visible overlay
    // ------------------------------------------------------------------

    /// Apply the enabled/visible overlay after a non-skipped computation.
    pub(crate) fn overlay_visible_enabled(
        &self,
        selected_entity: Option<&Entity>,
        value: &mut ComponentValue,
    ) {
        if value.enabled().is_none() {
            value.set_enabled(Some(self.default_enabled));
        }
        if value.visible().is_none() {
            value.set_visible(Some(self.default_visible));
        }

        let source_bound = self.source_component.is_some() || self.source_field_path.is_some();
        let unsaved = selected_entity.map_or(true, |entity| entity.id().is_none());
        if source_bound && unsaved {
            value.set_enabled(Some(false));
        } else {
            value.set_enabled(Some(true));
        }

        if !self.default_enabled {
            value.set_enabled(Some(false));
        }
        if !self.default_visible {
            // A component configured invisible also reports itself disabled;
            // the visible flag itself is left as computed.
            value.set_enabled(Some(self.default_visible));
        }
    }

    /// One diagnostic line: path, bindings, listeners, effective schema.
    pub(crate) fn print_line(&self, indent: usize) -> String {
        let definition = self
            .data_definition
            .as_ref()
            .map_or("null", |definition| definition.name());
        let source = self.source_component.as_deref().unwrap_or("null");
        let listeners: Vec<&String> = self.listeners.iter().collect();
        format!(
            "{}{}, [{}, {}, {}], {:?}, {}",
            "    ".repeat(indent),
            self.path,
            self.field_path.as_deref().unwrap_or("null"),
            self.source_field_path.as_deref().unwrap_or("null"),
            source,
            listeners,
            definition,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::translate::MessageCatalog;
    use serde_json::json;

    #[test]
    fn container_kinds_are_exactly_the_layout_kinds() {
        assert!(NodeKind::Form.is_container());
        assert!(NodeKind::BorderLayout.is_container());
        assert!(NodeKind::GridLayout.is_container());
        assert!(NodeKind::DynamicList.is_container());

        assert!(!NodeKind::Grid.is_container());
        assert!(!NodeKind::TextField.is_container());
        assert!(!NodeKind::Lookup.is_container());
    }

    #[test]
    fn capability_flags_single_out_the_selector_kinds() {
        assert!(NodeKind::Lookup.always_refreshes());
        assert!(!NodeKind::DynamicComboBox.always_refreshes());

        assert!(NodeKind::DynamicComboBox.recomputes_under_ignore());
        assert!(NodeKind::EntityComboBox.recomputes_under_ignore());
        assert!(!NodeKind::TextField.recomputes_under_ignore());
        assert!(!NodeKind::Lookup.recomputes_under_ignore());
    }

    #[test]
    fn related_to_main_entity_is_derived_from_bindings() {
        let plain = Component::new("form", NodeKind::Form);
        assert!(plain.is_related_to_main_entity());

        let bound = Component::new("field", NodeKind::TextField).with_field_path("number");
        assert!(!bound.is_related_to_main_entity());

        let sourced =
            Component::new("field", NodeKind::TextField).with_source_field_path("#{grid}");
        assert!(!sourced.is_related_to_main_entity());
    }

    #[test]
    fn options_always_carry_name_and_listeners() {
        let mut component = Component::new("grid", NodeKind::Grid);
        component.install_listeners(["window.form".to_string()].into_iter().collect());

        let options = component.options();
        assert_eq!(options["name"], json!("grid"));
        assert_eq!(options["listeners"], json!(["window.form"]));
    }

    #[test]
    fn raw_options_are_promoted_at_initialization() {
        let mut component = Component::new("grid", NodeKind::Grid)
            .with_raw_option(ComponentOption::new("sortable", json!(true)));
        component.commit_bindings(None, None, None);

        assert_eq!(component.options()["sortable"], json!(true));
    }

    #[test]
    fn selector_kinds_advertise_their_model() {
        let definition = Arc::new(DataDefinition::new("product"));
        let mut component = Component::new("product", NodeKind::Lookup);
        component.commit_bindings(None, None, Some(definition));

        assert_eq!(component.options()["model"], json!("product"));
    }

    #[test]
    fn cast_reads_flags_and_update_mode_from_raw_json() {
        let component = Component::new("field", NodeKind::TextField);
        let raw = json!({ "value": "abc", "enabled": false, "updateMode": "ignore" });

        let value = component.cast_value(&HashMap::new(), Some(&raw)).expect("value");
        assert_eq!(value.value(), Some(&json!("abc")));
        assert_eq!(value.enabled(), Some(false));
        assert_eq!(value.visible(), None);
        assert!(value.is_ignore_mode());
    }

    #[test]
    fn cast_of_null_raw_value_is_none() {
        let component = Component::new("field", NodeKind::TextField);
        assert!(component.cast_value(&HashMap::new(), None).is_none());
        assert!(component
            .cast_value(&HashMap::new(), Some(&Value::Null))
            .is_none());
    }

    #[test]
    fn grid_cast_falls_back_to_server_held_selection() {
        let mut component = Component::new("grid", NodeKind::Grid);
        component.attach("window.grid".to_string(), Some("window".to_string()));

        let mut selected = HashMap::new();
        selected.insert("window.grid".to_string(), Entity::new("order").with_id(11));

        let value = component
            .cast_value(&selected, Some(&json!({})))
            .expect("value");
        assert_eq!(value.value(), Some(&json!(11)));
    }

    #[test]
    fn overlay_forces_disabled_when_source_entity_is_missing() {
        let component = Component::new("details", NodeKind::TextField)
            .with_source_field_path("#{grid}.order");

        let mut value = ComponentValue::new();
        component.overlay_visible_enabled(None, &mut value);
        assert_eq!(value.enabled(), Some(false));
        assert_eq!(value.visible(), Some(true));
    }

    #[test]
    fn overlay_forces_disabled_for_unsaved_source_entity() {
        let component = Component::new("details", NodeKind::TextField)
            .with_source_field_path("#{grid}.order");
        let unsaved = Entity::new("order");

        let mut value = ComponentValue::new();
        component.overlay_visible_enabled(Some(&unsaved), &mut value);
        assert_eq!(value.enabled(), Some(false));
    }

    #[test]
    fn overlay_enables_unbound_components() {
        let component = Component::new("field", NodeKind::TextField);
        let mut value = ComponentValue::new();
        component.overlay_visible_enabled(None, &mut value);
        assert_eq!(value.enabled(), Some(true));
    }

    #[test]
    fn default_enabled_floor_wins_over_data_state() {
        let component = Component::new("field", NodeKind::TextField).with_default_enabled(false);
        let saved = Entity::new("order").with_id(1);

        let mut value = ComponentValue::new();
        component.overlay_visible_enabled(Some(&saved), &mut value);
        assert_eq!(value.enabled(), Some(false));
    }

    #[test]
    fn default_visible_floor_lowers_enabled_not_visible() {
        let component = Component::new("field", NodeKind::TextField).with_default_visible(false);
        let saved = Entity::new("order").with_id(1);

        let mut value = ComponentValue::new();
        value.set_visible(Some(true));
        component.overlay_visible_enabled(Some(&saved), &mut value);

        assert_eq!(value.enabled(), Some(false));
        assert_eq!(value.visible(), Some(true));
    }

    #[test]
    fn field_value_computation_reads_scalars_relations_and_errors() {
        let catalog = MessageCatalog::new();
        let technology = Entity::new("technology").with_id(9);
        let mut order = Entity::new("order")
            .with_id(5)
            .with_field("number", json!("ORD-1"))
            .with_field("technology", technology)
            .with_field(
                "items",
                vec![Entity::new("item").with_id(1), Entity::new("item").with_id(2)],
            );
        order.add_error("number", crate::schema::ErrorMessage::new("core.validate.required"));

        let scalar = Component::new("number", NodeKind::TextField).with_field_path("number");
        let value = scalar.compute_field_value(Some(&order), &catalog, "en");
        assert_eq!(value.value(), Some(&json!("ORD-1")));
        assert_eq!(value.error(), Some("core.validate.required"));

        let relation =
            Component::new("technology", NodeKind::EntityComboBox).with_field_path("technology");
        let value = relation.compute_field_value(Some(&order), &catalog, "en");
        assert_eq!(value.value(), Some(&json!(9)));

        let rows = Component::new("items", NodeKind::Grid).with_field_path("items");
        let value = rows.compute_field_value(Some(&order), &catalog, "en");
        assert_eq!(value.value(), Some(&json!([1, 2])));
    }

    #[test]
    fn lookup_payload_carries_id_and_display_text() {
        let catalog = MessageCatalog::new();
        let technology = Entity::new("technology")
            .with_id(9)
            .with_field("name", json!("Tech-9"));
        let order = Entity::new("order").with_id(5).with_field("technology", technology);

        let lookup = Component::new("technology", NodeKind::Lookup)
            .with_field_path("technology")
            .with_display_field("name");
        let value = lookup.compute_field_value(Some(&order), &catalog, "en");
        assert_eq!(value.value(), Some(&json!({ "id": 9, "text": "Tech-9" })));
    }

    #[test]
    fn lookup_display_text_falls_back_to_the_entity_name() {
        let catalog = MessageCatalog::new();
        let technology = Entity::new("technology").with_id(9);
        let order = Entity::new("order").with_id(5).with_field("technology", technology);

        // No display field configured, and none present on the entity.
        let lookup = Component::new("technology", NodeKind::Lookup).with_field_path("technology");
        let value = lookup.compute_field_value(Some(&order), &catalog, "en");
        assert_eq!(value.value(), Some(&json!({ "id": 9, "text": "technology" })));
    }
}
