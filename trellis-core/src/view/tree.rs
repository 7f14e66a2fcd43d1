//! View Definition Tree
//!
//! The `ViewDefinition` owns every component of one view in a registry keyed
//! by tree path, and coordinates the two passes that run over it:
//!
//! 1. The initialization pass, a fixed-point loop run once at construction.
//!    Components may reference each other out of declaration order, so each
//!    round attempts to resolve every pending component and defers the ones
//!    whose dependencies are not ready yet. A full round without progress is
//!    a fatal configuration error reporting every unresolved path.
//!
//! 2. The value resolution pass, run once per client interaction. Given the
//!    root entity, the selected entities keyed by path and the set of paths
//!    the client declared changed, it walks the tree top-down and produces a
//!    sparse tree of updated presentation values.
//!
//! # Ownership
//!
//! The registry is the only owner of components. Cross-tree references
//! (`source_component`) are path handles resolved against the registry, not
//! ownership edges; containers hold their children as ordered name-to-path
//! entries. Resolved bindings are written once by the initialization pass
//! and treated as immutable afterwards, which is what makes the per-request
//! pass safe to run without locking.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Result, ViewError};
use crate::schema::path::{parse_source_field_path, resolve_entity_value, walk_definition};
use crate::schema::{DataDefinition, Entity};
use crate::view::node::Component;
use crate::view::ribbon::RibbonActionItem;
use crate::view::translate::Translator;
use crate::view::value::ComponentValue;

/// Result of attempting to resolve one component's bindings.
enum InitOutcome {
    /// A dependency exists but is not initialized yet; retry next round.
    NotReady,

    /// The full resolved state, committed to the component in one step.
    Ready {
        source_component: Option<String>,
        source_field_path: Option<String>,
        data_definition: Option<Arc<DataDefinition>>,
        register_on: Option<String>,
    },
}

/// One view: the component registry plus the passes that run over it.
pub struct ViewDefinition {
    plugin_identifier: String,
    name: String,
    data_definition: Option<Arc<DataDefinition>>,
    translator: Arc<dyn Translator>,

    nodes: IndexMap<String, Component>,
    roots: Vec<String>,
    references: HashMap<String, String>,
}

impl ViewDefinition {
    /// Create an empty view. Root components inherit `data_definition` as
    /// their entity context.
    pub fn new(
        plugin_identifier: impl Into<String>,
        name: impl Into<String>,
        data_definition: Option<Arc<DataDefinition>>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            plugin_identifier: plugin_identifier.into(),
            name: name.into(),
            data_definition,
            translator,
            nodes: IndexMap::new(),
            roots: Vec::new(),
            references: HashMap::new(),
        }
    }

    /// The owning plugin's identifier.
    pub fn plugin_identifier(&self) -> &str {
        &self.plugin_identifier
    }

    /// The view's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The main entity schema of the view, if any.
    pub fn data_definition(&self) -> Option<&Arc<DataDefinition>> {
        self.data_definition.as_ref()
    }

    // ------------------------------------------------------------------
    // Tree construction
    // ------------------------------------------------------------------

    /// Register a component under the given parent container (`None` for a
    /// root). The component's path is fixed here: the parent's path joined
    /// with the component's name by a dot, or just the name for roots.
    pub fn add_component(&mut self, parent: Option<&str>, mut component: Component) -> Result<String> {
        let path = match parent {
            None => component.name().to_string(),
            Some(parent_path) => {
                let parent_node =
                    self.nodes
                        .get(parent_path)
                        .ok_or_else(|| ViewError::MissingParent {
                            path: parent_path.to_string(),
                        })?;
                if !parent_node.kind().is_container() {
                    return Err(ViewError::NotAContainer {
                        path: parent_path.to_string(),
                    });
                }
                format!("{}.{}", parent_path, component.name())
            }
        };

        if self.nodes.contains_key(&path) {
            return Err(ViewError::DuplicatePath { path });
        }

        component.attach(path.clone(), parent.map(str::to_string));
        if let Some(reference) = component.reference_name() {
            self.references.insert(reference.to_string(), path.clone());
        }

        match parent {
            Some(parent_path) => {
                self.nodes
                    .get_mut(parent_path)
                    .expect("parent checked above")
                    .add_child(component.name().to_string(), path.clone());
            }
            None => self.roots.push(path.clone()),
        }

        self.nodes.insert(path.clone(), component);
        Ok(path)
    }

    /// Look up a component by its tree path.
    pub fn component_by_path(&self, path: &str) -> Option<&Component> {
        self.nodes.get(path)
    }

    /// Look up a component by its registered reference name.
    pub fn component_by_reference(&self, reference: &str) -> Option<&Component> {
        self.references
            .get(reference)
            .and_then(|path| self.nodes.get(path))
    }

    /// Paths of the root components, in declaration order.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    fn node(&self, path: &str) -> &Component {
        self.nodes.get(path).expect("registered component path")
    }

    // ------------------------------------------------------------------
    // Initialization pass
    // ------------------------------------------------------------------

    /// Run the fixed-point initialization: resolve every component's source
    /// reference and effective schema, retrying components whose
    /// dependencies are not ready, until all are initialized or a full
    /// round makes no progress.
    ///
    /// Successful resolution registers the component as a listener on its
    /// source; the listener sets are frozen into the components when the
    /// fixed point is reached. Calling this again after success is a no-op.
    pub fn initialize(&mut self) -> Result<()> {
        let mut listener_edges: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut round = 0usize;

        loop {
            let pending: Vec<String> = self
                .nodes
                .values()
                .filter(|node| !node.is_initialized())
                .map(|node| node.path().to_string())
                .collect();
            if pending.is_empty() {
                break;
            }

            round += 1;
            let mut progress = false;

            for path in &pending {
                match self.resolve_bindings(path)? {
                    InitOutcome::NotReady => {
                        trace!(path = path.as_str(), "component not ready; deferring");
                    }
                    InitOutcome::Ready {
                        source_component,
                        source_field_path,
                        data_definition,
                        register_on,
                    } => {
                        if let Some(source) = &register_on {
                            listener_edges
                                .entry(source.clone())
                                .or_default()
                                .insert(path.clone());
                        }
                        self.nodes
                            .get_mut(path)
                            .expect("pending path is registered")
                            .commit_bindings(source_component, source_field_path, data_definition);
                        trace!(path = path.as_str(), "component initialized");
                        progress = true;
                    }
                }
            }

            if !progress {
                debug!(round, unresolved = pending.len(), "initialization deadlocked");
                return Err(ViewError::InitializationDeadlock { paths: pending });
            }
            debug!(round, "initialization round complete");
        }

        for (source, listeners) in listener_edges {
            if let Some(node) = self.nodes.get_mut(&source) {
                node.install_listeners(listeners);
            }
        }
        Ok(())
    }

    /// Compute one component's resolved state without publishing anything.
    /// The caller commits the outcome, so a `NotReady` return leaves no
    /// partially-resolved state behind.
    fn resolve_bindings(&self, path: &str) -> Result<InitOutcome> {
        let node = self.node(path);

        let (source_component, mut definition, source_field_path, register_on) =
            if let Some(expr) = node.source_field_path().filter(|expr| expr.starts_with('#')) {
                let (source_path, remainder) =
                    parse_source_field_path(expr).ok_or_else(|| ViewError::InvalidSourcePath {
                        expr: expr.to_string(),
                    })?;

                let Some(source) = self.nodes.get(source_path) else {
                    return Ok(InitOutcome::NotReady);
                };
                if !source.is_initialized() {
                    return Ok(InitOutcome::NotReady);
                }

                (
                    Some(source_path.to_string()),
                    source.data_definition().cloned(),
                    remainder.map(str::to_string),
                    Some(source_path.to_string()),
                )
            } else if let Some(parent_path) = node.parent() {
                let parent = self.node(parent_path);
                if !parent.is_initialized() {
                    return Ok(InitOutcome::NotReady);
                }
                (
                    None,
                    parent.data_definition().cloned(),
                    node.source_field_path().map(str::to_string),
                    None,
                )
            } else {
                (
                    None,
                    self.data_definition.clone(),
                    node.source_field_path().map(str::to_string),
                    None,
                )
            };

        if let Some(base) = definition.clone() {
            if let Some(source_path) = &source_field_path {
                definition = Some(walk_definition(&base, source_path));
            } else if let Some(field_path) = node.field_path() {
                definition = Some(walk_definition(&base, field_path));
            }
        }

        Ok(InitOutcome::Ready {
            source_component,
            source_field_path,
            data_definition: definition,
            register_on,
        })
    }

    // ------------------------------------------------------------------
    // Value resolution pass
    // ------------------------------------------------------------------

    /// Resolve the whole tree for one client interaction.
    ///
    /// `previous` holds the cast client values keyed by root component name;
    /// `paths_to_update` is the set of paths the client declared changed (an
    /// empty set means: update everything). The result is sparse: components
    /// with nothing to report are absent.
    pub fn resolve(
        &self,
        entity: Option<&Entity>,
        selected_entities: &HashMap<String, Entity>,
        previous: &IndexMap<String, ComponentValue>,
        paths_to_update: &BTreeSet<String>,
        locale: &str,
    ) -> Result<IndexMap<String, ComponentValue>> {
        let mut values = IndexMap::new();
        for root in &self.roots {
            let node = self.node(root);
            if let Some(value) = self.resolve_component(
                root,
                entity,
                selected_entities,
                previous.get(node.name()),
                paths_to_update,
                locale,
            )? {
                values.insert(node.name().to_string(), value);
            }
        }
        Ok(values)
    }

    fn resolve_component(
        &self,
        path: &str,
        entity: Option<&Entity>,
        selected_entities: &HashMap<String, Entity>,
        previous: Option<&ComponentValue>,
        paths_to_update: &BTreeSet<String>,
        locale: &str,
    ) -> Result<Option<ComponentValue>> {
        let node = self.node(path);

        // Step 1: the entity context inherited from above.
        let mut parent_entity = entity;
        match entity {
            None => parent_entity = selected_entities.get(path),
            Some(host) if node.kind().is_container() => {
                if let Some(field_path) = node.field_path() {
                    parent_entity = resolve_entity_value(Some(host), field_path)?;
                }
            }
            Some(_) => {}
        }

        // Step 2: the entity this component actually reads.
        let selected_entity = match node.source_component() {
            Some(source_path) => {
                let mut resolved = selected_entities.get(source_path);
                if node.kind().is_container() && resolved.is_some() {
                    if let Some(remainder) = node.source_field_path() {
                        resolved = resolve_entity_value(resolved, remainder)?;
                    }
                }
                resolved
            }
            None => parent_entity,
        };

        // Step 3: skip rule. An uncovered component carries its previous
        // value forward (flags refreshed), or reports nothing at all.
        if !self.covered(node, paths_to_update) && !node.kind().always_refreshes() {
            trace!(path, "not covered by pathsToUpdate; keeping previous value");
            return Ok(previous.map(|prev| {
                let mut value = prev.clone();
                node.overlay_visible_enabled(selected_entity, &mut value);
                value
            }));
        }

        // Step 4: ignore-mode short-circuit.
        if let Some(prev) = previous {
            if prev.is_ignore_mode()
                && !node.kind().is_container()
                && !node.kind().recomputes_under_ignore()
            {
                trace!(path, "previous value in ignore mode; nothing to report");
                return Ok(None);
            }
        }

        // Step 5: per-kind computation.
        let mut value = if node.kind().is_container() {
            self.compute_container_value(
                node,
                selected_entity,
                selected_entities,
                previous,
                paths_to_update,
                locale,
            )?
        } else {
            node.compute_field_value(selected_entity, self.translator.as_ref(), locale)
        };

        // Steps 6-7: overlay and return.
        node.overlay_visible_enabled(selected_entity, &mut value);
        trace!(path, "component value resolved");
        Ok(Some(value))
    }

    /// Resolve a container's children into a sparse nested value tree. The
    /// container's own entity context (already re-pointed through its field
    /// path in step 1) becomes each child's inherited context.
    fn compute_container_value(
        &self,
        node: &Component,
        selected_entity: Option<&Entity>,
        selected_entities: &HashMap<String, Entity>,
        previous: Option<&ComponentValue>,
        paths_to_update: &BTreeSet<String>,
        locale: &str,
    ) -> Result<ComponentValue> {
        let mut value = ComponentValue::new();
        for (child_name, child_path) in node.children() {
            let child_previous = previous.and_then(|prev| prev.component(child_name));
            if let Some(child_value) = self.resolve_component(
                child_path,
                selected_entity,
                selected_entities,
                child_previous,
                paths_to_update,
                locale,
            )? {
                value.add_component(child_name.clone(), child_value);
            }
        }
        Ok(value)
    }

    /// The coverage predicate: a component is covered when `paths_to_update`
    /// is empty, when some entry is a prefix of its path, or — containers
    /// only — when its path is a prefix of some entry (a change deep inside
    /// a container always recomputes the container itself).
    fn covered(&self, node: &Component, paths_to_update: &BTreeSet<String>) -> bool {
        if paths_to_update.is_empty() {
            return true;
        }
        paths_to_update.iter().any(|entry| {
            node.path().starts_with(entry.as_str())
                || (node.kind().is_container() && entry.starts_with(node.path()))
        })
    }

    // ------------------------------------------------------------------
    // Incoming value cast
    // ------------------------------------------------------------------

    /// Decode the client's submitted state (keyed by root component name)
    /// into previous values for the next resolution pass.
    pub fn cast_values(
        &self,
        selected_entities: &HashMap<String, Entity>,
        raw: &Value,
    ) -> IndexMap<String, ComponentValue> {
        let mut values = IndexMap::new();
        for root in &self.roots {
            let node = self.node(root);
            if let Some(value) = self.cast_component(root, selected_entities, raw.get(node.name())) {
                values.insert(node.name().to_string(), value);
            }
        }
        values
    }

    fn cast_component(
        &self,
        path: &str,
        selected_entities: &HashMap<String, Entity>,
        raw: Option<&Value>,
    ) -> Option<ComponentValue> {
        let node = self.node(path);
        let mut value = node.cast_value(selected_entities, raw)?;

        if node.kind().is_container() {
            let raw_children = raw.and_then(|raw| raw.get("components"));
            for (child_name, child_path) in node.children() {
                let child_raw = raw_children.and_then(|children| children.get(child_name));
                if let Some(child_value) = self.cast_component(child_path, selected_entities, child_raw)
                {
                    value.add_component(child_name.clone(), child_value);
                }
            }
        }
        Some(value)
    }

    // ------------------------------------------------------------------
    // Translations
    // ------------------------------------------------------------------

    /// Collect the display texts for every component (labels, descriptions,
    /// ribbon entries) into `translations`. Candidate keys are the
    /// component-specific key first, then the generic core key.
    pub fn update_translations(&self, translations: &mut BTreeMap<String, String>, locale: &str) {
        for root in &self.roots {
            self.add_component_translations(root, translations, locale);
        }
    }

    fn add_component_translations(
        &self,
        path: &str,
        translations: &mut BTreeMap<String, String>,
        locale: &str,
    ) {
        let node = self.node(path);
        let base = format!("{}.{}.{}", self.plugin_identifier, self.name, node.path());

        let label_key = format!("{base}.label");
        let label = self.translator.translate(
            &[label_key.clone(), format!("core.{}.label", node.kind().as_str())],
            locale,
        );
        translations.insert(label_key, label);

        if node.has_description() {
            let description_key = format!("{base}.description");
            let description = self.translator.translate(
                &[description_key.clone(), "core.default.description".to_string()],
                locale,
            );
            translations.insert(description_key, description);
        }

        if let Some(ribbon) = node.ribbon() {
            for group in ribbon.groups() {
                let group_key = format!("{base}.ribbon.{}", group.name());
                let text = self.translator.translate(
                    &[group_key.clone(), format!("core.ribbon.{}", group.name())],
                    locale,
                );
                translations.insert(group_key, text);

                for item in group.items() {
                    self.add_ribbon_item_translations(translations, locale, &base, group.name(), item);
                }
            }
        }

        for child_path in node.children().values() {
            self.add_component_translations(child_path, translations, locale);
        }
    }

    fn add_ribbon_item_translations(
        &self,
        translations: &mut BTreeMap<String, String>,
        locale: &str,
        base: &str,
        ribbon_path: &str,
        item: &RibbonActionItem,
    ) {
        let item_key = format!("{base}.ribbon.{ribbon_path}.{}", item.name());
        let text = self.translator.translate(
            &[
                item_key.clone(),
                format!("core.ribbon.{ribbon_path}.{}", item.name()),
            ],
            locale,
        );
        translations.insert(item_key, text);

        for nested in item.items() {
            self.add_ribbon_item_translations(
                translations,
                locale,
                base,
                &format!("{ribbon_path}.{}", item.name()),
                nested,
            );
        }
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Human-readable dump of the whole tree: one line per component with
    /// path, bindings, listener set and effective schema name.
    pub fn print(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.print_component(root, 0, &mut out);
        }
        out
    }

    fn print_component(&self, path: &str, indent: usize, out: &mut String) {
        let node = self.node(path);
        out.push_str(&node.print_line(indent));
        out.push('\n');
        for child_path in node.children().values() {
            self.print_component(child_path, indent + 1, out);
        }
    }
}
