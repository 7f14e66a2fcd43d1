//! View Component Engine
//!
//! This module implements the server-side half of a declarative UI: a tree
//! of components bound to the entity graph described by [`crate::schema`],
//! resolved into presentation values on every client interaction.
//!
//! # Concepts
//!
//! ## Components
//!
//! A component is one node of the view tree: a form, a layout region, a
//! grid, an input field. Components are declared with bindings (a field
//! path into their container's entity, or a `#{path}` reference to another
//! component) and resolved once, at startup, by a fixed-point
//! initialization pass that tolerates forward references.
//!
//! ## Values
//!
//! A [`ComponentValue`] is the request-scoped output of one component:
//! enabled/visible flags, an update mode, a payload and, for containers,
//! a sparse tree of child values. The resolution pass recomputes only the
//! components covered by the client's declared change set; everything else
//! carries its previous value forward or stays silent.
//!
//! ## Statics
//!
//! Options, ribbons and translations are per-component static state,
//! computed at initialization and served unchanged afterwards.

mod node;
mod options;
mod ribbon;
mod translate;
mod tree;
mod value;

pub use node::{Component, NodeKind};
pub use options::ComponentOption;
pub use ribbon::{Ribbon, RibbonActionItem, RibbonGroup};
pub use translate::{MessageCatalog, Translator};
pub use tree::ViewDefinition;
pub use value::{ComponentValue, UpdateMode};
