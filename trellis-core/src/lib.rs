//! Trellis Core
//!
//! This crate provides the core view-component resolution engine for the
//! Trellis declarative UI server. It implements:
//!
//! - Entity schemas and runtime entity values (`schema`)
//! - The view component tree with lazy fixed-point initialization (`view`)
//! - Path-based value resolution with partial recomputation
//! - Static options, ribbon menus and translation key aggregation
//!
//! The crate is transport-agnostic: it turns entities plus client state into
//! presentation value trees and leaves rendering and persistence to callers.
//!
//! # Architecture
//!
//! The crate is organized into two main modules:
//!
//! - `schema`: entity schemas (`DataDefinition`), runtime entities and the
//!   dotted-path walkers shared by every pass
//! - `view`: the component registry (`ViewDefinition`), per-node state
//!   (`Component`), and the computed per-request output (`ComponentValue`)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trellis_core::schema::DataDefinition;
//! use trellis_core::view::{Component, MessageCatalog, NodeKind, ViewDefinition};
//!
//! let schema = Arc::new(DataDefinition::new("order"));
//! let mut view = ViewDefinition::new(
//!     "products",
//!     "orderView",
//!     Some(schema),
//!     Arc::new(MessageCatalog::new()),
//! );
//!
//! view.add_component(None, Component::new("window", NodeKind::Form))?;
//! view.add_component(Some("window"), Component::new("grid", NodeKind::Grid))?;
//! view.initialize()?;
//!
//! // Per request: resolve the tree against the current entities.
//! let values = view.resolve(None, &selected, &previous, &paths_to_update, "en")?;
//! ```

pub mod error;
pub mod schema;
pub mod view;

pub use error::{Result, ViewError};
