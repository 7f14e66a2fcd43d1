//! Entity Schema Layer
//!
//! This module describes business entities and navigates them.
//!
//! # Concepts
//!
//! ## Data definitions
//!
//! A `DataDefinition` is a named set of fields. Each field is a scalar, a
//! reference to one other entity (belongs-to) or a reference to many
//! (has-many). Definitions are shared through `Arc` so relation targets can
//! point at each other without copying.
//!
//! ## Entities
//!
//! An `Entity` is one instance of a definition: an optional identity plus a
//! map of field values. Nested entities hang off belongs-to and has-many
//! fields, forming the entity graph that dotted field paths traverse.
//!
//! ## Path resolution
//!
//! The `path` submodule holds the pure functions that walk a dotted field
//! path (`"a.b.c"`) over a definition or over an entity instance. Every
//! component in the view tree reuses these; they carry no state of their own.

mod definition;
mod entity;
pub mod path;

pub use definition::{DataDefinition, FieldDefinition, FieldType};
pub use entity::{Entity, ErrorMessage, FieldValue};
