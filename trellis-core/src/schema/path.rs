//! Field Path Resolution
//!
//! Pure functions that walk a dotted field path (`"a.b.c"`) over either a
//! data definition or an entity instance. No state lives here; every
//! component in the view tree calls through these.
//!
//! Two walking disciplines exist and must not be mixed up:
//!
//! - Data walks (`resolve_field_value`, `resolve_field_error`) are lenient:
//!   a missing field or a scalar met before the path is exhausted simply
//!   yields `None`. An absent value is the normal "nothing here" case.
//!
//! - Schema walks (`resolve_schema_field`) are strict: a missing field is a
//!   fatal misconfiguration, because a binding declaration that does not
//!   match the schema can never serve a view.

use smallvec::SmallVec;

use crate::error::{Result, ViewError};
use crate::schema::{DataDefinition, Entity, ErrorMessage, FieldDefinition, FieldValue};
use std::sync::Arc;

/// Segment buffer sized for the common shallow paths.
type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Walk `path` through nested entities and return the terminal value.
///
/// Returns `None` when the entity is absent, the path is empty, a segment is
/// missing, or a non-entity value is met before the path is exhausted.
pub fn resolve_field_value<'a>(entity: Option<&'a Entity>, path: &str) -> Option<&'a FieldValue> {
    let entity = entity?;
    if path.is_empty() {
        return None;
    }

    let mut current: Option<&FieldValue> = None;
    for segment in path.split('.') {
        let host = match current {
            None => entity,
            Some(FieldValue::Entity(nested)) => nested,
            Some(_) => return None,
        };
        current = host.get_field(segment);
        current?;
    }
    current
}

/// Walk all but the last segment of `path`, then return the validation error
/// attached to the terminal field name on the entity reached.
pub fn resolve_field_error<'a>(entity: Option<&'a Entity>, path: &str) -> Option<&'a ErrorMessage> {
    let entity = entity?;
    if path.is_empty() {
        return None;
    }

    let segments: Segments = path.split('.').collect();
    let (last, prefix) = segments.split_last()?;

    let mut host = entity;
    for segment in prefix {
        host = host.get_field(segment)?.as_entity()?;
    }
    host.get_error(last)
}

/// As [`resolve_field_value`], but the terminal value must be an entity.
///
/// A scalar at the terminal position signals a declaration/schema mismatch
/// and is a hard failure, not a recoverable `None`.
pub fn resolve_entity_value<'a>(entity: Option<&'a Entity>, path: &str) -> Result<Option<&'a Entity>> {
    match resolve_field_value(entity, path) {
        None => Ok(None),
        Some(FieldValue::Entity(nested)) => Ok(Some(nested)),
        Some(_) => Err(ViewError::TypeMismatch {
            path: path.to_string(),
        }),
    }
}

/// Walk `path` through the *schema*, following belongs-to/has-many hops, and
/// return the terminal field definition.
///
/// Any missing segment is a fatal `FieldNotFound`; a scalar segment in a
/// non-terminal position is a fatal `TypeMismatch`.
pub fn resolve_schema_field<'a>(
    definition: &'a DataDefinition,
    path: &str,
) -> Result<&'a FieldDefinition> {
    let segments: Segments = path.split('.').collect();
    let (last, prefix) = segments.split_last().ok_or_else(|| ViewError::FieldNotFound {
        field: String::new(),
        definition: definition.name().to_string(),
    })?;

    let mut current = definition;
    for segment in prefix {
        let field = current
            .get_field(segment)
            .ok_or_else(|| ViewError::FieldNotFound {
                field: segment.to_string(),
                definition: current.name().to_string(),
            })?;
        current = field
            .related_definition()
            .ok_or_else(|| ViewError::TypeMismatch {
                path: path.to_string(),
            })?;
    }

    current.get_field(last).ok_or_else(|| ViewError::FieldNotFound {
        field: last.to_string(),
        definition: current.name().to_string(),
    })
}

/// The data definition reached after following the relation hops of `path`.
///
/// Lenient by design: a missing segment stops the walk and a scalar segment
/// leaves the definition unchanged. This is the effective-schema computation
/// used when a component is initialized.
pub fn walk_definition(definition: &Arc<DataDefinition>, path: &str) -> Arc<DataDefinition> {
    let mut current = Arc::clone(definition);
    for segment in path.split('.') {
        let next = current
            .get_field(segment)
            .map(|field| field.related_definition().cloned());
        match next {
            // Missing field: stop where we are.
            None => break,
            // Scalar field: definition unchanged, keep walking.
            Some(None) => {}
            Some(Some(target)) => current = target,
        }
    }
    current
}

/// Decompose a `#{nodePath}` or `#{nodePath}.remainder` cross-reference.
///
/// The split is purely lexical on the `}` delimiter. Returns `None` when the
/// expression does not have the `#{...}` shape.
pub fn parse_source_field_path(expr: &str) -> Option<(&str, Option<&str>)> {
    let body = expr.strip_prefix("#{")?;
    let (source, rest) = body.split_once('}')?;
    if rest.is_empty() {
        Some((source, None))
    } else {
        Some((source, Some(rest.strip_prefix('.').unwrap_or(rest))))
    }
}
