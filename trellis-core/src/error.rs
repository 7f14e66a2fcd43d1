//! Error types for the view engine.
//!
//! Two families of failure exist and they are deliberately kept apart:
//!
//! - Misconfiguration (a binding that does not match the schema, a deadlocked
//!   initialization, a malformed cross-reference). These are fatal: a view
//!   whose declarations don't match the data model cannot be served.
//!
//! - Per-request "nothing to report" conditions (a missing selected entity,
//!   a value that needs no update). These are *not* errors; the resolution
//!   pass signals them with `None` and moves on.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Fatal configuration and construction errors.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A mandatory field path names a field the schema does not have.
    #[error("field '{field}' not found in data definition '{definition}'")]
    FieldNotFound { field: String, definition: String },

    /// A field path was expected to reach an entity but reached a scalar.
    #[error("field path '{path}' should resolve to an entity")]
    TypeMismatch { path: String },

    /// A `#{...}` source expression could not be decomposed.
    #[error("malformed source field path expression '{expr}'")]
    InvalidSourcePath { expr: String },

    /// A full initialization pass made no progress. Every path that is still
    /// unresolved is listed so the cyclic or missing reference can be found.
    #[error("view initialization deadlocked; unresolved components: {}", paths.join(", "))]
    InitializationDeadlock { paths: Vec<String> },

    /// Two components would occupy the same tree path.
    #[error("component path '{path}' is already registered")]
    DuplicatePath { path: String },

    /// A child was added under a parent path that is not registered.
    #[error("parent container '{path}' is not registered")]
    MissingParent { path: String },

    /// A child was added under a component that cannot own children.
    #[error("component '{path}' is not a container")]
    NotAContainer { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadlock_error_lists_every_unresolved_path() {
        let err = ViewError::InitializationDeadlock {
            paths: vec!["form.grid".to_string(), "form.lookup".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("form.grid"));
        assert!(message.contains("form.lookup"));
    }

    #[test]
    fn field_not_found_names_field_and_definition() {
        let err = ViewError::FieldNotFound {
            field: "technology".to_string(),
            definition: "order".to_string(),
        };
        assert!(err.to_string().contains("technology"));
        assert!(err.to_string().contains("order"));
    }
}
