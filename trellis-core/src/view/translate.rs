//! Translation Collaborator
//!
//! The engine never stores display text; it asks a `Translator` for it.
//! Every lookup hands over an ordered candidate chain (the component-specific
//! key first, then a generic core key) and the first match wins.

use std::collections::HashMap;

/// Message catalog lookup, first-match-wins over a fallback chain.
pub trait Translator: Send + Sync {
    /// Translate the first candidate key that the catalog knows for the
    /// given locale.
    fn translate(&self, candidates: &[String], locale: &str) -> String;
}

/// In-memory catalog: locale -> message key -> text.
///
/// Unmatched lookups echo the last candidate key back, so a missing
/// translation is visible in the UI instead of silently blank.
#[derive(Debug, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one message.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.messages
            .entry(locale.into())
            .or_default()
            .insert(key.into(), text.into());
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, candidates: &[String], locale: &str) -> String {
        if let Some(messages) = self.messages.get(locale) {
            for candidate in candidates {
                if let Some(text) = messages.get(candidate) {
                    return text.clone();
                }
            }
        }
        candidates.last().cloned().unwrap_or_default()
    }
}
