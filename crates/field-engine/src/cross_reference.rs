//! Presence of primary fields in a compared document

use crate::normalize::normalize_key;
use shared_types::{CrossReference, Field};
use std::collections::HashMap;
use tracing::debug;

/// Secondary document fields keyed by normalized label: (locator, raw text).
///
/// When several fields share a key the last one wins.
#[derive(Debug, Clone, Default)]
pub struct CrossReferenceIndex {
    by_key: HashMap<String, (Option<String>, String)>,
}

impl CrossReferenceIndex {
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut by_key = HashMap::with_capacity(fields.len());
        for field in fields {
            let key = normalize_key(field.text());
            let entry = (field.index().map(str::to_string), field.text().to_string());
            if let Some((locator, text)) = by_key.insert(key, entry) {
                debug!(
                    "Duplicate label {:?} in compared document replaces {:?} at {:?}",
                    field.text(),
                    text,
                    locator
                );
            }
        }
        Self { by_key }
    }

    /// Locator of the matching secondary field, or `"X"` when there is none
    pub fn lookup(&self, field: &Field) -> CrossReference {
        match self.get(&normalize_key(field.text())) {
            Some((locator, text)) => {
                if text != field.text() {
                    debug!("{:?} matched {:?}", field.text(), text);
                }
                CrossReference::found(locator)
            }
            None => CrossReference::missing(),
        }
    }

    /// Locator (possibly absent) and raw text of the field stored under `key`
    pub fn get(&self, key: &str) -> Option<(Option<&str>, &str)> {
        self.by_key
            .get(key)
            .map(|(locator, text)| (locator.as_deref(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
