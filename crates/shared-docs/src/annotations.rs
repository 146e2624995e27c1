//! Comment table of a word-processing document

use crate::docx::{is_w, w_attr};
use std::collections::HashMap;
use tracing::warn;

/// Comment id -> comment text, read-only once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    comments: HashMap<String, String>,
}

impl AnnotationStore {
    /// Parse a `comments.xml` part.
    ///
    /// Comments without an id or without text are skipped. Unparsable XML
    /// yields an empty store.
    pub fn from_comments_xml(xml: &str) -> Self {
        let doc = match roxmltree::Document::parse(xml) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Ignoring unparsable comments part: {}", e);
                return Self::default();
            }
        };

        let comments = doc
            .descendants()
            .filter(|n| is_w(*n, "comment"))
            .filter_map(|comment| {
                let id = w_attr(comment, "id").filter(|id| !id.is_empty())?;
                let text: String = comment
                    .descendants()
                    .filter(|n| is_w(*n, "t"))
                    .filter_map(|t| t.text())
                    .collect();
                if text.is_empty() {
                    return None;
                }
                Some((id, text))
            })
            .collect();

        Self { comments }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.comments.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl FromIterator<(String, String)> for AnnotationStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            comments: iter.into_iter().collect(),
        }
    }
}
