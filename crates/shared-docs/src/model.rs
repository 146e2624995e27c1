//! In-memory document model shared by the readers and the field engine

use crate::annotations::AnnotationStore;
use serde::{Deserialize, Serialize};

/// A document as produced by one of the readers
#[derive(Debug, Clone)]
pub enum Document {
    /// Carries paragraph styling and embedded comments (DOCX)
    Rich(RichDocument),
    /// Text only (ODT, plain text)
    Plain(PlainDocument),
}

impl Document {
    /// Number of paragraphs (rich) or lines (plain)
    pub fn len(&self) -> usize {
        match self {
            Document::Rich(doc) => doc.paragraphs.len(),
            Document::Plain(doc) => doc.lines.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct RichDocument {
    pub paragraphs: Vec<ParagraphNode>,
    pub annotations: AnnotationStore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainDocument {
    pub lines: Vec<String>,
}

impl PlainDocument {
    /// Split `text` into lines, dropping a leading byte-order mark
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

/// One paragraph with the style attributes relevant to optionality detection.
///
/// Attributes are stored as found; nothing is resolved through the style
/// sheet. A missing or malformed attribute is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphNode {
    pub text: String,
    /// Paragraph style id (`w:pStyle`)
    pub style: Option<String>,
    pub runs: Vec<RunNode>,
    /// Ids of the comments anchored in this paragraph, in order
    pub comment_refs: Vec<String>,
}

impl ParagraphNode {
    /// Unstyled paragraph made of a single run
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            runs: vec![RunNode {
                text: text.clone(),
                ..RunNode::default()
            }],
            text,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunNode {
    pub text: String,
    /// Character style id (`w:rStyle`)
    pub style: Option<String>,
    pub color: Option<RunColor>,
    /// Highlight name (`w:highlight`), e.g. "yellow" or "none"
    pub highlight: Option<String>,
    /// Shading fill (`w:shd/@w:fill`), hex or "auto"
    pub shading_fill: Option<String>,
}

/// Explicit run color: a literal value, a theme reference, or both
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunColor {
    pub value: Option<String>,
    pub theme: Option<String>,
}
