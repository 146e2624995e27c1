//! Explanatory notes attached to paragraphs through comments

use shared_docs::{AnnotationStore, ParagraphNode};

/// Separator between several comments on the same paragraph
pub const NOTE_SEPARATOR: &str = " | ";

/// Text of every comment referenced by `paragraph`, in reference order.
/// References to unknown comments are dropped.
pub fn notes_for(paragraph: &ParagraphNode, store: &AnnotationStore, separator: &str) -> String {
    paragraph
        .comment_refs
        .iter()
        .filter_map(|id| store.get(id))
        .collect::<Vec<_>>()
        .join(separator)
}
