//! Matching keys for labels

use crate::patterns::NON_WORD_PATTERN;

/// Lower-case `text` and drop every non-word character.
///
/// Two renderings of the same label that differ only in case, spacing or
/// punctuation collapse to the same key.
pub fn normalize_key(text: &str) -> String {
    NON_WORD_PATTERN
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}
