//! Field type and obligation from text content and the style signal

use crate::error::EngineError;
use crate::patterns::{alternative_pattern, DEFAULT_ALTERNATIVE_PATTERN, PLACEHOLDER_PATTERN};
use regex::Regex;
use shared_types::{FieldLabel, FieldType, Obligation};

#[derive(Debug, Clone)]
pub struct FieldClassifier {
    alternative: Option<Regex>,
}

impl FieldClassifier {
    /// Classifier recognizing the given alternative words ("OU", "OR").
    /// An empty list disables the Alternative label.
    pub fn new<S: AsRef<str>>(alternative_words: &[S]) -> Result<Self, EngineError> {
        let words: Vec<&str> = alternative_words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(Self { alternative: None });
        }

        let alternative = alternative_pattern(&words)
            .map_err(|e| EngineError::Config(format!("alternative words: {}", e)))?;
        Ok(Self {
            alternative: Some(alternative),
        })
    }

    /// Classify `text`. Every rule is evaluated independently; labels are
    /// reported in Placeholder, Alternative, Choice order.
    pub fn classify(&self, text: &str, style_signal: bool) -> (FieldType, Obligation) {
        let mut field_type = FieldType::fixed_text();

        if PLACEHOLDER_PATTERN.is_match(text) {
            field_type.insert(FieldLabel::Placeholder);
        }

        if self.alternative.as_ref().map_or(false, |re| re.is_match(text)) {
            field_type.insert(FieldLabel::Alternative);
        }

        let obligation = if style_signal {
            field_type.insert(FieldLabel::Choice);
            Obligation::Optional
        } else {
            Obligation::Mandatory
        };

        (field_type, obligation)
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self {
            alternative: Some(DEFAULT_ALTERNATIVE_PATTERN.clone()),
        }
    }
}
