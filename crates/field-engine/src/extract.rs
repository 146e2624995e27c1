//! Paragraph and line streams to classified fields

use crate::annotations::notes_for;
use crate::classify::FieldClassifier;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::index::LocatorIndex;
use crate::normalize::normalize_key;
use crate::patterns::parse_locator_line;
use crate::style::StyleSignalDetector;
use shared_docs::{PlainDocument, RichDocument};
use shared_types::Field;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FieldExtractor {
    classifier: FieldClassifier,
    detector: StyleSignalDetector,
    min_label_len: usize,
    note_separator: String,
}

impl FieldExtractor {
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            classifier: FieldClassifier::new(&config.alternative_words)?,
            detector: StyleSignalDetector::new(&config.style_keywords),
            min_label_len: config.min_label_len,
            note_separator: config.note_separator.clone(),
        })
    }

    pub fn min_label_len(&self) -> usize {
        self.min_label_len
    }

    /// Fields of a structured document, in paragraph order.
    ///
    /// Locators come from `locators`, consumed one per matching paragraph.
    pub fn extract_rich(&self, document: &RichDocument, mut locators: LocatorIndex) -> Vec<Field> {
        let mut fields = Vec::new();

        for paragraph in &document.paragraphs {
            let text = paragraph.text.trim();
            if text.is_empty() {
                continue;
            }

            let index = locators.assign(&normalize_key(text));
            let signal = self.detector.detect(paragraph);
            if let Some(signal) = signal {
                debug!("Style signal {:?} on {:?}", signal, text);
            }
            let note = notes_for(paragraph, &document.annotations, &self.note_separator);

            if let Some(field) = self.build(index, text, signal.is_some(), note) {
                fields.push(field);
            }
        }

        if !locators.is_empty() {
            debug!("{} locator(s) left unassigned", locators.remaining());
        }

        fields
    }

    /// Fields of a text-only document: locators are read from the line itself
    pub fn extract_plain(&self, document: &PlainDocument) -> Vec<Field> {
        document
            .lines
            .iter()
            .filter_map(|line| {
                let line = line.trim();
                if line.is_empty() {
                    return None;
                }
                match parse_locator_line(line) {
                    Some((_, "")) => None,
                    Some((locator, label)) => {
                        self.build(Some(locator.to_string()), label, false, String::new())
                    }
                    None => self.build(None, line, false, String::new()),
                }
            })
            .collect()
    }

    fn build(&self, index: Option<String>, text: &str, signal: bool, note: String) -> Option<Field> {
        if !self.keeps(index.as_deref(), text) {
            debug!("Dropping noise paragraph {:?}", text);
            return None;
        }
        let (field_type, _) = self.classifier.classify(text, signal);
        Field::new(index, text, field_type, signal, note)
    }

    /// Noise filter: short unnumbered paragraphs are not fields
    fn keeps(&self, index: Option<&str>, text: &str) -> bool {
        index.map_or(false, |i| !i.is_empty()) || text.chars().count() >= self.min_label_len
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self {
            classifier: FieldClassifier::default(),
            detector: StyleSignalDetector::default(),
            min_label_len: 3,
            note_separator: crate::annotations::NOTE_SEPARATOR.to_string(),
        }
    }
}
