//! Property-based tests for field-engine
//!
//! Exercises the normalizer, classifier, extractor and locator index with
//! generated labels using proptest.

use field_engine::{normalize_key, FieldClassifier, FieldExtractor, LocatorIndex};
use proptest::prelude::*;
use shared_docs::{ParagraphNode, PlainDocument, RichDocument};
use shared_types::{FieldLabel, Obligation};

// ============================================================
// Strategies
// ============================================================

/// Label-like text: letters, accents, digits, punctuation and placeholders
fn label_text() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ú0-9 :;,.()\\[\\]<>_-]{0,40}"
}

/// A form line, with or without a leading locator
fn form_line() -> impl Strategy<Value = String> {
    prop_oneof![
        label_text(),
        ("[1-9](\\.[1-9]){0,2}", label_text()).prop_map(|(loc, label)| format!("{} {}", loc, label)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Normalizer
    // ============================================================

    #[test]
    fn normalize_is_idempotent(text in label_text()) {
        let once = normalize_key(&text);
        prop_assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn normalize_ignores_case_and_punctuation(text in "[A-Za-z ]{1,30}") {
        let noisy = format!("  {}: ", text.to_uppercase());
        prop_assert_eq!(normalize_key(&noisy), normalize_key(&text));
    }

    // ============================================================
    // Classifier
    // ============================================================

    #[test]
    fn classify_is_deterministic(text in label_text(), signal in any::<bool>()) {
        let classifier = FieldClassifier::default();
        prop_assert_eq!(classifier.classify(&text, signal), classifier.classify(&text, signal));
    }

    #[test]
    fn optional_iff_choice(text in label_text(), signal in any::<bool>()) {
        let (field_type, obligation) = FieldClassifier::default().classify(&text, signal);
        prop_assert_eq!(
            obligation == Obligation::Optional,
            field_type.contains(FieldLabel::Choice)
        );
    }

    // ============================================================
    // Extractor
    // ============================================================

    #[test]
    fn plain_fields_pass_noise_filter(lines in prop::collection::vec(form_line(), 0..20)) {
        let extractor = FieldExtractor::default();
        let fields = extractor.extract_plain(&PlainDocument { lines });

        for field in &fields {
            prop_assert!(!field.text().is_empty());
            prop_assert!(
                field.index().is_some() || field.text().chars().count() >= extractor.min_label_len()
            );
            prop_assert_eq!(
                field.obligation() == Obligation::Optional,
                field.field_type().contains(FieldLabel::Choice)
            );
        }
    }

    #[test]
    fn rich_fields_pass_noise_filter(texts in prop::collection::vec(label_text(), 0..20)) {
        let extractor = FieldExtractor::default();
        let document = RichDocument {
            paragraphs: texts.iter().map(ParagraphNode::plain).collect(),
            ..RichDocument::default()
        };

        for field in extractor.extract_rich(&document, LocatorIndex::empty()) {
            prop_assert!(field.index().is_none());
            prop_assert!(field.text().chars().count() >= extractor.min_label_len());
        }
    }

    // ============================================================
    // Locator index
    // ============================================================

    #[test]
    fn duplicate_labels_take_locators_in_order(
        label in "[A-Za-z]{3,20}",
        count in 1usize..6
    ) {
        let flat: Vec<String> = (1..=count).map(|i| format!("{}.1 {}", i, label)).collect();
        let mut index = LocatorIndex::from_lines(flat.iter().map(String::as_str));
        let key = normalize_key(&label);

        for i in 1..=count {
            prop_assert_eq!(index.assign(&key), Some(format!("{}.1", i)));
        }
        prop_assert_eq!(index.assign(&key), None);
        prop_assert!(index.is_empty());
    }
}
