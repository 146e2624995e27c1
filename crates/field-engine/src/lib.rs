//! Form field extraction and cross-referencing
//!
//! A document is read by `shared-docs`, turned into classified [`Field`]s by
//! the [`FieldExtractor`], and optionally compared against a second document
//! by normalized label.

pub mod annotations;
pub mod classify;
pub mod config;
pub mod cross_reference;
pub mod error;
pub mod extract;
pub mod index;
pub mod normalize;
pub mod patterns;
pub mod report;
pub mod style;

pub use classify::FieldClassifier;
pub use config::{EngineConfig, RendererConfig};
pub use cross_reference::CrossReferenceIndex;
pub use error::EngineError;
pub use extract::FieldExtractor;
pub use index::LocatorIndex;
pub use normalize::normalize_key;
pub use report::{build_report, default_output_name, document_name};
pub use style::{StyleSignal, StyleSignalDetector};

use shared_docs::{read_document, Document, FlatRenderer};
use shared_types::{Field, Report};
use std::path::Path;
use tracing::{debug, info, warn};

/// FieldEngine entry point
pub struct FieldEngine {
    config: EngineConfig,
    extractor: FieldExtractor,
}

impl FieldEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let extractor = FieldExtractor::from_config(&config)?;
        Ok(Self { config, extractor })
    }

    /// Fields of an already-read document.
    ///
    /// Structured documents get their locators from `renderer`'s flat
    /// rendering of `path`; without one every locator stays empty.
    pub fn extract_document(
        &self,
        document: &Document,
        path: &Path,
        renderer: &dyn FlatRenderer,
    ) -> Vec<Field> {
        match document {
            Document::Rich(rich) => {
                let locators = match renderer.render(path) {
                    Some(flat) => LocatorIndex::from_flat_text(&flat),
                    None => {
                        warn!("No flat rendering for {}, locators left empty", path.display());
                        LocatorIndex::empty()
                    }
                };
                self.extractor.extract_rich(rich, locators)
            }
            Document::Plain(plain) => self.extractor.extract_plain(plain),
        }
    }

    /// Read `path` and extract its fields
    pub fn extract_file(
        &self,
        path: &Path,
        renderer: &dyn FlatRenderer,
    ) -> Result<Vec<Field>, EngineError> {
        let document = read_document(path, &self.config.read_options())?;
        if document.is_empty() {
            warn!("{} has no paragraphs", path.display());
        } else {
            debug!("{} paragraph(s) read from {}", document.len(), path.display());
        }
        let fields = self.extract_document(&document, path, renderer);
        info!("{} field(s) extracted from {}", fields.len(), path.display());
        Ok(fields)
    }

    /// Map `primary`, optionally cross-referenced against `secondary`.
    ///
    /// An unreadable primary document is an error. An unreadable secondary
    /// document is logged and compared as if it had no fields.
    pub fn map_documents(
        &self,
        primary: &Path,
        secondary: Option<&Path>,
        renderer: &dyn FlatRenderer,
    ) -> Result<Report, EngineError> {
        let primary_fields = self.extract_file(primary, renderer)?;

        let secondary_fields = secondary.map(|path| {
            self.extract_file(path, renderer).unwrap_or_else(|e| {
                warn!("Could not read {}: {}", path.display(), e);
                Vec::new()
            })
        });
        let secondary_name = secondary.map(document_name);

        let compared = secondary_name
            .as_deref()
            .zip(secondary_fields.as_deref());

        Ok(build_report(
            &document_name(primary),
            &primary_fields,
            compared,
            self.config.language,
        ))
    }
}
