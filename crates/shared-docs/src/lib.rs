//! Shared document handling
//!
//! Readers for the supported form containers and the flat text renderer
//! used to recover section locators.
//!
//! - `.docx` is read as a [`RichDocument`]: paragraphs with style attributes
//!   and the embedded comment table.
//! - `.odt` and `.txt` are read as a [`PlainDocument`]: text lines only.

pub mod annotations;
pub mod docx;
pub mod error;
pub mod model;
pub mod odt;
pub mod render;

pub use annotations::AnnotationStore;
pub use error::DocumentError;
pub use model::{Document, ParagraphNode, PlainDocument, RichDocument, RunColor, RunNode};
pub use render::{FlatRenderer, NoopRenderer, RenderError, SofficeRenderer};

use std::io::{Read, Seek};
use std::path::Path;
use tracing::info;
use zip::result::ZipError;
use zip::ZipArchive;

/// Reader settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Also read paragraphs nested in DOCX tables (body paragraphs only by default)
    pub include_table_paragraphs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Odt,
    Text,
}

impl DocumentFormat {
    /// Detect the format from the file extension.
    ///
    /// Office lock files (`~$form.docx`, `~lock.form.odt#`) are rejected.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.starts_with('~') {
            return Err(DocumentError::UnsupportedFormat(name));
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "odt" => Ok(DocumentFormat::Odt),
            "txt" => Ok(DocumentFormat::Text),
            _ => Err(DocumentError::UnsupportedFormat(name)),
        }
    }
}

/// Read a document from disk, choosing the reader by extension
pub fn read_document(path: &Path, options: &ReadOptions) -> Result<Document, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    info!("Reading {:?} document: {}", format, path.display());

    let document = match format {
        DocumentFormat::Docx => Document::Rich(docx::read_docx(path, options)?),
        DocumentFormat::Odt => Document::Plain(odt::read_odt(path)?),
        DocumentFormat::Text => {
            let bytes = std::fs::read(path)?;
            Document::Plain(PlainDocument::from_text(&String::from_utf8_lossy(&bytes)))
        }
    };

    Ok(document)
}

/// Read one part of a zip package as UTF-8. A missing part is `Ok(None)`.
pub(crate) fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>, DocumentError> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(DocumentError::Unreadable(format!("{}: {}", name, e))),
    };

    let mut content = String::new();
    part.read_to_string(&mut content)
        .map_err(|e| DocumentError::Unreadable(format!("{}: {}", name, e)))?;
    Ok(Some(content))
}
