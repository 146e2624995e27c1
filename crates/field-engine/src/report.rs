//! Report assembly and output naming

use crate::cross_reference::CrossReferenceIndex;
use chrono::Utc;
use shared_types::{Field, Language, Report, ReportRow};
use std::path::Path;

/// Prefix of generated report file names
pub const OUTPUT_PREFIX: &str = "Mapeamento";

/// One row per primary field, in document order. With a compared document
/// every row also says whether (and where) the field appears there.
pub fn build_report(
    primary_name: &str,
    primary: &[Field],
    secondary: Option<(&str, &[Field])>,
    language: Language,
) -> Report {
    let xref = secondary.map(|(_, fields)| CrossReferenceIndex::from_fields(fields));

    let rows = primary
        .iter()
        .map(|field| ReportRow {
            field: field.clone(),
            cross_reference: xref.as_ref().map(|index| index.lookup(field)),
        })
        .collect();

    Report {
        primary: primary_name.to_string(),
        secondary: secondary.map(|(name, _)| name.to_string()),
        language,
        generated_at: Utc::now(),
        rows,
    }
}

/// Display name of a document: its file name without extension
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `Mapeamento_<primary>.<ext>` or `Mapeamento_<primary>_VS_<secondary>.<ext>`
pub fn default_output_name(primary: &str, secondary: Option<&str>, extension: &str) -> String {
    match secondary {
        Some(secondary) => format!("{}_{}_VS_{}.{}", OUTPUT_PREFIX, primary, secondary, extension),
        None => format!("{}_{}.{}", OUTPUT_PREFIX, primary, extension),
    }
}
