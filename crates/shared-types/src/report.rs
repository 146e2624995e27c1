//! Tabular report records emitted to the report writers

use crate::types::{Field, Language};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locator reported when a field has no counterpart in the compared document
pub const NOT_FOUND_LOCATOR: &str = "X";

/// Outcome of looking a primary field up in the compared document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    pub present: bool,
    /// Secondary locator, empty when the match had none, `"X"` when absent
    pub locator: String,
}

impl CrossReference {
    pub fn found(locator: Option<&str>) -> Self {
        Self {
            present: true,
            locator: locator.unwrap_or("").to_string(),
        }
    }

    pub fn missing() -> Self {
        Self {
            present: false,
            locator: NOT_FOUND_LOCATOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub field: Field,
    pub cross_reference: Option<CrossReference>,
}

impl ReportRow {
    /// Render the row's cells in header order
    pub fn cells(&self, language: Language) -> Vec<String> {
        let mut cells = vec![
            self.field.index_or_empty().to_string(),
            self.field.text().to_string(),
            self.field.field_type().render(language),
            self.field.obligation().label(language).to_string(),
            self.field.note().to_string(),
        ];

        if let Some(xref) = &self.cross_reference {
            cells.push(xref.locator.clone());
            let presence = if xref.present {
                language.yes()
            } else {
                language.no()
            };
            cells.push(presence.to_string());
        }

        cells
    }
}

/// Field mapping of one document, optionally compared against a second one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub primary: String,
    pub secondary: Option<String>,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Column names, parameterized by the document names
    pub fn headers(&self) -> Vec<String> {
        let p = &self.primary;
        let mut headers = match self.language {
            Language::Portuguese => vec![
                format!("ID ({})", p),
                format!("Rótulo ({})", p),
                "Tipo de Campo".to_string(),
                "Classificação".to_string(),
                "Nota Explicativa".to_string(),
            ],
            Language::English => vec![
                format!("ID ({})", p),
                format!("Label ({})", p),
                "Field Type".to_string(),
                "Classification".to_string(),
                "Explanatory Note".to_string(),
            ],
        };

        if let Some(s) = &self.secondary {
            headers.push(format!("ID ({})", s));
            headers.push(match self.language {
                Language::Portuguese => format!("Presente em {}?", s),
                Language::English => format!("Present in {}?", s),
            });
        }

        headers
    }

    /// All rows rendered as cells in header order
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells(self.language)).collect()
    }

    pub fn is_comparison(&self) -> bool {
        self.secondary.is_some()
    }
}
