use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Language used for every user-visible label (field types, classifications,
/// report headers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "pt")]
    Portuguese,
    #[serde(alias = "en")]
    English,
}

impl Language {
    pub fn yes(self) -> &'static str {
        match self {
            Language::Portuguese => "Sim",
            Language::English => "Yes",
        }
    }

    pub fn no(self) -> &'static str {
        match self {
            Language::Portuguese => "Não",
            Language::English => "No",
        }
    }
}

/// One label of a field's type. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldLabel {
    /// Fill-in marker: `[...]`, `XX`, `<...>`, `(...)`
    Placeholder,
    /// Contains a standalone alternative word ("OU")
    Alternative,
    /// Visually marked as optional by the document's styling
    Choice,
}

impl FieldLabel {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (FieldLabel::Placeholder, Language::Portuguese) => "Preenchimento",
            (FieldLabel::Placeholder, Language::English) => "Placeholder",
            (FieldLabel::Alternative, Language::Portuguese) => "Alternativa",
            (FieldLabel::Alternative, Language::English) => "Alternative",
            (FieldLabel::Choice, Language::Portuguese) => "Escolha",
            (FieldLabel::Choice, Language::English) => "Choice",
        }
    }
}

/// Set-valued field type. An empty set is fixed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    labels: BTreeSet<FieldLabel>,
}

impl FieldType {
    pub fn fixed_text() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: FieldLabel) -> Self {
        self.labels.insert(label);
        self
    }

    pub fn insert(&mut self, label: FieldLabel) {
        self.labels.insert(label);
    }

    pub fn remove(&mut self, label: FieldLabel) {
        self.labels.remove(&label);
    }

    pub fn contains(&self, label: FieldLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_fixed_text(&self) -> bool {
        self.labels.is_empty()
    }

    /// Comma-joined labels, or the fixed-text sentinel when no label applies
    pub fn render(&self, language: Language) -> String {
        if self.labels.is_empty() {
            return match language {
                Language::Portuguese => "Texto Fixo".to_string(),
                Language::English => "Fixed Text".to_string(),
            };
        }

        self.labels
            .iter()
            .map(|label| label.label(language))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Language::default()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obligation {
    Mandatory,
    Optional,
}

impl Obligation {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Obligation::Mandatory, Language::Portuguese) => "Obrigatório",
            (Obligation::Mandatory, Language::English) => "Mandatory",
            (Obligation::Optional, Language::Portuguese) => "Opcional",
            (Obligation::Optional, Language::English) => "Optional",
        }
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::default()))
    }
}

/// One extracted unit of a form document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord")]
pub struct Field {
    index: Option<String>,
    text: String,
    field_type: FieldType,
    obligation: Obligation,
    note: String,
}

impl Field {
    /// Build a field from its classified parts, or `None` when `text` is
    /// blank.
    ///
    /// The obligation follows the style signal: a styled field is optional
    /// and always carries the `Choice` label, an unstyled one never does.
    pub fn new(
        index: Option<String>,
        text: impl Into<String>,
        mut field_type: FieldType,
        style_signal: bool,
        note: impl Into<String>,
    ) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let obligation = if style_signal {
            field_type.insert(FieldLabel::Choice);
            Obligation::Optional
        } else {
            field_type.remove(FieldLabel::Choice);
            Obligation::Mandatory
        };

        Some(Self {
            index: index.filter(|i| !i.is_empty()),
            text,
            field_type,
            obligation,
            note: note.into(),
        })
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Locator as rendered in reports: empty when unresolved
    pub fn index_or_empty(&self) -> &str {
        self.index.as_deref().unwrap_or("")
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn obligation(&self) -> Obligation {
        self.obligation
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Serialized shape of a [`Field`], checked on the way in
#[derive(Deserialize)]
struct FieldRecord {
    index: Option<String>,
    text: String,
    field_type: FieldType,
    obligation: Obligation,
    note: String,
}

impl TryFrom<FieldRecord> for Field {
    type Error = String;

    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        let optional = record.obligation == Obligation::Optional;
        if optional != record.field_type.contains(FieldLabel::Choice) {
            return Err(format!(
                "field {:?}: obligation {:?} does not match its Choice label",
                record.text, record.obligation
            ));
        }
        Field::new(
            record.index,
            record.text,
            record.field_type,
            optional,
            record.note,
        )
        .ok_or_else(|| "field text is empty".to_string())
    }
}
