//! Optionality signals carried by document styling
//!
//! Authors mark optional / fill-in content with ad hoc visual conventions
//! (red text, highlighting, a style named "Opcional", ...). Each convention is
//! a separate check; a paragraph carries a signal if any check fires.

use crate::patterns::{NEUTRAL_COLORS, NEUTRAL_FILLS, NO_HIGHLIGHT, STYLE_KEYWORDS};
use shared_docs::{ParagraphNode, RunNode};

/// Which check detected the signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSignal {
    ParagraphStyle,
    RunStyle,
    RunColor,
    Highlight,
    Shading,
}

type RunCheck = fn(&StyleSignalDetector, &RunNode) -> bool;

/// Per-run checks, in evaluation order
const RUN_CHECKS: &[(StyleSignal, RunCheck)] = &[
    (StyleSignal::RunStyle, StyleSignalDetector::run_style_matches),
    (StyleSignal::RunColor, has_explicit_color),
    (StyleSignal::Highlight, has_highlight),
    (StyleSignal::Shading, has_shading),
];

#[derive(Debug, Clone)]
pub struct StyleSignalDetector {
    /// Upper-cased, non-empty keywords
    keywords: Vec<String>,
}

impl StyleSignalDetector {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().trim().to_uppercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// First signal found, paragraph style before any run
    pub fn detect(&self, paragraph: &ParagraphNode) -> Option<StyleSignal> {
        if self.style_matches(paragraph.style.as_deref()) {
            return Some(StyleSignal::ParagraphStyle);
        }

        paragraph.runs.iter().find_map(|run| {
            RUN_CHECKS
                .iter()
                .find(|(_, check)| check(self, run))
                .map(|(signal, _)| *signal)
        })
    }

    pub fn has_style_signal(&self, paragraph: &ParagraphNode) -> bool {
        self.detect(paragraph).is_some()
    }

    fn style_matches(&self, style: Option<&str>) -> bool {
        let Some(style) = style else {
            return false;
        };
        let style = style.to_uppercase();
        self.keywords.iter().any(|k| style.contains(k.as_str()))
    }

    fn run_style_matches(&self, run: &RunNode) -> bool {
        self.style_matches(run.style.as_deref())
    }
}

impl Default for StyleSignalDetector {
    fn default() -> Self {
        Self::new(STYLE_KEYWORDS)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Theme color of any value, or a literal color other than black/auto
fn has_explicit_color(_: &StyleSignalDetector, run: &RunNode) -> bool {
    let Some(color) = &run.color else {
        return false;
    };
    if non_empty(&color.theme).is_some() {
        return true;
    }
    non_empty(&color.value).map_or(false, |v| !NEUTRAL_COLORS.contains(&v.as_str()))
}

fn has_highlight(_: &StyleSignalDetector, run: &RunNode) -> bool {
    non_empty(&run.highlight).map_or(false, |v| v != NO_HIGHLIGHT)
}

/// Background fill other than auto/white/black
fn has_shading(_: &StyleSignalDetector, run: &RunNode) -> bool {
    non_empty(&run.shading_fill).map_or(false, |v| !NEUTRAL_FILLS.contains(&v.as_str()))
}
