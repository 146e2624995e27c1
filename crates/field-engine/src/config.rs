//! Engine configuration
//!
//! Loaded from TOML; every key is optional and falls back to the defaults
//! below.
//!
//! ```toml
//! language = "en"
//! min_label_len = 3
//! alternative_words = ["OR"]
//!
//! [renderer]
//! program = "/opt/libreoffice/program/soffice"
//! timeout_secs = 30
//! ```

use crate::annotations::NOTE_SEPARATOR;
use crate::error::EngineError;
use crate::patterns::{ALTERNATIVE_WORDS, STYLE_KEYWORDS};
use serde::{Deserialize, Serialize};
use shared_docs::{FlatRenderer, NoopRenderer, ReadOptions, SofficeRenderer};
use shared_types::Language;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Language of labels and report headers
    #[serde(default)]
    pub language: Language,
    /// Unnumbered paragraphs shorter than this (in characters) are noise
    #[serde(default = "default_min_label_len")]
    pub min_label_len: usize,
    /// Style-name fragments that mark optional content
    #[serde(default = "default_style_keywords")]
    pub style_keywords: Vec<String>,
    /// Whole words that introduce an alternative
    #[serde(default = "default_alternative_words")]
    pub alternative_words: Vec<String>,
    /// Separator between comments attached to the same field
    #[serde(default = "default_note_separator")]
    pub note_separator: String,
    /// Also read paragraphs inside DOCX tables
    #[serde(default)]
    pub include_table_paragraphs: bool,
    #[serde(default)]
    pub renderer: RendererConfig,
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            include_table_paragraphs: self.include_table_paragraphs,
        }
    }

    /// Flat renderer described by the `[renderer]` section
    pub fn flat_renderer(&self) -> Box<dyn FlatRenderer> {
        if self.renderer.enabled {
            Box::new(SofficeRenderer::new(
                self.renderer.program.clone(),
                Duration::from_secs(self.renderer.timeout_secs),
            ))
        } else {
            Box::new(NoopRenderer)
        }
    }
}

impl FromStr for EngineConfig {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| EngineError::Config(e.to_string()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_label_len: default_min_label_len(),
            style_keywords: default_style_keywords(),
            alternative_words: default_alternative_words(),
            note_separator: default_note_separator(),
            include_table_paragraphs: false,
            renderer: RendererConfig::default(),
        }
    }
}

fn default_min_label_len() -> usize {
    3
}

fn default_style_keywords() -> Vec<String> {
    STYLE_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_alternative_words() -> Vec<String> {
    ALTERNATIVE_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_note_separator() -> String {
    NOTE_SEPARATOR.to_string()
}

/// Flat text renderer (LibreOffice headless)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default = "default_renderer_enabled")]
    pub enabled: bool,
    #[serde(default = "default_renderer_program")]
    pub program: String,
    #[serde(default = "default_renderer_timeout")]
    pub timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            enabled: default_renderer_enabled(),
            program: default_renderer_program(),
            timeout_secs: default_renderer_timeout(),
        }
    }
}

fn default_renderer_enabled() -> bool {
    true
}

fn default_renderer_program() -> String {
    "soffice".to_string()
}

fn default_renderer_timeout() -> u64 {
    60
}
