//! Form field mapper
//!
//! Command-line front end for `field-engine`: maps the fields of one form
//! document and optionally checks which of them appear in a second one.

pub mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use field_engine::{default_output_name, EngineConfig, FieldEngine};
use shared_types::Language;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use writer::{write_report, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "form-mapper")]
#[command(
    version,
    about = "Map form fields (locator, label, type, obligation) and compare documents"
)]
pub struct Cli {
    /// Document to map (.docx, .odt or .txt)
    pub primary: PathBuf,

    /// Second document to check the primary fields against
    #[arg(short, long, value_name = "SECONDARY")]
    pub compare: Option<PathBuf>,

    /// Output file (default: Mapeamento_<primary>[_VS_<secondary>].<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Label and header language: pt or en
    #[arg(short, long, value_parser = parse_language)]
    pub language: Option<Language>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the LibreOffice flat rendering (locators of .docx fields stay empty)
    #[arg(long)]
    pub no_render: bool,

    /// Log at DEBUG level
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_language(value: &str) -> Result<Language, String> {
    match value.to_lowercase().as_str() {
        "pt" | "portuguese" => Ok(Language::Portuguese),
        "en" | "english" => Ok(Language::English),
        other => Err(format!("unknown language '{}' (expected pt or en)", other)),
    }
}

/// Log filter from the `RUST_LOG` value: `--verbose` raises it to DEBUG,
/// otherwise INFO applies only when `RUST_LOG` is unset
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match (verbose, rust_log) {
        (true, directives) => {
            EnvFilter::new(directives.unwrap_or("")).add_directive(tracing::Level::DEBUG.into())
        }
        (false, Some(directives)) => EnvFilter::new(directives),
        (false, None) => EnvFilter::new("info"),
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, rows: usize },
    NoFields,
}

impl Cli {
    /// Configuration file overlaid with the command-line flags
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(language) = self.language {
            config.language = language;
        }
        if self.no_render {
            config.renderer.enabled = false;
        }
        Ok(config)
    }
}

pub fn run(cli: &Cli) -> Result<Outcome> {
    let config = cli.engine_config()?;
    let renderer = config.flat_renderer();
    let engine = FieldEngine::new(config).context("Invalid engine configuration")?;

    let report = engine
        .map_documents(&cli.primary, cli.compare.as_deref(), renderer.as_ref())
        .with_context(|| format!("Failed to read {}", cli.primary.display()))?;

    if report.rows.is_empty() {
        warn!("No fields found in {}", cli.primary.display());
        return Ok(Outcome::NoFields);
    }

    let path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(default_output_name(
            &report.primary,
            report.secondary.as_deref(),
            cli.format.extension(),
        ))
    });

    write_report(&report, cli.format, &path)?;
    info!("Report written to {}", path.display());

    Ok(Outcome::Written {
        path,
        rows: report.rows.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["form-mapper", "modelo.docx"]).unwrap();
        assert_eq!(cli.primary, PathBuf::from("modelo.docx"));
        assert_eq!(cli.format, ReportFormat::Csv);
        assert!(cli.compare.is_none());
        assert!(!cli.no_render);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "form-mapper",
            "A.docx",
            "--compare",
            "B.odt",
            "--language",
            "EN",
            "--format",
            "json",
            "--no-render",
        ])
        .unwrap();

        let config = cli.engine_config().unwrap();
        assert_eq!(config.language, Language::English);
        assert!(!config.renderer.enabled);
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.compare, Some(PathBuf::from("B.odt")));
    }

    #[test]
    fn test_rust_log_controls_level_unless_verbose() {
        assert_eq!(log_filter(false, Some("warn")).to_string(), "warn");
        assert_eq!(log_filter(false, None).to_string(), "info");
        assert!(log_filter(true, Some("warn")).to_string().contains("debug"));
        assert!(log_filter(true, None).to_string().contains("debug"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Cli::try_parse_from(["form-mapper", "A.docx", "--language", "fr"]);
        assert!(result.is_err());
    }
}
