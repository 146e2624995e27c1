//! Report writers
//!
//! CSV carries exactly the rendered table (header row plus one record per
//! field). JSON carries the full report, including document names and the
//! generation timestamp.

use clap::ValueEnum;
use shared_types::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// Writer for this format
    pub fn writer(self) -> Box<dyn ReportWriter> {
        match self {
            ReportFormat::Csv => Box::new(CsvReportWriter),
            ReportFormat::Json => Box::new(JsonReportWriter),
        }
    }
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write report to {} (is it open in another program?)", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ReportWriter {
    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), WriteError>;
}

pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), WriteError> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(report.headers())?;
        for record in report.records() {
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

pub struct JsonReportWriter;

impl ReportWriter for JsonReportWriter {
    fn write(&self, report: &Report, out: &mut dyn Write) -> Result<(), WriteError> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Write `report` to `path`, replacing any existing file
pub fn write_report(report: &Report, format: ReportFormat, path: &Path) -> Result<(), WriteError> {
    let output_error = |source: std::io::Error| WriteError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    let mut out = BufWriter::new(file);
    format.writer().write(report, &mut out)?;
    out.flush().map_err(output_error)?;
    Ok(())
}
