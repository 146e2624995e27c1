//! Flat text rendering of structured documents
//!
//! The flat rendering is only used to recover section locators, so every
//! failure degrades to `None` instead of an error.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Produces a linear plain-text rendering of a document, if it can
pub trait FlatRenderer {
    fn render(&self, path: &Path) -> Option<String>;
}

/// Renderer used when flat rendering is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl FlatRenderer for NoopRenderer {
    fn render(&self, _path: &Path) -> Option<String> {
        None
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("renderer timed out after {0:?}")]
    Timeout(Duration),

    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("renderer produced no output at {0}")]
    NoOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// LibreOffice headless conversion to `txt:Text`.
///
/// Output goes to a scratch directory that is removed when the call returns,
/// whether or not the conversion succeeded.
#[derive(Debug, Clone)]
pub struct SofficeRenderer {
    program: String,
    timeout: Duration,
}

impl SofficeRenderer {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn try_render(&self, path: &Path) -> Result<String, RenderError> {
        let outdir = tempfile::Builder::new()
            .prefix("form-mapper-render-")
            .tempdir()?;

        let mut child = Command::new(&self.program)
            .arg("--headless")
            .arg("--convert-to")
            .arg("txt:Text")
            .arg("--outdir")
            .arg(outdir.path())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Read while the child runs: a full stderr pipe would block it
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut stderr = String::new();
                let _ = pipe.read_to_string(&mut stderr);
                stderr
            })
        });

        let status = wait_with_timeout(&mut child, self.timeout)?;
        if !status.success() {
            let stderr = stderr_reader
                .and_then(|reader| reader.join().ok())
                .unwrap_or_default();
            return Err(RenderError::Failed {
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = outdir.path().join(format!("{}.txt", stem));
        if !output.exists() {
            return Err(RenderError::NoOutput(output));
        }

        let bytes = fs::read(&output)?;
        debug!("Flat rendering of {}: {} bytes", path.display(), bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for SofficeRenderer {
    fn default() -> Self {
        Self::new("soffice", Duration::from_secs(60))
    }
}

impl FlatRenderer for SofficeRenderer {
    fn render(&self, path: &Path) -> Option<String> {
        match self.try_render(path) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    "Flat rendering unavailable for {} ({}); locators will be empty",
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<ExitStatus, RenderError> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RenderError::Timeout(timeout));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
