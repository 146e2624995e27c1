use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Unreadable document: {0}")]
    Unreadable(String),

    #[error("Document part missing: {0}")]
    MissingPart(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
