use shared_docs::DocumentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
