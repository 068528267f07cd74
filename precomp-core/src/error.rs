use crate::codec::Algorithm;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrecompError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{algorithm} compression failed for {}: {source}", path.display())]
    Compression {
        algorithm: Algorithm,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PrecompError>;
