use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while indexing a recipe corpus or reading its artifact
#[derive(Error, Debug)]
pub enum IndexError {
    /// A recipe document could not be read or is not valid UTF-8
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document path does not live under the corpus root
    #[error("{} is outside the corpus root {}", path.display(), root.display())]
    OutsideCorpus { path: PathBuf, root: PathBuf },

    /// Generic I/O failure (artifact writes, temp files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact could not be serialized or deserialized
    #[error("Invalid recipe artifact: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A requested path escapes the corpus root
    #[error("Path escapes the corpus root: {0}")]
    PathTraversal(String),

    /// A requested file does not exist under the corpus root
    #[error("Not found: {0}")]
    NotFound(String),
}
