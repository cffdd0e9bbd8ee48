//! CLI error types.

use albums_docs_config::{ConfigError, LinkError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Links(#[from] LinkError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} broken link(s)")]
    BrokenLinks { count: usize },
}
