//! CLI error types.

use codesnip_config::ConfigError;
use codesnip_link::LinkError;
use codesnip_tags::TagError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Tag(#[from] TagError),

    #[error("{0}")]
    Link(#[from] LinkError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
