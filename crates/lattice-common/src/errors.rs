use std::path::PathBuf;

use crate::types::PaneId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the content provider (browsing-engine pool) or the
/// widget toolkit while servicing a pane.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("failed to acquire content surface for {pane_id}: {reason}")]
    AcquireFailed { pane_id: PaneId, reason: String },

    #[error("failed to wrap content surface as widget: {0}")]
    WrapFailed(String),

    #[error("navigation to {url} failed: {reason}")]
    NavigateFailed { url: String, reason: String },

    #[error("unknown content surface: {0}")]
    UnknownSurface(u64),
}

#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("tiling error: {0}")]
    Tiling(String),

    #[error("floating session error: {0}")]
    Floating(String),

    #[error("{0}")]
    Other(String),
}
