//! Error types for the control room.
//!
//! Rendering never fails. Everything here comes from the layer around it:
//! loading configuration, writing a surface out, or driving the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode dashboard snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("surface `{0}` is not available in this build")]
    SurfaceUnavailable(&'static str),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
