use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while editing or loading a [`SceneConfig`](crate::config::SceneConfig).
///
/// A failed edit never leaves the config partially modified.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown config field: {0}")]
    UnknownField(String),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("invalid hex color for {field}: {value:?} (expected #rrggbb)")]
    InvalidColor { field: String, value: String },

    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
