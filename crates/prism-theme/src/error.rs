use prism_core::ConfigError;
use thiserror::Error;

/// Broad failure class, used for logging and for callers that only need one failure branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeErrorKind {
    /// Detected before any request was sent.
    Configuration,
    /// The request could not be completed.
    Transport,
    /// A response arrived but was not a usable theme.
    Schema,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme service credential missing: set GEMINI_API_KEY or API_KEY")]
    MissingCredential,

    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("a theme request is already in flight")]
    Busy,

    #[error("theme request failed")]
    Transport(#[from] reqwest::Error),

    #[error("theme service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("theme command failed: {0}")]
    Command(String),

    #[error("malformed theme response: {0}")]
    Schema(String),

    #[error("theme response is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("theme rejected")]
    Invalid(#[from] ConfigError),
}

impl ThemeError {
    pub fn kind(&self) -> ThemeErrorKind {
        match self {
            ThemeError::MissingCredential | ThemeError::EmptyPrompt | ThemeError::Busy => {
                ThemeErrorKind::Configuration
            }
            ThemeError::Transport(_) | ThemeError::Status { .. } | ThemeError::Command(_) => {
                ThemeErrorKind::Transport
            }
            ThemeError::Schema(_) | ThemeError::Json(_) | ThemeError::Invalid(_) => {
                ThemeErrorKind::Schema
            }
        }
    }
}
