//! Error taxonomy shared by the catalog store and the consultation client
//!
//! Every failure carries enough structure (kind, message, identifiers) for a
//! front-end to pick its own wording. Nothing here retries.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Persistence,
    NotFound,
    Validation,
    Transport,
    Service,
    MalformedResponse,
    Internal,
}

/// Why the completion request never produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The round trip exceeded the configured timeout
    Timeout,
    /// The service could not be reached at all
    Connect,
    /// Any other transport failure (TLS, broken body, redirect loop, ...)
    Other,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "timeout"),
            TransportKind::Connect => write!(f, "connect"),
            TransportKind::Other => write!(f, "transport"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("persistence error ({}): {message}", path.display())]
    Persistence { path: PathBuf, message: String },

    #[error("parfum not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("connection error ({kind}): {message}")]
    Transport { kind: TransportKind, message: String },

    #[error("completion service error {status}: {message}")]
    Service { status: u16, message: String },

    #[error("unexpected completion response: {0}")]
    MalformedResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Persistence { .. } => ErrorKind::Persistence,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Service { .. } => ErrorKind::Service,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Persistence {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Short user-facing guidance for the front-end
    pub fn hint(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Config => "Set DEEPSEEK_API_KEY or consultant.api_key in .parfum/config.toml.",
            ErrorKind::Persistence => "Check that the catalog file exists and is valid JSON.",
            ErrorKind::NotFound => "Use `parfum list` to see the available parfums.",
            ErrorKind::Validation => "Check the values you entered and try again.",
            ErrorKind::Transport => "Check your internet connection and try again.",
            ErrorKind::Service => "The completion service rejected the request; check your API key and quota.",
            ErrorKind::MalformedResponse => "The completion service returned an unexpected reply; try again later.",
            ErrorKind::Internal => "This is a bug in parfum; please report it with --verbose output.",
        }
    }
}
