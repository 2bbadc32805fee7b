//! Error types for eslcards.
//!
//! Errors are split by how they are handled:
//!
//! - [`FetchError`] covers everything that can go wrong with one catalog
//!   request. It is **non-fatal**: the fetch controller clears the loading
//!   flag, logs the error and keeps it as the last fetch error, and the UI
//!   carries on with whatever cards it already has.
//! - [`AppError`] covers startup and terminal failures. These are fatal and
//!   propagate to `main`.

use thiserror::Error;

/// Top-level application error.
///
/// Every variant is fatal; `main` reports it on stderr and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// HTTP client could not be constructed (TLS backend, invalid settings).
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of a single catalog request.
///
/// The three variants mirror the three ways a page can fail to arrive. They
/// are handled identically by the fetch controller; the distinction exists
/// for logging and for the optional status-bar error display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Underlying transport error, rendered.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a JSON object with a `cards` array.
    #[error("malformed response from {url}: {reason}")]
    Body {
        /// URL that was requested.
        url: String,
        /// Decoder error, rendered.
        reason: String,
    },
}

impl FetchError {
    /// Short label for the status bar.
    pub fn summary(&self) -> String {
        match self {
            FetchError::Transport { .. } => "network error".to_string(),
            FetchError::Status { status, .. } => format!("HTTP {status}"),
            FetchError::Body { .. } => "malformed response".to_string(),
        }
    }
}
