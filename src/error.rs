//! Error types for Sketchware API operations.

use thiserror::Error;

/// Boxed error raised by a custom [`Transport`](crate::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during Sketchware API operations.
///
/// Remote calls never return this type directly: the dispatcher captures it
/// inside [`Outcome::Failure`](crate::Outcome::Failure). Only client
/// construction surfaces it through [`Result`].
#[derive(Debug, Error)]
pub enum SketchwareError {
    /// Configuration is missing or invalid.
    #[error("Sketchware client configuration invalid: {0}")]
    Config(String),

    /// The service answered with a non-success status.
    #[error("Sketchware API error (HTTP {status_code}): {message}")]
    Status { status_code: u16, message: String },

    /// HTTP transport error raised by reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport error raised by an injected transport.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The request or response body did not match its schema.
    #[error("Failed to parse response: {0}")]
    Format(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl SketchwareError {
    /// Wrap an arbitrary transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// HTTP status code, when the failure was a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Http(err) => err.status().is_none() && !err.is_decode(),
            Self::Transport(_) => true,
            _ => false,
        }
    }
}

/// Result type alias for Sketchware operations.
pub type Result<T> = core::result::Result<T, SketchwareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_accessor() {
        let err = SketchwareError::Status {
            status_code: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.status_code(), Some(503));
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Sketchware API error (HTTP 503): down");
    }

    #[test]
    fn test_transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = SketchwareError::transport(io);
        assert!(err.is_transport());

        let source = std::error::Error::source(&err).expect("source preserved");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("original error type");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
