//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // HTTP Client Errors
    // ─────────────────────────────────────────────────────────────
    /// Transport-level failure (connect, timeout, TLS). The request never
    /// produced an HTTP status.
    #[error("Request failed: {message}")]
    Request { message: String },

    /// Non-2xx response. `message` is the full user-facing string,
    /// `"HTTP <status>"` with an optional ` - <detail>` suffix taken from the
    /// server's JSON error body.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body could not be decoded as the expected shape.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Build an [`Error::Http`] from a status code and the optional `message`
    /// field of the server's JSON error body.
    ///
    /// The display is `"HTTP 404"` when no detail is available and
    /// `"HTTP 400 - invalid weight"` when the body carried one.
    pub fn http(status: u16, detail: Option<&str>) -> Self {
        let message = match detail {
            Some(detail) if !detail.is_empty() => format!("HTTP {status} - {detail}"),
            _ => format!("HTTP {status}"),
        };
        Self::Http { status, message }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced inside the view that triggered them;
    /// the user can always retry the same action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Request { .. } | Error::Http { .. } | Error::Decode { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. } | Error::Config { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_without_detail() {
        let err = Error::http(404, None);
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_http_error_with_detail() {
        let err = Error::http(400, Some("invalid weight"));
        assert_eq!(err.to_string(), "HTTP 400 - invalid weight");
    }

    #[test]
    fn test_http_error_with_empty_detail() {
        // An empty message field is treated the same as no body at all.
        let err = Error::http(500, Some(""));
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_http_error_keeps_status() {
        let err = Error::http(404, None);
        assert!(matches!(err, Error::Http { status: 404, .. }));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::request("connection refused").is_recoverable());
        assert!(Error::http(502, None).is_recoverable());
        assert!(Error::decode("unexpected EOF").is_recoverable());
        assert!(!Error::config("missing base_url").is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::terminal("raw mode failed").is_fatal());
        assert!(Error::config("missing base_url").is_fatal());
        assert!(!Error::http(500, None).is_fatal());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::request("test");
        let _ = Error::decode("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
    }
}
