//! Error types for pagekit
//!
//! The pager itself never originates errors; everything here is either the
//! kind of failure a remote call constructs (and the pager propagates
//! unchanged) or a typed miss when reading response metadata.

use thiserror::Error;

/// Boxed transport error, as produced by whatever HTTP/RPC stack the
/// caller's remote call function is built on.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// Failure from the caller's transport stack, wrapped unchanged
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-success HTTP response
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any was read
        body: String,
    },

    /// The remote call did not complete in time
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The server asked the caller to back off
    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited {
        /// Server-suggested wait before calling again
        retry_after_seconds: u64,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The response body was not the expected JSON shape
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Metadata Errors
    // ============================================================================
    /// A metadata lookup named a field the current page does not carry
    #[error("Response field not found: {field}")]
    FieldNotFound {
        /// The field that was looked up
        field: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Free-form error, usually produced by [`ResultExt::context`]
    #[error("{0}")]
    Other(String),

    /// Escape hatch for callers already using anyhow
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Wrap a transport-level failure
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a field-not-found error
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Check if this error is retryable.
    ///
    /// Classification only. Pagekit never retries; a caller's remote call
    /// function is free to consult this when it owns the retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::field_not_found("total_size");
        assert_eq!(err.to_string(), "Response field not found: total_size");

        let err = Error::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        assert_eq!(
            err.to_string(),
            "Transport error: connection reset by peer"
        );
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 60
        }
        .is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::http_status(429, "").is_retryable());
        assert!(Error::http_status(500, "").is_retryable());
        assert!(Error::http_status(503, "").is_retryable());

        assert!(!Error::http_status(400, "").is_retryable());
        assert!(!Error::http_status(401, "").is_retryable());
        assert!(!Error::http_status(404, "").is_retryable());
        assert!(!Error::field_not_found("x").is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::http_status(500, "boom"));
        let with_context = result.context("listing instances");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("listing instances: HTTP 500: boom"));
    }
}
