// ============================================================================
// ERRORS - Request and storage failures
// ============================================================================

use thiserror::Error;

/// Failure of a single HTTP call. Never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl RequestError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body for status errors
    pub fn body(&self) -> Option<&str> {
        match self {
            RequestError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Error writing to localStorage: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code_and_body() {
        let err = RequestError::Status { status: 404, body: "not found".to_string() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("not found"));
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn network_error_has_no_status() {
        let err = RequestError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }
}
