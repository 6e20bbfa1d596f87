//! Error types for the login flow
//!
//! Failures keep their cause here; the view collapses every one of them to
//! the same Italian message when rendering.

/// The only message the login form ever shows
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenziali non valide";

/// Why a login attempt failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl LoginError {
    /// Text shown to the user, identical for every cause
    pub fn user_message(&self) -> &'static str {
        INVALID_CREDENTIALS_MESSAGE
    }
}

/// Key-value store error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Failed to write key: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cause_renders_the_same_message() {
        let errors = [
            LoginError::Network("connection refused".to_string()),
            LoginError::Rejected { status: 401 },
            LoginError::Rejected { status: 500 },
            LoginError::MalformedBody("expected value".to_string()),
        ];

        for err in errors {
            assert_eq!(err.user_message(), "Credenziali non valide");
        }
    }

    #[test]
    fn test_display_keeps_the_cause() {
        let err = LoginError::Rejected { status: 401 };
        assert_eq!(err.to_string(), "Authentication rejected with status 401");

        let err = LoginError::Network("timeout".to_string());
        assert_eq!(err.to_string(), "Network error: timeout");
    }
}
