use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes shared with the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// The caller's session must be refreshed
    SessionExpired,
    NoConnection,
    UnableToReachService,
    /// Any code this crate does not interpret
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::SessionExpired => "ERROR_SESSION_EXPIRED",
            ErrorCode::NoConnection => "ERROR_NO_CONNECTION",
            ErrorCode::UnableToReachService => "ERROR_UNABLE_TO_REACH_SERVICE",
            ErrorCode::Other(code) => code,
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "ERROR_SESSION_EXPIRED" => ErrorCode::SessionExpired,
            "ERROR_NO_CONNECTION" => ErrorCode::NoConnection,
            "ERROR_UNABLE_TO_REACH_SERVICE" => ErrorCode::UnableToReachService,
            other => ErrorCode::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error reported by the remote API itself
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("API error {code}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default)]
    pub status: bool,
}

impl ApiError {
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>, status: bool) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            status,
        }
    }

    /// Convenience constructor for the session-expired signal
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SessionExpired, message, false)
    }

    pub fn is_session_expired(&self) -> bool {
        self.code == ErrorCode::SessionExpired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_parses_known_codes() {
        assert_eq!(ErrorCode::from("ERROR_SESSION_EXPIRED"), ErrorCode::SessionExpired);
        assert_eq!(ErrorCode::from("ERROR_NO_CONNECTION"), ErrorCode::NoConnection);
        assert_eq!(
            ErrorCode::from("ERROR_UNABLE_TO_REACH_SERVICE"),
            ErrorCode::UnableToReachService
        );
        assert_eq!(
            ErrorCode::from("ERROR_FORBIDDEN"),
            ErrorCode::Other("ERROR_FORBIDDEN".to_string())
        );
    }

    #[test]
    fn error_display_formats_correctly() {
        let err = ApiError::new(ErrorCode::Other("E42".to_string()), "quota exceeded", false);
        assert_eq!(err.to_string(), "API error E42: quota exceeded");
    }

    #[test]
    fn session_expired_is_detected() {
        assert!(ApiError::session_expired("login again").is_session_expired());
        assert!(!ApiError::new("E1", "nope", true).is_session_expired());
    }

    #[test]
    fn deserializes_from_error_body() {
        let body = r#"{"code":"ERROR_SESSION_EXPIRED","message":"token expired"}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(err.code, ErrorCode::SessionExpired);
        assert_eq!(err.message, "token expired");
        assert!(!err.status);
    }

    #[test]
    fn serializes_code_as_string() {
        let err = ApiError::new(ErrorCode::NoConnection, "offline", false);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""code":"ERROR_NO_CONNECTION""#));
    }
}
