//! Error handling module for the Lost & Found client.
//!
//! Provides a single client error type with mapping from HTTP status codes and
//! the service's error bodies.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::forms::FieldError;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// The service rejected the credential (401)
    Unauthorized(String),
    /// The caller lacks the required role (403)
    Forbidden(String),
    /// Resource not found (404)
    NotFound(String),
    /// The service rejected the request body (400/422)
    BadRequest(String),
    /// Any other non-success status
    Api { status: u16, message: String },
    /// Client-side form validation failed; nothing was sent
    Validation(Vec<FieldError>),
    /// The request never produced a response
    Transport(String),
    /// A response body could not be decoded
    Decode(String),
    /// Client-local storage failed
    Storage(String),
    /// Invalid configuration
    Config(String),
}

/// Result of a single API call.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build an error from a non-success response status and its raw body.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::BadRequest(message)
            }
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Get the HTTP status code behind this error, if the service answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::BadRequest(_) => Some(400),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Unauthorized(_) => codes::UNAUTHORIZED,
            ClientError::Forbidden(_) => codes::FORBIDDEN,
            ClientError::NotFound(_) => codes::NOT_FOUND,
            ClientError::BadRequest(_) => codes::BAD_REQUEST,
            ClientError::Api { .. } => codes::API_ERROR,
            ClientError::Validation(_) => codes::VALIDATION_ERROR,
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Storage(_) => codes::STORAGE_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Unauthorized(msg) => msg.clone(),
            ClientError::Forbidden(msg) => msg.clone(),
            ClientError::NotFound(msg) => msg.clone(),
            ClientError::BadRequest(msg) => msg.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(errors) => errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; "),
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Decode(msg) => msg.clone(),
            ClientError::Storage(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
        }
    }

    /// Message as shown in a screen banner: the service's own words when it
    /// answered, the screen's fallback otherwise.
    pub fn banner_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(_) => self.message(),
            _ if self.status_code().is_some() => self.message(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            ClientError::Decode(format!("Invalid response body: {}", err))
        } else {
            ClientError::Transport(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        ClientError::Storage(format!("Storage error: {}", err))
    }
}

/// Error body returned by the service. Handlers use either `message` or `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_uses_message_field() {
        let err = ClientError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Token has expired"}"#,
        );
        assert!(matches!(err, ClientError::Unauthorized(ref m) if m == "Token has expired"));
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.error_code(), codes::UNAUTHORIZED);
    }

    #[test]
    fn test_from_response_falls_back_to_error_field() {
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, r#"{"error": "Missing title"}"#);
        assert!(matches!(err, ClientError::BadRequest(ref m) if m == "Missing title"));
    }

    #[test]
    fn test_from_response_without_json_body() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_banner_message_prefers_server_words() {
        let err = ClientError::Forbidden("Admin access required".to_string());
        assert_eq!(err.banner_message("fallback"), "Admin access required");

        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.banner_message("Login failed."), "Login failed.");
    }
}
