//! # API error normalization
//!
//! Every API Client function fails with one [`ApiError`]. The backend reports
//! errors in several shapes, and [`normalize`] folds them into one message at
//! the client boundary so no caller has to inspect a body again:
//!
//! | Body | Message |
//! |------|---------|
//! | `"Project not found"` (JSON string or plain text) | the string |
//! | `{"detail": "Not allowed"}` | the detail |
//! | `{"detail": [{"msg": "..."}, ...]}` | every `msg`, joined with `, ` |
//! | `[{"msg": "..."}, ...]` | every `msg`, joined with `, ` |
//! | `{"message": "..."}` | the message |
//! | anything else / empty | a generic fallback for the status |
//!
//! [`ApiError::status`] is `None` when no response was received at all
//! (connection refused, DNS failure, CORS rejection), which is what
//! [`ApiError::response_received`] reports.

use serde_json::Value;
use thiserror::Error;

/// Classification of a failed call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401, or an authenticated call attempted without a session.
    Unauthorized,
    /// 422: the backend rejected the submitted fields.
    Validation,
    /// 5xx.
    Server,
    /// Any other non-success status.
    Status,
    /// The request was sent but no response arrived.
    Network,
    /// A success response whose body could not be decoded.
    Decode,
}

#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    /// Build an error from a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = match status {
            401 => ErrorKind::Unauthorized,
            422 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Status,
        };
        Self {
            kind,
            status: Some(status),
            message: normalize(status, body),
        }
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Network,
            status: None,
            message: format!("No response from server: {err}"),
        }
    }

    pub fn decode(status: u16, err: impl std::fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Decode,
            status: Some(status),
            message: format!("Unexpected response from server: {err}"),
        }
    }

    /// An authenticated call was attempted while signed out.
    pub fn not_signed_in() -> Self {
        Self {
            kind: ErrorKind::Unauthorized,
            status: None,
            message: "Not signed in".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Unauthorized
    }

    /// False for transport failures where the server never answered.
    pub fn response_received(&self) -> bool {
        self.status.is_some()
    }
}

/// Fold any error body into one display string.
pub fn normalize(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    let extracted = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => message_from_value(&value),
        // Plain-text bodies are shown as-is, HTML error pages never are.
        Err(_) if !trimmed.is_empty() && !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    };
    extracted
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback_message(status).to_string())
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<String> = items.iter().filter_map(message_from_value).collect();
            (!msgs.is_empty()).then(|| msgs.join(", "))
        }
        Value::Object(map) => ["detail", "msg", "message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(message_from_value)),
        _ => None,
    }
}

fn fallback_message(status: u16) -> &'static str {
    match status {
        401 => "Your session has expired. Please sign in again",
        403 => "You are not allowed to perform this action",
        404 => "The requested resource was not found",
        422 => "Some fields are invalid",
        500..=599 => "Server error. Please try again later",
        _ => "The request could not be completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::from_response(400, r#"{"detail": "User is already a member of this project"}"#);
        assert_eq!(err.kind, ErrorKind::Status);
        assert_eq!(err.message, "User is already a member of this project");
        assert!(err.response_received());
    }

    #[test]
    fn test_detail_array_of_msgs() {
        let body = r#"{"detail": [
            {"loc": ["body", "password"], "msg": "Password needs a digit", "type": "value_error"},
            {"loc": ["body", "name"], "msg": "Name too short", "type": "value_error"}
        ]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Password needs a digit, Name too short");
    }

    #[test]
    fn test_bare_array_of_msgs() {
        assert_eq!(normalize(422, r#"[{"msg": "title too short"}]"#), "title too short");
    }

    #[test]
    fn test_string_bodies() {
        assert_eq!(normalize(422, r#""Invalid status""#), "Invalid status");
        assert_eq!(normalize(400, "Bad things happened"), "Bad things happened");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(normalize(500, ""), "Server error. Please try again later");
        assert_eq!(
            normalize(502, "<html><body>Bad Gateway</body></html>"),
            "Server error. Please try again later"
        );
        assert_eq!(normalize(422, r#"{"detail": []}"#), "Some fields are invalid");
        assert_eq!(normalize(418, "{}"), "The request could not be completed");
    }

    #[test]
    fn test_kinds() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert_eq!(ApiError::from_response(503, "").kind, ErrorKind::Server);
        assert!(ApiError::not_signed_in().is_unauthorized());
        assert!(!ApiError::not_signed_in().response_received());

        let err = ApiError::network("connection refused");
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(!err.response_received());
    }
}
