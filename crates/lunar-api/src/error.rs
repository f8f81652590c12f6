//! Normalized backend failures

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Result alias for backend calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// A failed backend call.
///
/// `Clone` so results can travel inside TEA messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, TLS...)
    #[error("{0}")]
    Network(String),

    /// A successful response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Domain validation failure bound to a single form field
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Any other non-2xx response
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Build an error from a non-2xx response.
    ///
    /// The message is taken from the body's `error` field, then `message`,
    /// then falls back to the status reason. Validation responses (400/422)
    /// carrying `field: message` become [`ApiError::Validation`].
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = body_message(body)
            .or_else(|| reason.map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {status}"));

        if matches!(status, 400 | 422) {
            if let Some((field, text)) = split_field_error(&message) {
                return ApiError::Validation {
                    field,
                    message: text,
                };
            }
        }

        ApiError::Status { status, message }
    }

    /// User-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Validation { .. } => Some(400),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<ApiError> for lunar_core::Error {
    fn from(err: ApiError) -> Self {
        lunar_core::Error::backend(err.message())
    }
}

fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// `field: message` as sent by the backend's validators
static FIELD_ERROR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.+)$").expect("valid field error regex"));

/// Split `"name: must not be empty"` into `("name", "must not be empty")`
pub fn split_field_error(message: &str) -> Option<(String, String)> {
    let caps = FIELD_ERROR_REGEX.captures(message.trim())?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_uses_body_error() {
        let err = ApiError::from_response(401, Some("Unauthorized"), r#"{"error":"invalid key"}"#);
        assert_eq!(err.message(), "invalid key");
        assert!(err.is_unauthorized());
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
    }

    #[test]
    fn test_falls_back_to_message_field() {
        let err = ApiError::from_response(500, None, r#"{"message":"boom"}"#);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_falls_back_to_reason_when_body_is_not_json() {
        let err = ApiError::from_response(502, Some("Bad Gateway"), "<html>oops</html>");
        assert_eq!(err.message(), "Bad Gateway");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_falls_back_to_status_code_without_reason() {
        let err = ApiError::from_response(599, None, "");
        assert_eq!(err.message(), "HTTP 599");
    }

    #[test]
    fn test_validation_error_is_typed() {
        let err = ApiError::from_response(
            400,
            Some("Bad Request"),
            r#"{"error":"name: must be lowercase"}"#,
        );
        assert_eq!(
            err,
            ApiError::Validation {
                field: "name".into(),
                message: "must be lowercase".into()
            }
        );
        assert_eq!(err.message(), "name: must be lowercase");
    }

    #[test]
    fn test_field_syntax_on_other_statuses_stays_status() {
        let err = ApiError::from_response(500, None, r#"{"error":"db: locked"}"#);
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn test_split_field_error() {
        assert_eq!(
            split_field_error("code: syntax error near 'end'"),
            Some(("code".into(), "syntax error near 'end'".into()))
        );
        assert_eq!(split_field_error("plain failure"), None);
        assert_eq!(split_field_error("two words: nope"), None);
        assert_eq!(
            split_field_error("  name:   is required \n"),
            Some(("name".into(), "is required".into()))
        );
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::from_response(404, Some("Not Found"), "");
        assert!(err.is_not_found());
        assert!(!ApiError::Network("refused".into()).is_not_found());
    }
}
