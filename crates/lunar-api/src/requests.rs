//! Request and response payloads that only exist on the wire

use std::collections::BTreeMap;

use serde::Serialize;

/// Body of `POST /api/functions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFunction {
    pub name: String,
    pub description: String,
    pub code: String,
}

/// Partial update for `PUT /api/functions/{id}`.
///
/// Unset fields are omitted from the JSON so the backend leaves them alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl FunctionPatch {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn disabled(disabled: bool) -> Self {
        Self {
            disabled: Some(disabled),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.code.is_none()
            && self.disabled.is_none()
    }
}

/// HTTP methods a function can be invoked with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Selector order in the request builder
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Whether a request body is sent with this method
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// An ad-hoc invocation of a function through its public endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeRequest {
    pub method: HttpMethod,
    /// Raw query string without the leading `?`
    pub query: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Whatever the function answered, success or not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub duration_ms: u64,
    pub execution_id: Option<String>,
}

impl InvokeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body pretty-printed when it is JSON
    pub fn pretty_body(&self) -> String {
        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.body.clone()),
            Err(_) => self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_omits_unset_fields() {
        let json = serde_json::to_string(&FunctionPatch::disabled(true)).unwrap();
        assert_eq!(json, r#"{"disabled":true}"#);

        let json = serde_json::to_string(&FunctionPatch::code("return 1")).unwrap();
        assert_eq!(json, r#"{"code":"return 1"}"#);
    }

    #[test]
    fn test_empty_patch() {
        assert!(FunctionPatch::default().is_empty());
        assert!(!FunctionPatch::disabled(false).is_empty());
    }

    #[test]
    fn test_method_cycle() {
        assert_eq!(HttpMethod::Get.next(), HttpMethod::Post);
        assert_eq!(HttpMethod::Patch.next(), HttpMethod::Get);
        assert_eq!(HttpMethod::Get.prev(), HttpMethod::Patch);
    }

    #[test]
    fn test_method_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn test_pretty_body() {
        let resp = InvokeResponse {
            status: 200,
            body: r#"{"ok":true}"#.into(),
            ..Default::default()
        };
        assert_eq!(resp.pretty_body(), "{\n  \"ok\": true\n}");
        assert!(resp.is_success());

        let resp = InvokeResponse {
            status: 500,
            body: "plain".into(),
            ..Default::default()
        };
        assert_eq!(resp.pretty_body(), "plain");
        assert!(!resp.is_success());
    }
}
