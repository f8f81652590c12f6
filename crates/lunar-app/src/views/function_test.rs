//! Test tab: build a request, invoke the function, inspect the result

use std::collections::BTreeMap;

use lunar_api::{HttpMethod, InvokeRequest, InvokeResponse};
use lunar_core::{Function, LogList};

use crate::code_examples::{self, CodeLanguage};
use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};
use crate::text_input::{TextArea, TextInput};

use super::{load_failed, Loadable, Outcome, ViewContext};

/// Headers the builder starts with
pub const DEFAULT_HEADERS: &str = "{\n  \"Content-Type\": \"application/json\"\n}";

/// Log lines fetched for the execution a test run produced
const RUN_LOG_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestField {
    #[default]
    Method,
    Query,
    Headers,
    Body,
    Send,
}

impl TestField {
    const ORDER: [TestField; 5] = [
        TestField::Method,
        TestField::Query,
        TestField::Headers,
        TestField::Body,
        TestField::Send,
    ];

    fn step(&self, forward: bool) -> Self {
        let len = Self::ORDER.len();
        let idx = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        let idx = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ORDER[idx]
    }
}

/// Parse the headers editor: a JSON object whose values become strings
pub fn parse_headers(text: &str) -> Result<BTreeMap<String, String>, String> {
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {e}"))?;
    let serde_json::Value::Object(map) = value else {
        return Err("Headers must be a JSON object".to_string());
    };
    Ok(map
        .into_iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => (k, s),
            other => (k, other.to_string()),
        })
        .collect())
}

#[derive(Debug, Clone)]
pub struct FunctionTestView {
    pub id: String,
    pub function: Loadable<Function>,
    pub focus: TestField,
    pub method: HttpMethod,
    pub query: TextInput,
    pub headers: TextArea,
    pub body: TextArea,
    pub headers_error: Option<String>,
    pub sending: bool,
    pub response: Option<InvokeResponse>,
    /// Logs of the last run; `None` until a run reports an execution id
    pub logs: Option<Loadable<LogList>>,
    pub language: CodeLanguage,
    base_url: String,
}

impl FunctionTestView {
    pub fn new(id: &str, ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            function: Loadable::Loading,
            focus: TestField::Method,
            method: HttpMethod::Get,
            query: TextInput::default(),
            headers: TextArea::new(DEFAULT_HEADERS),
            body: TextArea::default(),
            headers_error: None,
            sending: false,
            response: None,
            logs: None,
            language: CodeLanguage::Curl,
            base_url: ctx.base_url.clone(),
        };
        (view, vec![ApiRequest::GetFunction { id: id.to_string() }])
    }

    fn query_string(&self) -> &str {
        let q = self.query.value().trim();
        q.strip_prefix('?').unwrap_or(q)
    }

    /// `{base_url}/fn/{id}` plus the query string, if any
    pub fn url(&self) -> String {
        let mut url = format!("{}/fn/{}", self.base_url.trim_end_matches('/'), self.id);
        let query = self.query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Snippet for the selected language mirroring the current request
    pub fn code_example(&self) -> String {
        code_examples::generate(self.language, self.method, &self.url(), &self.body.text())
    }

    pub fn send(&mut self) -> Outcome {
        if self.sending {
            return Outcome::none();
        }
        let headers = match parse_headers(&self.headers.text()) {
            Ok(headers) => headers,
            Err(e) => {
                self.headers_error = Some(e);
                self.focus = TestField::Headers;
                return Outcome::none();
            }
        };
        self.headers_error = None;
        self.sending = true;
        self.response = None;
        self.logs = None;
        Outcome::request(ApiRequest::Invoke {
            id: self.id.clone(),
            request: InvokeRequest {
                method: self.method,
                query: self.query_string().to_string(),
                headers,
                body: self.body.text(),
            },
        })
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match key {
            InputKey::CharCtrl('s') => return Some(self.send()),
            InputKey::CharCtrl('e') => {
                self.language = self.language.next();
                return Some(Outcome::none());
            }
            InputKey::Tab => {
                self.focus = self.focus.step(true);
                return Some(Outcome::none());
            }
            InputKey::BackTab => {
                self.focus = self.focus.step(false);
                return Some(Outcome::none());
            }
            _ => {}
        }

        match self.focus {
            TestField::Method => {
                match key {
                    InputKey::Left | InputKey::Char('h') => self.method = self.method.prev(),
                    InputKey::Right | InputKey::Char('l') => self.method = self.method.next(),
                    _ => return None,
                }
                Some(Outcome::none())
            }
            TestField::Query => self.query.handle_key(key).consumed().then(Outcome::none),
            TestField::Headers => {
                let outcome = self.headers.handle_key(key);
                if outcome.edited() {
                    self.headers_error = None;
                }
                outcome.consumed().then(Outcome::none)
            }
            TestField::Body => self.body.handle_key(key).consumed().then(Outcome::none),
            TestField::Send => match key {
                InputKey::Enter => Some(self.send()),
                _ => None,
            },
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Function(Ok(func)) => {
                self.function = Loadable::Loaded(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => load_failed(&mut self.function, "function", &e),
            ApiResponse::Invoked(result) => {
                self.sending = false;
                match result {
                    Ok(resp) => {
                        let outcome = match &resp.execution_id {
                            Some(exec_id) => {
                                self.logs = Some(Loadable::Loading);
                                Outcome::request(ApiRequest::ExecutionLogs {
                                    id: exec_id.clone(),
                                    limit: RUN_LOG_LIMIT,
                                    offset: 0,
                                })
                            }
                            None => Outcome::none(),
                        };
                        self.response = Some(resp);
                        outcome
                    }
                    Err(e) => {
                        tracing::warn!("Invocation of {} failed: {}", self.id, e);
                        Outcome::error(format!("Execution failed: {}", e.message()))
                    }
                }
            }
            ApiResponse::Logs { result: Ok(list), .. } => {
                self.logs = Some(Loadable::Loaded(list));
                Outcome::none()
            }
            ApiResponse::Logs { result: Err(e), .. } => {
                let slot = self.logs.get_or_insert(Loadable::Loading);
                load_failed(slot, "execution logs", &e)
            }
            _ => Outcome::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> FunctionTestView {
        FunctionTestView::new("abc", &ViewContext::default()).0
    }

    #[test]
    fn test_default_headers_parse() {
        let headers = parse_headers(DEFAULT_HEADERS).unwrap();
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(parse_headers("  ").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_headers_rejected() {
        assert_eq!(
            parse_headers("[1, 2]").unwrap_err(),
            "Headers must be a JSON object"
        );
        assert!(parse_headers("{").unwrap_err().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_url_includes_query() {
        let mut view = view();
        assert_eq!(view.url(), "http://localhost:3000/fn/abc");
        view.query.set_value("?a=1&b=2");
        assert_eq!(view.url(), "http://localhost:3000/fn/abc?a=1&b=2");
    }

    #[test]
    fn test_invalid_headers_block_send() {
        let mut view = view();
        view.headers.set_text("not json");
        let outcome = view.handle_key(&InputKey::CharCtrl('s')).unwrap();
        assert!(outcome.requests.is_empty());
        assert!(view.headers_error.is_some());
        assert_eq!(view.focus, TestField::Headers);
    }

    #[test]
    fn test_send_builds_invoke_request() {
        let mut view = view();
        view.handle_key(&InputKey::Right);
        assert_eq!(view.method, HttpMethod::Post);
        view.body.set_text("{\"x\":1}");
        let outcome = view.send();
        let ApiRequest::Invoke { id, request } = &outcome.requests[0] else {
            panic!("expected invoke");
        };
        assert_eq!(id, "abc");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, "{\"x\":1}");
        assert!(view.sending);
    }

    #[test]
    fn test_execution_id_fetches_logs() {
        let mut view = view();
        view.send();
        let outcome = view.handle_response(ApiResponse::Invoked(Ok(InvokeResponse {
            status: 200,
            body: "ok".into(),
            execution_id: Some("exec-1".into()),
            ..Default::default()
        })));
        assert_eq!(
            outcome.requests,
            vec![ApiRequest::ExecutionLogs {
                id: "exec-1".into(),
                limit: 100,
                offset: 0
            }]
        );
        assert!(!view.sending);
        assert!(view.logs.as_ref().is_some_and(Loadable::is_loading));
    }

    #[test]
    fn test_failed_invoke_toasts() {
        let mut view = view();
        view.send();
        let outcome = view.handle_response(ApiResponse::Invoked(Err(
            lunar_api::ApiError::Network("refused".into()),
        )));
        assert_eq!(outcome.toasts[0].0, "Execution failed: refused");
    }

    #[test]
    fn test_ctrl_e_cycles_language() {
        let mut view = view();
        view.handle_key(&InputKey::CharCtrl('e'));
        assert_eq!(view.language, CodeLanguage::JavaScript);
        assert!(view.code_example().starts_with("fetch('http://localhost:3000/fn/abc'"));
    }
}
