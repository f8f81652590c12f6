//! One execution: header, error report, input event and paginated logs

use lunar_core::{ErrorReport, Execution, ExecutionStatus, Function, LogList};

use crate::input_key::InputKey;
use crate::pagination::PageState;
use crate::request::{ApiRequest, ApiResponse};

use super::{is_stale_page, load_failed, Loadable, Outcome, ViewContext};

#[derive(Debug, Clone)]
pub struct ExecutionDetailView {
    pub id: String,
    pub execution: Loadable<Execution>,
    /// Owning function; only used for the header, so failures are not fatal
    pub function: Option<Function>,
    pub logs: Loadable<LogList>,
    pub logs_page: PageState,
    /// First visible log line
    pub scroll: usize,
}

impl ExecutionDetailView {
    pub fn new(id: &str, ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            execution: Loadable::Loading,
            function: None,
            logs: Loadable::Loading,
            logs_page: PageState::new(ctx.page_size),
            scroll: 0,
        };
        let requests = vec![
            ApiRequest::GetExecution { id: id.to_string() },
            view.logs_request(),
        ];
        (view, requests)
    }

    fn logs_request(&self) -> ApiRequest {
        ApiRequest::ExecutionLogs {
            id: self.id.clone(),
            limit: self.logs_page.limit,
            offset: self.logs_page.offset,
        }
    }

    fn logs_total(&self) -> u64 {
        self.logs.loaded().map(|l| l.pagination.total).unwrap_or(0)
    }

    /// The pagination bar only appears when logs span more than one page
    pub fn show_log_pagination(&self) -> bool {
        self.logs_total() > self.logs_page.limit
    }

    /// Parsed error message of a failed execution
    pub fn error_report(&self) -> Option<ErrorReport> {
        let exec = self.execution.loaded()?;
        if exec.status != ExecutionStatus::Error {
            return None;
        }
        let report = ErrorReport::parse(exec.error_message.as_deref()?);
        (!report.is_empty()).then_some(report)
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        if let Some(changed) = self.logs_page.handle_key(key, self.logs_total()) {
            if !changed {
                return Some(Outcome::none());
            }
            self.logs = Loadable::Loading;
            self.scroll = 0;
            return Some(Outcome::request(self.logs_request()));
        }

        let max = self
            .logs
            .loaded()
            .map(|l| l.logs.len().saturating_sub(1))
            .unwrap_or(0);
        self.scroll = match key {
            InputKey::Up | InputKey::Char('k') => self.scroll.saturating_sub(1),
            InputKey::Down | InputKey::Char('j') => (self.scroll + 1).min(max),
            InputKey::Home | InputKey::Char('g') => 0,
            InputKey::End | InputKey::Char('G') => max,
            _ => return None,
        };
        Some(Outcome::none())
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Execution(Ok(exec)) => {
                let request = ApiRequest::GetFunction {
                    id: exec.function_id.clone(),
                };
                self.execution = Loadable::Loaded(exec);
                Outcome::request(request)
            }
            ApiResponse::Execution(Err(e)) => load_failed(&mut self.execution, "execution", &e),
            ApiResponse::Function(Ok(func)) => {
                self.function = Some(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => {
                tracing::warn!("Failed to load function for execution {}: {}", self.id, e);
                Outcome::none()
            }
            ApiResponse::Logs { page, .. } if is_stale_page(&self.logs_page, &page, "logs") => {
                Outcome::none()
            }
            ApiResponse::Logs { result: Ok(list), .. } => {
                self.logs = Loadable::Loaded(list);
                Outcome::none()
            }
            ApiResponse::Logs { result: Err(e), .. } => {
                load_failed(&mut self.logs, "execution logs", &e)
            }
            _ => Outcome::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution(status: &str, error: Option<&str>) -> Execution {
        serde_json::from_value(serde_json::json!({
            "id": "exec-123456789",
            "function_id": "f1",
            "status": status,
            "error_message": error,
        }))
        .unwrap()
    }

    fn logs(offset: u64, total: u64, message: &str) -> ApiResponse {
        let list: LogList = serde_json::from_value(serde_json::json!({
            "logs": [{"level": "INFO", "message": message}],
            "pagination": {"total": total, "limit": 20, "offset": offset}
        }))
        .unwrap();
        ApiResponse::Logs {
            page: PageState { limit: 20, offset },
            result: Ok(list),
        }
    }

    #[test]
    fn test_loaded_execution_fetches_function() {
        let (mut view, requests) = ExecutionDetailView::new("exec-123456789", &ViewContext::default());
        assert_eq!(
            requests[1],
            ApiRequest::ExecutionLogs {
                id: "exec-123456789".into(),
                limit: 20,
                offset: 0
            }
        );
        let outcome = view.handle_response(ApiResponse::Execution(Ok(execution("success", None))));
        assert_eq!(
            outcome.requests,
            vec![ApiRequest::GetFunction { id: "f1".into() }]
        );
        assert!(view.error_report().is_none());
    }

    #[test]
    fn test_error_report_for_failed_execution() {
        let (mut view, _) = ExecutionDetailView::new("e", &ViewContext::default());
        view.handle_response(ApiResponse::Execution(Ok(execution(
            "error",
            Some("boom\n[CODE]\n1 | x()\n[/CODE]\nTip: define x"),
        ))));
        let report = view.error_report().unwrap();
        assert_eq!(report.description.as_deref(), Some("boom"));
        assert_eq!(report.code.as_deref(), Some("1 | x()"));
        assert_eq!(report.tip.as_deref(), Some("Tip: define x"));
    }

    #[test]
    fn test_log_pagination_only_past_one_page() {
        let (mut view, _) = ExecutionDetailView::new("e", &ViewContext::default());
        view.handle_response(logs(0, 20, "hi"));
        assert!(!view.show_log_pagination());
        view.handle_response(logs(0, 21, "hi"));
        assert!(view.show_log_pagination());

        let outcome = view.handle_key(&InputKey::Char(']')).unwrap();
        assert_eq!(
            outcome.requests,
            vec![ApiRequest::ExecutionLogs {
                id: "e".into(),
                limit: 20,
                offset: 20
            }]
        );
    }

    #[test]
    fn test_log_pages_arriving_out_of_order() {
        let (mut view, _) = ExecutionDetailView::new("e", &ViewContext::default());
        view.handle_response(logs(0, 60, "page one"));
        view.handle_key(&InputKey::Char(']'));
        view.handle_key(&InputKey::Char('['));
        assert_eq!(view.logs_page.offset, 0);

        view.handle_response(logs(0, 60, "page one again"));
        view.handle_response(logs(20, 60, "page two"));

        let shown = view.logs.loaded().unwrap();
        assert_eq!(shown.logs[0].message, "page one again");
    }
}
