//! Executions tab: paginated invocation history

use lunar_core::{Execution, ExecutionList, Function};

use crate::input_key::InputKey;
use crate::pagination::PageState;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;

use super::{
    clamp_index, is_stale_page, load_failed, move_selection, Loadable, Outcome, ViewContext,
};

#[derive(Debug, Clone)]
pub struct FunctionExecutionsView {
    pub id: String,
    pub function: Loadable<Function>,
    pub executions: Loadable<ExecutionList>,
    pub selected: usize,
    pub page: PageState,
}

impl FunctionExecutionsView {
    pub fn new(id: &str, ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            function: Loadable::Loading,
            executions: Loadable::Loading,
            selected: 0,
            page: PageState::new(ctx.page_size),
        };
        let requests = vec![
            ApiRequest::GetFunction { id: id.to_string() },
            view.executions_request(),
        ];
        (view, requests)
    }

    fn executions_request(&self) -> ApiRequest {
        ApiRequest::ListExecutions {
            id: self.id.clone(),
            limit: self.page.limit,
            offset: self.page.offset,
        }
    }

    pub fn rows(&self) -> &[Execution] {
        self.executions
            .loaded()
            .map(|l| l.executions.as_slice())
            .unwrap_or_default()
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        let len = self.rows().len();
        if move_selection(&mut self.selected, len, key).is_some() {
            return Some(Outcome::none());
        }

        let total = self
            .executions
            .loaded()
            .map(|l| l.pagination.total)
            .unwrap_or(0);
        if let Some(changed) = self.page.handle_key(key, total) {
            if !changed {
                return Some(Outcome::none());
            }
            self.executions = Loadable::Loading;
            self.selected = 0;
            return Some(Outcome::request(self.executions_request()));
        }

        match key {
            InputKey::Enter => Some(match self.rows().get(self.selected) {
                Some(exec) => Outcome::navigate(Route::ExecutionDetail {
                    id: exec.id.clone(),
                }),
                None => Outcome::none(),
            }),
            _ => None,
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Function(Ok(func)) => {
                self.function = Loadable::Loaded(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => load_failed(&mut self.function, "function", &e),
            ApiResponse::Executions { page, .. }
                if is_stale_page(&self.page, &page, "executions") =>
            {
                Outcome::none()
            }
            ApiResponse::Executions { result: Ok(list), .. } => {
                self.selected = clamp_index(self.selected, list.executions.len());
                self.executions = Loadable::Loaded(list);
                Outcome::none()
            }
            ApiResponse::Executions { result: Err(e), .. } => {
                load_failed(&mut self.executions, "executions", &e)
            }
            _ => Outcome::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ExecutionList {
        serde_json::from_value(serde_json::json!({
            "executions": [
                {"id": "exec-aaaaaaaaaa", "function_id": "f1", "status": "success", "duration_ms": 12},
                {"id": "exec-bbbbbbbbbb", "function_id": "f1", "status": "error"}
            ],
            "pagination": {"total": 45, "limit": 20, "offset": 0}
        }))
        .unwrap()
    }

    fn respond(view: &mut FunctionExecutionsView, page: PageState, list: ExecutionList) {
        view.handle_response(ApiResponse::Executions {
            page,
            result: Ok(list),
        });
    }

    #[test]
    fn test_enter_opens_execution() {
        let (mut view, _) = FunctionExecutionsView::new("f1", &ViewContext::default());
        let page = view.page;
        respond(&mut view, page, list());
        view.handle_key(&InputKey::Char('j'));
        let outcome = view.handle_key(&InputKey::Enter).unwrap();
        assert_eq!(
            outcome.navigate,
            Some(Route::ExecutionDetail {
                id: "exec-bbbbbbbbbb".into()
            })
        );
    }

    #[test]
    fn test_page_size_change_reloads_from_start() {
        let (mut view, _) = FunctionExecutionsView::new("f1", &ViewContext::default());
        let page = view.page;
        respond(&mut view, page, list());
        let outcome = view.handle_key(&InputKey::Char('-')).unwrap();
        assert_eq!(
            outcome.requests,
            vec![ApiRequest::ListExecutions {
                id: "f1".into(),
                limit: 10,
                offset: 0
            }]
        );
    }

    #[test]
    fn test_enter_on_empty_table_is_noop() {
        let (mut view, _) = FunctionExecutionsView::new("f1", &ViewContext::default());
        let outcome = view.handle_key(&InputKey::Enter).unwrap();
        assert!(outcome.navigate.is_none());
    }

    #[test]
    fn test_late_page_after_page_size_change_is_ignored() {
        let (mut view, _) = FunctionExecutionsView::new("f1", &ViewContext::default());
        let first_page = view.page;
        respond(&mut view, first_page, list());
        view.handle_key(&InputKey::Char('+'));
        assert_eq!(view.page, PageState { limit: 50, offset: 0 });

        respond(&mut view, first_page, list());
        assert!(view.executions.is_loading());

        let mut bigger = list();
        bigger.pagination.limit = 50;
        let page = view.page;
        respond(&mut view, page, bigger);
        assert_eq!(view.executions.loaded().unwrap().pagination.limit, 50);
    }
}
