//! Paginated table of all functions

use lunar_core::{Function, FunctionList};

use crate::input_key::InputKey;
use crate::pagination::PageState;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;

use super::{
    clamp_index, is_stale_page, load_failed, move_selection, Loadable, Outcome, ViewContext,
};

#[derive(Debug, Clone)]
pub struct FunctionsListView {
    pub functions: Loadable<FunctionList>,
    pub selected: usize,
    pub page: PageState,
}

impl FunctionsListView {
    pub fn new(ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            functions: Loadable::Loading,
            selected: 0,
            page: PageState::new(ctx.page_size),
        };
        let request = view.load_request();
        (view, vec![request])
    }

    fn load_request(&self) -> ApiRequest {
        ApiRequest::ListFunctions {
            limit: self.page.limit,
            offset: self.page.offset,
        }
    }

    fn rows(&self) -> &[Function] {
        self.functions
            .loaded()
            .map(|l| l.functions.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_function(&self) -> Option<&Function> {
        self.rows().get(self.selected)
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        let len = self.rows().len();
        if move_selection(&mut self.selected, len, key).is_some() {
            return Some(Outcome::none());
        }

        let total = self.functions.loaded().map(|l| l.pagination.total).unwrap_or(0);
        if let Some(changed) = self.page.handle_key(key, total) {
            if !changed {
                return Some(Outcome::none());
            }
            self.functions = Loadable::Loading;
            self.selected = 0;
            return Some(Outcome::request(self.load_request()));
        }

        match key {
            InputKey::Enter => Some(match self.selected_function() {
                Some(func) => Outcome::navigate(Route::FunctionCode {
                    id: func.id.clone(),
                }),
                None => Outcome::none(),
            }),
            InputKey::Char('n') => Some(Outcome::navigate(Route::FunctionCreate)),
            _ => None,
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Functions { page, .. } if is_stale_page(&self.page, &page, "functions") => {
                Outcome::none()
            }
            ApiResponse::Functions { result: Ok(list), .. } => {
                self.selected = clamp_index(self.selected, list.functions.len());
                self.functions = Loadable::Loaded(list);
                Outcome::none()
            }
            ApiResponse::Functions { result: Err(e), .. } => {
                load_failed(&mut self.functions, "functions", &e)
            }
            _ => Outcome::none(),
        }
    }
}
