//! Versions tab: history table, activation and two-way selection for diffs

use lunar_core::{Function, Version, VersionList};

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::pagination::PageState;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;
use crate::toast::ToastKind;

use super::{
    clamp_index, is_stale_page, load_failed, move_selection, Loadable, Outcome, ViewContext,
};

/// Versions that can be checked for comparison at once
const MAX_CHECKED: usize = 2;

#[derive(Debug, Clone)]
pub struct FunctionVersionsView {
    pub id: String,
    pub function: Loadable<Function>,
    pub versions: Loadable<VersionList>,
    pub selected: usize,
    /// Checked version numbers, oldest first
    pub checked: Vec<u32>,
    pub page: PageState,
}

impl FunctionVersionsView {
    pub fn new(id: &str, ctx: &ViewContext) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            function: Loadable::Loading,
            versions: Loadable::Loading,
            selected: 0,
            checked: Vec::new(),
            page: PageState::new(ctx.page_size),
        };
        let requests = vec![
            ApiRequest::GetFunction { id: id.to_string() },
            view.versions_request(),
        ];
        (view, requests)
    }

    fn versions_request(&self) -> ApiRequest {
        ApiRequest::ListVersions {
            id: self.id.clone(),
            limit: self.page.limit,
            offset: self.page.offset,
        }
    }

    pub fn rows(&self) -> &[Version] {
        self.versions
            .loaded()
            .map(|l| l.versions.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_version(&self) -> Option<&Version> {
        self.rows().get(self.selected)
    }

    pub fn is_active(&self, version: u32) -> bool {
        self.function
            .loaded()
            .is_some_and(|f| f.active_version.version == version)
    }

    pub fn is_checked(&self, version: u32) -> bool {
        self.checked.contains(&version)
    }

    /// Check or uncheck `version`; a third check evicts the oldest one
    pub fn toggle_checked(&mut self, version: u32) {
        if let Some(pos) = self.checked.iter().position(|v| *v == version) {
            self.checked.remove(pos);
            return;
        }
        if self.checked.len() == MAX_CHECKED {
            self.checked.remove(0);
        }
        self.checked.push(version);
    }

    /// Diff route for exactly two checked versions, lower one first
    pub fn compare_route(&self) -> Option<Route> {
        match self.checked.as_slice() {
            [a, b] => Some(Route::VersionDiff {
                id: self.id.clone(),
                old: (*a).min(*b),
                new: (*a).max(*b),
            }),
            _ => None,
        }
    }

    fn reload(&mut self) -> Outcome {
        self.versions = Loadable::Loading;
        Outcome::request(ApiRequest::GetFunction {
            id: self.id.clone(),
        })
        .and_request(self.versions_request())
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        let len = self.rows().len();
        if move_selection(&mut self.selected, len, key).is_some() {
            return Some(Outcome::none());
        }

        let total = self
            .versions
            .loaded()
            .map(|l| l.pagination.total)
            .unwrap_or(0);
        if let Some(changed) = self.page.handle_key(key, total) {
            if !changed {
                return Some(Outcome::none());
            }
            self.versions = Loadable::Loading;
            self.selected = 0;
            return Some(Outcome::request(self.versions_request()));
        }

        match key {
            InputKey::Char(' ') => {
                if let Some(version) = self.selected_version().map(|v| v.version) {
                    self.toggle_checked(version);
                }
                Some(Outcome::none())
            }
            InputKey::Char('a') => {
                let Some(version) = self.selected_version().map(|v| v.version) else {
                    return Some(Outcome::none());
                };
                if self.is_active(version) {
                    return Some(Outcome::info(format!("Version {version} is already active")));
                }
                Some(Outcome::confirm(ConfirmDialogState::activate_version(
                    &self.id, version,
                )))
            }
            InputKey::Char('c') => Some(match self.compare_route() {
                Some(route) => Outcome::navigate(route),
                None => Outcome::info("Select two versions to compare"),
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
            ApiResponse::Versions { page, .. } if is_stale_page(&self.page, &page, "versions") => {
                Outcome::none()
            }
            ApiResponse::Versions { result: Ok(list), .. } => {
                self.selected = clamp_index(self.selected, list.versions.len());
                self.versions = Loadable::Loaded(list);
                Outcome::none()
            }
            ApiResponse::Versions { result: Err(e), .. } => {
                load_failed(&mut self.versions, "versions", &e)
            }
            ApiResponse::VersionActivated { version, result } => match result {
                Ok(()) => self
                    .reload()
                    .and_toast(format!("Version {version} activated"), ToastKind::Success),
                Err(e) => {
                    tracing::warn!("Failed to activate version {}: {}", version, e);
                    Outcome::error(format!("Failed to activate version: {}", e.message()))
                }
            },
            _ => Outcome::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> FunctionVersionsView {
        let (mut view, _) = FunctionVersionsView::new("f1", &ViewContext::default());
        let func: Function = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "name": "hello",
            "active_version": {"version": 3, "code": ""}
        }))
        .unwrap();
        let list: VersionList = serde_json::from_value(serde_json::json!({
            "versions": [
                {"version": 3, "created_at": 30},
                {"version": 2, "created_at": 20},
                {"version": 1, "created_at": 10}
            ],
            "pagination": {"total": 3, "limit": 20, "offset": 0}
        }))
        .unwrap();
        view.handle_response(ApiResponse::Function(Ok(func)));
        view.handle_response(ApiResponse::Versions {
            page: view.page,
            result: Ok(list),
        });
        view
    }

    fn versions_page(offset: u64, first: u32) -> VersionList {
        let versions: Vec<serde_json::Value> = (0..10)
            .map(|i| serde_json::json!({"version": first - i}))
            .collect();
        serde_json::from_value(serde_json::json!({
            "versions": versions,
            "pagination": {"total": 30, "limit": 10, "offset": offset}
        }))
        .unwrap()
    }

    #[test]
    fn test_initial_requests() {
        let (_, requests) = FunctionVersionsView::new("f1", &ViewContext::default());
        assert_eq!(
            requests,
            vec![
                ApiRequest::GetFunction { id: "f1".into() },
                ApiRequest::ListVersions {
                    id: "f1".into(),
                    limit: 20,
                    offset: 0
                }
            ]
        );
    }

    #[test]
    fn test_third_check_evicts_oldest() {
        let mut view = loaded();
        view.toggle_checked(3);
        view.toggle_checked(1);
        view.toggle_checked(2);
        assert_eq!(view.checked, vec![1, 2]);
        view.toggle_checked(1);
        assert_eq!(view.checked, vec![2]);
    }

    #[test]
    fn test_compare_orders_versions() {
        let mut view = loaded();
        let outcome = view.handle_key(&InputKey::Char('c')).unwrap();
        assert!(outcome.navigate.is_none());
        assert_eq!(outcome.toasts.len(), 1);

        view.handle_key(&InputKey::Char(' '));
        view.handle_key(&InputKey::Down);
        view.handle_key(&InputKey::Down);
        view.handle_key(&InputKey::Char(' '));
        let outcome = view.handle_key(&InputKey::Char('c')).unwrap();
        assert_eq!(
            outcome.navigate,
            Some(Route::VersionDiff {
                id: "f1".into(),
                old: 1,
                new: 3
            })
        );
    }

    #[test]
    fn test_activate_asks_for_confirmation() {
        let mut view = loaded();
        let outcome = view.handle_key(&InputKey::Char('a')).unwrap();
        assert!(outcome.confirm.is_none());
        assert_eq!(outcome.toasts[0].0, "Version 3 is already active");

        view.handle_key(&InputKey::Down);
        let outcome = view.handle_key(&InputKey::Char('a')).unwrap();
        let dialog = outcome.confirm.unwrap();
        assert_eq!(dialog.message, "Activate version 2?");
    }

    #[test]
    fn test_activated_reloads_with_toast() {
        let mut view = loaded();
        let outcome = view.handle_response(ApiResponse::VersionActivated {
            version: 2,
            result: Ok(()),
        });
        assert_eq!(outcome.toasts[0].0, "Version 2 activated");
        assert_eq!(outcome.requests.len(), 2);
        assert!(view.versions.is_loading());
    }

    #[test]
    fn test_page_size_change_ignores_late_old_page() {
        let mut view = loaded();
        view.handle_key(&InputKey::Char('-'));
        assert_eq!(view.page, PageState { limit: 10, offset: 0 });
        view.handle_key(&InputKey::Char(']'));
        assert_eq!(view.page.offset, 0);

        view.handle_response(ApiResponse::Versions {
            page: view.page,
            result: Ok(versions_page(0, 30)),
        });
        view.handle_key(&InputKey::Char(']'));
        assert_eq!(view.page, PageState { limit: 10, offset: 10 });

        view.handle_response(ApiResponse::Versions {
            page: PageState { limit: 10, offset: 10 },
            result: Ok(versions_page(10, 20)),
        });
        view.handle_response(ApiResponse::Versions {
            page: PageState { limit: 10, offset: 0 },
            result: Ok(versions_page(0, 30)),
        });
        assert_eq!(view.rows()[0].version, 20);
    }
}
