//! Per-screen state.
//!
//! Each screen owns a state struct that knows which requests it needs on
//! entry, how it reacts to keys, and how it folds backend responses into
//! itself. Screens never touch shared state directly; they describe effects
//! through an [`Outcome`] that `update()` applies.

pub mod execution_detail;
pub mod function_code;
pub mod function_create;
pub mod function_executions;
pub mod function_settings;
pub mod function_test;
pub mod function_versions;
pub mod functions_list;
pub mod login;
pub mod preview;
pub mod version_diff;

pub use execution_detail::ExecutionDetailView;
pub use function_code::FunctionCodeView;
pub use function_create::{CreateField, FunctionCreateView};
pub use function_executions::FunctionExecutionsView;
pub use function_settings::{FunctionSettingsView, GeneralField, SettingsSection};
pub use function_test::{FunctionTestView, TestField};
pub use function_versions::FunctionVersionsView;
pub use functions_list::FunctionsListView;
pub use login::LoginView;
pub use preview::{PreviewComponent, PreviewView};
pub use version_diff::VersionDiffView;

use lunar_api::ApiError;
use lunar_core::Function;

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::pagination::PageState;
use crate::request::{ApiRequest, ApiResponse};
use crate::route::Route;
use crate::toast::ToastKind;

/// Data fetched for a screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    /// The fetch failed; rendered as an inline "not found" card
    NotFound,
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Loadable::NotFound)
    }
}

/// Values every screen is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    pub page_size: u64,
    pub base_url: String,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self {
            page_size: 20,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Effects a screen asks `update()` to carry out
#[derive(Debug, Default)]
pub struct Outcome {
    pub requests: Vec<ApiRequest>,
    pub navigate: Option<Route>,
    pub toasts: Vec<(String, ToastKind)>,
    pub confirm: Option<ConfirmDialogState>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn request(request: ApiRequest) -> Self {
        Self::none().and_request(request)
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            ..Self::default()
        }
    }

    pub fn confirm(dialog: ConfirmDialogState) -> Self {
        Self {
            confirm: Some(dialog),
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::none().and_toast(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::none().and_toast(message, ToastKind::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::none().and_toast(message, ToastKind::Info)
    }

    pub fn and_request(mut self, request: ApiRequest) -> Self {
        self.requests.push(request);
        self
    }

    pub fn and_toast(mut self, message: impl Into<String>, kind: ToastKind) -> Self {
        self.toasts.push((message.into(), kind));
        self
    }

    pub fn and_navigate(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }
}

/// Initial-load failure: logged, toasted, and the data marked not found
pub(crate) fn load_failed<T>(slot: &mut Loadable<T>, what: &str, err: &ApiError) -> Outcome {
    tracing::warn!("Failed to load {}: {}", what, err);
    *slot = Loadable::NotFound;
    Outcome::error(err.message())
}

/// Whether a list response belongs to a page other than `current`.
///
/// Paging reuses the screen's ticket, so an older page can arrive after a
/// newer one was requested.
pub(crate) fn is_stale_page(current: &PageState, page: &PageState, what: &str) -> bool {
    if current == page {
        return false;
    }
    tracing::debug!(
        "Dropping stale {} page (offset {}, limit {}); now at offset {}, limit {}",
        what,
        page.offset,
        page.limit,
        current.offset,
        current.limit
    );
    true
}

/// Clamp a row selection into `0..len`
pub(crate) fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Up/Down style movement shared by table screens. `None` if not a movement key.
pub(crate) fn move_selection(selected: &mut usize, len: usize, key: &InputKey) -> Option<()> {
    match key {
        InputKey::Up | InputKey::Char('k') => *selected = selected.saturating_sub(1),
        InputKey::Down | InputKey::Char('j') => *selected = clamp_index(*selected + 1, len),
        InputKey::Home | InputKey::Char('g') => *selected = 0,
        InputKey::End | InputKey::Char('G') => *selected = len.saturating_sub(1),
        _ => return None,
    }
    Some(())
}

/// The screen currently shown
#[derive(Debug, Clone)]
pub enum View {
    Login(LoginView),
    FunctionsList(FunctionsListView),
    FunctionCreate(FunctionCreateView),
    FunctionCode(FunctionCodeView),
    FunctionVersions(FunctionVersionsView),
    FunctionExecutions(FunctionExecutionsView),
    FunctionSettings(FunctionSettingsView),
    FunctionTest(FunctionTestView),
    VersionDiff(VersionDiffView),
    ExecutionDetail(ExecutionDetailView),
    Preview(PreviewView),
}

impl View {
    /// Fresh state for `route` plus the requests it needs on entry
    pub fn for_route(route: &Route, ctx: &ViewContext) -> (View, Vec<ApiRequest>) {
        match route {
            Route::Login => (View::Login(LoginView::new(Route::FunctionsList)), Vec::new()),
            Route::FunctionsList => {
                let (view, requests) = FunctionsListView::new(ctx);
                (View::FunctionsList(view), requests)
            }
            Route::FunctionCreate => (View::FunctionCreate(FunctionCreateView::new()), Vec::new()),
            Route::FunctionCode { id } => {
                let (view, requests) = FunctionCodeView::new(id);
                (View::FunctionCode(view), requests)
            }
            Route::FunctionVersions { id } => {
                let (view, requests) = FunctionVersionsView::new(id, ctx);
                (View::FunctionVersions(view), requests)
            }
            Route::FunctionExecutions { id } => {
                let (view, requests) = FunctionExecutionsView::new(id, ctx);
                (View::FunctionExecutions(view), requests)
            }
            Route::FunctionSettings { id } => {
                let (view, requests) = FunctionSettingsView::new(id, ctx);
                (View::FunctionSettings(view), requests)
            }
            Route::FunctionTest { id } => {
                let (view, requests) = FunctionTestView::new(id, ctx);
                (View::FunctionTest(view), requests)
            }
            Route::VersionDiff { id, old, new } => {
                let (view, requests) = VersionDiffView::new(id, *old, *new);
                (View::VersionDiff(view), requests)
            }
            Route::ExecutionDetail { id } => {
                let (view, requests) = ExecutionDetailView::new(id, ctx);
                (View::ExecutionDetail(view), requests)
            }
            Route::Preview { component } => (
                View::Preview(PreviewView::new(component.as_deref())),
                Vec::new(),
            ),
        }
    }

    /// Screen-specific key handling; `None` lets global bindings run
    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        match self {
            View::Login(v) => v.handle_key(key),
            View::FunctionsList(v) => v.handle_key(key),
            View::FunctionCreate(v) => v.handle_key(key),
            View::FunctionCode(v) => v.handle_key(key),
            View::FunctionVersions(v) => v.handle_key(key),
            View::FunctionExecutions(v) => v.handle_key(key),
            View::FunctionSettings(v) => v.handle_key(key),
            View::FunctionTest(v) => v.handle_key(key),
            View::VersionDiff(v) => v.handle_key(key),
            View::ExecutionDetail(v) => v.handle_key(key),
            View::Preview(v) => v.handle_key(key),
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match self {
            View::Login(v) => v.handle_response(response),
            View::FunctionsList(v) => v.handle_response(response),
            View::FunctionCreate(v) => v.handle_response(response),
            View::FunctionCode(v) => v.handle_response(response),
            View::FunctionVersions(v) => v.handle_response(response),
            View::FunctionExecutions(v) => v.handle_response(response),
            View::FunctionSettings(v) => v.handle_response(response),
            View::FunctionTest(v) => v.handle_response(response),
            View::VersionDiff(v) => v.handle_response(response),
            View::ExecutionDetail(v) => v.handle_response(response),
            View::Preview(_) => Outcome::none(),
        }
    }

    /// Function shown in the header of per-function screens
    pub fn function(&self) -> Option<&Function> {
        match self {
            View::FunctionCode(v) => v.function.loaded(),
            View::FunctionVersions(v) => v.function.loaded(),
            View::FunctionExecutions(v) => v.function.loaded(),
            View::FunctionSettings(v) => v.function.loaded(),
            View::FunctionTest(v) => v.function.loaded(),
            View::VersionDiff(v) => v.function.loaded(),
            View::ExecutionDetail(v) => v.function.as_ref(),
            _ => None,
        }
    }

    /// Function an execution detail belongs to, once known
    pub fn execution_function_id(&self) -> Option<&str> {
        match self {
            View::ExecutionDetail(v) => v.execution.loaded().map(|e| e.function_id.as_str()),
            _ => None,
        }
    }
}
