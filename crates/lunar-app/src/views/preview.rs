//! Component gallery rendered from static sample data

use lunar_core::{DiffLine, ExecutionLog, LineType, LogLevel, VersionDiff};

use crate::input_key::InputKey;
use crate::route::Route;
use crate::toast::ToastKind;

use super::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewComponent {
    Badges,
    Buttons,
    Cards,
    Pagination,
    DiffViewer,
    Toasts,
    LogViewer,
    Forms,
    ApiReference,
}

impl PreviewComponent {
    pub const ALL: [PreviewComponent; 9] = [
        PreviewComponent::Badges,
        PreviewComponent::Buttons,
        PreviewComponent::Cards,
        PreviewComponent::Pagination,
        PreviewComponent::DiffViewer,
        PreviewComponent::Toasts,
        PreviewComponent::LogViewer,
        PreviewComponent::Forms,
        PreviewComponent::ApiReference,
    ];

    /// Path segment under `/preview/`
    pub fn slug(&self) -> &'static str {
        match self {
            PreviewComponent::Badges => "badges",
            PreviewComponent::Buttons => "buttons",
            PreviewComponent::Cards => "cards",
            PreviewComponent::Pagination => "pagination",
            PreviewComponent::DiffViewer => "diff-viewer",
            PreviewComponent::Toasts => "toasts",
            PreviewComponent::LogViewer => "log-viewer",
            PreviewComponent::Forms => "forms",
            PreviewComponent::ApiReference => "api-reference",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreviewComponent::Badges => "Badges",
            PreviewComponent::Buttons => "Buttons",
            PreviewComponent::Cards => "Cards",
            PreviewComponent::Pagination => "Pagination",
            PreviewComponent::DiffViewer => "Diff Viewer",
            PreviewComponent::Toasts => "Toasts",
            PreviewComponent::LogViewer => "Log Viewer",
            PreviewComponent::Forms => "Forms",
            PreviewComponent::ApiReference => "API Reference",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    /// `None` shows the first component with nothing highlighted in the route
    pub component: Option<PreviewComponent>,
}

impl PreviewView {
    pub fn new(slug: Option<&str>) -> Self {
        let component = slug.and_then(|s| {
            let found = PreviewComponent::from_slug(s);
            if found.is_none() {
                tracing::debug!("Unknown preview component: {}", s);
            }
            found
        });
        Self { component }
    }

    /// Component being displayed
    pub fn current(&self) -> PreviewComponent {
        self.component.unwrap_or(PreviewComponent::Badges)
    }

    fn index(&self) -> usize {
        let current = self.current();
        PreviewComponent::ALL
            .iter()
            .position(|c| *c == current)
            .unwrap_or(0)
    }

    fn route_to(index: usize) -> Route {
        Route::Preview {
            component: Some(PreviewComponent::ALL[index].slug().to_string()),
        }
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        let last = PreviewComponent::ALL.len() - 1;
        let index = self.index();
        match key {
            InputKey::Up | InputKey::Char('k') => {
                Some(Outcome::navigate(Self::route_to(index.saturating_sub(1))))
            }
            InputKey::Down | InputKey::Char('j') => {
                Some(Outcome::navigate(Self::route_to((index + 1).min(last))))
            }
            InputKey::Char('t') => Some(
                Outcome::success("Function saved successfully")
                    .and_toast("Failed to connect to server", ToastKind::Error)
                    .and_toast("Deploying new version...", ToastKind::Info),
            ),
            _ => None,
        }
    }
}

/// Two-version diff used by the diff viewer sample
pub fn sample_diff() -> VersionDiff {
    VersionDiff {
        old_version: 1,
        new_version: 2,
        diff: vec![
            DiffLine::new(LineType::Unchanged, Some(1), Some(1), "function handler(ctx, event)"),
            DiffLine::new(LineType::Removed, Some(2), None, "  return { statusCode = 200 }"),
            DiffLine::new(LineType::Added, None, Some(2), "  local name = event.query.name or \"World\""),
            DiffLine::new(LineType::Added, None, Some(3), "  return { statusCode = 200, body = \"Hello, \" .. name }"),
            DiffLine::new(LineType::Unchanged, Some(3), Some(4), "end"),
        ],
    }
}

/// Log lines covering every level
pub fn sample_logs() -> Vec<ExecutionLog> {
    let line = |id: i64, level: LogLevel, message: &str| ExecutionLog {
        id,
        execution_id: "exec-sample".to_string(),
        level,
        message: message.to_string(),
        created_at: 1_700_000_000 + id,
    };
    vec![
        line(1, LogLevel::Debug, "Parsing request body"),
        line(2, LogLevel::Info, "Processing request for user 42"),
        line(3, LogLevel::Warn, "Cache miss, falling back to database"),
        line(4, LogLevel::Error, "Upstream returned 503"),
    ]
}
