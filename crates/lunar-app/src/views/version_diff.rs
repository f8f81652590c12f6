//! Side-by-side numbered diff between two versions

use lunar_core::{Function, VersionDiff};

use crate::input_key::InputKey;
use crate::request::{ApiRequest, ApiResponse};

use super::{load_failed, Loadable, Outcome};

const PAGE_LINES: usize = 10;

#[derive(Debug, Clone)]
pub struct VersionDiffView {
    pub id: String,
    pub old: u32,
    pub new: u32,
    pub function: Loadable<Function>,
    pub diff: Loadable<VersionDiff>,
    /// First visible diff line
    pub scroll: usize,
}

impl VersionDiffView {
    pub fn new(id: &str, old: u32, new: u32) -> (Self, Vec<ApiRequest>) {
        let view = Self {
            id: id.to_string(),
            old,
            new,
            function: Loadable::Loading,
            diff: Loadable::Loading,
            scroll: 0,
        };
        let requests = vec![
            ApiRequest::GetFunction { id: id.to_string() },
            ApiRequest::DiffVersions {
                id: id.to_string(),
                old,
                new,
            },
        ];
        (view, requests)
    }

    /// `{name} - v{old} → v{new}`
    pub fn subtitle(&self) -> String {
        let name = self
            .function
            .loaded()
            .map(|f| f.name.as_str())
            .unwrap_or(self.id.as_str());
        format!("{} - v{} → v{}", name, self.old, self.new)
    }

    fn max_scroll(&self) -> usize {
        self.diff
            .loaded()
            .map(|d| d.diff.len().saturating_sub(1))
            .unwrap_or(0)
    }

    pub fn handle_key(&mut self, key: &InputKey) -> Option<Outcome> {
        let max = self.max_scroll();
        self.scroll = match key {
            InputKey::Up | InputKey::Char('k') => self.scroll.saturating_sub(1),
            InputKey::Down | InputKey::Char('j') => (self.scroll + 1).min(max),
            InputKey::PageUp => self.scroll.saturating_sub(PAGE_LINES),
            InputKey::PageDown => (self.scroll + PAGE_LINES).min(max),
            InputKey::Home | InputKey::Char('g') => 0,
            InputKey::End | InputKey::Char('G') => max,
            _ => return None,
        };
        Some(Outcome::none())
    }

    pub fn handle_response(&mut self, response: ApiResponse) -> Outcome {
        match response {
            ApiResponse::Function(Ok(func)) => {
                self.function = Loadable::Loaded(func);
                Outcome::none()
            }
            ApiResponse::Function(Err(e)) => {
                self.diff = Loadable::NotFound;
                load_failed(&mut self.function, "function", &e)
            }
            ApiResponse::Diff(Ok(diff)) => {
                if !self.function.is_not_found() {
                    self.diff = Loadable::Loaded(diff);
                }
                self.scroll = 0;
                Outcome::none()
            }
            ApiResponse::Diff(Err(e)) => load_failed(&mut self.diff, "diff", &e),
            _ => Outcome::none(),
        }
    }
}
