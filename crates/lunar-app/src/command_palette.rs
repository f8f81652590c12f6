//! Command palette: quick navigation to any function screen.
//!
//! Opening the palette bumps its own generation and asks for the first page
//! of functions; candidates are rebuilt when that page arrives. Filtering is a
//! case-insensitive substring match on label or description.

use lunar_core::Function;

use crate::input_key::InputKey;
use crate::route::Route;
use crate::text_input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteItemKind {
    Navigation,
    Function,
}

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub label: String,
    pub description: String,
    pub route: Route,
    pub kind: PaletteItemKind,
    /// Function is disabled; only the main entry shows the badge
    pub disabled: bool,
}

impl PaletteItem {
    fn nav(label: &str, description: &str, route: Route) -> Self {
        Self {
            label: label.to_string(),
            description: description.to_string(),
            route,
            kind: PaletteItemKind::Navigation,
            disabled: false,
        }
    }

    fn function(label: String, description: &str, route: Route, disabled: bool) -> Self {
        Self {
            label,
            description: description.to_string(),
            route,
            kind: PaletteItemKind::Function,
            disabled,
        }
    }

    pub fn matches(&self, needle_lower: &str) -> bool {
        self.label.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

/// Entries that exist without any function loaded
pub fn navigation_items() -> Vec<PaletteItem> {
    vec![
        PaletteItem::nav("Functions", "View all functions", Route::FunctionsList),
        PaletteItem::nav("Create Function", "Create a new function", Route::FunctionCreate),
    ]
}

/// Navigation entries followed by five entries per function
pub fn build_items(functions: &[Function]) -> Vec<PaletteItem> {
    let mut items = navigation_items();
    for func in functions {
        let id = func.id.as_str();
        let name = func.name.as_str();
        items.push(PaletteItem::function(
            name.to_string(),
            "Go to Code",
            Route::FunctionCode { id: id.into() },
            func.disabled,
        ));
        for (suffix, description, route) in [
            ("Versions", "View version history", Route::FunctionVersions { id: id.into() }),
            ("Executions", "View execution logs", Route::FunctionExecutions { id: id.into() }),
            ("Settings", "Configure function", Route::FunctionSettings { id: id.into() }),
            ("Test", "Test function", Route::FunctionTest { id: id.into() }),
        ] {
            items.push(PaletteItem::function(
                format!("{name} → {suffix}"),
                description,
                route,
                false,
            ));
        }
    }
    items
}

/// Indices of `items` matching `query`; everything for a blank query
pub fn filter_items(items: &[PaletteItem], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..items.len()).collect();
    }
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.matches(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// What a key press inside the palette asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteOutcome {
    None,
    Close,
    Navigate(Route),
}

#[derive(Debug, Clone, Default)]
pub struct CommandPaletteState {
    open: bool,
    pub query: TextInput,
    pub loading: bool,
    items: Vec<PaletteItem>,
    filtered: Vec<usize>,
    selected: usize,
    generation: u64,
}

impl CommandPaletteState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open with a fresh query. Returns the generation the function load
    /// must carry to be accepted.
    pub fn open(&mut self) -> u64 {
        self.generation += 1;
        self.open = true;
        self.loading = true;
        self.query.clear();
        self.selected = 0;
        self.items = navigation_items();
        self.refilter();
        self.generation
    }

    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    /// Install the loaded functions. A failed load passes an empty slice.
    pub fn set_functions(&mut self, functions: &[Function]) {
        self.loading = false;
        self.items = build_items(functions);
        self.refilter();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query.set_value(query);
        self.selected = 0;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_items(&self.items, self.query.value());
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
    }

    pub fn candidates(&self) -> &[PaletteItem] {
        &self.items
    }

    pub fn results(&self) -> impl Iterator<Item = &PaletteItem> {
        self.filtered.iter().filter_map(|i| self.items.get(*i))
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&PaletteItem> {
        self.filtered
            .get(self.selected)
            .and_then(|i| self.items.get(*i))
    }

    pub fn select_next(&mut self) {
        self.selected += 1;
        self.clamp_selection();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn handle_key(&mut self, key: &InputKey) -> PaletteOutcome {
        match key {
            InputKey::Esc | InputKey::CharCtrl('k') => PaletteOutcome::Close,
            InputKey::Up | InputKey::CharCtrl('p') => {
                self.select_previous();
                PaletteOutcome::None
            }
            InputKey::Down | InputKey::CharCtrl('n') => {
                self.select_next();
                PaletteOutcome::None
            }
            InputKey::Enter => match self.selected_item() {
                Some(item) => PaletteOutcome::Navigate(item.route.clone()),
                None => PaletteOutcome::None,
            },
            other => {
                if self.query.handle_key(other).edited() {
                    self.selected = 0;
                    self.refilter();
                }
                PaletteOutcome::None
            }
        }
    }
}
