//! Row-based editor for a function's environment variables.
//!
//! Each row remembers how it relates to the server copy so the screen can
//! mark additions, edits and pending removals before anything is saved.

use lunar_core::EnvVars;

use crate::input_key::InputKey;
use crate::text_input::{KeyOutcome, TextInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Original,
    Added,
    Modified,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvColumn {
    #[default]
    Key,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRow {
    pub key: TextInput,
    pub value: TextInput,
    pub state: RowState,
}

impl EnvRow {
    fn original(key: &str, value: &str) -> Self {
        let mut masked = TextInput::masked();
        masked.set_value(value);
        Self {
            key: TextInput::new(key),
            value: masked,
            state: RowState::Original,
        }
    }

    fn added() -> Self {
        Self {
            key: TextInput::default(),
            value: TextInput::masked(),
            state: RowState::Added,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvEditor {
    rows: Vec<EnvRow>,
    pub selected: usize,
    pub column: EnvColumn,
}

impl EnvEditor {
    pub fn from_vars(vars: &EnvVars) -> Self {
        Self {
            rows: vars.iter().map(|(k, v)| EnvRow::original(k, v)).collect(),
            selected: 0,
            column: EnvColumn::Key,
        }
    }

    pub fn rows(&self) -> &[EnvRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether anything differs from the server copy
    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(|r| r.state != RowState::Original)
    }

    /// Append an empty row and select it
    pub fn add(&mut self) {
        self.rows.push(EnvRow::added());
        self.selected = self.rows.len() - 1;
        self.column = EnvColumn::Key;
    }

    /// Added rows are dropped, removed rows restored, anything else marked removed
    pub fn toggle_remove(&mut self, index: usize) {
        let Some(state) = self.rows.get(index).map(|r| r.state) else {
            return;
        };
        match state {
            RowState::Added => {
                self.rows.remove(index);
                self.selected = self.selected.min(self.rows.len().saturating_sub(1));
            }
            RowState::Removed => self.rows[index].state = RowState::Original,
            RowState::Original | RowState::Modified => {
                self.rows[index].state = RowState::Removed
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_column(&mut self) {
        self.column = match self.column {
            EnvColumn::Key => EnvColumn::Value,
            EnvColumn::Value => EnvColumn::Key,
        };
    }

    /// Route an editing key to the selected cell
    pub fn edit_selected(&mut self, key: &InputKey) -> KeyOutcome {
        let column = self.column;
        let Some(row) = self.rows.get_mut(self.selected) else {
            return KeyOutcome::Ignored;
        };
        if row.state == RowState::Removed {
            return KeyOutcome::Ignored;
        }
        let input = match column {
            EnvColumn::Key => &mut row.key,
            EnvColumn::Value => &mut row.value,
        };
        let outcome = input.handle_key(key);
        if outcome.edited() && row.state == RowState::Original {
            row.state = RowState::Modified;
        }
        outcome
    }

    /// Treat the current rows as the server copy after a successful save
    pub fn commit(&mut self) {
        let (selected, column) = (self.selected, self.column);
        *self = Self::from_vars(&self.collect());
        self.selected = selected.min(self.rows.len().saturating_sub(1));
        self.column = column;
    }

    /// Mapping to send: every kept row with a key or a value
    pub fn collect(&self) -> EnvVars {
        self.rows
            .iter()
            .filter(|r| r.state != RowState::Removed)
            .filter(|r| !r.key.is_empty() || !r.value.is_empty())
            .map(|r| (r.key.value().to_string(), r.value.value().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> EnvEditor {
        let mut vars = EnvVars::new();
        vars.insert("API_URL".into(), "https://x".into());
        vars.insert("TOKEN".into(), "abc".into());
        EnvEditor::from_vars(&vars)
    }

    #[test]
    fn test_loaded_rows_are_original() {
        let ed = editor();
        assert_eq!(ed.rows().len(), 2);
        assert!(ed.rows().iter().all(|r| r.state == RowState::Original));
        assert!(!ed.has_changes());
        assert!(ed.rows()[0].value.is_masked());
    }

    #[test]
    fn test_add_appends_added_row() {
        let mut ed = editor();
        ed.add();
        assert_eq!(ed.rows()[2].state, RowState::Added);
        assert_eq!(ed.selected, 2);
        assert!(ed.has_changes());
    }

    #[test]
    fn test_editing_original_marks_modified() {
        let mut ed = editor();
        ed.column = EnvColumn::Value;
        ed.edit_selected(&InputKey::Char('!'));
        assert_eq!(ed.rows()[0].state, RowState::Modified);
        assert_eq!(ed.rows()[0].value.value(), "https://x!");
    }

    #[test]
    fn test_editing_added_stays_added() {
        let mut ed = editor();
        ed.add();
        ed.edit_selected(&InputKey::Char('K'));
        assert_eq!(ed.rows()[2].state, RowState::Added);
    }

    #[test]
    fn test_cursor_moves_do_not_modify() {
        let mut ed = editor();
        ed.edit_selected(&InputKey::Left);
        assert_eq!(ed.rows()[0].state, RowState::Original);
    }

    #[test]
    fn test_toggle_remove_transitions() {
        let mut ed = editor();
        ed.toggle_remove(0);
        assert_eq!(ed.rows()[0].state, RowState::Removed);
        ed.toggle_remove(0);
        assert_eq!(ed.rows()[0].state, RowState::Original);

        ed.column = EnvColumn::Key;
        ed.edit_selected(&InputKey::Char('X'));
        ed.toggle_remove(0);
        assert_eq!(ed.rows()[0].state, RowState::Removed);

        ed.add();
        ed.toggle_remove(2);
        assert_eq!(ed.rows().len(), 2);
    }

    #[test]
    fn test_removed_rows_are_read_only() {
        let mut ed = editor();
        ed.toggle_remove(0);
        assert_eq!(ed.edit_selected(&InputKey::Char('x')), KeyOutcome::Ignored);
    }

    #[test]
    fn test_collect_skips_removed_and_blank_rows() {
        let mut ed = editor();
        ed.toggle_remove(1);
        ed.add();
        ed.add();
        ed.edit_selected(&InputKey::Char('N'));
        ed.toggle_column();
        ed.edit_selected(&InputKey::Char('1'));

        let vars = ed.collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("API_URL").map(String::as_str), Some("https://x"));
        assert_eq!(vars.get("N").map(String::as_str), Some("1"));
        assert!(!vars.contains_key("TOKEN"));
    }

    #[test]
    fn test_commit_clears_row_states() {
        let mut ed = editor();
        ed.add();
        ed.edit_selected(&InputKey::Char('K'));
        ed.toggle_remove(0);
        ed.commit();
        assert!(!ed.has_changes());
        assert_eq!(ed.collect().get("K").map(String::as_str), Some(""));
        assert!(!ed.collect().contains_key("API_URL"));
        assert!(ed.selected < ed.rows().len());
    }
}
