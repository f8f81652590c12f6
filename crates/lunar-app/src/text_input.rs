//! Editable text buffers for forms and the code editor.
//!
//! Cursors are char indices so multi-byte input never splits a character.

use crate::input_key::InputKey;

/// What a key did to a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a key this buffer handles
    Ignored,
    /// Cursor moved, content unchanged
    Moved,
    /// Content changed
    Edited,
}

impl KeyOutcome {
    pub fn consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }

    pub fn edited(&self) -> bool {
        matches!(self, KeyOutcome::Edited)
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// Single line
// ─────────────────────────────────────────────────────────────────────────────

/// Single-line input, optionally masked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            masked: false,
        }
    }

    /// Input whose content is rendered as bullets
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text to draw: the value, or one bullet per char when masked
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = byte_index(&self.value, self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = byte_index(&self.value, self.cursor);
        self.value.remove(idx);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let idx = byte_index(&self.value, self.cursor);
        self.value.remove(idx);
        true
    }

    pub fn handle_key(&mut self, key: &InputKey) -> KeyOutcome {
        match key {
            InputKey::Char(c) => {
                self.insert_char(*c);
                KeyOutcome::Edited
            }
            InputKey::Backspace => {
                if self.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            InputKey::Delete => {
                if self.delete() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            InputKey::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyOutcome::Moved
            }
            InputKey::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                KeyOutcome::Moved
            }
            InputKey::Home => {
                self.cursor = 0;
                KeyOutcome::Moved
            }
            InputKey::End => {
                self.cursor = self.value.chars().count();
                KeyOutcome::Moved
            }
            InputKey::CharCtrl('u') => {
                self.clear();
                KeyOutcome::Edited
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multi line
// ─────────────────────────────────────────────────────────────────────────────

/// Multi-line buffer used for code, headers and request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: usize = 10;

impl TextArea {
    pub fn new(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            row: 0,
            col: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// (row, col) of the cursor, both 0-based
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn set_text(&mut self, text: &str) {
        *self = TextArea::new(text);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(self.line_len(self.row));
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        line.insert(idx, c);
        self.col += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.insert_newline();
            } else {
                self.insert_char(c);
            }
        }
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        let tail = line.split_off(idx);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) -> bool {
        if self.col > 0 {
            self.col -= 1;
            let line = &mut self.lines[self.row];
            let idx = byte_index(line, self.col);
            line.remove(idx);
            return true;
        }
        if self.row == 0 {
            return false;
        }
        let current = self.lines.remove(self.row);
        self.row -= 1;
        self.col = self.line_len(self.row);
        self.lines[self.row].push_str(&current);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.col < self.line_len(self.row) {
            let line = &mut self.lines[self.row];
            let idx = byte_index(line, self.col);
            line.remove(idx);
            return true;
        }
        if self.row + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(self.row + 1);
        self.lines[self.row].push_str(&next);
        true
    }

    pub fn handle_key(&mut self, key: &InputKey) -> KeyOutcome {
        match key {
            InputKey::Char(c) => {
                self.insert_char(*c);
                KeyOutcome::Edited
            }
            InputKey::Enter => {
                self.insert_newline();
                KeyOutcome::Edited
            }
            InputKey::Backspace => {
                if self.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            InputKey::Delete => {
                if self.delete() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Moved
                }
            }
            InputKey::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.line_len(self.row);
                }
                KeyOutcome::Moved
            }
            InputKey::Right => {
                if self.col < self.line_len(self.row) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                KeyOutcome::Moved
            }
            InputKey::Up => {
                self.row = self.row.saturating_sub(1);
                self.clamp_col();
                KeyOutcome::Moved
            }
            InputKey::Down => {
                self.row = (self.row + 1).min(self.lines.len() - 1);
                self.clamp_col();
                KeyOutcome::Moved
            }
            InputKey::PageUp => {
                self.row = self.row.saturating_sub(PAGE_ROWS);
                self.clamp_col();
                KeyOutcome::Moved
            }
            InputKey::PageDown => {
                self.row = (self.row + PAGE_ROWS).min(self.lines.len() - 1);
                self.clamp_col();
                KeyOutcome::Moved
            }
            InputKey::Home => {
                self.col = 0;
                KeyOutcome::Moved
            }
            InputKey::End => {
                self.col = self.line_len(self.row);
                KeyOutcome::Moved
            }
            _ => KeyOutcome::Ignored,
        }
    }
}
