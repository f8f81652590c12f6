//! Offset/limit paging shared by every list screen

use lunar_core::Pagination;

use crate::input_key::InputKey;

/// Page sizes the user can cycle through
pub const PER_PAGE_OPTIONS: [u64; 3] = [10, 20, 50];

/// Derived page numbers for a server pagination block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationModel {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl PaginationModel {
    pub fn new(total: u64, limit: u64, offset: u64) -> Self {
        Self {
            total,
            limit: limit.max(1),
            offset,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.offset / self.limit + 1
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }

    /// 1-based index of the first item on the page
    pub fn start(&self) -> u64 {
        self.offset + 1
    }

    pub fn end(&self) -> u64 {
        (self.offset + self.limit).min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    /// `Showing {start} to {end} of {total} results`, or `None` when empty
    pub fn summary(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        Some(format!(
            "Showing {} to {} of {} results",
            self.start(),
            self.end(),
            self.total
        ))
    }
}

impl From<Pagination> for PaginationModel {
    fn from(p: Pagination) -> Self {
        PaginationModel::new(p.total, p.limit, p.offset)
    }
}

/// The page a list screen is currently asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub limit: u64,
    pub offset: u64,
}

impl PageState {
    pub fn new(limit: u64) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
        }
    }

    /// Advance one page if `total` has more items. Returns whether it moved.
    pub fn next(&mut self, total: u64) -> bool {
        let model = PaginationModel::new(total, self.limit, self.offset);
        if !model.has_next() {
            return false;
        }
        self.offset += self.limit;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.offset == 0 {
            return false;
        }
        self.offset = self.offset.saturating_sub(self.limit);
        true
    }

    /// Switch to the next or previous per-page option and go back to page one
    pub fn cycle_limit(&mut self, forward: bool) {
        let idx = PER_PAGE_OPTIONS
            .iter()
            .position(|o| *o == self.limit)
            .unwrap_or(1);
        let len = PER_PAGE_OPTIONS.len();
        let idx = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.limit = PER_PAGE_OPTIONS[idx];
        self.offset = 0;
    }

    /// `[`/`]` change page, `+`/`-` change page size.
    ///
    /// Returns `None` for other keys, otherwise whether a new page is needed.
    pub fn handle_key(&mut self, key: &InputKey, total: u64) -> Option<bool> {
        match key {
            InputKey::Char('[') => Some(self.prev()),
            InputKey::Char(']') => Some(self.next(total)),
            InputKey::Char('+') | InputKey::Char('=') => {
                self.cycle_limit(true);
                Some(true)
            }
            InputKey::Char('-') => {
                self.cycle_limit(false);
                Some(true)
            }
            _ => None,
        }
    }
}
