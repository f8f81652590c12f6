//! Transient notifications stacked in the corner of the screen

use std::time::{Duration, Instant};

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// All visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            duration,
        }
    }

    /// Queue a toast that expires after the configured duration
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!("Toast #{} ({:?}): {}", id, kind, message);
        self.items.push(Toast {
            id,
            message,
            kind,
            expires_at: now + self.duration,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    /// Drop every toast whose deadline has passed. Returns how many went.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        before - self.items.len()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}
