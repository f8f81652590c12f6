//! Configuration types

use serde::{Deserialize, Serialize};

use crate::pagination::PER_PAGE_OPTIONS;

/// Backend the console talks to when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Lowest accepted event-poll interval
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Root of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub ui: UiSettings,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub base_url: String,
    /// Logs in automatically at startup when set
    pub api_key: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Rows per page on list screens (10, 20 or 50)
    pub page_size: u64,
    pub toast_duration_ms: u64,
    /// Functions loaded into the command palette
    pub palette_limit: u64,
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            toast_duration_ms: 3000,
            palette_limit: 100,
            tick_rate_ms: 50,
        }
    }
}

/// Values that override the file, highest priority first in the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    /// Apply overrides, ignoring blank values
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(url) = overrides.base_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                self.server.base_url = url.to_string();
            }
        }
        if let Some(key) = overrides.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                self.server.api_key = Some(key.to_string());
            }
        }
    }

    /// Clamp out-of-range values to something usable
    pub fn validated(mut self) -> Self {
        if !PER_PAGE_OPTIONS.contains(&self.ui.page_size) {
            let nearest = PER_PAGE_OPTIONS
                .iter()
                .copied()
                .min_by_key(|o| o.abs_diff(self.ui.page_size))
                .unwrap_or(20);
            tracing::warn!(
                "page_size {} is not one of {:?}, using {}",
                self.ui.page_size,
                PER_PAGE_OPTIONS,
                nearest
            );
            self.ui.page_size = nearest;
        }
        if self.ui.tick_rate_ms < MIN_TICK_RATE_MS {
            self.ui.tick_rate_ms = MIN_TICK_RATE_MS;
        }
        if self.ui.palette_limit == 0 {
            self.ui.palette_limit = UiSettings::default().palette_limit;
        }
        self.server.base_url = self.server.base_url.trim().trim_end_matches('/').to_string();
        if self.server.base_url.is_empty() {
            self.server.base_url = DEFAULT_BASE_URL.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://localhost:3000");
        assert_eq!(settings.ui.page_size, 20);
        assert_eq!(settings.ui.toast_duration_ms, 3000);
        assert_eq!(settings.ui.palette_limit, 100);
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("[ui]\npage_size = 50\n").unwrap();
        assert_eq!(settings.ui.page_size, 50);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validated_clamps() {
        let mut settings = Settings::default();
        settings.ui.page_size = 30;
        settings.ui.tick_rate_ms = 1;
        settings.server.base_url = " http://example.com/ ".into();
        let settings = settings.validated();
        assert_eq!(settings.ui.page_size, 20);
        assert_eq!(settings.ui.tick_rate_ms, MIN_TICK_RATE_MS);
        assert_eq!(settings.server.base_url, "http://example.com");
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let mut settings = Settings::default();
        settings.apply(&Overrides {
            base_url: Some("  ".into()),
            api_key: Some("k".into()),
        });
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.server.api_key.as_deref(), Some("k"));
    }
}
