//! Application configuration resolved from the preferences store.

use serde::Serialize;
use tracing::warn;

/// Preference keys in `preferences.json`.
pub const PREFERENCES_STORE: &str = "preferences.json";
pub const KEY_THEME: &str = "theme";
pub const KEY_REPLY_DELAY_MS: &str = "assistant_reply_delay_ms";
pub const KEY_RULES_PATH: &str = "assistant_rules_path";

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
const MAX_REPLY_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    /// "light", "dark" or "system"
    pub theme: String,
    /// Simulated assistant typing time
    pub reply_delay_ms: u64,
    /// Custom assistant rules file; `None` uses the embedded rules
    pub rules_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            rules_path: None,
        }
    }
}

impl AppConfig {
    /// Build a config from string preferences. Missing or invalid values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(theme) = lookup(KEY_THEME).filter(|t| !t.is_empty()) {
            config.theme = theme;
        }

        if let Some(raw) = lookup(KEY_REPLY_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.reply_delay_ms = ms.min(MAX_REPLY_DELAY_MS),
                Err(e) => warn!("Ignoring invalid {} '{}': {}", KEY_REPLY_DELAY_MS, raw, e),
            }
        }

        config.rules_path = lookup(KEY_RULES_PATH)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        config
    }
}
