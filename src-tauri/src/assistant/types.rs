//! Rule types for the scripted assistant, loaded from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration loaded from assistant_rules.toml.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Reply used when no rule fires
    pub fallback: String,
    /// Rules in priority order (first match wins)
    #[serde(default)]
    pub rules: Vec<ResponseRule>,
}

/// One keyword → template mapping.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ResponseRule {
    /// Identifier used in logs and tests
    pub name: String,
    /// Fires if the message contains any of these (case-sensitive)
    pub keywords: Vec<String>,
    /// Reply text returned verbatim
    pub template: String,
}

impl ResponseRule {
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k.as_str()))
    }
}
