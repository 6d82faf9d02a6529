//! TOML rule loading for the scripted assistant.
//!
//! - `default_rules()` returns the rules compiled into the binary
//! - `load_rules(path)` reads and validates a custom rule file

use anyhow::{Context, Result};
use std::path::Path;

use super::types::RulesConfig;
use crate::error::SalesDeskError;

/// Default rules embedded at compile time from `src-tauri/config/assistant_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/assistant_rules.toml");

/// Load and validate rules from a TOML file.
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file {}", path.display()))?;
    let config: RulesConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid TOML in {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Get the rules embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_rules() -> RulesConfig {
    toml::from_str(DEFAULT_RULES).expect("embedded assistant_rules.toml must be valid TOML")
}

impl RulesConfig {
    /// Reject rule sets that could never produce a sensible reply.
    pub fn validate(&self) -> Result<(), SalesDeskError> {
        if self.fallback.trim().is_empty() {
            return Err(SalesDeskError::Rules("fallback template is empty".to_string()));
        }
        for rule in &self.rules {
            if rule.keywords.is_empty() {
                return Err(SalesDeskError::Rules(format!(
                    "rule '{}' has no keywords",
                    rule.name
                )));
            }
            // An empty keyword is a substring of every message.
            if rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(SalesDeskError::Rules(format!(
                    "rule '{}' has an empty keyword",
                    rule.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_rules_load_and_validate() {
        let rules = default_rules();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.rules.len(), 4);
    }

    #[test]
    fn test_default_rule_order() {
        let names: Vec<_> = default_rules().rules.into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "price_objection",
                "performance_summary",
                "follow_up_plan",
                "communication_script"
            ]
        );
    }

    #[test]
    fn test_price_rule_has_price_sensitive_keyword() {
        let rules = default_rules();
        let price = &rules.rules[0];
        assert!(price.keywords.iter().any(|k| k == "价格敏感"));
    }

    #[test]
    fn test_load_custom_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
fallback = "默认回复"

[[rules]]
name = "greeting"
keywords = ["你好"]
template = "你好！"
"#
        )
        .unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.fallback, "默认回复");
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(rules.rules[0].template, "你好！");
    }

    #[test]
    fn test_load_rejects_empty_keyword() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
fallback = "默认回复"

[[rules]]
name = "broken"
keywords = [""]
template = "x"
"#
        )
        .unwrap();

        let err = load_rules(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty keyword"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = load_rules(Path::new("/nonexistent/assistant_rules.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_blank_fallback() {
        let mut rules = default_rules();
        rules.fallback = "   ".to_string();
        assert!(rules.validate().is_err());
    }
}
