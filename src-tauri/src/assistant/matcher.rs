//! Keyword matching for scripted replies.

use tracing::debug;

use super::types::{ResponseRule, RulesConfig};

/// Return the template of the first rule that fires, or `fallback`.
pub fn match_response<'a>(message: &str, rules: &'a [ResponseRule], fallback: &'a str) -> &'a str {
    rules
        .iter()
        .find(|rule| rule.matches(message))
        .map(|rule| rule.template.as_str())
        .unwrap_or(fallback)
}

/// Owns a rule set and answers messages against it.
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    config: RulesConfig,
}

impl ResponseMatcher {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    pub fn respond(&self, message: &str) -> &str {
        let reply = match_response(message, &self.config.rules, &self.config.fallback);
        if std::ptr::eq(reply, self.config.fallback.as_str()) {
            debug!("No assistant rule matched, using fallback");
        } else {
            debug!("Assistant rule matched ({} chars)", reply.len());
        }
        reply
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.config.rules
    }

    pub fn fallback(&self) -> &str {
        &self.config.fallback
    }
}
