use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;
use tracing::{info, warn};

use crate::assistant::{default_rules, load_rules, ResponseMatcher};
use crate::clients::{
    filter_with_outcome, ClientRecord, ClientRepository, FilterCriteria, FilterOutcome,
    FixtureRepository,
};
use crate::config::AppConfig;
use crate::content::ContentLibrary;
use crate::conversation::{ConversationMessage, ConversationSession, PendingReply};
use crate::department::{Department, DepartmentSelection};
use crate::error::SalesDeskError;
use crate::ratings::RatingBook;

/// What the frontend needs after a send: the echoed user message and the
/// ticket to redeem once the typing delay has elapsed.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSendResult {
    pub message: ConversationMessage,
    pub ticket: PendingReply,
    pub reply_delay_ms: u64,
}

/// Shared state managed by Tauri for the lifetime of the window.
pub struct AppState {
    config: AppConfig,
    matcher: ResponseMatcher,
    content: ContentLibrary,
    repositories: HashMap<Department, FixtureRepository>,
    chat: Mutex<ConversationSession>,
    ratings: Mutex<RatingBook>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rules = match config.rules_path.as_deref() {
            Some(path) => match load_rules(Path::new(path)) {
                Ok(rules) => {
                    info!("Loaded {} assistant rules from {}", rules.rules.len(), path);
                    rules
                }
                Err(e) => {
                    warn!("Falling back to built-in assistant rules: {:#}", e);
                    default_rules()
                }
            },
            None => default_rules(),
        };

        let repositories = Department::ALL
            .into_iter()
            .map(|d| (d, FixtureRepository::new(d.clients())))
            .collect();

        Self {
            config,
            matcher: ResponseMatcher::new(rules),
            content: ContentLibrary::builtin(),
            repositories,
            chat: Mutex::new(ConversationSession::new()),
            ratings: Mutex::new(RatingBook::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    fn repository(&self, department: &str) -> Option<&FixtureRepository> {
        DepartmentSelection::parse(department)
            .department()
            .and_then(|d| self.repositories.get(&d))
    }

    /// Filter a department's clients. Unknown departments have no clients.
    pub fn filter_clients(&self, department: &str, criteria: &FilterCriteria) -> FilterOutcome {
        match self.repository(department) {
            Some(repo) => filter_with_outcome(repo.all(), criteria),
            None => FilterOutcome {
                clients: Vec::new(),
                total: 0,
            },
        }
    }

    pub fn client(&self, department: &str, id: &str) -> Option<ClientRecord> {
        self.repository(department)?.get(id).cloned()
    }

    pub fn rate_client(&self, client_id: &str, value: i64) -> Result<u8, SalesDeskError> {
        let mut ratings = self.ratings.lock()?;
        Ok(ratings.rate(client_id, value))
    }

    pub fn ratings(&self) -> Result<HashMap<String, u8>, SalesDeskError> {
        Ok(self.ratings.lock()?.all().clone())
    }

    pub fn reset_ratings(&self) -> Result<(), SalesDeskError> {
        self.ratings.lock()?.reset();
        Ok(())
    }

    /// `Ok(None)` for blank input: nothing appended, nothing scheduled.
    pub fn chat_send(&self, text: &str) -> Result<Option<ChatSendResult>, SalesDeskError> {
        let mut chat = self.chat.lock()?;
        let Some(ticket) = chat.submit(text) else {
            return Ok(None);
        };
        let message = chat
            .messages()
            .last()
            .cloned()
            .ok_or_else(|| SalesDeskError::State("submitted message missing".to_string()))?;
        Ok(Some(ChatSendResult {
            message,
            ticket,
            reply_delay_ms: self.config.reply_delay_ms,
        }))
    }

    pub fn chat_resolve(
        &self,
        ticket: &PendingReply,
    ) -> Result<Option<ConversationMessage>, SalesDeskError> {
        let mut chat = self.chat.lock()?;
        Ok(chat.resolve(ticket, &self.matcher))
    }

    pub fn chat_history(&self) -> Result<Vec<ConversationMessage>, SalesDeskError> {
        Ok(self.chat.lock()?.messages().to_vec())
    }

    pub fn chat_reset(&self) -> Result<u64, SalesDeskError> {
        let mut chat = self.chat.lock()?;
        chat.reset();
        Ok(chat.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{Selection, Stage};
    use crate::conversation::Role;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_filter_unknown_department_is_empty_not_error() {
        let outcome = state().filter_clients("marketing", &FilterCriteria::default());
        assert!(outcome.clients.is_empty());
        assert_eq!(outcome.total, 0);
        assert!(!outcome.is_empty_match());
    }

    #[test]
    fn test_rating_does_not_change_filter_result() {
        let s = state();
        let criteria = FilterCriteria {
            stage: Selection::Only(Stage::Intent),
            ..Default::default()
        };
        let before = s.filter_clients("medical", &criteria);
        s.rate_client("med-001", 5).unwrap();
        s.rate_client("med-002", 2).unwrap();
        let after = s.filter_clients("medical", &criteria);
        assert_eq!(before, after);

        let ratings = s.ratings().unwrap();
        assert_eq!(ratings.get("med-001"), Some(&5));
        assert_eq!(ratings.get("med-002"), Some(&2));
    }

    #[test]
    fn test_client_lookup() {
        let s = state();
        assert_eq!(s.client("medical", "med-003").unwrap().name, "广州中山医院");
        assert!(s.client("medical", "edu-001").is_none());
        assert!(s.client("nowhere", "med-003").is_none());
    }

    #[test]
    fn test_chat_round_trip() {
        let s = state();
        assert!(s.chat_send("   ").unwrap().is_none());
        assert!(s.chat_history().unwrap().is_empty());

        let sent = s.chat_send("业绩").unwrap().unwrap();
        assert_eq!(sent.message.role, Role::User);
        assert_eq!(sent.reply_delay_ms, 1500);

        let reply = s.chat_resolve(&sent.ticket).unwrap().unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(s.chat_history().unwrap().len(), 2);
    }

    #[test]
    fn test_chat_reset_drops_pending() {
        let s = state();
        let sent = s.chat_send("价格敏感").unwrap().unwrap();
        assert_eq!(s.chat_reset().unwrap(), 1);
        assert!(s.chat_resolve(&sent.ticket).unwrap().is_none());
        assert!(s.chat_history().unwrap().is_empty());
    }

    #[test]
    fn test_chat_overlapping_sends_both_answered() {
        let s = state();
        let first = s.chat_send("价格敏感").unwrap().unwrap();
        let second = s.chat_send("业绩").unwrap().unwrap();

        assert!(s.chat_resolve(&first.ticket).unwrap().is_some());
        assert!(s.chat_resolve(&second.ticket).unwrap().is_some());
        let history = s.chat_history().unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[2].content, s.matcher.respond("价格敏感"));
        assert_eq!(history[3].content, s.matcher.respond("业绩"));
    }

    #[test]
    fn test_bad_rules_path_falls_back_to_builtin() {
        let config = AppConfig {
            rules_path: Some("/nonexistent/rules.toml".to_string()),
            ..AppConfig::default()
        };
        let s = AppState::new(config);
        let sent = s.chat_send("价格敏感").unwrap().unwrap();
        let reply = s.chat_resolve(&sent.ticket).unwrap().unwrap();
        assert_eq!(reply.content, ResponseMatcher::new(default_rules()).respond("价格敏感"));
    }
}
