//! Per-session conversation log for the assistant chat widget.
//!
//! Send flow: `Idle -> Sending -> AwaitingResponse -> Idle`. `Sending` is the
//! frontend's in-flight `chat_send` call; this session only sees the other
//! two. `submit` appends the user message and hands out a `PendingReply`
//! ticket; the caller waits out the typing delay and then calls `resolve`
//! with it. Several tickets may be outstanding and each resolves once.
//! `reset` (modal close) bumps the session generation so any ticket still
//! in flight is dropped instead of landing in a fresh log.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::ResponseMatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    /// Local wall-clock time, `HH:MM`
    pub timestamp: String,
}

/// Backend view of the send flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendState {
    Idle,
    AwaitingResponse,
}

/// Handle for a reply that has been scheduled but not appended yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReply {
    pub generation: u64,
    /// Id of the user message this reply answers
    pub message_id: u64,
    pub prompt: String,
}

#[derive(Debug, Default)]
pub struct ConversationSession {
    messages: Vec<ConversationMessage>,
    next_id: u64,
    generation: u64,
    /// Outstanding tickets keyed by user message id
    pending: BTreeMap<u64, PendingReply>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn state(&self) -> SendState {
        if self.pending.is_empty() {
            SendState::Idle
        } else {
            SendState::AwaitingResponse
        }
    }

    /// Append a user message and schedule its reply.
    ///
    /// Blank or whitespace-only input is ignored and returns `None`. Earlier
    /// tickets stay valid.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let content = input.trim();
        if content.is_empty() {
            return None;
        }

        let message_id = self.push(Role::User, content.to_string());
        let ticket = PendingReply {
            generation: self.generation,
            message_id,
            prompt: content.to_string(),
        };
        self.pending.insert(message_id, ticket.clone());

        debug!(
            "Message {} queued in generation {} ({} pending)",
            message_id,
            self.generation,
            self.pending.len()
        );
        Some(ticket)
    }

    /// Append the scripted reply for `ticket` if it is still outstanding.
    pub fn resolve(
        &mut self,
        ticket: &PendingReply,
        matcher: &ResponseMatcher,
    ) -> Option<ConversationMessage> {
        if self.pending.get(&ticket.message_id) != Some(ticket) {
            debug!(
                "Dropping stale reply for message {} (generation {}, current {})",
                ticket.message_id, ticket.generation, self.generation
            );
            return None;
        }
        self.pending.remove(&ticket.message_id);

        let reply = matcher.respond(&ticket.prompt).to_string();
        self.push(Role::Assistant, reply);
        self.messages.last().cloned()
    }

    /// Clear the log and invalidate every outstanding ticket.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending.clear();
        self.next_id = 0;
        self.generation += 1;
    }

    fn push(&mut self, role: Role, content: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ConversationMessage {
            id,
            role,
            content,
            timestamp: Local::now().format("%H:%M").to_string(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::default_rules;

    fn matcher() -> ResponseMatcher {
        ResponseMatcher::new(default_rules())
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut session = ConversationSession::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \t\n").is_none());
        assert!(session.messages().is_empty());
        assert_eq!(session.state(), SendState::Idle);
    }

    #[test]
    fn test_submit_appends_trimmed_user_message_first() {
        let mut session = ConversationSession::new();
        let ticket = session.submit("  帮我看看业绩  ").unwrap();

        assert_eq!(session.state(), SendState::AwaitingResponse);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[0].content, "帮我看看业绩");
        assert_eq!(ticket.message_id, session.messages()[0].id);
    }

    #[test]
    fn test_resolve_appends_matched_reply_after_user_message() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let ticket = session.submit("价格敏感").unwrap();
        let reply = session.resolve(&ticket, &m).unwrap();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, m.respond("价格敏感"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[1].role, Role::Assistant);
        assert_eq!(session.state(), SendState::Idle);
    }

    #[test]
    fn test_ticket_resolves_once() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let ticket = session.submit("报告").unwrap();
        assert!(session.resolve(&ticket, &m).is_some());
        assert!(session.resolve(&ticket, &m).is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_reset_drops_pending_reply() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let ticket = session.submit("跟进").unwrap();

        session.reset();
        assert!(session.messages().is_empty());
        assert!(session.resolve(&ticket, &m).is_none());
        assert!(session.messages().is_empty());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_old_generation_ticket_cannot_hit_new_session() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let stale = session.submit("业绩").unwrap();
        session.reset();
        let fresh = session.submit("业绩").unwrap();

        // Same message id in both generations, only the live one resolves.
        assert_eq!(stale.message_id, fresh.message_id);
        assert!(session.resolve(&stale, &m).is_none());
        assert!(session.resolve(&fresh, &m).is_some());
    }

    #[test]
    fn test_overlapping_submits_each_get_a_reply() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let first = session.submit("价格敏感").unwrap();
        let second = session.submit("业绩").unwrap();
        assert_eq!(session.pending_count(), 2);

        let a = session.resolve(&first, &m).unwrap();
        assert_eq!(session.state(), SendState::AwaitingResponse);
        let b = session.resolve(&second, &m).unwrap();
        assert_eq!(session.state(), SendState::Idle);

        assert_eq!(a.content, m.respond("价格敏感"));
        assert_eq!(b.content, m.respond("业绩"));
        let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::User, Role::Assistant, Role::Assistant]
        );
        assert!(session.resolve(&first, &m).is_none());
    }

    #[test]
    fn test_sequential_submits_interleave() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let first = session.submit("价格敏感").unwrap();
        session.resolve(&first, &m).unwrap();
        let second = session.submit("业绩").unwrap();
        session.resolve(&second, &m).unwrap();

        let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
    }

    #[test]
    fn test_reset_drops_every_outstanding_ticket() {
        let m = matcher();
        let mut session = ConversationSession::new();
        let first = session.submit("跟进").unwrap();
        let second = session.submit("话术").unwrap();

        session.reset();
        assert_eq!(session.pending_count(), 0);
        assert!(session.resolve(&first, &m).is_none());
        assert!(session.resolve(&second, &m).is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_message_ids_are_monotonic() {
        let m = matcher();
        let mut session = ConversationSession::new();
        for text in ["a", "b", "c"] {
            let t = session.submit(text).unwrap();
            session.resolve(&t, &m);
        }
        let ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }
}
