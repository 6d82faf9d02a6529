//! Scripted sales assistant.
//!
//! The assistant does not generate anything: each message is checked
//! against an ordered list of keyword rules and the first rule that fires
//! supplies a canned reply.
//!
//! # Example
//!
//! ```ignore
//! use salesdesk_tauri::assistant::{default_rules, ResponseMatcher};
//!
//! let matcher = ResponseMatcher::new(default_rules());
//! println!("{}", matcher.respond("客户价格敏感"));
//! ```

mod matcher;
mod rules;
mod types;

pub use matcher::{match_response, ResponseMatcher};
pub use rules::{default_rules, load_rules};
pub use types::*;
