pub mod chat;
pub mod clients;
pub mod config;
pub mod content;
pub mod dashboard;
