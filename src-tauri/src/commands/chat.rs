//! Tauri commands for the assistant chat widget.
//!
//! The typing delay lives in the frontend: `chat_send` returns a ticket and
//! the delay to wait, and the frontend redeems the ticket with
//! `chat_resolve`. Closing the widget calls `chat_reset`, after which old
//! tickets resolve to nothing.

use tauri::State;
use tracing::{debug, info};

use crate::conversation::{ConversationMessage, PendingReply};
use crate::state::{AppState, ChatSendResult};

/// Append a user message. Returns `None` for blank input.
#[tauri::command]
pub fn chat_send(
    state: State<'_, AppState>,
    message: String,
) -> Result<Option<ChatSendResult>, String> {
    let result = state.chat_send(&message)?;
    match &result {
        Some(sent) => info!("Chat message {} queued", sent.message.id),
        None => debug!("Ignored blank chat message"),
    }
    Ok(result)
}

/// Append the scripted reply for a ticket, if the ticket is still live.
#[tauri::command]
pub fn chat_resolve(
    state: State<'_, AppState>,
    ticket: PendingReply,
) -> Result<Option<ConversationMessage>, String> {
    Ok(state.chat_resolve(&ticket)?)
}

#[tauri::command]
pub fn chat_history(state: State<'_, AppState>) -> Result<Vec<ConversationMessage>, String> {
    Ok(state.chat_history()?)
}

#[tauri::command]
pub fn chat_reset(state: State<'_, AppState>) -> Result<(), String> {
    let generation = state.chat_reset()?;
    info!("Chat session reset (generation {})", generation);
    Ok(())
}
