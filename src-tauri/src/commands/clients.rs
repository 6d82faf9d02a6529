//! Tauri commands for the client task table and ratings.

use std::collections::HashMap;

use tauri::State;
use tracing::{debug, info};

use crate::clients::{ClientRecord, FilterCriteria, FilterOutcome};
use crate::state::AppState;

#[tauri::command]
pub fn filter_clients(
    state: State<'_, AppState>,
    department: String,
    criteria: FilterCriteria,
) -> FilterOutcome {
    let outcome = state.filter_clients(&department, &criteria);
    debug!(
        "Filtered {} clients to {} ({:?})",
        outcome.total,
        outcome.clients.len(),
        criteria
    );
    outcome
}

#[tauri::command]
pub fn get_client(
    state: State<'_, AppState>,
    department: String,
    client_id: String,
) -> Option<ClientRecord> {
    state.client(&department, &client_id)
}

/// Set a client's rating. Returns the stored (clamped) value.
#[tauri::command]
pub fn rate_client(
    state: State<'_, AppState>,
    client_id: String,
    value: i64,
) -> Result<u8, String> {
    let stored = state.rate_client(&client_id, value)?;
    info!("Rated client {} as {}", client_id, stored);
    Ok(stored)
}

#[tauri::command]
pub fn get_client_ratings(state: State<'_, AppState>) -> Result<HashMap<String, u8>, String> {
    Ok(state.ratings()?)
}

#[tauri::command]
pub fn reset_client_ratings(state: State<'_, AppState>) -> Result<(), String> {
    state.reset_ratings()?;
    info!("Cleared client ratings");
    Ok(())
}
