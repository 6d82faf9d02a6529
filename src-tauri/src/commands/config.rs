use tauri::{AppHandle, State};
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{AppConfig, PREFERENCES_STORE};
use crate::error::SalesDeskError;
use crate::state::AppState;

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        SalesDeskError::Store(e.to_string())
    })?;
    let value = store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()));
    Ok(value)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        SalesDeskError::Store(e.to_string())
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        SalesDeskError::Store(e.to_string()).into()
    })
}

/// The configuration resolved at startup.
#[tauri::command]
pub fn get_app_config(state: State<'_, AppState>) -> AppConfig {
    state.config().clone()
}
