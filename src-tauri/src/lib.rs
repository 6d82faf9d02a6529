pub mod assistant;
pub mod clients;
mod commands;
pub mod config;
pub mod content;
pub mod conversation;
pub mod department;
mod error;
pub mod fixtures;
pub mod metrics;
pub mod ratings;
pub mod state;

pub use error::SalesDeskError;

use config::{AppConfig, PREFERENCES_STORE};
use state::AppState;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::config::get_app_config,
            commands::dashboard::get_departments,
            commands::dashboard::get_department_dashboard,
            commands::clients::filter_clients,
            commands::clients::get_client,
            commands::clients::rate_client,
            commands::clients::get_client_ratings,
            commands::clients::reset_client_ratings,
            commands::chat::chat_send,
            commands::chat::chat_resolve,
            commands::chat::chat_history,
            commands::chat::chat_reset,
            commands::content::get_content_index,
            commands::content::get_communication_script,
            commands::content::get_learning_chapter,
            commands::content::get_material,
        ])
        .setup(|app| {
            // Resolve configuration from saved preferences
            use tauri::Manager;
            use tauri_plugin_store::StoreExt;
            let config = match app.store(PREFERENCES_STORE) {
                Ok(store) => AppConfig::from_lookup(|key| {
                    store.get(key).and_then(|v| match v {
                        serde_json::Value::String(s) => Some(s),
                        serde_json::Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                }),
                Err(e) => {
                    tracing::warn!("Failed to open preferences, using defaults: {}", e);
                    AppConfig::default()
                }
            };
            tracing::info!(
                "Starting SalesDesk (reply delay {} ms, custom rules: {})",
                config.reply_delay_ms,
                config.rules_path.is_some()
            );
            app.manage(AppState::new(config));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
