//! ExpireBee Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers
//!
//! The store opens once per process and lives for the application
//! lifetime; the webview is notified via `db-initialized` when it is
//! ready to serve queries.

use std::path::PathBuf;
use tauri::{Emitter, Manager};

mod commands;
pub mod domain;
mod repository;
pub mod routes;

use repository::DbState;

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub db_path: PathBuf,
}

/// Resolve the store file under the per-app data directory
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("expire_bee.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "ExpireBee")?;

            let db_path = get_db_path(&app_handle)?;
            let db_state = DbState::new();

            // Manage state immediately; the connection arrives in the background
            app.manage(AppState {
                db_state: db_state.clone(),
                db_path: db_path.clone(),
            });

            tauri::async_runtime::spawn(async move {
                match repository::init_db(&db_path).await {
                    Ok(initialized) => {
                        db_state.adopt(&initialized).await;
                        log::info!("store ready at {}", db_path.display());

                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("store init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Metadata: locations, categories, tags
            commands::list_locations,
            commands::upsert_location,
            commands::list_categories,
            commands::upsert_category,
            commands::list_tags,
            commands::upsert_tag,
            commands::delete_metadata,
            // Products
            commands::list_products,
            commands::get_product,
            commands::find_product,
            commands::upsert_product,
            commands::delete_product,
            // Barcodes
            commands::lookup_barcode,
            commands::upsert_barcode,
            commands::delete_barcode,
            // Inventory
            commands::list_inventory,
            commands::get_inventory,
            commands::upsert_inventory,
            commands::delete_inventory,
            // Routing
            commands::router_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
