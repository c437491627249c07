//! Tauri Command for the route table

use crate::routes::{self, RouterConfig};

/// Hand the declarative route table to the webview router
#[tauri::command]
pub fn router_config() -> RouterConfig {
    routes::router_config()
}
