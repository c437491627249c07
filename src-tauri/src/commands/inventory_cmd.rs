//! Tauri Commands for Inventory operations

use tauri::State;
use crate::domain::{Inventory, InventoryView, SortOrder};
use crate::repository::{upsert, InventoryRepository, Repository};
use crate::AppState;

/// List inventory rows with computed expiration offsets
#[tauri::command]
pub async fn list_inventory(
    state: State<'_, AppState>,
    sort: Option<SortOrder>,
) -> Result<Vec<InventoryView>, String> {
    let repo = InventoryRepository::new(state.db_state.conn_handle());
    let today = chrono::Local::now().date_naive();
    repo.list_views(today, sort.unwrap_or_default())
        .await
        .map_err(|e| e.to_string())
}

/// Get one inventory unit by ID
#[tauri::command]
pub async fn get_inventory(
    state: State<'_, AppState>,
    id: u32,
) -> Result<Option<Inventory>, String> {
    let repo = InventoryRepository::new(state.db_state.conn_handle());
    repo.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Create or update an inventory unit
#[tauri::command]
pub async fn upsert_inventory(
    state: State<'_, AppState>,
    inventory: Inventory,
) -> Result<u32, String> {
    let repo = InventoryRepository::new(state.db_state.conn_handle());
    upsert(&repo, &inventory).await.map_err(|e| e.to_string())
}

/// Delete an inventory unit
#[tauri::command]
pub async fn delete_inventory(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let repo = InventoryRepository::new(state.db_state.conn_handle());
    repo.delete(id).await.map_err(|e| e.to_string())
}
