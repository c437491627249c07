//! Tauri Commands for Barcode operations
//!
//! The scan view looks a code up first; a miss means the frontend offers
//! to bind the code to a product with `upsert_barcode`.

use tauri::State;
use crate::domain::Barcode;
use crate::repository::{upsert, BarcodeRepository, Repository};
use crate::AppState;

/// Resolve a scanned code to its barcode record, if known
#[tauri::command]
pub async fn lookup_barcode(
    state: State<'_, AppState>,
    code: String,
) -> Result<Option<Barcode>, String> {
    let repo = BarcodeRepository::new(state.db_state.conn_handle());
    repo.find_by_code(&code).await.map_err(|e| e.to_string())
}

/// Create or update a barcode binding
#[tauri::command]
pub async fn upsert_barcode(state: State<'_, AppState>, barcode: Barcode) -> Result<u32, String> {
    let repo = BarcodeRepository::new(state.db_state.conn_handle());
    upsert(&repo, &barcode).await.map_err(|e| e.to_string())
}

/// Delete a barcode binding
#[tauri::command]
pub async fn delete_barcode(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let repo = BarcodeRepository::new(state.db_state.conn_handle());
    repo.delete(id).await.map_err(|e| e.to_string())
}
