//! Tauri Commands for Product operations

use tauri::State;
use crate::domain::Product;
use crate::repository::{upsert, ProductRepository, Repository};
use crate::AppState;

/// List all products
#[tauri::command]
pub async fn list_products(state: State<'_, AppState>) -> Result<Vec<Product>, String> {
    let repo = ProductRepository::new(state.db_state.conn_handle());
    repo.list().await.map_err(|e| e.to_string())
}

/// Get product by ID
#[tauri::command]
pub async fn get_product(
    state: State<'_, AppState>,
    id: u32,
) -> Result<Option<Product>, String> {
    let repo = ProductRepository::new(state.db_state.conn_handle());
    repo.find_by_id(id).await.map_err(|e| e.to_string())
}

/// Find a product by exact name (entry form autocomplete pick)
#[tauri::command]
pub async fn find_product(
    state: State<'_, AppState>,
    name: String,
) -> Result<Option<Product>, String> {
    let repo = ProductRepository::new(state.db_state.conn_handle());
    repo.find_by_name(&name).await.map_err(|e| e.to_string())
}

/// Create or update a product
#[tauri::command]
pub async fn upsert_product(state: State<'_, AppState>, product: Product) -> Result<u32, String> {
    let repo = ProductRepository::new(state.db_state.conn_handle());
    upsert(&repo, &product).await.map_err(|e| e.to_string())
}

/// Delete a product (its barcodes keep their product_id)
#[tauri::command]
pub async fn delete_product(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let repo = ProductRepository::new(state.db_state.conn_handle());
    repo.delete(id).await.map_err(|e| e.to_string())
}
