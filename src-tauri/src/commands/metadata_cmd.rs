//! Tauri Commands for metadata (locations, categories, tags)
//!
//! The metadata management view edits all three reference collections;
//! deletes go through one dispatch keyed on `MetadataType`.

use tauri::State;
use crate::domain::{Category, Location, MetadataType, Tag};
use crate::repository::{
    upsert, CategoryRepository, LocationRepository, Repository, TagRepository,
};
use crate::AppState;

/// List all locations
#[tauri::command]
pub async fn list_locations(state: State<'_, AppState>) -> Result<Vec<Location>, String> {
    let repo = LocationRepository::new(state.db_state.conn_handle());
    repo.list().await.map_err(|e| e.to_string())
}

/// Create or update a location
#[tauri::command]
pub async fn upsert_location(
    state: State<'_, AppState>,
    location: Location,
) -> Result<u32, String> {
    let repo = LocationRepository::new(state.db_state.conn_handle());
    upsert(&repo, &location).await.map_err(|e| e.to_string())
}

/// List all categories
#[tauri::command]
pub async fn list_categories(state: State<'_, AppState>) -> Result<Vec<Category>, String> {
    let repo = CategoryRepository::new(state.db_state.conn_handle());
    repo.list().await.map_err(|e| e.to_string())
}

/// Create or update a category
#[tauri::command]
pub async fn upsert_category(
    state: State<'_, AppState>,
    category: Category,
) -> Result<u32, String> {
    let repo = CategoryRepository::new(state.db_state.conn_handle());
    upsert(&repo, &category).await.map_err(|e| e.to_string())
}

/// List all tags
#[tauri::command]
pub async fn list_tags(state: State<'_, AppState>) -> Result<Vec<Tag>, String> {
    let repo = TagRepository::new(state.db_state.conn_handle());
    repo.list().await.map_err(|e| e.to_string())
}

/// Create or update a tag
#[tauri::command]
pub async fn upsert_tag(state: State<'_, AppState>, tag: Tag) -> Result<u32, String> {
    let repo = TagRepository::new(state.db_state.conn_handle());
    upsert(&repo, &tag).await.map_err(|e| e.to_string())
}

/// Delete one metadata record of the given kind.
///
/// No cascade: records still referencing the id keep it.
#[tauri::command]
pub async fn delete_metadata(
    state: State<'_, AppState>,
    kind: MetadataType,
    id: u32,
) -> Result<(), String> {
    log::debug!("deleting {} {}", kind.as_str(), id);

    let conn = state.db_state.conn_handle();
    let result = match kind {
        MetadataType::Location => LocationRepository::new(conn).delete(id).await,
        MetadataType::Category => CategoryRepository::new(conn).delete(id).await,
        MetadataType::Tag => TagRepository::new(conn).delete(id).await,
    };
    result.map_err(|e| e.to_string())
}
