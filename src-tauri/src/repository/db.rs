//! Database Connection and Setup
//!
//! Manages the SQLite connection, migrations, and first-run seeding.
//! The connection is opened once and shared for the application lifetime.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Categories inserted when the store is created
const DEFAULT_CATEGORIES: [&str; 4] = [
    "Food - Perishable",
    "Food - Nonperishable",
    "Medicine - Prescription",
    "Medicine - Over the Counter",
];

/// Locations inserted when the store is created
const DEFAULT_LOCATIONS: [&str; 8] = [
    "Kitchen - Fridge",
    "Kitchen - Freezer",
    "Kitchen - Top Pantry",
    "Kitchen - Bottom Pantry",
    "Kitchen - Top Open Shelf",
    "Kitchen - Bottom Open Shelf",
    "Kitchen - Other",
    "Bathroom - Cabinet",
];

/// Database state wrapper, managed by Tauri and shared with repositories
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    /// Empty state; filled once background init completes
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }

    /// Handle repositories hold onto
    pub fn conn_handle(&self) -> Arc<Mutex<Option<Connection>>> {
        Arc::clone(&self.conn)
    }

    /// Move an initialized connection into this state
    pub async fn adopt(&self, other: &DbState) {
        let mut guard = self.conn.lock().await;
        *guard = other.conn.lock().await.take();
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn require(conn: &Option<Connection>) -> DomainResult<&Connection> {
    conn.as_ref()
        .ok_or_else(|| DomainError::Internal("database not initialized".to_string()))
}

// Store and serialization failures surface as DomainError::Internal so
// repository code can propagate with `?`.
impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Open (or create) the store at `db_path`, run migrations, seed on first run
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let mut conn = Connection::open(db_path)?;

    run_migrations(&conn)?;
    seed_if_new(&mut conn)?;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

/// Create the six collections and their lookup indexes
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS location (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_location_name ON location(name);

        CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_category_name ON category(name);

        CREATE TABLE IF NOT EXISTS tag (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            color TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_tag_name ON tag(name);
        CREATE INDEX IF NOT EXISTS idx_tag_color ON tag(color);

        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category_id INTEGER,
            tag_ids TEXT NOT NULL DEFAULT '[]'
        );
        CREATE INDEX IF NOT EXISTS idx_product_name ON product(name);
        CREATE INDEX IF NOT EXISTS idx_product_category ON product(category_id);

        CREATE TABLE IF NOT EXISTS barcode (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL,
            product_id INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_barcode_code ON barcode(code);
        CREATE INDEX IF NOT EXISTS idx_barcode_product ON barcode(product_id);

        CREATE TABLE IF NOT EXISTS inventory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category_id INTEGER,
            tag_ids TEXT NOT NULL DEFAULT '[]',
            purchase_date TEXT,
            expiration_date TEXT,
            opened_date TEXT,
            quantity INTEGER NOT NULL DEFAULT 1,
            location_id INTEGER,
            notes TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_inventory_name ON inventory(name);
        CREATE INDEX IF NOT EXISTS idx_inventory_category ON inventory(category_id);
        CREATE INDEX IF NOT EXISTS idx_inventory_purchase ON inventory(purchase_date);
        CREATE INDEX IF NOT EXISTS idx_inventory_expiration ON inventory(expiration_date);
        CREATE INDEX IF NOT EXISTS idx_inventory_location ON inventory(location_id);",
    )?;
    Ok(())
}

/// Insert the default reference data the first time the store exists.
///
/// Guarded by `PRAGMA user_version`: 0 marks a store that has never been
/// seeded. Emptying a collection later never triggers a re-seed.
fn seed_if_new(conn: &mut Connection) -> DomainResult<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version != 0 {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for name in DEFAULT_CATEGORIES {
        tx.execute("INSERT INTO category (name) VALUES (?1)", [name])?;
    }
    for name in DEFAULT_LOCATIONS {
        tx.execute("INSERT INTO location (name) VALUES (?1)", [name])?;
    }
    tx.pragma_update(None, "user_version", 1)?;
    tx.commit()?;

    log::info!("store seeded with default categories and locations");
    Ok(())
}
