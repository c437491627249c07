//! Inventory Repository
//!
//! Same persistence rules as Product for `tag_ids`; dates are ISO-8601
//! text columns read back as `NaiveDate`.

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Inventory, InventoryView, SortOrder};
use super::db;
use super::traits::Repository;

const COLUMNS: &str = "id, name, category_id, tag_ids, purchase_date, expiration_date, opened_date, quantity, location_id, notes";

/// SQLite implementation of the Inventory repository
pub struct InventoryRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl InventoryRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// List view rows as of `today`, ordered per `sort`
    pub async fn list_views(
        &self,
        today: NaiveDate,
        sort: SortOrder,
    ) -> DomainResult<Vec<InventoryView>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        // NULL dates/locations sort to the end rather than the front
        let order_by = match sort {
            SortOrder::Date => "expiration_date IS NULL, expiration_date, name COLLATE NOCASE",
            SortOrder::Name => "name COLLATE NOCASE",
            SortOrder::Location => {
                "location_id IS NULL, location_id, expiration_date IS NULL, expiration_date"
            }
        };

        let mut stmt =
            conn.prepare(&format!("SELECT {} FROM inventory ORDER BY {}", COLUMNS, order_by))?;
        let mut rows = stmt.query([])?;

        let mut views = Vec::new();
        while let Some(row) = rows.next()? {
            views.push(InventoryView::compute(row_to_inventory(row)?, today));
        }
        Ok(views)
    }
}

#[async_trait]
impl Repository<Inventory> for InventoryRepository {
    async fn create(&self, entity: &Inventory) -> DomainResult<Inventory> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "INSERT INTO inventory (name, category_id, tag_ids, purchase_date, expiration_date, opened_date, quantity, location_id, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                entity.name,
                entity.category_id,
                serde_json::to_string(&entity.tag_ids)?,
                entity.purchase_date,
                entity.expiration_date,
                entity.opened_date,
                entity.quantity,
                entity.location_id,
                entity.notes
            ],
        )?;
        let id = conn.last_insert_rowid() as u32;

        let mut inventory = entity.clone();
        inventory.id = id;
        Ok(inventory)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Inventory>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt =
            conn.prepare(&format!("SELECT {} FROM inventory WHERE id = ?1", COLUMNS))?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_inventory(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Inventory>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM inventory ORDER BY id", COLUMNS))?;
        let mut rows = stmt.query([])?;

        let mut units = Vec::new();
        while let Some(row) = rows.next()? {
            units.push(row_to_inventory(row)?);
        }
        Ok(units)
    }

    async fn update(&self, entity: &Inventory) -> DomainResult<Inventory> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE inventory SET name = ?1, category_id = ?2, tag_ids = ?3, purchase_date = ?4, expiration_date = ?5, opened_date = ?6, quantity = ?7, location_id = ?8, notes = ?9
             WHERE id = ?10",
            params![
                entity.name,
                entity.category_id,
                serde_json::to_string(&entity.tag_ids)?,
                entity.purchase_date,
                entity.expiration_date,
                entity.opened_date,
                entity.quantity,
                entity.location_id,
                entity.notes,
                entity.id
            ],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM inventory WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_inventory(row: &Row) -> DomainResult<Inventory> {
    let tag_ids: String = row.get(3)?;
    Ok(Inventory {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        tag_ids: serde_json::from_str(&tag_ids).unwrap_or_default(),
        purchase_date: row.get(4)?,
        expiration_date: row.get(5)?,
        opened_date: row.get(6)?,
        quantity: row.get(7)?,
        location_id: row.get(8)?,
        notes: row.get(9)?,
    })
}
