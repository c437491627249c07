//! Barcode Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Barcode, DomainResult};
use super::db;
use super::traits::Repository;

/// SQLite implementation of the Barcode repository
pub struct BarcodeRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl BarcodeRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Scan flow: resolve a scanned code to its barcode record
    pub async fn find_by_code(&self, code: &str) -> DomainResult<Option<Barcode>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt =
            conn.prepare("SELECT id, code, product_id FROM barcode WHERE code = ?1 LIMIT 1")?;
        let mut rows = stmt.query(params![code])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_barcode(row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Repository<Barcode> for BarcodeRepository {
    async fn create(&self, entity: &Barcode) -> DomainResult<Barcode> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "INSERT INTO barcode (code, product_id) VALUES (?1, ?2)",
            params![entity.code, entity.product_id],
        )?;
        let id = conn.last_insert_rowid() as u32;

        let mut barcode = entity.clone();
        barcode.id = id;
        Ok(barcode)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Barcode>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, code, product_id FROM barcode WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_barcode(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Barcode>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, code, product_id FROM barcode ORDER BY id")?;
        let mut rows = stmt.query([])?;

        let mut barcodes = Vec::new();
        while let Some(row) = rows.next()? {
            barcodes.push(row_to_barcode(row)?);
        }
        Ok(barcodes)
    }

    async fn update(&self, entity: &Barcode) -> DomainResult<Barcode> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE barcode SET code = ?1, product_id = ?2 WHERE id = ?3",
            params![entity.code, entity.product_id, entity.id],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM barcode WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_barcode(row: &Row) -> DomainResult<Barcode> {
    Ok(Barcode {
        id: row.get(0)?,
        code: row.get(1)?,
        product_id: row.get(2)?,
    })
}
