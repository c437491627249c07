//! Product Repository
//!
//! `tag_ids` persists as a JSON array in a single column so a product
//! write stays one row operation.

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Product};
use super::db;
use super::traits::Repository;

/// SQLite implementation of the Product repository
pub struct ProductRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ProductRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Entry-form lookup: exact name match, first hit wins
    pub async fn find_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, category_id, tag_ids FROM product WHERE name = ?1 LIMIT 1",
        )?;
        let mut rows = stmt.query(params![name])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_product(row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> DomainResult<Product> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "INSERT INTO product (name, category_id, tag_ids) VALUES (?1, ?2, ?3)",
            params![
                entity.name,
                entity.category_id,
                serde_json::to_string(&entity.tag_ids)?
            ],
        )?;
        let id = conn.last_insert_rowid() as u32;

        let mut product = entity.clone();
        product.id = id;
        Ok(product)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Product>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt =
            conn.prepare("SELECT id, name, category_id, tag_ids FROM product WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_product(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare(
            "SELECT id, name, category_id, tag_ids FROM product ORDER BY name COLLATE NOCASE",
        )?;
        let mut rows = stmt.query([])?;

        let mut products = Vec::new();
        while let Some(row) = rows.next()? {
            products.push(row_to_product(row)?);
        }
        Ok(products)
    }

    async fn update(&self, entity: &Product) -> DomainResult<Product> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE product SET name = ?1, category_id = ?2, tag_ids = ?3 WHERE id = ?4",
            params![
                entity.name,
                entity.category_id,
                serde_json::to_string(&entity.tag_ids)?,
                entity.id
            ],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM product WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_product(row: &Row) -> DomainResult<Product> {
    let tag_ids: String = row.get(3)?;
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
        tag_ids: serde_json::from_str(&tag_ids).unwrap_or_default(),
    })
}
