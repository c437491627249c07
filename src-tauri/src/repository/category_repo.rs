//! Category Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{Category, DomainResult};
use super::db;
use super::traits::Repository;

/// SQLite implementation of the Category repository
pub struct CategoryRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl CategoryRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Category> for CategoryRepository {
    async fn create(&self, entity: &Category) -> DomainResult<Category> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("INSERT INTO category (name) VALUES (?1)", params![entity.name])?;
        let id = conn.last_insert_rowid() as u32;

        let mut category = entity.clone();
        category.id = id;
        Ok(category)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Category>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name FROM category WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_category(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name FROM category ORDER BY name")?;
        let mut rows = stmt.query([])?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            categories.push(row_to_category(row)?);
        }
        Ok(categories)
    }

    async fn update(&self, entity: &Category) -> DomainResult<Category> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2",
            params![entity.name, entity.id],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM category WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_category(row: &Row) -> DomainResult<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
