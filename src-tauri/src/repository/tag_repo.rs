//! Tag Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Tag};
use super::db;
use super::traits::Repository;

/// SQLite implementation of the Tag repository
pub struct TagRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl TagRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Tag> for TagRepository {
    async fn create(&self, entity: &Tag) -> DomainResult<Tag> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "INSERT INTO tag (name, color) VALUES (?1, ?2)",
            params![entity.name, entity.color],
        )?;
        let id = conn.last_insert_rowid() as u32;

        let mut tag = entity.clone();
        tag.id = id;
        Ok(tag)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Tag>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name, color FROM tag WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_tag(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Tag>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name, color FROM tag ORDER BY name")?;
        let mut rows = stmt.query([])?;

        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            tags.push(row_to_tag(row)?);
        }
        Ok(tags)
    }

    async fn update(&self, entity: &Tag) -> DomainResult<Tag> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE tag SET name = ?1, color = ?2 WHERE id = ?3",
            params![entity.name, entity.color, entity.id],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM tag WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_tag(row: &Row) -> DomainResult<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
    })
}
