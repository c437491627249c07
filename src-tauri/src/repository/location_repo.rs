//! Location Repository

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Location};
use super::db;
use super::traits::Repository;

/// SQLite implementation of the Location repository
pub struct LocationRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl LocationRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Location> for LocationRepository {
    async fn create(&self, entity: &Location) -> DomainResult<Location> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("INSERT INTO location (name) VALUES (?1)", params![entity.name])?;
        let id = conn.last_insert_rowid() as u32;

        let mut location = entity.clone();
        location.id = id;
        Ok(location)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Location>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name FROM location WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;

        match rows.next()? {
            Some(row) => Ok(Some(row_to_location(row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Location>> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        let mut stmt = conn.prepare("SELECT id, name FROM location ORDER BY name")?;
        let mut rows = stmt.query([])?;

        let mut locations = Vec::new();
        while let Some(row) = rows.next()? {
            locations.push(row_to_location(row)?);
        }
        Ok(locations)
    }

    async fn update(&self, entity: &Location) -> DomainResult<Location> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute(
            "UPDATE location SET name = ?1 WHERE id = ?2",
            params![entity.name, entity.id],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = db::require(&guard)?;

        conn.execute("DELETE FROM location WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_location(row: &Row) -> DomainResult<Location> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
