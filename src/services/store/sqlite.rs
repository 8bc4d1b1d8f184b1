use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use super::AppointmentStore;
use crate::db::queries;
use crate::models::AppointmentRecord;

/// Local `appointments` table, for development without a Supabase project.
pub struct SqliteStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentStore for SqliteStore {
    async fn insert(&self, record: &AppointmentRecord) -> anyhow::Result<()> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("database mutex poisoned"))?;
        let id = queries::insert_appointment(&db, record)?;
        tracing::debug!(id, "appointment row inserted");
        Ok(())
    }
}
