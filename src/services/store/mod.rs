pub mod sqlite;
pub mod supabase;

use async_trait::async_trait;

use crate::models::AppointmentRecord;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn insert(&self, record: &AppointmentRecord) -> anyhow::Result<()>;
}
