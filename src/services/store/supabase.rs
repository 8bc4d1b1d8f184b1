use anyhow::Context;
use async_trait::async_trait;

use super::AppointmentStore;
use crate::models::AppointmentRecord;

const TABLE: &str = "appointments";

/// Inserts rows through Supabase's PostgREST endpoint.
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AppointmentStore for SupabaseStore {
    async fn insert(&self, record: &AppointmentRecord) -> anyhow::Result<()> {
        let url = format!("{}/rest/v1/{TABLE}", self.base_url);

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&[record])
            .send()
            .await
            .context("failed to call Supabase")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Supabase insert failed ({}): {}", status, body);
        }

        Ok(())
    }
}
