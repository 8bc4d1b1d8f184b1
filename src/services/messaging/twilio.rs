use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;

const TWILIO_API: &str = "https://api.twilio.com";

pub struct TwilioWhatsAppProvider {
    account_sid: String,
    auth_token: String,
    from_number: String,
    base_url: String,
    client: reqwest::Client,
}

impl TwilioWhatsAppProvider {
    /// `from_number` may be given bare (`+14155238886`) or already carry the
    /// `whatsapp:` channel prefix.
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        let from_number = if from_number.starts_with("whatsapp:") {
            from_number
        } else {
            format!("whatsapp:{}", from_number.trim())
        };

        Self {
            account_sid,
            auth_token,
            from_number,
            base_url: TWILIO_API.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl MessagingProvider for TwilioWhatsAppProvider {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await
            .context("failed to send Twilio WhatsApp message")?
            .error_for_status()
            .context("Twilio API returned error")?;

        let data: serde_json::Value = resp.json().await.unwrap_or_default();
        tracing::info!(to, sid = data["sid"].as_str().unwrap_or(""), "WhatsApp message sent");

        Ok(())
    }
}
