use std::env;

use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq)]
pub enum StoreBackend {
    Supabase,
    Sqlite,
}

impl StoreBackend {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => StoreBackend::Sqlite,
            _ => StoreBackend::Supabase,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub store_backend: StoreBackend,
    pub supabase_url: String,
    pub supabase_key: String,
    pub database_url: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub email_user: String,
    pub email_pass: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_whatsapp_number: String,
    pub clinic_name: String,
    pub default_country_code: String,
}

impl AppConfig {
    /// Reads the process environment. Missing credentials are a startup
    /// error so the server never binds with a half-configured integration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{key} must be set")))
        };

        let store_backend = get("STORE_BACKEND")
            .map(|v| StoreBackend::parse(&v))
            .unwrap_or(StoreBackend::Supabase);

        let (supabase_url, supabase_key) = match store_backend {
            StoreBackend::Supabase => (required("SUPABASE_URL")?, required("SUPABASE_KEY")?),
            StoreBackend::Sqlite => (
                get("SUPABASE_URL").unwrap_or_default(),
                get("SUPABASE_KEY").unwrap_or_default(),
            ),
        };

        Ok(Self {
            port: get("PORT").and_then(|v| v.parse().ok()).unwrap_or(8080),
            store_backend,
            supabase_url,
            supabase_key,
            database_url: get("DATABASE_URL").unwrap_or_else(|| "appointments.db".to_string()),
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            smtp_port: get("SMTP_PORT").and_then(|v| v.parse().ok()).unwrap_or(465),
            email_user: required("EMAIL_USER")?,
            email_pass: required("EMAIL_PASS")?,
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_whatsapp_number: required("TWILIO_WHATSAPP_NUMBER")?,
            clinic_name: get("CLINIC_NAME").unwrap_or_else(|| "Smart Dentist Clinic".to_string()),
            default_country_code: get("DEFAULT_COUNTRY_CODE")
                .map(|v| v.trim().trim_start_matches('+').to_string())
                .unwrap_or_else(|| "92".to_string()),
        })
    }
}
