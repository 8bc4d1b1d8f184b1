use std::sync::{Arc, Mutex};

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinic_webhook::config::{AppConfig, StoreBackend};
use clinic_webhook::db;
use clinic_webhook::handlers;
use clinic_webhook::services::email::smtp::SmtpMailer;
use clinic_webhook::services::messaging::twilio::TwilioWhatsAppProvider;
use clinic_webhook::services::store::sqlite::SqliteStore;
use clinic_webhook::services::store::supabase::SupabaseStore;
use clinic_webhook::services::store::AppointmentStore;
use clinic_webhook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn AppointmentStore> = match config.store_backend {
        StoreBackend::Supabase => {
            tracing::info!("using Supabase store (url: {})", config.supabase_url);
            Arc::new(SupabaseStore::new(
                config.supabase_url.clone(),
                config.supabase_key.clone(),
            ))
        }
        StoreBackend::Sqlite => {
            tracing::info!("using SQLite store (path: {})", config.database_url);
            let conn = db::init_db(&config.database_url)?;
            Arc::new(SqliteStore::new(Arc::new(Mutex::new(conn))))
        }
    };
    let mailer = SmtpMailer::new(
        &config.smtp_host,
        config.smtp_port,
        config.email_user.clone(),
        config.email_pass.clone(),
    )?;
    let messaging = TwilioWhatsAppProvider::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_whatsapp_number.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        mailer: Arc::new(mailer),
        messaging: Arc::new(messaging),
    });

    let app = handlers::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
