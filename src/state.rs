use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::email::Mailer;
use crate::services::messaging::MessagingProvider;
use crate::services::store::AppointmentStore;

pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn AppointmentStore>,
    pub mailer: Arc<dyn Mailer>,
    pub messaging: Arc<dyn MessagingProvider>,
}
