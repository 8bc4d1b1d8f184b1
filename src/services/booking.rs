use std::sync::Arc;

use tokio::task::JoinError;

use crate::config::AppConfig;
use crate::models::{AppointmentRecord, BookingOutcome, NormalizedBooking};
use crate::services::email::OutboundEmail;
use crate::services::phone;
use crate::state::AppState;

const EMAIL_SUBJECT: &str = "Appointment Confirmed! 🦷";

/// Persists the booking and notifies the patient by email and WhatsApp.
///
/// The three calls run as separate tasks and are all awaited before the
/// reply is built. A failure (or panic) in one is logged and never reaches
/// the others or the reply.
pub async fn book_appointment(
    state: &Arc<AppState>,
    booking: &NormalizedBooking,
) -> (String, BookingOutcome) {
    tracing::info!(
        patient = %booking.patient_name,
        time = %booking.appointment_time,
        phone = %booking.phone_number,
        email = %booking.email,
        "booking request"
    );

    let store = Arc::clone(&state.store);
    let record = AppointmentRecord::from(booking);
    let persist = tokio::spawn(async move { store.insert(&record).await });

    let mailer = Arc::clone(&state.mailer);
    let email = confirmation_email(&state.config, booking);
    let send_email = tokio::spawn(async move { mailer.send(&email).await });

    let messaging = Arc::clone(&state.messaging);
    let to = phone::whatsapp_address(&phone::to_e164(
        &booking.phone_number,
        &state.config.default_country_code,
    ));
    let body = chat_message(&state.config.clinic_name, booking);
    let send_chat = tokio::spawn(async move { messaging.send_message(&to, &body).await });

    let (persisted, emailed, messaged) = tokio::join!(persist, send_email, send_chat);

    let outcome = BookingOutcome {
        persisted: settle("store insert", persisted),
        emailed: settle("confirmation email", emailed),
        messaged: settle("WhatsApp message", messaged),
    };

    tracing::info!(
        persisted = outcome.persisted,
        emailed = outcome.emailed,
        messaged = outcome.messaged,
        "booking side effects finished"
    );

    (confirmation_reply(booking), outcome)
}

fn settle(label: &str, result: Result<anyhow::Result<()>, JoinError>) -> bool {
    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!(error = %format!("{e:#}"), "{label} failed");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "{label} task aborted");
            false
        }
    }
}

pub fn confirmation_email(config: &AppConfig, booking: &NormalizedBooking) -> OutboundEmail {
    OutboundEmail {
        from_name: config.clinic_name.clone(),
        from_address: config.email_user.clone(),
        to: booking.email.clone(),
        subject: EMAIL_SUBJECT.to_string(),
        text: format!(
            "Hi {},\n\nYour appointment has been confirmed for {}.\n\nReference: {}\n\nSee you soon!\n{}",
            booking.patient_name, booking.appointment_time, booking.phone_number, config.clinic_name,
        ),
    }
}

pub fn chat_message(clinic_name: &str, booking: &NormalizedBooking) -> String {
    format!(
        "🦷 *{clinic_name}*\n\nHi {}!\n\nYour appointment has been confirmed for *{}*.\n\nReference: {}\n\nSee you soon!",
        booking.patient_name, booking.appointment_time, booking.phone_number,
    )
}

/// Always claims success: the conversation must not fail because a
/// notification provider is down.
pub fn confirmation_reply(booking: &NormalizedBooking) -> String {
    format!(
        "✅ Appointment Confirmed!\n\nPatient: {}\nTime: {}\n\nWe have sent a confirmation email to {} and a message to {}. See you at the clinic! 🦷",
        booking.patient_name, booking.appointment_time, booking.email, booking.phone_number,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::config::StoreBackend;
    use crate::services::email::Mailer;
    use crate::services::messaging::MessagingProvider;
    use crate::services::store::AppointmentStore;

    #[derive(Default)]
    struct Recorder {
        rows: Mutex<Vec<AppointmentRecord>>,
        emails: Mutex<Vec<OutboundEmail>>,
        messages: Mutex<Vec<(String, String)>>,
    }

    struct FailingStore;

    #[async_trait]
    impl AppointmentStore for FailingStore {
        async fn insert(&self, _record: &AppointmentRecord) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    struct PanickingMailer;

    #[async_trait]
    impl Mailer for PanickingMailer {
        async fn send(&self, _email: &OutboundEmail) -> anyhow::Result<()> {
            panic!("mailer exploded")
        }
    }

    #[async_trait]
    impl AppointmentStore for Recorder {
        async fn insert(&self, record: &AppointmentRecord) -> anyhow::Result<()> {
            self.rows.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[async_trait]
    impl Mailer for Recorder {
        async fn send(&self, email: &OutboundEmail) -> anyhow::Result<()> {
            self.emails.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    #[async_trait]
    impl MessagingProvider for Recorder {
        async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
            self.messages
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(())
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            port: 8080,
            store_backend: StoreBackend::Sqlite,
            supabase_url: String::new(),
            supabase_key: String::new(),
            database_url: ":memory:".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
            email_user: "clinic@example.com".to_string(),
            email_pass: "secret".to_string(),
            twilio_account_sid: "AC123".to_string(),
            twilio_auth_token: "token".to_string(),
            twilio_whatsapp_number: "whatsapp:+14155238886".to_string(),
            clinic_name: "Smart Dentist Clinic".to_string(),
            default_country_code: "92".to_string(),
        }
    }

    fn booking() -> NormalizedBooking {
        NormalizedBooking {
            patient_name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            phone_number: "0300-1234567".to_string(),
            appointment_time: "03:00 PM".to_string(),
        }
    }

    #[tokio::test]
    async fn test_all_channels_attempted() {
        let recorder = Arc::new(Recorder::default());
        let state = Arc::new(AppState {
            config: config(),
            store: recorder.clone(),
            mailer: recorder.clone(),
            messaging: recorder.clone(),
        });

        let (reply, outcome) = book_appointment(&state, &booking()).await;

        assert_eq!(
            outcome,
            BookingOutcome { persisted: true, emailed: true, messaged: true }
        );
        assert_eq!(reply, confirmation_reply(&booking()));
        assert_eq!(recorder.rows.lock().unwrap().len(), 1);

        let emails = recorder.emails.lock().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to, "ali@example.com");
        assert_eq!(emails[0].from_address, "clinic@example.com");

        let messages = recorder.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "whatsapp:+923001234567");
        assert!(messages[0].1.contains("Hi Ali!"));
    }

    #[tokio::test]
    async fn test_failures_are_isolated() {
        let recorder = Arc::new(Recorder::default());
        let state = Arc::new(AppState {
            config: config(),
            store: Arc::new(FailingStore),
            mailer: Arc::new(PanickingMailer),
            messaging: recorder.clone(),
        });

        let (reply, outcome) = book_appointment(&state, &booking()).await;

        assert_eq!(
            outcome,
            BookingOutcome { persisted: false, emailed: false, messaged: true }
        );
        assert_eq!(reply, confirmation_reply(&booking()));
        assert_eq!(recorder.messages.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_email_content() {
        let email = confirmation_email(&config(), &booking());
        assert_eq!(email.subject, EMAIL_SUBJECT);
        assert_eq!(email.from_name, "Smart Dentist Clinic");
        assert!(email.text.starts_with("Hi Ali,"));
        assert!(email.text.contains("confirmed for 03:00 PM"));
        assert!(email.text.contains("Reference: 0300-1234567"));
    }

    #[test]
    fn test_reply_mentions_both_channels() {
        let reply = confirmation_reply(&booking());
        assert!(reply.contains("Patient: Ali"));
        assert!(reply.contains("Time: 03:00 PM"));
        assert!(reply.contains("email to ali@example.com"));
        assert!(reply.contains("message to 0300-1234567"));
    }
}
