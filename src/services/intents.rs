use std::sync::Arc;

use crate::models::{Intent, QueryResult};
use crate::services::booking;
use crate::services::normalize::normalize_booking;
use crate::state::AppState;

pub fn welcome_message(clinic_name: &str) -> String {
    format!(
        "Welcome to {clinic_name}! I can help you book appointments for services like Cleaning, Checkup, or Root Canal. How can I help you today?"
    )
}

pub fn fallback_messages() -> Vec<String> {
    vec![
        "I didn't understand. Can you try again?".to_string(),
        "I'm sorry, can you say that again?".to_string(),
    ]
}

/// Runs the handler registered for the query's intent. Returns `None` for
/// intents this service does not handle.
pub async fn handle_intent(state: &Arc<AppState>, query: &QueryResult) -> Option<Vec<String>> {
    let intent = Intent::from_display_name(query.intent_name())?;

    let messages = match intent {
        Intent::Welcome => vec![welcome_message(&state.config.clinic_name)],
        Intent::Fallback => fallback_messages(),
        Intent::BookAppointment => {
            let booking = normalize_booking(&query.parameters);
            let (reply, _outcome) = booking::book_appointment(state, &booking).await;
            vec![reply]
        }
    };

    Some(messages)
}
