use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{WebhookRequest, WebhookResponse};
use crate::services::intents;
use crate::state::AppState;

pub async fn dialogflow_webhook(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, AppError> {
    let request_id = request
        .response_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let query = request
        .query_result
        .ok_or_else(|| AppError::BadRequest("missing queryResult".to_string()))?;
    let intent = query.intent_name();

    tracing::info!(
        request_id = %request_id,
        session = request.session.as_deref().unwrap_or(""),
        intent,
        "incoming fulfillment request"
    );
    tracing::debug!(
        request_id = %request_id,
        query_text = query.query_text.as_deref().unwrap_or(""),
        language = query.language_code.as_deref().unwrap_or(""),
        parameters = %serde_json::Value::Object(query.parameters.clone()),
        "fulfillment parameters"
    );

    match intents::handle_intent(&state, &query).await {
        Some(messages) => Ok(Json(WebhookResponse::from_messages(messages))),
        None => {
            tracing::warn!(request_id = %request_id, intent, "no handler for intent");
            Ok(Json(WebhookResponse::unhandled()))
        }
    }
}
