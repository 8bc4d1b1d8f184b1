use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dialogflow ES v2 `WebhookRequest`. Only the fields this service reads are
/// modelled; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub response_id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: Option<String>,
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default)]
    pub intent: Option<IntentRef>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRef {
    #[serde(default)]
    pub display_name: String,
}

impl QueryResult {
    pub fn intent_name(&self) -> &str {
        self.intent
            .as_ref()
            .map(|i| i.display_name.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fulfillment_messages: Vec<FulfillmentMessage>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FulfillmentMessage {
    pub text: TextMessage,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextMessage {
    pub text: Vec<String>,
}

impl WebhookResponse {
    /// An empty response lets the platform fall back to the intent's own
    /// static replies.
    pub fn unhandled() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<String>) -> Self {
        Self {
            fulfillment_text: messages.first().cloned(),
            fulfillment_messages: messages
                .into_iter()
                .map(|m| FulfillmentMessage {
                    text: TextMessage { text: vec![m] },
                })
                .collect(),
        }
    }
}
