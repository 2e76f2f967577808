use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One persisted exchange between a user and the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub timestamp: String,
    pub user_input: String,
    pub ai_response: String,
}

impl Interaction {
    /// Creates a record with a fresh v4 id, stamped with the current UTC time.
    #[must_use]
    pub fn new(user_input: String, ai_response: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            user_input,
            ai_response,
        }
    }
}

/// Request body as it arrives in the Lambda event.
///
/// API Gateway proxies deliver the body as a JSON-encoded string, while direct
/// invocations pass the fields on the event itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    Text(String),
    Structured(Value),
}
