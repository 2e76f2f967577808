//! Response builders for the API Gateway proxy integration.
//!
//! Every envelope carries `Access-Control-Allow-Origin: *` so the workshop
//! web page can call the function from any origin.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::errors::WorkshopError;

pub const SUCCESS_MESSAGE: &str = "Workshop demo successful!";
pub const ERROR_PREFIX: &str = "Workshop demo error: ";
pub const ERROR_TIP: &str = "Check CloudWatch Logs for details";
pub const STORED_IN: &str = "DynamoDB";
pub const SERVICES_USED: [&str; 4] = ["Lambda", "Bedrock", "DynamoDB", "EC2"];

/// Proxy-integration response returned from the Lambda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ResponseEnvelope {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn cors_headers() -> BTreeMap<String, String> {
    headers(&[
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type"),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
        ("Content-Type", "application/json"),
    ])
}

/// Returns a 200 response with the generated text.
#[must_use]
pub fn ok_response(ai_response: &str, timestamp: &str) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        headers: cors_headers(),
        body: json!({
            "message": SUCCESS_MESSAGE,
            "ai_response": ai_response,
            "timestamp": timestamp,
            "stored_in": STORED_IN,
            "services_used": SERVICES_USED,
        })
        .to_string(),
    }
}

/// Returns a 200 response with no body for CORS preflight requests.
#[must_use]
pub fn ok_preflight() -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}

/// Returns the generic 500 response. The error kind is not exposed.
#[must_use]
pub fn err_response(error: &WorkshopError) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 500,
        headers: headers(&[
            ("Access-Control-Allow-Origin", "*"),
            ("Content-Type", "application/json"),
        ]),
        body: json!({
            "error": format!("{ERROR_PREFIX}{error}"),
            "tip": ERROR_TIP,
        })
        .to_string(),
    }
}
