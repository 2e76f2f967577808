//! Bedrock inference client
//!
//! Wraps `InvokeModel` with the Messages payload and extracts the first text
//! block from the reply.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::WorkshopError;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// # Errors
    ///
    /// Returns `WorkshopError::InferenceError` if the call fails or the reply
    /// does not contain any generated text.
    async fn generate(&self, prompt: &str) -> Result<String, WorkshopError>;
}

/// Builds the single-message request body for `InvokeModel`.
#[must_use]
pub fn build_request_body(prompt: &str, max_tokens: i32) -> Value {
    json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": max_tokens,
        "temperature": TEMPERATURE,
        "top_p": TOP_P,
        "messages": [
            { "role": "user", "content": prompt }
        ]
    })
}

/// Pulls `content[0].text` out of an `InvokeModel` reply and trims it.
///
/// # Errors
///
/// Returns `WorkshopError::InferenceError` if the body is not JSON, the
/// content array is missing or empty, or the text is blank.
pub fn parse_response_body(bytes: &[u8]) -> Result<String, WorkshopError> {
    let response_json: Value = serde_json::from_slice(bytes).map_err(|e| {
        WorkshopError::InferenceError(format!("Failed to parse Bedrock response: {e}"))
    })?;

    let first = response_json
        .get("content")
        .and_then(|c| c.as_array())
        .ok_or_else(|| WorkshopError::InferenceError("Response has no content array".to_string()))?
        .first()
        .ok_or_else(|| WorkshopError::InferenceError("Response content is empty".to_string()))?;

    let text = first
        .get("text")
        .and_then(|t| t.as_str())
        .ok_or_else(|| {
            WorkshopError::InferenceError("First content block has no text".to_string())
        })?
        .trim();

    if text.is_empty() {
        return Err(WorkshopError::InferenceError(
            "Model returned empty text".to_string(),
        ));
    }

    Ok(text.to_string())
}

pub struct BedrockClient {
    client: BedrockRuntimeClient,
    model_id: String,
    max_tokens: i32,
}

impl BedrockClient {
    #[must_use]
    pub fn new(client: BedrockRuntimeClient, model_id: String, max_tokens: i32) -> Self {
        Self {
            client,
            model_id,
            max_tokens,
        }
    }

    /// Builds a client from the shared AWS config, pinned to the configured
    /// Bedrock region.
    #[must_use]
    pub fn from_shared_config(shared: &aws_config::SdkConfig, config: &AppConfig) -> Self {
        let bedrock_config = aws_sdk_bedrockruntime::config::Builder::from(shared)
            .region(Region::new(config.bedrock_region.clone()))
            .build();

        Self::new(
            BedrockRuntimeClient::from_conf(bedrock_config),
            config.model_id.clone(),
            config.max_tokens,
        )
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn generate(&self, prompt: &str) -> Result<String, WorkshopError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Bedrock prompt:\n{}", prompt);

        info!(
            model_id = %self.model_id,
            max_tokens = self.max_tokens,
            "Invoking Bedrock model"
        );

        let body = serde_json::to_vec(&build_request_body(prompt, self.max_tokens)).map_err(
            |e| WorkshopError::InferenceError(format!("Failed to encode Bedrock request: {e}")),
        )?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                WorkshopError::InferenceError(format!(
                    "invoke_model: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        parse_response_body(response.body().as_ref())
    }
}
