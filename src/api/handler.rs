//! API Lambda handler.
//!
//! Each invocation runs three steps in order:
//! - extract `user_input` from the event
//! - ask Bedrock for a reply
//! - store the exchange in DynamoDB
//!
//! Any failure short-circuits to the generic error envelope.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use super::helpers::ResponseEnvelope;
use crate::ai::{BedrockClient, InferenceClient};
use crate::core::config::AppConfig;
use crate::core::models::Interaction;
use crate::errors::WorkshopError;
use crate::persistence::{DynamoInteractionStore, InteractionStore};
use crate::prompt::build_prompt;

/// Long-lived collaborators shared by every invocation in a container.
pub struct RequestHandler<I, S> {
    inference: I,
    store: S,
}

impl RequestHandler<BedrockClient, DynamoInteractionStore> {
    /// Loads the shared AWS config once and builds both service clients.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;
        info!(
            table = %config.table_name,
            model_id = %config.model_id,
            bedrock_region = %config.bedrock_region,
            "Initialized AWS clients"
        );

        Self::new(
            BedrockClient::from_shared_config(&shared, config),
            DynamoInteractionStore::from_shared_config(&shared, config.table_name.clone()),
        )
    }
}

impl<I, S> RequestHandler<I, S>
where
    I: InferenceClient,
    S: InteractionStore,
{
    pub fn new(inference: I, store: S) -> Self {
        Self { inference, store }
    }

    /// Runs extract, infer and persist, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns the first failure; later steps are not attempted.
    pub async fn process(&self, event: &Value) -> Result<Interaction, WorkshopError> {
        let user_input = parsing::extract_user_input(event)?;
        info!(input_chars = user_input.chars().count(), "Extracted user input");

        let ai_response = self.inference.generate(&build_prompt(&user_input)).await?;
        info!(
            response_chars = ai_response.chars().count(),
            "Received Bedrock response"
        );

        let interaction = Interaction::new(user_input, ai_response);
        self.store.put_interaction(&interaction).await?;

        Ok(interaction)
    }

    /// Turns an inbound event into a response envelope. Never fails.
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        if parsing::is_preflight(event) {
            info!("Answering CORS preflight");
            return helpers::ok_preflight();
        }

        match self.process(event).await {
            Ok(interaction) => {
                helpers::ok_response(&interaction.ai_response, &interaction.timestamp)
            }
            Err(e) => {
                error!(error_kind = e.kind(), "Error: {}", e);
                helpers::err_response(&e)
            }
        }
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error; failures are reported in the 500 envelope.
#[tracing::instrument(
    level = "info",
    skip(handler, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<I, S>(
    handler: &RequestHandler<I, S>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error>
where
    I: InferenceClient,
    S: InteractionStore,
{
    let xray = event
        .payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(
        xray_trace_id = %xray,
        method = parsing::request_method(&event.payload).unwrap_or("INVOKE"),
        "API Lambda received request"
    );

    Ok(handler.handle(&event.payload).await)
}
