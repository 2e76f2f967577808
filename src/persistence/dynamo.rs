use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::info;

use super::InteractionStore;
use crate::core::models::Interaction;
use crate::errors::WorkshopError;

/// Maps an interaction onto a DynamoDB item. Every attribute is a string.
#[must_use]
pub fn to_item(interaction: &Interaction) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(interaction.id.clone())),
        (
            "timestamp".to_string(),
            AttributeValue::S(interaction.timestamp.clone()),
        ),
        (
            "user_input".to_string(),
            AttributeValue::S(interaction.user_input.clone()),
        ),
        (
            "ai_response".to_string(),
            AttributeValue::S(interaction.ai_response.clone()),
        ),
    ])
}

pub struct DynamoInteractionStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoInteractionStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    #[must_use]
    pub fn from_shared_config(shared: &aws_config::SdkConfig, table_name: String) -> Self {
        Self::new(DynamoClient::new(shared), table_name)
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl InteractionStore for DynamoInteractionStore {
    async fn put_interaction(&self, interaction: &Interaction) -> Result<(), WorkshopError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(interaction)))
            .send()
            .await
            .map_err(|e| {
                WorkshopError::PersistenceError(format!("put_item: {}", DisplayErrorContext(&e)))
            })?;

        info!(
            table = %self.table_name,
            interaction_id = %interaction.id,
            "Stored interaction"
        );
        Ok(())
    }
}
