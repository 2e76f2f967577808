/// Persistence layer for interaction records.
///
/// Records are written once and never read back by this crate.
pub mod dynamo;

use async_trait::async_trait;

use crate::core::models::Interaction;
use crate::errors::WorkshopError;

pub use dynamo::DynamoInteractionStore;

#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `WorkshopError::PersistenceError` if the write is rejected.
    async fn put_interaction(&self, interaction: &Interaction) -> Result<(), WorkshopError>;
}
