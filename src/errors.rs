use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkshopError {
    #[error("Failed to read request input: {0}")]
    InputError(String),

    #[error("Failed to get a response from Bedrock: {0}")]
    InferenceError(String),

    #[error("Failed to store interaction in DynamoDB: {0}")]
    PersistenceError(String),
}

impl WorkshopError {
    /// Short label used in structured logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WorkshopError::InputError(_) => "input",
            WorkshopError::InferenceError(_) => "inference",
            WorkshopError::PersistenceError(_) => "persistence",
        }
    }
}

impl From<serde_json::Error> for WorkshopError {
    fn from(error: serde_json::Error) -> Self {
        WorkshopError::InputError(error.to_string())
    }
}
