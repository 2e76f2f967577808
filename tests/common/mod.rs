#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use workshop::WorkshopError;
use workshop::ai::InferenceClient;
use workshop::core::models::Interaction;
use workshop::persistence::InteractionStore;

/// Returns a canned reply and records every prompt it receives.
#[derive(Clone)]
pub struct FakeInference {
    reply: Result<String, String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeInference {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for FakeInference {
    async fn generate(&self, prompt: &str) -> Result<String, WorkshopError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(WorkshopError::InferenceError)
    }
}

/// In-memory table that can be told to reject writes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    fail: bool,
    pub attempts: Arc<Mutex<usize>>,
    pub records: Arc<Mutex<Vec<Interaction>>>,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<Interaction> {
        self.records.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl InteractionStore for MemoryStore {
    async fn put_interaction(&self, interaction: &Interaction) -> Result<(), WorkshopError> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(WorkshopError::PersistenceError(
                "ResourceNotFoundException: table not found".to_string(),
            ));
        }
        self.records.lock().unwrap().push(interaction.clone());
        Ok(())
    }
}
