//! Text generation through Amazon Bedrock

pub mod client;

pub use client::{BedrockClient, InferenceClient};
