//! Workshop demo - an AWS Lambda that answers a user prompt with Amazon Bedrock
//! and records the exchange in DynamoDB.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind API Gateway for serverless execution
//! - Amazon Bedrock (`InvokeModel`) for text generation
//! - DynamoDB for the interaction log
//! - Tokio for async runtime
//!
//! AWS clients are created once per container in `main` and shared with every
//! invocation.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use workshop::api::RequestHandler;
//! use workshop::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     workshop::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let handler = RequestHandler::from_config(&config).await;
//!
//!     let response = handler.handle(&json!({ "user_input": "Hello AWS!" })).await;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod persistence;
pub mod prompt;

pub use errors::WorkshopError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// workshop::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
