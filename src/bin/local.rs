// Runs the handler once against real AWS services, outside Lambda.
//
// Usage: workshop-local [user input]

use anyhow::{Context, Result, anyhow};
use serde_json::json;
use workshop::api::RequestHandler;
use workshop::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    workshop::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow!(e))?;
    let request_handler = RequestHandler::from_config(&config).await;

    let user_input = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let user_input = if user_input.trim().is_empty() {
        "Hello AWS!".to_string()
    } else {
        user_input
    };

    let test_event = json!({ "user_input": user_input });
    let result = request_handler.handle(&test_event).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to render response")?
    );
    Ok(())
}
