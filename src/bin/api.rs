use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;
use workshop::api::{RequestHandler, handler};
use workshop::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    workshop::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once per container and reused by every invocation
    let request_handler = RequestHandler::from_config(&config).await;
    let request_handler = &request_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(request_handler, event).await
    }))
    .await
}
