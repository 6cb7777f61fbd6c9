use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use ssosync_bootstrap_core::contract::{
    SyncSuccessResponse, CREDENTIALS_ENV_VAR, DEFAULT_CREDENTIALS_PATH, DEFAULT_SYNC_COMMAND,
};
use ssosync_bootstrap_lambda::handlers::sync::{
    handle_sync_event_with_process_runtime, SyncHandlerConfig,
};

async fn handle_request(event: LambdaEvent<Value>) -> Result<SyncSuccessResponse, Error> {
    // The event payload is part of the platform calling convention but
    // carries nothing this handler inspects.
    let _ = event.payload;

    let config = SyncHandlerConfig {
        credentials: std::env::var(CREDENTIALS_ENV_VAR).ok(),
        credentials_path: std::env::var("SSOSYNC_CREDENTIALS_PATH")
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string())
            .into(),
        command: std::env::var("SSOSYNC_COMMAND")
            .unwrap_or_else(|_| DEFAULT_SYNC_COMMAND.to_string())
            .into(),
        event_time: Utc::now().to_rfc3339(),
    };

    handle_sync_event_with_process_runtime(&config).map_err(|error| Error::from(error.message()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
