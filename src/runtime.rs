//! Lambda bootstrap shared by the per-entity function binaries.

use crate::adapters::dynamo::DynamoStore;
use crate::config::StoreConfig;
use crate::core::gateway::{GatewayRequest, GatewayResponse};
use crate::domain::ports::Handler;
use crate::utils::{logger, validation::Validate};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

/// Initialises logging, reads and validates the store configuration, and
/// connects the DynamoDB client that every invocation will share.
pub async fn bootstrap() -> Result<(StoreConfig, Arc<DynamoStore>), Error> {
    logger::init_lambda_logger();

    let config = StoreConfig::from_env();
    config.validate().map_err(|e| {
        tracing::error!("Configuration validation failed: {}", e);
        Box::new(e) as Error
    })?;
    tracing::info!(
        region = %config.region,
        employees_table = %config.employees_table,
        books_table = %config.books_table,
        "Store configuration loaded"
    );

    let store = Arc::new(DynamoStore::connect(&config).await);
    Ok((config, store))
}

/// Serves gateway events with `handler` until the runtime shuts the process down.
pub async fn serve<H>(handler: H) -> Result<(), Error>
where
    H: Handler + 'static,
{
    let handler = Arc::new(handler);

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| {
        let handler = Arc::clone(&handler);
        async move {
            tracing::debug!(request_id = %event.context.request_id, "Received gateway event");
            Ok::<GatewayResponse, Error>(handler.handle(event.payload).await)
        }
    }))
    .await
}
