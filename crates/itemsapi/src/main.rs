mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use itemsapi_core::storage::ItemRepository;
use lambda_http::{run, service_fn, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, handlers::function_handler, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::from_env();
    let item_repo = init_repository(&config).await?;
    let state = AppState::new(item_repo, &config);

    tracing::info!(scan_limit = config.scan_limit.get(), "Items function ready");

    run(service_fn(|event| function_handler(&state, event))).await
}

/// Initialize the tracing subscriber.
///
/// Lambda forwards stdout to CloudWatch, which stamps each line itself, so
/// events are written as JSON without timestamps or ANSI colors.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_current_span(false),
        )
        .init();
}

/// Create the DynamoDB repository for the configured table.
#[cfg(feature = "dynamodb")]
async fn init_repository(config: &Config) -> anyhow::Result<Arc<dyn ItemRepository>> {
    let table_name = config.require_table_name()?;
    let repo = storage::DynamoDbRepository::from_env(table_name).await;

    tracing::info!(table = repo.table_name(), "Using DynamoDB storage");
    Ok(Arc::new(repo))
}

/// Create an empty in-memory repository for local runs.
#[cfg(not(feature = "dynamodb"))]
async fn init_repository(_config: &Config) -> anyhow::Result<Arc<dyn ItemRepository>> {
    tracing::warn!("Built without the dynamodb feature; items are kept in memory");
    Ok(Arc::new(storage::InMemoryRepository::new()))
}
