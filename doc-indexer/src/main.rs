use lambda_runtime::{run, service_fn, Error};
use tracing_subscriber::EnvFilter;

use doc_indexer::handler::function_handler;
use doc_indexer::Dependencies;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dependencies = Dependencies::new().await?;
    let orchestrator = dependencies.orchestrator;

    run(service_fn(|event| function_handler(event, &orchestrator))).await
}
