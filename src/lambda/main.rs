use lambda_http::{run, service_fn, Error, Request};
use tracing_subscriber::EnvFilter;

use environments_api::config::Config;
use environments_api::handlers::function_handler;
use environments_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON logs; CloudWatch adds the ingestion time
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config).await;

    run(service_fn(|event: Request| function_handler(&state, event))).await
}
