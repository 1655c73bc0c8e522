use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use environments_api::config::Config;
use environments_api::error::ErrorMessage;
use environments_api::models::{CreateEnvironmentRequest, Environment};
use environments_api::state::AppState;
use environments_api::{build_router, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::environment::create_environment),
    components(schemas(CreateEnvironmentRequest, Environment, ErrorMessage)),
    tags(
        (name = "Environments", description = "Environment creation endpoint")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    let state = AppState::new(&config).await;

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
