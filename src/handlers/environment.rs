use axum::{
    body::Bytes,
    extract::State,
    http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::{AppError, AppResult, ErrorMessage};
use crate::models::{CreateEnvironmentRequest, Environment};
use crate::services::validate_create;
use crate::state::AppState;

/// Validate a raw request body and persist a new environment item.
///
/// Shared by the Lambda adapter and the local server. Validation failures come
/// back as `AppError::Validation` before anything is written.
pub async fn create(state: &AppState, body: &[u8]) -> AppResult<Environment> {
    let data = parse_body(body)?;
    let input = validate_create(&data)?;

    let environment = Environment::create(input, OffsetDateTime::now_utc())?;
    state.store.put(&environment).await?;

    tracing::info!(id = %environment.id, name = %environment.name, "Environment created");
    Ok(environment)
}

fn parse_body(body: &[u8]) -> AppResult<Value> {
    let data: Value =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    if data.is_null() {
        return Err(AppError::InvalidBody("body is null".to_string()));
    }

    Ok(data)
}

// ============ Handlers ============

/// Create a new environment
#[utoipa::path(
    post,
    path = "/environments",
    request_body = CreateEnvironmentRequest,
    responses(
        (status = 200, description = "Environment created successfully", body = Environment),
        (status = 400, description = "Validation error", body = ErrorMessage),
        (status = 500, description = "Storage write failed", body = ErrorMessage)
    ),
    tag = "Environments"
)]
pub async fn create_environment(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let environment = create(&state, &body).await?;
    Ok(([(ACCESS_CONTROL_ALLOW_ORIGIN, "*")], Json(environment)))
}
