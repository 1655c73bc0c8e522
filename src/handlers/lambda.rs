use lambda_http::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Request, Response};
use serde::Serialize;

use crate::error::{AppError, ErrorMessage};
use crate::handlers::environment::create;
use crate::state::AppState;

/// Lambda entry point for the create-environment HTTP event.
///
/// Validation errors become 400 responses. Every other failure is returned as
/// `Err` so the runtime records an invocation error; the caller only sees the
/// error's display message, never the storage detail.
pub async fn function_handler(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    match create(state, event.body().as_ref()).await {
        Ok(environment) => json_response(StatusCode::OK, &environment, true),
        Err(err @ AppError::Validation(_)) => {
            tracing::debug!(error = %err, "Rejected create request");
            json_response(StatusCode::BAD_REQUEST, &ErrorMessage::from(&err), false)
        }
        Err(err) => {
            if let AppError::InvalidBody(detail) = &err {
                tracing::warn!(detail = %detail, "Unparseable request body");
            }
            Err(err.into())
        }
    }
}

fn json_response<T: Serialize>(
    status: StatusCode,
    payload: &T,
    allow_any_origin: bool,
) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json");
    if allow_any_origin {
        builder = builder.header(ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    }

    let body = serde_json::to_string(payload)?;
    Ok(builder.body(Body::from(body))?)
}
