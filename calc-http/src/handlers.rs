use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use calc_core::charset::first_invalid_char;
use tracing::info;

use crate::{
    error::AppError,
    models::{CalculateRequest, CalculateResponse},
    server::AppState,
};

/// Evaluate an arithmetic expression
///
/// The body must be a JSON object with a string `expression` field.
#[utoipa::path(
    post,
    path = "/",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Expression evaluated", body = CalculateResponse),
        (status = 400, description = "Empty, malformed or unevaluable expression", body = CalculateResponse),
        (status = 405, description = "Method other than POST", body = CalculateResponse),
        (status = 500, description = "Request body could not be decoded", body = CalculateResponse)
    )
)]
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::EmptyBody);
    }

    let request: CalculateRequest = serde_json::from_slice(&body).map_err(AppError::Unmarshal)?;

    if request.expression.is_empty() {
        return Err(AppError::EmptyExpression);
    }
    if let Some((position, character)) = first_invalid_char(&request.expression) {
        return Err(AppError::InvalidCharacters {
            character,
            position,
        });
    }

    let content = state.calculator.evaluate(&request.expression)?;
    info!("{} = {}", request.expression.trim(), content);

    Ok(Json(CalculateResponse::success(content)))
}

/// Fallback for `/` with any method other than POST; the body is never read.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Health check endpoint for container health monitoring
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
