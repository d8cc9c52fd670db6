use axum::{
    Json, Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{CalculateRequest, CalculateResponse};
use crate::server::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::calculate, handlers::health_check),
    components(schemas(CalculateRequest, CalculateResponse)),
    tags(
        (name = "calculator", description = "Arithmetic expression evaluation")
    )
)]
pub struct ApiDoc;

/// Create the main router with state
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(handlers::calculate).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
