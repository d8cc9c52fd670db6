use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request for evaluating an expression
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// Arithmetic expression, e.g. `2 * (3 + 4)`
    pub expression: String,
}

/// Response for every request to the calculator endpoint, successful or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// HTTP status code of the response
    pub status: u16,
    /// Result of the evaluation, 0 on error
    pub content: f64,
    /// Error message, empty on success
    pub error: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl CalculateResponse {
    pub fn success(content: f64) -> Self {
        Self {
            status: 200,
            content,
            error: String::new(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            content: 0.0,
            error: error.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
