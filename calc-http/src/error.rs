//! Error handling for calc-http
//!
//! Every error is rendered as a [`CalculateResponse`] whose `status` matches
//! the HTTP status of the response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use calc_core::EvaluationError;
use std::cmp::PartialEq;
use thiserror::Error;

use crate::models::CalculateResponse;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("only POST requests are allowed")]
    MethodNotAllowed,

    #[error("failed to unmarshal request")]
    Unmarshal(#[source] serde_json::Error),

    #[error("empty request body")]
    EmptyBody,

    #[error("empty expression in request")]
    EmptyExpression,

    /// `position` is the byte offset of the first rejected `character`; the
    /// response message does not include either.
    #[error("expression contains invalid characters")]
    InvalidCharacters { character: char, position: usize },

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        &self.status_code() == status_code
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unmarshal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmptyBody
            | Self::EmptyExpression
            | Self::InvalidCharacters { .. }
            | Self::Evaluation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Unmarshal(err) => tracing::error!("{}: {}", self, err),
            Self::InvalidCharacters {
                character,
                position,
            } => tracing::debug!(?character, position, "{}", self),
            _ => tracing::debug!(status = status.as_u16(), "{}", self),
        }

        let body = Json(CalculateResponse::failure(status.as_u16(), self.to_string()));
        (status, body).into_response()
    }
}
