//! Calculator HTTP API Server
//!
//! Exposes [`calc_core`] over HTTP: `POST /` with `{"expression": "..."}`
//! answers with `{status, content, error, timestamp}`.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{ServerConfig, ServerError, serve, start_server};
