use calc_core::{Calculator, EvaluatorConfig};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_router;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Admission limits for evaluated expressions
    pub evaluator: EvaluatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            evaluator: EvaluatorConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared state of the handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculator: Calculator,
}

impl AppState {
    pub fn new(evaluator: EvaluatorConfig) -> Self {
        Self {
            calculator: Calculator::new(evaluator),
        }
    }
}

/// Router with state and request tracing
pub fn app(config: &ServerConfig) -> axum::Router {
    create_router()
        .with_state(AppState::new(config.evaluator.clone()))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;
    let listener = TcpListener::bind(addr).await?;
    serve(listener, config).await
}

/// Serve on an already bound listener
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<(), ServerError> {
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app(&config)).await?;
    Ok(())
}
