use calc_core::EvaluatorConfig;
use calc_http::{ServerConfig, start_server};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Calculator HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// JSON file with evaluator limits
    #[arg(short, long, env = "CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let evaluator = match &cli.config {
        Some(path) => {
            let config = EvaluatorConfig::from_file(path)?;
            config.validate()?;
            config
        }
        None => EvaluatorConfig::default(),
    };

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        evaluator,
    };

    start_server(config).await?;
    Ok(())
}
