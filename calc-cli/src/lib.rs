//! Command line front end for [`calc_core`].
//!
//! The `calc` binary runs an interactive session by default ([`repl`]) and
//! offers one-shot `eval` and `parse` subcommands.

pub mod config;
pub mod output;
pub mod repl;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] calc_core::ConfigError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Evaluation(#[from] calc_core::EvaluationError),
}

pub type CliResult<T> = Result<T, CliError>;
