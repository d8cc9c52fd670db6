use calc_core::{ConfigError, EvaluatorConfig};
use std::path::Path;
use tracing::debug;

/// Evaluator limits for the command line front end.
///
/// Supported sources (in order of precedence):
/// - `--config` argument (by clap)
/// - `CALC_CONFIG` environment variable (by clap)
/// - Dot-env file (by clap and dotenv)
/// - Built-in defaults
pub fn load_evaluator_config(path: Option<&Path>) -> Result<EvaluatorConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(EvaluatorConfig::default());
    };
    debug!("loading evaluator config from {}", path.display());
    let config = EvaluatorConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}
