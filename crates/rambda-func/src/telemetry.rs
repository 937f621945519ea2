use crate::config::{ConfigError, LogConfig, LogFormat};
use crate::error::Result;
use tracing_subscriber::EnvFilter;

/// Reads [`LogConfig`] from the environment and installs the subscriber.
pub fn init_from_env() -> Result<LogConfig> {
    let config = LogConfig::from_env()?;
    init_tracing(&config)?;
    Ok(config)
}

/// Installs the global tracing subscriber.
///
/// Output goes to stderr so stdout stays free for function output.
pub fn init_tracing(config: &LogConfig) -> std::result::Result<(), ConfigError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ConfigError::InvalidLogFilter(format!("{}: {}", config.filter, e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_ansi(false)
            .with_current_span(false)
            .try_init(),
    };

    result.map_err(|e| ConfigError::Subscriber(e.to_string()))
}
