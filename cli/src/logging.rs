use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use crate::config::LoggingConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log level {0:?}")]
    Level(String),
    #[error("opening log file")]
    File(#[from] std::io::Error),
    #[error(transparent)]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Whether events from `target` at `level` pass the configured `max` level.
///
/// Only this binary and the analysis library are logged, dependencies stay quiet.
pub fn enabled(target: &str, level: &tracing::Level, max: tracing::Level) -> bool {
    (target.starts_with("roundstats") || target.starts_with("analysis")) && *level <= max
}

pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let max: tracing::Level = config
        .level
        .parse()
        .map_err(|_| LoggingError::Level(config.level.clone()))?;

    let (stderr_layer, file_layer) = match config.file.as_ref() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;

            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file));
            (None, Some(layer))
        }
        None => {
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr);
            (Some(layer), None)
        }
    };

    let registry = tracing_subscriber::Registry::default()
        .with(stderr_layer)
        .with(file_layer)
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            enabled(meta.target(), meta.level(), max)
        }));
    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
