use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Open the rolling log file described by `config`, creating the directory.
pub fn file_appender(config: &AppConfig) -> Result<RollingFileAppender, InitError> {
    let rotation = match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    };
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(config.log_file.as_str())
        .build(&config.log_dir)
}

/// Install the global subscriber. Keep the guard alive until exit so the
/// background writer flushes.
///
/// Console output goes to stderr; stdout carries only the report. If the log
/// file cannot be opened, events go to stderr only and `None` is returned.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let registry = tracing_subscriber::registry().with(filter);

    let appender = match file_appender(config) {
        Ok(appender) => appender,
        Err(e) => {
            let stderr_layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            registry.with(stderr_layer).init();
            tracing::warn!(log_dir = %config.log_dir, error = %e, "File logging disabled");
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let console_layer = config.console.then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(true)
    });

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(console_layer).with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(console_layer).with(file_layer).init();
    }

    Some(guard)
}
