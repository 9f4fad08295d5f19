use anyhow::{Context, Result};
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the file writer alive; logs stop flushing once this is dropped.
pub struct Logger {
    _guard: WorkerGuard,
}

impl Logger {
    pub fn new(component: &str, log_dir: &str) -> Result<Self> {
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(file_name)
            .build(log_dir)
            .with_context(|| format!("Failed to open log directory {log_dir}"))?;
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let installed = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init();

        if let Err(e) = installed {
            eprintln!("⚠️ Logger for {component} not installed: {e}");
        }

        Ok(Self { _guard: guard })
    }
}
