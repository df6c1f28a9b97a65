//! Logging system configuration and initialization
//!
//! This module provides the logging setup with:
//! - Console output on stderr (stdout is reserved for command output)
//! - Optional file output through a non-blocking appender
//! - Structured JSON logging (optional)
//! - `RUST_LOG` override of the configured level
//! - Local timezone timestamps

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use chrono::Local;
use once_cell::sync::Lazy;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

// Re-export LoggingConfig from config module
pub use crate::infrastructure::config::LoggingConfig;

// Global guard to keep the log file writer alive
static LOG_GUARDS: Lazy<Mutex<Vec<WorkerGuard>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Time formatter in the machine's local timezone
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f %:z"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(LoggingConfig::default())
}

/// Build the level filter.
///
/// `RUST_LOG` wins when set. Otherwise the configured level applies to the
/// crate, HTML parser internals are held at `warn` unless tracing, and
/// `module_filters` are added last.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(&config.level).map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))?;

    if !config.level.eq_ignore_ascii_case("trace") {
        for directive in ["html5ever=warn", "selectors=warn", "calamine=warn"] {
            filter = filter.add_directive(directive.parse()?);
        }
    }

    filter = filter.add_directive(format!("crossword_extractor_lib={}", config.level).parse()?);

    for (module, level) in &config.module_filters {
        filter = filter.add_directive(
            format!("{module}={level}")
                .parse()
                .map_err(|e| anyhow!("Invalid module filter {}={}: {}", module, level, e))?,
        );
    }

    Ok(filter)
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with custom configuration
///
/// Fails when neither console nor file output is enabled, or when a global
/// subscriber is already installed.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    if !config.console_output && !config.file_output {
        return Err(anyhow!("No logging output configured"));
    }

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut log_dir = None;

    if config.file_output {
        let dir = config.log_dir.clone().unwrap_or_else(get_log_directory);
        std::fs::create_dir_all(&dir).map_err(|e| anyhow!("Failed to create log directory {:?}: {}", dir, e))?;

        let file_appender = rolling::never(&dir, &config.file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);

        // Store the guard globally to prevent it from being dropped
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard registry poisoned"))?
            .push(file_guard);

        let file_layer = fmt::Layer::new()
            .with_writer(file_writer)
            .with_timer(LocalTimeFormatter)
            .with_ansi(false);

        if config.json_format {
            layers.push(
                file_layer
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .boxed(),
            );
        } else {
            layers.push(file_layer.with_target(false).boxed());
        }
        log_dir = Some(dir);
    }

    if config.console_output {
        let console_layer = fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_timer(LocalTimeFormatter)
            .with_target(false);

        if config.json_format && !config.file_output {
            layers.push(console_layer.json().boxed());
        } else {
            layers.push(console_layer.boxed());
        }
    }

    let env_filter = build_env_filter(&config)?;

    Registry::default()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!("Logging system initialized");
    info!("Log level: {}", config.level);
    info!("JSON format: {}", config.json_format);
    if let Some(dir) = log_dir {
        info!("Log file: {:?}", dir.join(&config.file_name));
    }

    Ok(())
}
