//! Logging configuration using tracing
//!
//! The terminal belongs to the UI, so logs go to a file.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE: &str = "recipes-tui.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.recipes-tui/logs/`.
/// Log level is controlled by the `RECIPES_TUI_LOG` environment variable.
///
/// # Examples
/// ```bash
/// RECIPES_TUI_LOG=debug cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env("RECIPES_TUI_LOG")
        .unwrap_or_else(|_| EnvFilter::new("recipes_tui=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    tracing::info!("Recipes starting, logging to {}", log_dir.display());

    Ok(())
}

fn log_directory() -> PathBuf {
    Config::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}
