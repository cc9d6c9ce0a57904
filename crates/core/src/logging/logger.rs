// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use runtime_wire_config::LogConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    /// Any `EnvFilter` directive, e.g. `debug` or `info,runtime_wire=trace`.
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
}

/// Install a global `tracing` subscriber writing to stdout.
///
/// The library itself only emits events; binaries and tests call this to see them.
///
/// # Examples
/// ```no_run
/// use runtime_wire::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
/// })?;
/// # Ok::<(), runtime_wire::logging::LoggingError>(())
/// ```
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.level).map_err(|source| LoggingError::InvalidLogLevel {
        level: config.level.to_string(),
        source,
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_format {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}

/// Initialize logging from the `log` section of the environment configuration.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    init_with_config(LoggingConfig {
        level: &config.level,
        json_format: config.json,
        strip_ansi: config.strip_ansi,
    })
}
