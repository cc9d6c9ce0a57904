use thiserror::Error;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{0}'. Must be one of: trace, debug, info, warn, error")]
    InvalidLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log Level
    ///
    /// Env: RUNTIME_WIRE_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error
    /// Default: info
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: RUNTIME_WIRE_LOG_JSON
    /// Default: false
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: RUNTIME_WIRE_LOG_STRIP_ANSI
    /// Default: false
    pub strip_ansi: bool,
}

pub(crate) fn default_level() -> String {
    "info".to_string()
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        if !VALID_LEVELS.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel(self.level.clone()));
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
        }
    }
}
