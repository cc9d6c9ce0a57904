mod decoder;
mod error;
mod log;

pub use decoder::{DecoderConfig, DecoderError};
pub use error::ConfigError;
pub use log::{LogConfig, LogError};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "RUNTIME_WIRE_";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireConfig {
    pub decoder: DecoderConfig,
    pub log: LogConfig,
}

/// Variables as they appear in the environment, without the prefix.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default = "decoder::default_max_event_records")]
    max_event_records: u32,
    #[serde(default)]
    reject_unknown_events: bool,
}

impl From<EnvConfig> for WireConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            decoder: DecoderConfig {
                max_event_records: env.max_event_records,
                reject_unknown_events: env.reject_unknown_events,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
            },
        }
    }
}

impl WireConfig {
    /// Load from `RUNTIME_WIRE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?.into();
        config.validate()?;
        Ok(config)
    }

    /// Load variables from a `.env` file into the environment, then read them like
    /// [`from_env`](Self::from_env). Variables already set take precedence over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv::from_path(path.as_ref())?;
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.decoder.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
