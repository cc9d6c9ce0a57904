use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to load .env file: {0}")]
    DotenvError(#[from] dotenv::Error),

    #[error("Log configuration error: {0}")]
    LogError(#[from] crate::log::LogError),

    #[error("Decoder configuration error: {0}")]
    DecoderError(#[from] crate::decoder::DecoderError),
}
