use super::config::ConfigError;
use crate::core::models::word::WordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: WordError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(
        "Could not place every word after {passes} placement pass(es); last grid size was {last_size}x{last_size}"
    )]
    GenerationFailed { passes: usize, last_size: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
