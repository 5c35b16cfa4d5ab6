use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load store settings from the environment: {0}")]
    LoadError(#[from] config::ConfigError),
}
