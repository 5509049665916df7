//! Services resolving settings from their sources.
use std::path::PathBuf;

pub mod env_file;
pub mod loader;

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors surfaced while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read settings file {}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("failed to merge settings")]
    Merge(#[source] config::ConfigError),
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidField {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl From<config::ConfigError> for LoadError {
    fn from(value: config::ConfigError) -> Self {
        LoadError::Merge(value)
    }
}
