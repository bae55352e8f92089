//! Catalog error types

use thiserror::Error;

/// Errors that can occur while fetching a catalog
///
/// `Clone` so one failed in-flight fetch can be handed to every caller
/// that was waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backend could not be reached or answered with a failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with something that is not a catalog
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
