//! Core traits and types for persisted boolean flags

use thiserror::Error;

/// Errors that can occur during flag store operations
#[derive(Error, Debug)]
pub enum FlagStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type FlagStoreResult<T> = Result<T, FlagStoreError>;

/// Durable key/boolean storage
///
/// Implementations:
/// - `MemoryFlagStore`: In-memory, for tests and ephemeral sessions
/// - `FileFlagStore`: JSON file under the user's data directory
/// - Host adapters: browser local storage, VS Code global state, etc.
pub trait PersistentFlagStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Read a flag; unknown keys read as `false`
    fn get(&self, key: &str) -> bool;

    /// Write a flag
    fn set(&self, key: &str, value: bool) -> FlagStoreResult<()>;
}
