//! Persisted boolean flags
//!
//! - `PersistentFlagStore` trait for pluggable storage
//! - Built-in implementations: `MemoryFlagStore`, `FileFlagStore`
//! - `DismissalFlag`, the one flag the tool panel persists

mod traits;
mod memory_store;
mod file_store;
mod dismissal;

pub use traits::{PersistentFlagStore, FlagStoreError, FlagStoreResult};
pub use memory_store::MemoryFlagStore;
pub use file_store::FileFlagStore;
pub use dismissal::{DismissalFlag, DEFAULT_DISMISSAL_KEY};
