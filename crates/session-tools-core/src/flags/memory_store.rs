//! In-memory flag store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{PersistentFlagStore, FlagStoreResult};

/// In-memory flag store
///
/// Flags are lost when the store is dropped.
///
/// # Example
///
/// ```
/// use session_tools_core::flags::{PersistentFlagStore, MemoryFlagStore};
///
/// let store = MemoryFlagStore::new();
/// assert!(!store.get("toolsAuthNoticeDismissed"));
/// store.set("toolsAuthNoticeDismissed", true).unwrap();
/// assert!(store.get("toolsAuthNoticeDismissed"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flags: RwLock<HashMap<String, bool>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(initial: HashMap<String, bool>) -> Self {
        Self {
            flags: RwLock::new(initial),
        }
    }

    pub fn len(&self) -> usize {
        self.flags.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PersistentFlagStore for MemoryFlagStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> bool {
        self.flags.read().get(key).copied().unwrap_or(false)
    }

    fn set(&self, key: &str, value: bool) -> FlagStoreResult<()> {
        self.flags.write().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_false() {
        let store = MemoryFlagStore::new();
        assert!(store.is_empty());
        assert!(!store.get("missing"));
    }

    #[test]
    fn test_memory_store_set_and_overwrite() {
        let store = MemoryFlagStore::new();
        store.set("a", true).unwrap();
        assert!(store.get("a"));

        store.set("a", false).unwrap();
        assert!(!store.get("a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_with_initial() {
        let mut initial = HashMap::new();
        initial.insert("seen".to_string(), true);
        let store = MemoryFlagStore::with_flags(initial);
        assert!(store.get("seen"));
    }
}
