//! The "auth-required tools" notice dismissal flag

use std::sync::Arc;

use super::traits::{PersistentFlagStore, FlagStoreResult};
use crate::config::Settings;

/// Default key under which the dismissal is persisted
pub const DEFAULT_DISMISSAL_KEY: &str = "toolsAuthNoticeDismissed";

/// Whether the user dismissed the notice about tools that still need auth
#[derive(Clone)]
pub struct DismissalFlag {
    store: Arc<dyn PersistentFlagStore>,
    key: String,
}

impl DismissalFlag {
    pub fn new(store: Arc<dyn PersistentFlagStore>) -> Self {
        Self::with_key(store, DEFAULT_DISMISSAL_KEY)
    }

    pub fn with_key(store: Arc<dyn PersistentFlagStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Flag persisted under `settings.dismissal_flag_key`
    pub fn from_settings(settings: &Settings, store: Arc<dyn PersistentFlagStore>) -> Self {
        Self::with_key(store, settings.dismissal_flag_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_dismissed(&self) -> bool {
        self.store.get(&self.key)
    }

    pub fn dismiss(&self) -> FlagStoreResult<()> {
        self.store.set(&self.key, true)
    }

    pub fn reset(&self) -> FlagStoreResult<()> {
        self.store.set(&self.key, false)
    }
}

impl std::fmt::Debug for DismissalFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissalFlag")
            .field("store", &self.store.name())
            .field("key", &self.key)
            .field("dismissed", &self.is_dismissed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::MemoryFlagStore;

    #[test]
    fn test_dismiss_and_reset() {
        let store = Arc::new(MemoryFlagStore::new());
        let flag = DismissalFlag::new(store.clone());

        assert_eq!(flag.key(), DEFAULT_DISMISSAL_KEY);
        assert!(!flag.is_dismissed());

        flag.dismiss().unwrap();
        assert!(flag.is_dismissed());
        assert!(store.get(DEFAULT_DISMISSAL_KEY));

        flag.reset().unwrap();
        assert!(!flag.is_dismissed());
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = Arc::new(MemoryFlagStore::new());
        let a = DismissalFlag::with_key(store.clone(), "a");
        let b = DismissalFlag::with_key(store, "b");

        a.dismiss().unwrap();
        assert!(a.is_dismissed());
        assert!(!b.is_dismissed());
    }

    #[test]
    fn test_from_settings_uses_configured_key() {
        let store = Arc::new(MemoryFlagStore::new());
        let settings = Settings {
            dismissal_flag_key: "workspace.authNotice".to_string(),
            ..Settings::default()
        };

        let flag = DismissalFlag::from_settings(&settings, store.clone());
        assert_eq!(flag.key(), "workspace.authNotice");

        flag.dismiss().unwrap();
        assert!(store.get("workspace.authNotice"));
        assert!(!store.get(DEFAULT_DISMISSAL_KEY));
        assert_eq!(DismissalFlag::from_settings(&Settings::default(), store).key(), DEFAULT_DISMISSAL_KEY);
    }
}
