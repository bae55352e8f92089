//! File-backed flag store (JSON)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::traits::{FlagStoreError, PersistentFlagStore, FlagStoreResult};
use crate::logging::{Logger, NoOpLogger};

/// Flag store persisted as a flat JSON object (`{"key": true}`)
///
/// The file is read lazily on first access and rewritten on every `set`,
/// through a temporary sibling file so a crash never leaves half a file.
/// A file that does not parse is logged and replaced on the next `set`.
pub struct FileFlagStore {
    path: PathBuf,
    cache: RwLock<Option<BTreeMap<String, bool>>>,
    logger: Arc<dyn Logger>,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
            logger: Arc::new(NoOpLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Store at `<data_dir>/session-tools/flags.json`
    pub fn user() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local/share"));
        Self::new(data_dir.join("session-tools").join("flags.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> FlagStoreResult<BTreeMap<String, bool>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn flags(&self) -> FlagStoreResult<BTreeMap<String, bool>> {
        if let Some(flags) = self.cache.read().as_ref() {
            return Ok(flags.clone());
        }
        let flags = self.load()?;
        *self.cache.write() = Some(flags.clone());
        Ok(flags)
    }

    fn save(&self, flags: &BTreeMap<String, bool>) -> FlagStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(flags)?)?;
        fs::rename(&tmp, &self.path)?;
        *self.cache.write() = Some(flags.clone());
        Ok(())
    }

    /// Drop the cached copy so the next read hits the disk
    pub fn reload(&self) {
        *self.cache.write() = None;
    }
}

impl std::fmt::Debug for FileFlagStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileFlagStore")
            .field("path", &self.path)
            .finish()
    }
}

impl PersistentFlagStore for FileFlagStore {
    fn name(&self) -> &str {
        "file"
    }

    /// A missing or unreadable file reads as `false`
    fn get(&self, key: &str) -> bool {
        match self.flags() {
            Ok(flags) => flags.get(key).copied().unwrap_or(false),
            Err(e) => {
                self.logger.warn(&format!(
                    "[FileFlagStore] Failed to read {}: {}",
                    self.path.display(),
                    e
                ));
                false
            }
        }
    }

    fn set(&self, key: &str, value: bool) -> FlagStoreResult<()> {
        let mut flags = match self.flags() {
            Ok(flags) => flags,
            Err(FlagStoreError::Serialization(e)) => {
                self.logger.warn(&format!(
                    "[FileFlagStore] Replacing unparseable {}: {}",
                    self.path.display(),
                    e
                ));
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        flags.insert(key.to_string(), value);
        self.save(&flags)
    }
}
