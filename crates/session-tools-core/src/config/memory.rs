//! In-memory configuration provider

use async_trait::async_trait;
use parking_lot::RwLock;

use super::settings::Settings;
use super::traits::{validate_settings, ConfigProvider, ConfigResult};

/// In-memory configuration provider for testing
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    settings: RwLock<Settings>,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

#[async_trait]
impl ConfigProvider for MemoryConfigProvider {
    async fn settings(&self) -> ConfigResult<Settings> {
        Ok(self.settings.read().clone())
    }

    async fn update_settings(&self, settings: Settings) -> ConfigResult<()> {
        validate_settings(&settings)?;
        *self.settings.write() = settings;
        Ok(())
    }
}
