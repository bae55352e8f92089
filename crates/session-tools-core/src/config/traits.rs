//! Configuration provider trait

use async_trait::async_trait;

use super::settings::Settings;

/// Source of `Settings`
///
/// Implementations:
/// - `MemoryConfigProvider`: In-memory for testing
/// - `FileConfigProvider`: YAML file (user or workspace level)
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Current settings
    async fn settings(&self) -> ConfigResult<Settings>;

    /// Replace the settings
    async fn update_settings(&self, settings: Settings) -> ConfigResult<()>;
}

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reject settings the rest of the crate cannot work with
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    if settings.default_file_loader.trim().is_empty() {
        return Err(ConfigError::Invalid("default_file_loader must not be empty".to_string()));
    }
    if settings.max_picker_files == 0 {
        return Err(ConfigError::Invalid("max_picker_files must be at least 1".to_string()));
    }
    if settings.dismissal_flag_key.trim().is_empty() {
        return Err(ConfigError::Invalid("dismissal_flag_key must not be empty".to_string()));
    }
    Ok(())
}
