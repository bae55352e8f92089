//! Configuration
//!
//! Supports multiple configuration sources:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: YAML file-based (user/workspace level)
//!
//! `Settings::with_env_overrides` layers `SESSION_TOOLS_*` variables on top.

mod settings;
mod traits;
mod memory;
mod file;

pub use settings::{Settings, PickerConfig, DEFAULT_MAX_PICKER_FILES};
pub use traits::{ConfigProvider, ConfigError, ConfigResult, validate_settings};
pub use memory::MemoryConfigProvider;
pub use file::{FileConfigProvider, ConfigLevel};
