//! Crate settings

use serde::{Deserialize, Serialize};

use crate::flags::DEFAULT_DISMISSAL_KEY;
use crate::tools::DEFAULT_FILE_LOADER;

/// Default cap on files accepted from one picker session
pub const DEFAULT_MAX_PICKER_FILES: usize = 5;

const ENV_PICKER_CLIENT_ID: &str = "SESSION_TOOLS_PICKER_CLIENT_ID";
const ENV_PICKER_ACCESS_KEY: &str = "SESSION_TOOLS_PICKER_ACCESS_KEY";
const ENV_PICKER_APP_ID: &str = "SESSION_TOOLS_PICKER_APP_ID";
const ENV_DEFAULT_FILE_LOADER: &str = "SESSION_TOOLS_DEFAULT_FILE_LOADER";

/// Credentials for the external file picker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl PickerConfig {
    pub fn new(client_id: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            access_key: Some(access_key.into()),
            app_id: None,
        }
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Both the client id and the access key are present and non-empty
    pub fn is_configured(&self) -> bool {
        present(&self.client_id) && present(&self.access_key)
    }
}

fn present(v: &Option<String>) -> bool {
    v.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl std::fmt::Display for PickerConfig {
    /// Never prints the access key
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "client_id={}, access_key={}",
            self.client_id.as_deref().filter(|_| present(&self.client_id)).unwrap_or("<unset>"),
            if present(&self.access_key) { "<set>" } else { "<unset>" }
        )
    }
}

/// Settings for the tool panel, picker and deployment form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Tool whose toggle invalidates staged files
    #[serde(default = "default_file_loader")]
    pub default_file_loader: String,
    #[serde(default = "default_max_picker_files")]
    pub max_picker_files: usize,
    /// Flag store key of the auth notice dismissal
    #[serde(default = "default_dismissal_key")]
    pub dismissal_flag_key: String,
    #[serde(default)]
    pub picker: PickerConfig,
}

fn default_file_loader() -> String {
    DEFAULT_FILE_LOADER.to_string()
}

fn default_max_picker_files() -> usize {
    DEFAULT_MAX_PICKER_FILES
}

fn default_dismissal_key() -> String {
    DEFAULT_DISMISSAL_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file_loader: default_file_loader(),
            max_picker_files: default_max_picker_files(),
            dismissal_flag_key: default_dismissal_key(),
            picker: PickerConfig::default(),
        }
    }
}

impl Settings {
    /// Apply `SESSION_TOOLS_*` environment overrides; non-empty values win
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as `with_env_overrides` with a custom lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_PICKER_CLIENT_ID) {
            self.picker.client_id = Some(v);
        }
        if let Some(v) = get(ENV_PICKER_ACCESS_KEY) {
            self.picker.access_key = Some(v);
        }
        if let Some(v) = get(ENV_PICKER_APP_ID) {
            self.picker.app_id = Some(v);
        }
        if let Some(v) = get(ENV_DEFAULT_FILE_LOADER) {
            self.default_file_loader = v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_file_loader, "file_loader");
        assert_eq!(settings.max_picker_files, 5);
        assert_eq!(settings.dismissal_flag_key, DEFAULT_DISMISSAL_KEY);
        assert!(!settings.picker.is_configured());
    }

    #[test]
    fn test_picker_requires_both_credentials() {
        assert!(PickerConfig::new("id", "key").is_configured());
        assert!(!PickerConfig::new("id", "").is_configured());
        assert!(!PickerConfig::new("  ", "key").is_configured());
        assert!(!PickerConfig {
            client_id: Some("id".into()),
            ..Default::default()
        }
        .is_configured());
    }

    #[test]
    fn test_display_hides_access_key() {
        let shown = PickerConfig::new("client-1", "super-secret").to_string();
        assert!(shown.contains("client-1"));
        assert!(!shown.contains("super-secret"));
    }

    #[test]
    fn test_display_matches_is_configured() {
        let blank = PickerConfig::new("client-1", "  ");
        assert!(!blank.is_configured());
        assert_eq!(blank.to_string(), "client_id=client-1, access_key=<unset>");

        let no_client = PickerConfig::new("", "key");
        assert_eq!(no_client.to_string(), "client_id=<unset>, access_key=<set>");
        assert_eq!(PickerConfig::new("c", "k").to_string(), "client_id=c, access_key=<set>");
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let env: HashMap<&str, &str> = [
            (ENV_PICKER_CLIENT_ID, "env-client"),
            (ENV_PICKER_ACCESS_KEY, ""),
            (ENV_DEFAULT_FILE_LOADER, "ocr_loader"),
        ]
        .into_iter()
        .collect();

        let mut base = Settings::default();
        base.picker.access_key = Some("file-key".into());
        let settings = base.with_overrides_from(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.picker.client_id.as_deref(), Some("env-client"));
        assert_eq!(settings.picker.access_key.as_deref(), Some("file-key"));
        assert_eq!(settings.default_file_loader, "ocr_loader");
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("picker:\n  client_id: abc\n").unwrap();
        assert_eq!(settings.picker.client_id.as_deref(), Some("abc"));
        assert_eq!(settings.max_picker_files, DEFAULT_MAX_PICKER_FILES);
    }
}
