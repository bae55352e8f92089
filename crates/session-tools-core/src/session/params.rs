//! Versioned session parameters with merge-patch updates

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tools::EnabledToolSet;

/// Parameters of one assistant session
///
/// Passed explicitly to whatever mutates it; there is no global instance.
/// Every applied patch bumps `version`, so observers can tell stale
/// snapshots apart from current ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParams {
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub tools: EnabledToolSet,
    #[serde(default)]
    pub file_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_config: Option<String>,
    /// Fields this crate does not interpret, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update for `SessionParams`
///
/// `None` leaves a field untouched. `deployment_config: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub tools: Option<EnabledToolSet>,
    pub file_ids: Option<Vec<String>>,
    pub deployment_config: Option<Option<String>>,
    pub extra: Option<Map<String, Value>>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tools(mut self, tools: EnabledToolSet) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn file_ids(mut self, file_ids: Vec<String>) -> Self {
        self.file_ids = Some(file_ids);
        self
    }

    pub fn deployment_config(mut self, config: impl Into<String>) -> Self {
        self.deployment_config = Some(Some(config.into()));
        self
    }

    pub fn clear_deployment_config(mut self) -> Self {
        self.deployment_config = Some(None);
        self
    }

    /// Set one uninterpreted field; merged key by key
    pub fn extra_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_none()
            && self.file_ids.is_none()
            && self.deployment_config.is_none()
            && self.extra.is_none()
    }
}

impl SessionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current parameters
    pub fn get(&self) -> &Self {
        self
    }

    /// Merge `patch` into the parameters, last write wins per field
    ///
    /// Returns the new version. An empty patch changes nothing and does not
    /// bump the version.
    pub fn apply(&mut self, patch: SessionPatch) -> u64 {
        if patch.is_empty() {
            return self.version;
        }
        if let Some(tools) = patch.tools {
            self.tools = tools;
        }
        if let Some(file_ids) = patch.file_ids {
            self.file_ids = file_ids;
        }
        if let Some(config) = patch.deployment_config {
            self.deployment_config = config;
        }
        if let Some(extra) = patch.extra {
            for (key, value) in extra {
                self.extra.insert(key, value);
            }
        }
        self.version += 1;
        self.version
    }
}
