//! Tool catalog entries and enabled-tool references

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool as reported by the managed tool catalog
///
/// Snapshots are read-only: nothing in this crate mutates a `Tool` after it
/// has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool identifier (e.g. "file_loader", "google_drive")
    pub name: String,
    /// Whether the tool should be listed at all
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the backend can currently serve the tool
    #[serde(default)]
    pub is_available: bool,
    /// Whether the user still has to authenticate before using the tool
    #[serde(default)]
    pub is_auth_required: bool,
    /// Auth token attached by the backend, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Tool {
    /// Create a visible, available tool that needs no auth
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_visible: true,
            is_available: true,
            is_auth_required: false,
            token: None,
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = visible;
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    pub fn with_auth_required(mut self, required: bool) -> Self {
        self.is_auth_required = required;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Reference to an enabled tool inside session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnabledToolRef {
    /// Tool name, matching `Tool::name`
    pub name: String,
    /// Opaque per-tool configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl EnabledToolRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: Value) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// The agent a session is talking to
///
/// `tools` is an allowlist: when present only those catalog tools can be
/// selected, when absent every catalog tool can.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
}

impl Agent {
    /// An agent without a tool allowlist
    pub fn unrestricted() -> Self {
        Self { tools: None }
    }

    /// An agent restricted to the given tool names
    pub fn with_tools<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tools: Some(tools.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether this agent allows `name`
    pub fn allows(&self, name: &str) -> bool {
        match &self.tools {
            Some(tools) => tools.iter().any(|t| t == name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_builder() {
        let tool = Tool::new("google_drive")
            .with_auth_required(true)
            .with_token("tok");

        assert!(tool.is_visible);
        assert!(tool.is_available);
        assert!(tool.is_auth_required);
        assert_eq!(tool.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_tool_deserialize_defaults() {
        let tool: Tool = serde_json::from_value(json!({ "name": "web_search" })).unwrap();
        assert_eq!(tool.name, "web_search");
        assert!(!tool.is_visible);
        assert!(!tool.is_available);
        assert!(!tool.is_auth_required);
        assert!(tool.token.is_none());
    }

    #[test]
    fn test_agent_allows() {
        let open = Agent::unrestricted();
        assert!(open.allows("anything"));

        let restricted = Agent::with_tools(["web_search"]);
        assert!(restricted.allows("web_search"));
        assert!(!restricted.allows("google_drive"));

        let empty = Agent::with_tools(Vec::<String>::new());
        assert!(!empty.allows("web_search"));
    }

    #[test]
    fn test_enabled_ref_skips_empty_extra() {
        let value = serde_json::to_value(EnabledToolRef::new("file_loader")).unwrap();
        assert_eq!(value, json!({ "name": "file_loader" }));

        let with_extra = EnabledToolRef::new("web_search").with_extra(json!({ "depth": 2 }));
        assert_eq!(with_extra.extra, Some(json!({ "depth": 2 })));
    }
}
