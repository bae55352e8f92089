//! Selectability filter over the managed tool catalog

use std::collections::HashSet;

use crate::types::{Agent, Tool};

/// Filter deciding which catalog tools can be selected
#[derive(Debug, Clone)]
pub struct ToolFilter {
    /// If set, only tools with these names pass
    pub allowlist: Option<HashSet<String>>,
    /// Drop tools that are not visible (default: true)
    pub only_visible: bool,
    /// Drop tools the backend cannot serve (default: true)
    pub only_available: bool,
}

impl Default for ToolFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolFilter {
    /// Visible and available tools, no allowlist
    pub fn new() -> Self {
        Self {
            allowlist: None,
            only_visible: true,
            only_available: true,
        }
    }

    /// Filter used for an agent: its allowlist, if any, on top of `new()`
    pub fn for_agent(agent: &Agent) -> Self {
        match &agent.tools {
            Some(tools) => Self::new().with_allowlist(tools.iter().cloned()),
            None => Self::new(),
        }
    }

    pub fn with_allowlist(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.allowlist = Some(names.into_iter().collect());
        self
    }

    pub fn matches(&self, tool: &Tool) -> bool {
        if self.only_visible && !tool.is_visible {
            return false;
        }

        if self.only_available && !tool.is_available {
            return false;
        }

        if let Some(ref allowlist) = self.allowlist {
            if !allowlist.contains(&tool.name) {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving catalog order
    pub fn apply(&self, catalog: &[Tool]) -> Vec<Tool> {
        catalog.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
