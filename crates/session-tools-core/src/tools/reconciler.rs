//! Tool enablement reconciliation
//!
//! Derives the selectable subset of the managed catalog for an agent and
//! mediates enable/disable toggles, including the file-staging side effect
//! of the default file loader.

use std::sync::Arc;

use crate::config::Settings;
use crate::flags::DismissalFlag;
use crate::logging::Logger;
use crate::session::{FileStaging, SessionParams, SessionPatch};
use crate::types::{Agent, EnabledToolRef, Tool};

use super::enabled::EnabledToolSet;
use super::filter::ToolFilter;

/// Name of the built-in tool that ingests staged files
pub const DEFAULT_FILE_LOADER: &str = "file_loader";

/// Catalog tools the agent can select: visible, available and allowlisted
pub fn available_tools(catalog: &[Tool], agent: &Agent) -> Vec<Tool> {
    ToolFilter::for_agent(agent).apply(catalog)
}

/// Catalog tools the user still has to authenticate for
///
/// Depends on the catalog only, never on what is enabled.
pub fn unauthed_tools(catalog: &[Tool]) -> Vec<Tool> {
    catalog
        .iter()
        .filter(|t| t.is_auth_required)
        .cloned()
        .collect()
}

pub fn tool_auth_required(catalog: &[Tool]) -> bool {
    catalog.iter().any(|t| t.is_auth_required)
}

/// Result of a pure toggle
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    /// The enabled set after the toggle
    pub tools: EnabledToolSet,
    /// Staged files and `fileIds` must be cleared before committing `tools`
    pub clear_staged_files: bool,
}

/// Everything the tool panel renders for one catalog snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSelectionView {
    pub available: Vec<Tool>,
    pub unauthed: Vec<Tool>,
    pub auth_required: bool,
    /// Auth is required and the user has not dismissed the notice
    pub show_auth_notice: bool,
}

/// Mediates toggles against the session's enabled tool set
pub struct ToolReconciler {
    default_file_loader: String,
    logger: Arc<dyn Logger>,
}

impl ToolReconciler {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_default_file_loader(DEFAULT_FILE_LOADER, logger)
    }

    pub fn with_default_file_loader(name: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            default_file_loader: name.into(),
            logger,
        }
    }

    pub fn from_settings(settings: &Settings, logger: Arc<dyn Logger>) -> Self {
        Self::with_default_file_loader(settings.default_file_loader.clone(), logger)
    }

    pub fn default_file_loader(&self) -> &str {
        &self.default_file_loader
    }

    pub fn available_tools(&self, catalog: &[Tool], agent: &Agent) -> Vec<Tool> {
        available_tools(catalog, agent)
    }

    pub fn unauthed_tools(&self, catalog: &[Tool]) -> Vec<Tool> {
        unauthed_tools(catalog)
    }

    pub fn tool_auth_required(&self, catalog: &[Tool]) -> bool {
        tool_auth_required(catalog)
    }

    pub fn view(&self, catalog: &[Tool], agent: &Agent, dismissal: &DismissalFlag) -> ToolSelectionView {
        let unauthed = unauthed_tools(catalog);
        let auth_required = !unauthed.is_empty();
        ToolSelectionView {
            available: available_tools(catalog, agent),
            show_auth_notice: auth_required && !dismissal.is_dismissed(),
            unauthed,
            auth_required,
        }
    }

    /// Compute the enabled set after toggling `name`
    ///
    /// Enabling a name that is already enabled leaves the set unchanged.
    /// Disabling a name that is not enabled is a no-op. Any toggle of the
    /// default file loader asks the caller to clear staged files.
    pub fn toggle(&self, name: &str, checked: bool, enabled: &EnabledToolSet) -> ToggleOutcome {
        let mut tools = enabled.clone();
        if checked {
            if !tools.insert_if_absent(EnabledToolRef::new(name)) {
                self.logger.debug(&format!("[ToolReconciler] '{}' already enabled", name));
            }
        } else if tools.remove(name).is_none() {
            self.logger.debug(&format!("[ToolReconciler] '{}' was not enabled", name));
        }

        ToggleOutcome {
            tools,
            clear_staged_files: name == self.default_file_loader,
        }
    }

    /// Toggle `name` and commit the result into `params`
    ///
    /// Staged files are cleared first, then the new tool set (and an empty
    /// `fileIds`, if needed) lands in a single patch, so no snapshot ever
    /// shows the loader disabled next to stale file ids.
    pub fn apply_toggle(
        &self,
        name: &str,
        checked: bool,
        params: &mut SessionParams,
        staging: &dyn FileStaging,
    ) -> ToggleOutcome {
        let outcome = self.toggle(name, checked, &params.tools);

        let mut patch = SessionPatch::new().tools(outcome.tools.clone());
        if outcome.clear_staged_files {
            let dropped = staging.len();
            staging.clear();
            patch = patch.file_ids(Vec::new());
            self.logger.info(&format!(
                "[ToolReconciler] '{}' toggled, cleared {} staged file(s)",
                name, dropped
            ));
        }

        let version = params.apply(patch);
        self.logger.debug(&format!(
            "[ToolReconciler] {} '{}' -> {} enabled tool(s), version {}",
            if checked { "enabled" } else { "disabled" },
            name,
            outcome.tools.len(),
            version
        ));
        outcome
    }
}
