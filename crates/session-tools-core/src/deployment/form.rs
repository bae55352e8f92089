//! Deployment configuration form state

use std::sync::Arc;

use crate::catalog::{CatalogResult, DeploymentCatalog};
use crate::logging::Logger;
use crate::session::{SessionParams, SessionPatch};
use crate::types::Deployment;

use super::draft::EnvVarDraft;

/// Lifecycle of one form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    /// Terminal; input is ignored
    Closed,
}

/// Result of `DeploymentConfigForm::submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The composed string that was written to `deploymentConfig`
    Submitted(String),
    /// No deployment selected, or the form is no longer editable
    NotReady,
}

/// Form composing the env vars of one deployment into session parameters
pub struct DeploymentConfigForm {
    deployments: Arc<Vec<Deployment>>,
    selected: Option<Deployment>,
    draft: EnvVarDraft,
    state: FormState,
    logger: Arc<dyn Logger>,
}

impl DeploymentConfigForm {
    pub fn new(deployments: Arc<Vec<Deployment>>, logger: Arc<dyn Logger>) -> Self {
        Self {
            deployments,
            selected: None,
            draft: EnvVarDraft::empty(),
            state: FormState::Editing,
            logger,
        }
    }

    /// Open a form over the (cached) deployment catalog
    pub async fn open(catalog: &DeploymentCatalog, logger: Arc<dyn Logger>) -> CatalogResult<Self> {
        let deployments = catalog.deployments().await?;
        Ok(Self::new(deployments, logger))
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    pub fn selected(&self) -> Option<&Deployment> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> &EnvVarDraft {
        &self.draft
    }

    /// Select a deployment by name and reset the draft to its env vars
    ///
    /// An unknown name leaves the form with no deployment selected and an
    /// empty draft. Returns whether the name was found.
    pub fn select_deployment(&mut self, name: &str) -> bool {
        if self.state != FormState::Editing {
            return false;
        }

        match self.deployments.iter().find(|d| d.name == name) {
            Some(deployment) => {
                self.draft = EnvVarDraft::for_deployment(deployment);
                self.selected = Some(deployment.clone());
                self.logger.debug(&format!(
                    "[DeploymentConfigForm] Selected '{}' ({} variable(s))",
                    name,
                    self.draft.len()
                ));
                true
            }
            None => {
                self.logger.debug(&format!(
                    "[DeploymentConfigForm] Unknown deployment '{}', clearing selection",
                    name
                ));
                self.clear_selection();
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        if self.state != FormState::Editing {
            return;
        }
        self.selected = None;
        self.draft = EnvVarDraft::empty();
    }

    /// Set the value of one variable of the selected deployment
    ///
    /// Values are opaque and never validated. Names outside the selected
    /// deployment are refused.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        if self.state != FormState::Editing {
            return false;
        }
        let updated = self.draft.set(name, value);
        if !updated {
            self.logger.debug(&format!(
                "[DeploymentConfigForm] Ignoring value for '{}', not a variable of the selection",
                name
            ));
        }
        updated
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.draft.get(name)
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing && self.selected.is_some()
    }

    /// Write the draft into `params.deploymentConfig` and close the form
    ///
    /// The write is one patch of one field. `on_close` runs after it.
    /// Without a selected deployment nothing happens and `on_close` is
    /// not called.
    pub fn submit<F>(&mut self, params: &mut SessionParams, on_close: F) -> SubmitOutcome
    where
        F: FnOnce(),
    {
        if !self.can_submit() {
            return SubmitOutcome::NotReady;
        }

        self.state = FormState::Submitting;
        let config = self.draft.compose();
        let version = params.apply(SessionPatch::new().deployment_config(config.clone()));
        self.logger.info(&format!(
            "[DeploymentConfigForm] Saved {} variable(s) for '{}' (version {})",
            self.draft.len(),
            self.selected.as_ref().map(|d| d.name.as_str()).unwrap_or_default(),
            version
        ));

        self.state = FormState::Closed;
        on_close();
        SubmitOutcome::Submitted(config)
    }

    /// Close without submitting; the draft is discarded
    pub fn cancel(&mut self) {
        self.selected = None;
        self.draft = EnvVarDraft::empty();
        self.state = FormState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryDeploymentCatalog;
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};

    fn deployments() -> Arc<Vec<Deployment>> {
        Arc::new(vec![
            Deployment::new("prod", ["API_KEY", "REGION"]),
            Deployment::new("dev", ["API_KEY", "DEBUG"]),
        ])
    }

    fn form() -> DeploymentConfigForm {
        DeploymentConfigForm::new(deployments(), Arc::new(NoOpLogger))
    }

    #[test]
    fn test_new_form_cannot_submit() {
        let mut form = form();
        let mut params = SessionParams::new();
        let mut closed = false;

        assert_eq!(form.state(), FormState::Editing);
        assert!(!form.can_submit());
        assert_eq!(form.submit(&mut params, || closed = true), SubmitOutcome::NotReady);
        assert!(!closed);
        assert!(params.deployment_config.is_none());
        assert_eq!(params.version, 0);
    }

    #[test]
    fn test_switch_resets_draft() {
        let mut form = form();
        assert!(form.select_deployment("prod"));
        form.set_field("API_KEY", "secret");
        form.set_field("REGION", "us");

        assert!(form.select_deployment("dev"));
        assert_eq!(form.draft().names(), vec!["API_KEY", "DEBUG"]);
        assert_eq!(form.field("API_KEY"), Some(""));
        assert_eq!(form.field("REGION"), None);
    }

    #[test]
    fn test_unknown_deployment_clears_selection() {
        let logger = Arc::new(MemoryLogger::new());
        let mut form = DeploymentConfigForm::new(deployments(), logger.clone());
        form.select_deployment("prod");
        form.set_field("API_KEY", "x");

        assert!(!form.select_deployment("gone"));
        assert!(form.selected().is_none());
        assert!(form.draft().is_empty());
        assert!(!form.can_submit());
        assert!(logger.contains(LogLevel::Debug, "Unknown deployment 'gone'"));
    }

    #[test]
    fn test_set_field_outside_selection_is_refused() {
        let mut form = form();
        assert!(!form.set_field("API_KEY", "x"));

        form.select_deployment("prod");
        assert!(!form.set_field("DEBUG", "1"));
        assert_eq!(form.draft().len(), 2);
    }

    #[test]
    fn test_submit_writes_once_and_closes() {
        let mut form = form();
        let mut params = SessionParams::new();
        let mut closed = 0;

        form.select_deployment("prod");
        form.set_field("REGION", "eu");
        form.set_field("API_KEY", "k");
        let outcome = form.submit(&mut params, || closed += 1);

        assert_eq!(outcome, SubmitOutcome::Submitted("API_KEY=k;REGION=eu".to_string()));
        assert_eq!(params.deployment_config.as_deref(), Some("API_KEY=k;REGION=eu"));
        assert_eq!(params.version, 1);
        assert_eq!(closed, 1);
        assert_eq!(form.state(), FormState::Closed);

        assert_eq!(form.submit(&mut params, || closed += 1), SubmitOutcome::NotReady);
        assert!(!form.select_deployment("dev"));
        assert!(!form.set_field("API_KEY", "other"));
        assert_eq!(closed, 1);
    }

    #[test]
    fn test_submit_with_empty_values() {
        let mut form = form();
        let mut params = SessionParams::new();
        form.select_deployment("dev");

        let outcome = form.submit(&mut params, || {});
        assert_eq!(outcome, SubmitOutcome::Submitted("API_KEY=;DEBUG=".to_string()));
    }

    #[test]
    fn test_cancel_discards_without_side_effects() {
        let mut form = form();
        let params = SessionParams::new();
        form.select_deployment("prod");
        form.set_field("API_KEY", "x");

        form.cancel();
        assert_eq!(form.state(), FormState::Closed);
        assert!(form.draft().is_empty());
        assert!(!form.can_submit());
        assert_eq!(params, SessionParams::new());
    }

    #[test]
    fn test_submit_never_logs_values() {
        let logger = Arc::new(MemoryLogger::new());
        let mut form = DeploymentConfigForm::new(deployments(), logger.clone());
        let mut params = SessionParams::new();
        form.select_deployment("prod");
        form.set_field("API_KEY", "sk-very-secret");
        form.submit(&mut params, || {});

        assert!(logger.lines().iter().all(|(_, line)| !line.contains("sk-very-secret")));
        assert!(logger.contains(LogLevel::Info, "Saved 2 variable(s) for 'prod'"));
    }

    #[tokio::test]
    async fn test_open_from_catalog() {
        let provider = Arc::new(MemoryDeploymentCatalog::new(vec![Deployment::new("prod", ["API_KEY"])]));
        let catalog = DeploymentCatalog::new(provider.clone(), Arc::new(NoOpLogger));

        let mut form = DeploymentConfigForm::open(&catalog, Arc::new(NoOpLogger)).await.unwrap();
        assert_eq!(form.deployments().len(), 1);
        assert!(form.select_deployment("prod"));

        DeploymentConfigForm::open(&catalog, Arc::new(NoOpLogger)).await.unwrap();
        assert_eq!(provider.fetch_count(), 1);
    }
}
