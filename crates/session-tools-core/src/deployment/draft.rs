//! Uncommitted env var values for one deployment

use crate::types::Deployment;

use super::config_string::compose_deployment_config;

/// Env var values being edited for the selected deployment
///
/// The set of names is fixed at construction: exactly the deployment's
/// `env_vars`, in order, first occurrence wins. Values start empty and
/// can only be changed for those names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarDraft {
    entries: Vec<(String, String)>,
}

impl EnvVarDraft {
    /// Empty draft, used when no deployment is selected
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_deployment(deployment: &Deployment) -> Self {
        let mut entries: Vec<(String, String)> = Vec::with_capacity(deployment.env_vars.len());
        for name in &deployment.env_vars {
            if !entries.iter().any(|(n, _)| n == name) {
                entries.push((name.clone(), String::new()));
            }
        }
        Self { entries }
    }

    /// Update the value of an existing name; unknown names are refused
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                *v = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `NAME=VALUE;...` in draft order
    pub fn compose(&self) -> String {
        compose_deployment_config(self.iter())
    }
}
