//! Deployment targets

use serde::{Deserialize, Serialize};

/// A model-serving backend target and the env vars it needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Unique deployment name
    pub name: String,
    /// Required environment variable names, in display order
    #[serde(default)]
    pub env_vars: Vec<String>,
}

impl Deployment {
    pub fn new<I, S>(name: impl Into<String>, env_vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            env_vars: env_vars.into_iter().map(Into::into).collect(),
        }
    }
}
