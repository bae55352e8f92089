//! Catalog snapshot file (JSON)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::{Deployment, Tool};

use super::error::CatalogResult;
use super::traits::{DeploymentCatalogProvider, ToolCatalogProvider};

/// On-disk catalog snapshot
///
/// ```json
/// { "tools": [{ "name": "web_search", "is_visible": true, "is_available": true }],
///   "deployments": [{ "name": "prod", "env_vars": ["API_KEY"] }] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub deployments: Vec<Deployment>,
}

/// Catalog provider backed by a JSON snapshot file
///
/// The file is re-read on every fetch; memoization belongs to
/// `CatalogCache`. A missing file is an empty catalog.
#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> CatalogResult<CatalogSnapshot> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(CatalogSnapshot::default());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save(&self, snapshot: &CatalogSnapshot) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(snapshot)?).await?;
        Ok(())
    }
}

#[async_trait]
impl ToolCatalogProvider for FileCatalogProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn list_tools(&self) -> CatalogResult<Vec<Tool>> {
        Ok(self.load().await?.tools)
    }
}

#[async_trait]
impl DeploymentCatalogProvider for FileCatalogProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn list_deployments(&self) -> CatalogResult<Vec<Deployment>> {
        Ok(self.load().await?.deployments)
    }
}
