//! Cached catalog snapshots

use std::sync::Arc;

use crate::logging::Logger;
use crate::types::{Deployment, Tool};

use super::cache::CatalogCache;
use super::error::CatalogResult;
use super::traits::{DeploymentCatalogProvider, ToolCatalogProvider};

/// Cache key of the managed tool catalog
pub const TOOLS_CACHE_KEY: &str = "tools";
/// Cache key of the deployment catalog
pub const DEPLOYMENTS_CACHE_KEY: &str = "deployments";

/// Managed tool catalog, fetched once and shared
pub struct ToolCatalog {
    provider: Arc<dyn ToolCatalogProvider>,
    cache: CatalogCache<Tool>,
    logger: Arc<dyn Logger>,
}

impl ToolCatalog {
    pub fn new(provider: Arc<dyn ToolCatalogProvider>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider,
            cache: CatalogCache::new(),
            logger,
        }
    }

    /// The catalog snapshot, fetching it on first use
    pub async fn tools(&self) -> CatalogResult<Arc<Vec<Tool>>> {
        let provider = Arc::clone(&self.provider);
        let result = self
            .cache
            .get_or_fetch(TOOLS_CACHE_KEY, move || async move { provider.list_tools().await })
            .await;
        match &result {
            Ok(tools) => self.logger.debug(&format!(
                "[ToolCatalog] {} tool(s) from '{}'",
                tools.len(),
                self.provider.name()
            )),
            Err(e) => self.logger.error(&format!(
                "[ToolCatalog] Failed to fetch tools from '{}': {}",
                self.provider.name(),
                e
            )),
        }
        result
    }

    /// The snapshot if it has been fetched already
    pub fn cached(&self) -> Option<Arc<Vec<Tool>>> {
        self.cache.peek(TOOLS_CACHE_KEY)
    }

    /// Drop the snapshot and fetch it again
    pub async fn refresh(&self) -> CatalogResult<Arc<Vec<Tool>>> {
        self.cache.invalidate(TOOLS_CACHE_KEY);
        self.tools().await
    }
}

/// Deployment targets, fetched once and shared
pub struct DeploymentCatalog {
    provider: Arc<dyn DeploymentCatalogProvider>,
    cache: CatalogCache<Deployment>,
    logger: Arc<dyn Logger>,
}

impl DeploymentCatalog {
    pub fn new(provider: Arc<dyn DeploymentCatalogProvider>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider,
            cache: CatalogCache::new(),
            logger,
        }
    }

    pub async fn deployments(&self) -> CatalogResult<Arc<Vec<Deployment>>> {
        let provider = Arc::clone(&self.provider);
        let result = self
            .cache
            .get_or_fetch(DEPLOYMENTS_CACHE_KEY, move || async move {
                provider.list_deployments().await
            })
            .await;
        if let Err(e) = &result {
            self.logger.error(&format!(
                "[DeploymentCatalog] Failed to fetch deployments from '{}': {}",
                self.provider.name(),
                e
            ));
        }
        result
    }

    /// Look up a deployment by name; `Ok(None)` for unknown names
    pub async fn find(&self, name: &str) -> CatalogResult<Option<Deployment>> {
        let deployments = self.deployments().await?;
        Ok(deployments.iter().find(|d| d.name == name).cloned())
    }

    pub fn cached(&self) -> Option<Arc<Vec<Deployment>>> {
        self.cache.peek(DEPLOYMENTS_CACHE_KEY)
    }

    pub async fn refresh(&self) -> CatalogResult<Arc<Vec<Deployment>>> {
        self.cache.invalidate(DEPLOYMENTS_CACHE_KEY);
        self.deployments().await
    }
}
