//! In-memory catalog providers

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::types::{Deployment, Tool};

use super::error::{CatalogError, CatalogResult};
use super::traits::{DeploymentCatalogProvider, ToolCatalogProvider};

/// Shared state of the in-memory providers
#[derive(Debug)]
struct MemoryList<T> {
    items: RwLock<Vec<T>>,
    failure: RwLock<Option<CatalogError>>,
    fetches: AtomicUsize,
}

impl<T: Clone> MemoryList<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            failure: RwLock::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    fn list(&self) -> CatalogResult<Vec<T>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failure.read().clone() {
            return Err(err);
        }
        Ok(self.items.read().clone())
    }
}

/// Tool catalog held in memory, for tests and embedded hosts
///
/// Counts fetches and can be told to fail, which makes cache behavior
/// observable.
#[derive(Debug)]
pub struct MemoryToolCatalog {
    inner: MemoryList<Tool>,
}

impl MemoryToolCatalog {
    pub fn new(tools: Vec<Tool>) -> Self {
        Self {
            inner: MemoryList::new(tools),
        }
    }

    pub fn set_tools(&self, tools: Vec<Tool>) {
        *self.inner.items.write() = tools;
    }

    /// Make every following fetch fail with `err` (`None` to recover)
    pub fn set_failure(&self, err: Option<CatalogError>) {
        *self.inner.failure.write() = err;
    }

    /// How many times `list_tools` ran
    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolCatalogProvider for MemoryToolCatalog {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_tools(&self) -> CatalogResult<Vec<Tool>> {
        self.inner.list()
    }
}

/// Deployment catalog held in memory
#[derive(Debug)]
pub struct MemoryDeploymentCatalog {
    inner: MemoryList<Deployment>,
}

impl MemoryDeploymentCatalog {
    pub fn new(deployments: Vec<Deployment>) -> Self {
        Self {
            inner: MemoryList::new(deployments),
        }
    }

    pub fn set_deployments(&self, deployments: Vec<Deployment>) {
        *self.inner.items.write() = deployments;
    }

    pub fn set_failure(&self, err: Option<CatalogError>) {
        *self.inner.failure.write() = err;
    }

    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeploymentCatalogProvider for MemoryDeploymentCatalog {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_deployments(&self) -> CatalogResult<Vec<Deployment>> {
        self.inner.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_tool_catalog() {
        let catalog = MemoryToolCatalog::new(vec![Tool::new("web_search")]);
        assert_eq!(catalog.list_tools().await.unwrap().len(), 1);

        catalog.set_tools(vec![]);
        assert!(catalog.list_tools().await.unwrap().is_empty());
        assert_eq!(catalog.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_memory_catalog_failure_toggle() {
        let catalog = MemoryDeploymentCatalog::new(vec![Deployment::new("prod", ["API_KEY"])]);
        catalog.set_failure(Some(CatalogError::transport("502")));
        assert!(matches!(
            catalog.list_deployments().await,
            Err(CatalogError::Transport(_))
        ));

        catalog.set_failure(None);
        assert_eq!(catalog.list_deployments().await.unwrap()[0].name, "prod");
    }
}
