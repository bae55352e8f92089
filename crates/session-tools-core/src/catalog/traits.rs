//! Catalog provider traits

use async_trait::async_trait;

use crate::types::{Deployment, Tool};

use super::error::CatalogResult;

/// Source of the managed tool catalog
///
/// Failures are surfaced to the caller as-is; retrying is the transport's
/// business, not the catalog's.
#[async_trait]
pub trait ToolCatalogProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Every tool the backend knows about, in backend order
    async fn list_tools(&self) -> CatalogResult<Vec<Tool>>;
}

/// Source of deployment targets
#[async_trait]
pub trait DeploymentCatalogProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn list_deployments(&self) -> CatalogResult<Vec<Deployment>>;
}
