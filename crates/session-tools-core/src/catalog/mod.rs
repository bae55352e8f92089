//! Tool and deployment catalogs
//!
//! ```text
//! ┌───────────────────────────┐      ┌──────────────────────────────┐
//! │ ToolCatalog               │      │ DeploymentCatalog            │
//! │  CatalogCache<Tool>       │      │  CatalogCache<Deployment>    │
//! └────────────┬──────────────┘      └──────────────┬───────────────┘
//!              │ one in-flight fetch per key         │
//!              ▼                                     ▼
//!   ToolCatalogProvider                 DeploymentCatalogProvider
//!   (backend, file snapshot, memory)    (backend, file snapshot, memory)
//! ```

mod error;
mod traits;
mod cache;
mod memory;
mod file;
mod catalogs;

pub use error::{CatalogError, CatalogResult};
pub use traits::{ToolCatalogProvider, DeploymentCatalogProvider};
pub use cache::CatalogCache;
pub use memory::{MemoryToolCatalog, MemoryDeploymentCatalog};
pub use file::{FileCatalogProvider, CatalogSnapshot};
pub use catalogs::{ToolCatalog, DeploymentCatalog, TOOLS_CACHE_KEY, DEPLOYMENTS_CACHE_KEY};
