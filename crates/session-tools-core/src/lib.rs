//! Session Tools Core
//!
//! State-consistency rules behind an assistant's tool panel and deployment
//! settings, independent of any UI toolkit or transport:
//!
//! - Derive which catalog tools an agent can select, and which still need auth
//! - Keep the enabled tool set consistent across toggles, including the
//!   staged-file side effect of the default file loader
//! - Gate the external file picker: credentials first, then selection rules
//! - Compose a deployment's env vars into one session configuration string
//!
//! Transports, storage media and the picker widget plug in through traits
//! (`ToolCatalogProvider`, `DeploymentCatalogProvider`, `PersistentFlagStore`,
//! `FileStaging`, `FilePicker`, `Notifier`, `Logger`).
//!
//! ```rust
//! use std::sync::Arc;
//! use session_tools_core::{
//!     Agent, EnabledToolSet, MemoryFileStaging, NoOpLogger, SessionParams, SessionPatch,
//!     Tool, ToolReconciler,
//! };
//!
//! let catalog = vec![Tool::new("web_search"), Tool::new("file_loader")];
//! let reconciler = ToolReconciler::new(Arc::new(NoOpLogger));
//! let available = reconciler.available_tools(&catalog, &Agent::with_tools(["web_search"]));
//! assert_eq!(available.len(), 1);
//!
//! let mut params = SessionParams::new();
//! params.apply(
//!     SessionPatch::new()
//!         .tools(EnabledToolSet::from_names(["file_loader"]))
//!         .file_ids(vec!["f1".to_string()]),
//! );
//! let staging = MemoryFileStaging::with_files(["f1"]);
//! reconciler.apply_toggle("file_loader", false, &mut params, &staging);
//! assert!(params.file_ids.is_empty());
//! ```

pub mod types;
pub mod logging;
pub mod notify;
pub mod config;
pub mod flags;
pub mod session;
pub mod catalog;
pub mod tools;
pub mod picker;
pub mod deployment;

// Re-export commonly used types
pub use types::{Tool, EnabledToolRef, Agent, Deployment, PickerDoc, PickerResult};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use notify::{Notifier, NoOpNotifier, LoggingNotifier, RecordingNotifier};

pub use config::{
    Settings, PickerConfig, ConfigProvider, ConfigError, ConfigResult,
    MemoryConfigProvider, FileConfigProvider,
};

pub use flags::{
    PersistentFlagStore, FlagStoreError, FlagStoreResult,
    MemoryFlagStore, FileFlagStore, DismissalFlag,
};

pub use session::{SessionParams, SessionPatch, FileStaging, MemoryFileStaging};

pub use catalog::{
    CatalogError, CatalogResult, CatalogCache,
    ToolCatalogProvider, DeploymentCatalogProvider,
    ToolCatalog, DeploymentCatalog,
    MemoryToolCatalog, MemoryDeploymentCatalog, FileCatalogProvider,
};

pub use tools::{
    EnabledToolSet, ToolFilter, ToolReconciler, ToggleOutcome, ToolSelectionView,
    available_tools, unauthed_tools, tool_auth_required, DEFAULT_FILE_LOADER,
};

pub use picker::{FilePicker, PickerValidator, PickerDecision, PickerOutcome, PickerRejection};

pub use deployment::{
    DeploymentConfigForm, EnvVarDraft, FormState, SubmitOutcome,
    compose_deployment_config, parse_deployment_config,
};
