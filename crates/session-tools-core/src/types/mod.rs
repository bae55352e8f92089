//! Core data types
//!
//! Plain snapshots shared by the catalogs, the reconciler, the picker
//! validator and the deployment form.

mod tool;
mod deployment;
mod picker;

pub use tool::{Tool, EnabledToolRef, Agent};
pub use deployment::Deployment;
pub use picker::{PickerDoc, PickerResult, FOLDER_DOC_TYPE};
