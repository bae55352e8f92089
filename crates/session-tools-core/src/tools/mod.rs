//! Tool enablement
//!
//! ```text
//! ToolCatalog ──► ToolFilter(agent allowlist) ──► available tools
//!            └──► is_auth_required             ──► unauthed tools
//!
//! toggle(name, checked) ──► EnabledToolSet ──► SessionParams.tools
//!                     └──► (default file loader) clear staging + fileIds
//! ```

mod enabled;
mod filter;
mod reconciler;

pub use enabled::EnabledToolSet;
pub use filter::ToolFilter;
pub use reconciler::{
    available_tools, unauthed_tools, tool_auth_required,
    ToolReconciler, ToggleOutcome, ToolSelectionView, DEFAULT_FILE_LOADER,
};
