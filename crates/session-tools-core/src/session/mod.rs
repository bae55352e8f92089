//! Session state owned by the host and mutated through explicit patches

mod params;
mod staging;

pub use params::{SessionParams, SessionPatch};
pub use staging::{FileStaging, MemoryFileStaging};
