//! External file picker gatekeeping
//!
//! The picker widget itself is opaque (`FilePicker`). `PickerValidator`
//! refuses to open it without credentials and validates what it returns
//! before any consumer sees it.

mod validator;

pub use validator::{
    FilePicker, PickerValidator, PickerDecision, PickerOutcome, PickerRejection,
    UNAVAILABLE_MESSAGE,
};
pub use crate::config::PickerConfig;
