//! Per-deployment environment variable configuration
//!
//! The form seeds an `EnvVarDraft` from the selected deployment and, on
//! submit, writes one `NAME=VALUE;...` string into the session's
//! `deploymentConfig`.

mod config_string;
mod draft;
mod form;

pub use config_string::{
    compose_deployment_config, parse_deployment_config, PAIR_SEPARATOR, VALUE_SEPARATOR,
};
pub use draft::EnvVarDraft;
pub use form::{DeploymentConfigForm, FormState, SubmitOutcome};
