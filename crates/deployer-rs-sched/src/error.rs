//! Error types for scheduler config rendering.

use deployer_rs_manifests::ValidationError;
use thiserror::Error;

/// Errors returned while patching a scheduler configuration.
#[derive(Debug, Error)]
pub enum SchedError {
    /// The input could not be decoded into a mapping.
    #[error("failed to decode scheduler config: {0}")]
    Decode(#[from] serde_yaml::Error),
    /// A required key is absent.
    #[error("missing required field: {path}")]
    MissingField { path: String },
    /// A key holds a value of the wrong shape.
    #[error("invalid scheduler config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// An override value was rejected.
    #[error("invalid override: {0}")]
    Validation(#[from] ValidationError),
    /// The `ConfigMap` carries no data at all.
    #[error("no data found in ConfigMap: {namespace}/{name}")]
    NoData { namespace: String, name: String },
    /// The `ConfigMap` lacks the scheduler config key.
    #[error("no data key named: {key} found in ConfigMap: {namespace}/{name}")]
    MissingKey {
        key: String,
        namespace: String,
        name: String,
    },
    /// Rendered bytes could not be stored back as text.
    #[error("rendered scheduler config is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
