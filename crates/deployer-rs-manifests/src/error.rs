//! Error types for manifest loading and validation.

use thiserror::Error;

/// Errors returned while loading params files or `ConfigMap` manifests.
#[derive(Debug, Error)]
pub enum ManifestsError {
    /// Reading a file failed.
    #[error("failed to read manifest: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a JSON5 params file failed.
    #[error("failed to parse params: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Decoding or encoding a YAML manifest failed.
    #[error("failed to decode manifest: {0}")]
    DecodeFailed(#[from] serde_yaml::Error),
}

/// A caller-supplied value rejected by one of the validators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {field}: {value:?}")]
pub struct ValidationError {
    /// Name of the field the value was meant for.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}
