//! Manifest vocabulary for the topology-aware scheduler deployer.
//!
//! This crate owns the override parameters accepted by the scheduler config
//! patcher, the value validators, the hosting `ConfigMap` container and the
//! default image identifiers.

mod configmap;
mod error;
mod images;
mod params;
mod validate;

/// Hosting container for the scheduler configuration file.
pub use configmap::{ConfigMap, ObjectMeta};
/// Error types for manifest loading and value validation.
pub use error::{ManifestsError, ValidationError};
/// Default container images.
pub use images::Images;
/// Override parameters applied to the scheduler configuration.
pub use params::{
    ConfigCacheParams, ConfigParams, ConfigParamsBuilder, LeaderElectionParams,
    ResourceSpecParams, ScoringStrategyParams,
};
/// Value validators for validated enum fields.
pub use validate::{
    validate_cache_informer_mode, validate_cache_resync_method,
    validate_foreign_pods_detect_mode, validate_scoring_strategy_type,
};

/// Name of the scheduler plugin whose args the patcher updates.
pub const SCHEDULER_PLUGIN_NAME: &str = "NodeResourceTopologyMatch";
/// Key holding the scheduler configuration inside its `ConfigMap`.
pub const SCHEDULER_CONFIG_FILE_NAME: &str = "scheduler-config.yaml";
