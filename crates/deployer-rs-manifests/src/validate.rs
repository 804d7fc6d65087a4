//! Validators for the enum-like string fields of the plugin args.

use crate::ValidationError;

const CACHE_RESYNC_METHODS: &[&str] = &["Autodetect", "All", "OnlyExclusiveResources"];
const FOREIGN_PODS_DETECT_MODES: &[&str] = &["None", "All", "OnlyExclusiveResources"];
const CACHE_INFORMER_MODES: &[&str] = &["Shared", "Dedicated"];
const SCORING_STRATEGY_TYPES: &[&str] = &[
    "MostAllocated",
    "BalancedAllocation",
    "LeastAllocated",
    "LeastNUMANodes",
];

/// Validate the cache resync method.
pub fn validate_cache_resync_method(value: &str) -> Result<(), ValidationError> {
    ensure_one_of(value, CACHE_RESYNC_METHODS, "resyncMethod")
}

/// Validate the foreign pods detection mode.
pub fn validate_foreign_pods_detect_mode(value: &str) -> Result<(), ValidationError> {
    ensure_one_of(value, FOREIGN_PODS_DETECT_MODES, "foreignPodsDetect")
}

/// Validate the cache informer mode.
pub fn validate_cache_informer_mode(value: &str) -> Result<(), ValidationError> {
    ensure_one_of(value, CACHE_INFORMER_MODES, "informerMode")
}

/// Validate the scoring strategy type.
pub fn validate_scoring_strategy_type(value: &str) -> Result<(), ValidationError> {
    ensure_one_of(value, SCORING_STRATEGY_TYPES, "scoringStrategy.type")
}

fn ensure_one_of(
    value: &str,
    allowed: &[&str],
    field: &'static str,
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError {
            field,
            value: value.to_string(),
        })
    }
}
