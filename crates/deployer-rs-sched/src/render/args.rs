//! Plugin args overrides: legacy resync period, `cache` and `scoringStrategy`.

use super::compat::ensure_backward_compatibility;
use super::tree::{Object, nested_map, set_field};
use crate::SchedError;
use deployer_rs_manifests::{
    ConfigCacheParams, ConfigParams, ScoringStrategyParams, validate_cache_informer_mode,
    validate_cache_resync_method, validate_foreign_pods_detect_mode,
    validate_scoring_strategy_type,
};
use log::debug;
use serde_json::{Value, json};

/// Apply every args override and normalize the legacy field.
///
/// Nested mappings are copied out, patched, and written back only when they
/// changed. The compatibility pass runs even when nothing else did.
pub(super) fn update_args(
    args: &mut Object,
    params: &ConfigParams,
    path: &str,
) -> Result<bool, SchedError> {
    let mut updated = 0;

    if let Some(period) = params
        .cache
        .as_ref()
        .and_then(|cache| cache.resync_period_seconds)
        && set_field(args, "cacheResyncPeriodSeconds", period)
    {
        updated += 1;
    }

    let mut cache_args = nested_map(args, "cache", path)?.unwrap_or_default();
    let cache_updated = match params.cache.as_ref() {
        Some(cache) => update_cache_args(&mut cache_args, cache)?,
        None => 0,
    };
    if cache_updated > 0 {
        set_field(args, "cache", cache_args);
    }
    updated += cache_updated;

    let mut scoring_args = nested_map(args, "scoringStrategy", path)?.unwrap_or_default();
    let scoring_updated = match params.scoring_strategy.as_ref() {
        Some(scoring) => update_scoring_strategy_args(&mut scoring_args, scoring)?,
        None => 0,
    };
    if scoring_updated > 0 {
        set_field(args, "scoringStrategy", scoring_args);
    }
    updated += scoring_updated;

    debug!("plugin args fields updated at {path}: {updated}");
    ensure_backward_compatibility(args, path)?;
    Ok(updated > 0)
}

/// Validate and write the cache fields. Stops at the first rejected value;
/// earlier writes are kept.
pub(super) fn update_cache_args(
    cache_args: &mut Object,
    cache: &ConfigCacheParams,
) -> Result<usize, SchedError> {
    let mut updated = 0;

    if let Some(method) = cache.resync_method.as_deref() {
        validate_cache_resync_method(method)?;
        if set_field(cache_args, "resyncMethod", method) {
            updated += 1;
        }
    }
    if let Some(mode) = cache.foreign_pods_detect_mode.as_deref() {
        validate_foreign_pods_detect_mode(mode)?;
        if set_field(cache_args, "foreignPodsDetect", mode) {
            updated += 1;
        }
    }
    if let Some(mode) = cache.informer_mode.as_deref() {
        validate_cache_informer_mode(mode)?;
        if set_field(cache_args, "informerMode", mode) {
            updated += 1;
        }
    }

    Ok(updated)
}

/// Validate and write the scoring strategy. The resource list is replaced
/// wholesale and counts as one field.
pub(super) fn update_scoring_strategy_args(
    scoring_args: &mut Object,
    scoring: &ScoringStrategyParams,
) -> Result<usize, SchedError> {
    let mut updated = 0;

    if !scoring.strategy_type.is_empty() {
        validate_scoring_strategy_type(&scoring.strategy_type)?;
        if set_field(scoring_args, "type", scoring.strategy_type.as_str()) {
            updated += 1;
        }
    }

    if !scoring.resources.is_empty() {
        let resources = scoring
            .resources
            .iter()
            .map(|resource| json!({ "name": resource.name, "weight": resource.weight }))
            .collect::<Vec<Value>>();
        if set_field(scoring_args, "resources", resources) {
            updated += 1;
        }
    }

    Ok(updated)
}

