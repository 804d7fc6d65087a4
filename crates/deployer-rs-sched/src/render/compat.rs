//! Backward compatibility for the legacy resync period field.

use super::tree::{Object, nested_i64};
use crate::SchedError;
use log::debug;

const LEGACY_RESYNC_PERIOD: &str = "cacheResyncPeriodSeconds";

/// Drop `cacheResyncPeriodSeconds` unless it is strictly positive.
pub(super) fn ensure_backward_compatibility(
    args: &mut Object,
    path: &str,
) -> Result<(), SchedError> {
    let Some(period) = nested_i64(args, LEGACY_RESYNC_PERIOD, path)? else {
        return Ok(());
    };
    if period <= 0 {
        debug!("removing non-positive {LEGACY_RESYNC_PERIOD} ({period}) at {path}");
        args.remove(LEGACY_RESYNC_PERIOD);
    }
    Ok(())
}
