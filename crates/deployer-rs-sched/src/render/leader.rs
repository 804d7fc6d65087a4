//! Leader election overrides.

use super::tree::{Object, set_field};
use deployer_rs_manifests::LeaderElectionParams;
use log::debug;

/// Write all three leader election fields, in order.
///
/// Writes into an owned mapping cannot fail, so this only reports whether any
/// stored value changed.
pub(super) fn update_leader_election(lead: &mut Object, params: &LeaderElectionParams) -> bool {
    let mut updated = 0;
    if set_field(lead, "leaderElect", params.leader_elect) {
        updated += 1;
    }
    if set_field(lead, "resourceName", params.resource_name.as_str()) {
        updated += 1;
    }
    if set_field(lead, "resourceNamespace", params.resource_namespace.as_str()) {
        updated += 1;
    }
    debug!("leader election fields updated: {updated}");
    updated > 0
}
