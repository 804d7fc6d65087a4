//! Rendering of scheduler configuration overrides.
//!
//! Decodes the YAML document once, patches the leader election section and
//! every profile named by the caller, then re-encodes it. Mappings are
//! re-encoded with sorted keys.

mod args;
mod compat;
mod leader;
mod tree;


use crate::SchedError;
use deployer_rs_manifests::{ConfigParams, SCHEDULER_PLUGIN_NAME};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::borrow::Cow;
use tree::Object;

/// Output of `render_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<'a> {
    /// The document to store. Borrowed when the input is passed through.
    pub data: Cow<'a, [u8]>,
    /// Whether any override changed a stored value.
    pub updated: bool,
}

impl<'a> Rendered<'a> {
    fn passthrough(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            updated: false,
        }
    }
}

/// Apply `params` to the profile(s) whose `schedulerName` is `scheduler_name`.
///
/// An empty `scheduler_name` or absent `params` passes `data` through. On
/// error nothing is returned and the caller keeps its original bytes. If the
/// patched tree cannot be re-encoded the input is passed through without an
/// error; every earlier failure is reported.
pub fn render_config<'a>(
    data: &'a [u8],
    scheduler_name: &str,
    params: Option<&ConfigParams>,
) -> Result<Rendered<'a>, SchedError> {
    let Some(params) = params.filter(|_| !scheduler_name.is_empty()) else {
        info!(
            "missing parameters, passing through (scheduler_name={:?}, params_set={})",
            scheduler_name,
            params.is_some()
        );
        return Ok(Rendered::passthrough(data));
    };

    let mut root = decode_document(data).map_err(|err| {
        error!("cannot decode scheduler config: {err}");
        err
    })?;

    let updated = patch_document(&mut root, scheduler_name, params).map_err(|err| {
        error!("failed to patch scheduler config (scheduler_name={scheduler_name}): {err}");
        err
    })?;

    match serde_yaml::to_string(&Value::Object(root)) {
        Ok(encoded) => {
            debug!("scheduler config rendered (updated={updated})");
            Ok(Rendered {
                data: Cow::Owned(encoded.into_bytes()),
                updated,
            })
        }
        Err(err) => {
            warn!("cannot re-encode scheduler config, passing through: {err}");
            Ok(Rendered::passthrough(data))
        }
    }
}

/// Decode the document into a mapping tree.
///
/// Non-finite floats have no representation in the tree and are rejected
/// rather than rewritten.
fn decode_document(data: &[u8]) -> Result<Object, SchedError> {
    let document: serde_yaml::Value = serde_yaml::from_slice(data)?;
    tree::ensure_finite(&document, "")?;
    Ok(serde_yaml::from_value(document)?)
}

fn patch_document(
    root: &mut Object,
    scheduler_name: &str,
    params: &ConfigParams,
) -> Result<bool, SchedError> {
    let mut updated = false;

    if let Some(leader_election) = params.leader_election.as_ref() {
        let mut lead = tree::required(
            tree::nested_map(root, "leaderElection", "")?,
            "",
            "leaderElection",
        )?;
        if leader::update_leader_election(&mut lead, leader_election) {
            updated = true;
        }
        tree::set_field(root, "leaderElection", lead);
    }

    // No early exit: duplicate profile names are all patched.
    let mut profiles = tree::required(tree::nested_slice(root, "profiles", "")?, "", "profiles")?;
    for (idx, entry) in profiles.iter_mut().enumerate() {
        let path = format!("profiles[{idx}]");
        let profile = tree::as_object_mut(entry, &path)?;
        if patch_profile(profile, &path, scheduler_name, params)? {
            updated = true;
        }
    }
    tree::set_field(root, "profiles", profiles);

    Ok(updated)
}

/// Patch one profile if its `schedulerName` matches.
fn patch_profile(
    profile: &mut Object,
    path: &str,
    scheduler_name: &str,
    params: &ConfigParams,
) -> Result<bool, SchedError> {
    let profile_name = tree::required(
        tree::nested_string(profile, "schedulerName", path)?,
        path,
        "schedulerName",
    )?;
    if profile_name != scheduler_name {
        return Ok(false);
    }
    debug!("patching profile {profile_name} at {path}");

    let mut updated = false;
    if !params.profile_name.is_empty()
        && tree::set_field(profile, "schedulerName", params.profile_name.as_str())
    {
        updated = true;
    }

    let mut plugin_configs = tree::required(
        tree::nested_slice(profile, "pluginConfig", path)?,
        path,
        "pluginConfig",
    )?;
    for (idx, entry) in plugin_configs.iter_mut().enumerate() {
        let entry_path = tree::join_path(path, &format!("pluginConfig[{idx}]"));
        let plugin_config = tree::as_object_mut(entry, &entry_path)?;
        let name = tree::required(
            tree::nested_string(plugin_config, "name", &entry_path)?,
            &entry_path,
            "name",
        )?;
        if name != SCHEDULER_PLUGIN_NAME {
            continue;
        }

        let args_path = tree::join_path(&entry_path, "args");
        let mut plugin_args = tree::required(
            tree::nested_map(plugin_config, "args", &entry_path)?,
            &entry_path,
            "args",
        )?;
        if args::update_args(&mut plugin_args, params, &args_path)? {
            updated = true;
        }
        tree::set_field(plugin_config, "args", plugin_args);
    }
    tree::set_field(profile, "pluginConfig", plugin_configs);

    Ok(updated)
}
