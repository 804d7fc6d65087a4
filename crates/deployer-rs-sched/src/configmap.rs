//! Patching the scheduler configuration stored in a `ConfigMap`.

use crate::{SchedError, render_config};
use deployer_rs_manifests::{ConfigMap, ConfigParams, SCHEDULER_CONFIG_FILE_NAME};
use log::debug;
use std::borrow::Cow;

/// Render the `scheduler-config.yaml` entry of `cm` in place.
///
/// Returns whether any override changed the document. The entry is left
/// untouched on error.
pub fn scheduler_config(
    cm: &mut ConfigMap,
    scheduler_name: &str,
    params: Option<&ConfigParams>,
) -> Result<bool, SchedError> {
    let namespace = cm.metadata.namespace.clone();
    let name = cm.metadata.name.clone();
    let Some(data) = cm.data.as_mut() else {
        return Err(SchedError::NoData { namespace, name });
    };
    let Some(entry) = data.get_mut(SCHEDULER_CONFIG_FILE_NAME) else {
        return Err(SchedError::MissingKey {
            key: SCHEDULER_CONFIG_FILE_NAME.to_string(),
            namespace,
            name,
        });
    };

    let rendered = render_config(entry.as_bytes(), scheduler_name, params)?;
    let updated = rendered.updated;
    if let Some(bytes) = re_encoded(rendered.data) {
        *entry = String::from_utf8(bytes)?;
    }
    debug!("configmap {namespace}/{name} rendered (updated={updated})");
    Ok(updated)
}

/// Bytes produced by re-encoding; `None` when the input was passed through.
fn re_encoded(data: Cow<'_, [u8]>) -> Option<Vec<u8>> {
    match data {
        Cow::Owned(bytes) => Some(bytes),
        Cow::Borrowed(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"profiles:
- schedulerName: tas
  pluginConfig:
  - name: NodeResourceTopologyMatch
    args: {}
"#;

    fn params() -> ConfigParams {
        ConfigParams::builder().profile_name("renamed").build()
    }

    #[test]
    fn rejects_configmap_without_data() {
        let mut cm = ConfigMap::new("ns", "sched");
        let err = scheduler_config(&mut cm, "tas", Some(&params())).unwrap_err();
        assert_eq!(err.to_string(), "no data found in ConfigMap: ns/sched");
    }

    #[test]
    fn rejects_configmap_without_key() {
        let mut cm = ConfigMap::new("ns", "sched").with_data("other.yaml", CONFIG);
        let err = scheduler_config(&mut cm, "tas", Some(&params())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no data key named: scheduler-config.yaml found in ConfigMap: ns/sched"
        );
    }

    #[test]
    fn writes_rendered_config_back() {
        let mut cm = ConfigMap::new("ns", "sched").with_data(SCHEDULER_CONFIG_FILE_NAME, CONFIG);
        let updated = scheduler_config(&mut cm, "tas", Some(&params())).expect("render");
        assert!(updated);
        let data = cm.data.as_ref().expect("data");
        assert!(data[SCHEDULER_CONFIG_FILE_NAME].contains("schedulerName: renamed"));
    }

    #[test]
    fn passthrough_keeps_entry() {
        let mut cm = ConfigMap::new("ns", "sched").with_data(SCHEDULER_CONFIG_FILE_NAME, CONFIG);
        let updated = scheduler_config(&mut cm, "tas", None).expect("render");
        assert!(!updated);
        assert_eq!(cm.data.as_ref().expect("data")[SCHEDULER_CONFIG_FILE_NAME], CONFIG);
    }

    #[test]
    fn failed_render_keeps_entry() {
        let mut cm = ConfigMap::new("ns", "sched").with_data(SCHEDULER_CONFIG_FILE_NAME, CONFIG);
        let params = ConfigParams::builder()
            .leader_election(true, "lock", "ns")
            .build();
        let err = scheduler_config(&mut cm, "tas", Some(&params)).unwrap_err();
        assert!(matches!(err, SchedError::MissingField { ref path } if path == "leaderElection"));
        assert_eq!(cm.data.as_ref().expect("data")[SCHEDULER_CONFIG_FILE_NAME], CONFIG);
    }
}
