//! File-backed render tests.

use deployer_rs::commands::{load_params, render_configmap_file, render_file, write_output};
use deployer_rs::manifests::{ConfigMap, SCHEDULER_CONFIG_FILE_NAME};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEDULER_CONFIG: &str = r#"leaderElection:
  leaderElect: false
profiles:
- schedulerName: tas
  pluginConfig:
  - name: NodeResourceTopologyMatch
    args:
      cacheResyncPeriodSeconds: 0
"#;

const PARAMS: &str = r#"{
  // rename and tune the topology-aware profile
  profileName: "tas-renamed",
  cache: { informerMode: "Dedicated" },
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write");
    path
}

#[test]
fn renders_scheduler_config_file() {
    let temp = TempDir::new().expect("tmp");
    let config = write(temp.path(), "scheduler-config.yaml", SCHEDULER_CONFIG);
    let params_path = write(temp.path(), "params.json5", PARAMS);

    let params = load_params(Some(params_path.as_path())).expect("params");
    let outcome = render_file(&config, "tas", params.as_ref()).expect("render");
    assert!(outcome.updated);
    assert!(outcome.contents.contains("schedulerName: tas-renamed"));
    assert!(outcome.contents.contains("informerMode: Dedicated"));
    assert!(!outcome.contents.contains("cacheResyncPeriodSeconds"));
}

#[test]
fn missing_params_file_passes_through() {
    let temp = TempDir::new().expect("tmp");
    let config = write(temp.path(), "scheduler-config.yaml", SCHEDULER_CONFIG);

    let params = load_params(None).expect("params");
    assert!(params.is_none());
    let outcome = render_file(&config, "tas", params.as_ref()).expect("render");
    assert!(!outcome.updated);
    assert_eq!(outcome.contents, SCHEDULER_CONFIG);
}

#[test]
fn unreadable_params_file_is_reported() {
    let temp = TempDir::new().expect("tmp");
    let err = load_params(Some(temp.path().join("missing.json5").as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load params"));
}

#[test]
fn renders_configmap_manifest() {
    let temp = TempDir::new().expect("tmp");
    let cm = ConfigMap::new("tas", "scheduler-config")
        .with_data(SCHEDULER_CONFIG_FILE_NAME, SCHEDULER_CONFIG);
    let manifest = write(
        temp.path(),
        "configmap.yaml",
        &cm.to_yaml().expect("manifest"),
    );
    let params_path = write(temp.path(), "params.json5", PARAMS);
    let params = load_params(Some(params_path.as_path())).expect("params");

    let outcome = render_configmap_file(&manifest, "tas", params.as_ref()).expect("render");
    assert!(outcome.updated);
    let rendered = ConfigMap::from_yaml(&outcome.contents).expect("configmap");
    let data = rendered.data.expect("data");
    assert!(data[SCHEDULER_CONFIG_FILE_NAME].contains("informerMode: Dedicated"));
}

#[test]
fn configmap_without_key_fails() {
    let temp = TempDir::new().expect("tmp");
    let cm = ConfigMap::new("tas", "scheduler-config").with_data("other", "x");
    let manifest = write(
        temp.path(),
        "configmap.yaml",
        &cm.to_yaml().expect("manifest"),
    );
    let params_path = write(temp.path(), "params.json5", PARAMS);
    let params = load_params(Some(params_path.as_path())).expect("params");

    let err = render_configmap_file(&manifest, "tas", params.as_ref()).unwrap_err();
    assert!(format!("{err:#}").contains("no data key named: scheduler-config.yaml"));
}

#[test]
fn writes_output_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("out.yaml");
    write_output(Some(&path), "profiles: []\n").expect("write");
    assert_eq!(fs::read_to_string(&path).expect("read"), "profiles: []\n");
}
