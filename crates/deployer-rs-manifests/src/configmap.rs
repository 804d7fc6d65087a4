//! Minimal `ConfigMap` model holding the scheduler configuration file.

use crate::ManifestsError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Object metadata. Only name and namespace are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A `ConfigMap` manifest. Keys other than `metadata` and `data` are carried
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigMap {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ConfigMap {
    /// Create an empty `ConfigMap` with the given coordinates.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: name.into(),
                namespace: namespace.into(),
                extra: BTreeMap::new(),
            },
            ..Default::default()
        }
    }

    /// Insert a data entry, creating the data map if needed.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Decode a manifest from YAML.
    pub fn from_yaml(contents: &str) -> Result<Self, ManifestsError> {
        debug!("decoding configmap manifest (len={})", contents.len());
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Read and decode a manifest from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ManifestsError> {
        debug!("loading configmap manifest: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Encode the manifest back to YAML.
    pub fn to_yaml(&self) -> Result<String, ManifestsError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// `namespace/name`, for messages.
    pub fn key(&self) -> String {
        format!("{}/{}", self.metadata.namespace, self.metadata.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r#"apiVersion: v1
kind: ConfigMap
metadata:
  name: scheduler-config
  namespace: tas-scheduler
  labels:
    app: scheduler
data:
  scheduler-config.yaml: |
    profiles: []
"#;

    #[test]
    fn decodes_manifest() {
        let cm = ConfigMap::from_yaml(MANIFEST).expect("configmap");
        assert_eq!(cm.key(), "tas-scheduler/scheduler-config");
        let data = cm.data.as_ref().expect("data");
        assert_eq!(data["scheduler-config.yaml"], "profiles: []\n");
        assert!(cm.extra.contains_key("apiVersion"));
        assert!(cm.metadata.extra.contains_key("labels"));
    }

    #[test]
    fn encoding_keeps_unknown_keys() {
        let cm = ConfigMap::from_yaml(MANIFEST).expect("configmap");
        let encoded = cm.to_yaml().expect("yaml");
        let decoded = ConfigMap::from_yaml(&encoded).expect("configmap");
        assert_eq!(decoded, cm);
        assert!(encoded.contains("kind: ConfigMap"));
    }

    #[test]
    fn manifest_without_data() {
        let cm = ConfigMap::from_yaml("metadata:\n  name: empty\n").expect("configmap");
        assert!(cm.data.is_none());
    }
}
