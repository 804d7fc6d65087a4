//! Override parameters for the scheduler configuration.

use crate::ManifestsError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root set of overrides. Absent groups leave the document untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigParams {
    /// New name for the matched profile; empty keeps the current name.
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub cache: Option<ConfigCacheParams>,
    #[serde(default)]
    pub scoring_strategy: Option<ScoringStrategyParams>,
    #[serde(default)]
    pub leader_election: Option<LeaderElectionParams>,
}

/// Cache-related plugin args. Each field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigCacheParams {
    #[serde(default)]
    pub resync_period_seconds: Option<i64>,
    #[serde(default)]
    pub resync_method: Option<String>,
    #[serde(default)]
    pub foreign_pods_detect_mode: Option<String>,
    #[serde(default)]
    pub informer_mode: Option<String>,
}

/// Scoring strategy plugin args.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoringStrategyParams {
    /// Strategy type; empty keeps the current value.
    #[serde(default, rename = "type")]
    pub strategy_type: String,
    /// Resource weights, written in the given order.
    #[serde(default)]
    pub resources: Vec<ResourceSpecParams>,
}

/// A single weighted resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSpecParams {
    pub name: String,
    pub weight: i64,
}

impl ResourceSpecParams {
    pub fn new(name: impl Into<String>, weight: i64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Leader election settings. All three fields are always written together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LeaderElectionParams {
    pub leader_elect: bool,
    pub resource_name: String,
    pub resource_namespace: String,
}

impl ConfigParams {
    /// Start building params programmatically.
    pub fn builder() -> ConfigParamsBuilder {
        ConfigParamsBuilder::new()
    }

    /// Load params from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ManifestsError> {
        info!("loading params from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load params from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ManifestsError> {
        debug!("loading params from raw contents (len={})", contents.len());
        Ok(json5::from_str(contents)?)
    }
}

/// Builder for assembling `ConfigParams` in code.
#[derive(Debug, Default, Clone)]
pub struct ConfigParamsBuilder {
    params: ConfigParams,
}

impl ConfigParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the matched profile.
    pub fn profile_name(mut self, name: impl Into<String>) -> Self {
        self.params.profile_name = name.into();
        self
    }

    /// Replace the cache overrides.
    pub fn cache(mut self, cache: ConfigCacheParams) -> Self {
        self.params.cache = Some(cache);
        self
    }

    /// Replace the scoring strategy overrides.
    pub fn scoring_strategy(mut self, scoring_strategy: ScoringStrategyParams) -> Self {
        self.params.scoring_strategy = Some(scoring_strategy);
        self
    }

    /// Set the leader election overrides.
    pub fn leader_election(
        mut self,
        leader_elect: bool,
        resource_name: impl Into<String>,
        resource_namespace: impl Into<String>,
    ) -> Self {
        self.params.leader_election = Some(LeaderElectionParams {
            leader_elect,
            resource_name: resource_name.into(),
            resource_namespace: resource_namespace.into(),
        });
        self
    }

    pub fn build(self) -> ConfigParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_json5() {
        let params = ConfigParams::load_from_str(
            r#"{
                profileName: "renamed",
                cache: { resyncPeriodSeconds: 5, informerMode: "Dedicated" },
                scoringStrategy: {
                    type: "LeastAllocated",
                    resources: [{ name: "cpu", weight: 2 }],
                },
                leaderElection: {
                    leaderElect: true,
                    resourceName: "sched",
                    resourceNamespace: "kube-system",
                },
            }"#,
        )
        .expect("params");

        let expected = ConfigParams::builder()
            .profile_name("renamed")
            .cache(ConfigCacheParams {
                resync_period_seconds: Some(5),
                informer_mode: Some("Dedicated".to_string()),
                ..Default::default()
            })
            .scoring_strategy(ScoringStrategyParams {
                strategy_type: "LeastAllocated".to_string(),
                resources: vec![ResourceSpecParams::new("cpu", 2)],
            })
            .leader_election(true, "sched", "kube-system")
            .build();
        assert_eq!(params, expected);
    }

    #[test]
    fn empty_object_has_no_groups() {
        let params = ConfigParams::load_from_str("{}").expect("params");
        assert_eq!(params, ConfigParams::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ConfigParams::load_from_str(r#"{ cache: { resync: "All" } }"#).unwrap_err();
        assert!(matches!(err, ManifestsError::ParseFailed(_)));
    }

    #[test]
    fn leader_election_requires_every_field() {
        let err = ConfigParams::load_from_str(r#"{ leaderElection: { leaderElect: true } }"#)
            .unwrap_err();
        assert!(matches!(err, ManifestsError::ParseFailed(_)));
    }
}
