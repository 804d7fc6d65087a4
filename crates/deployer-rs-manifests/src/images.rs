//! Default container images deployed alongside the scheduler.

/// A set of image references for every deployed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Images {
    pub scheduler_plugin_scheduler: &'static str,
    pub scheduler_plugin_controller: &'static str,
    pub resource_topology_exporter: &'static str,
    pub node_feature_discovery: &'static str,
}

impl Images {
    /// Images referenced by tag.
    pub const fn tagged() -> Self {
        Self {
            scheduler_plugin_scheduler: "registry.k8s.io/scheduler-plugins/kube-scheduler:v0.24.9",
            scheduler_plugin_controller: "registry.k8s.io/scheduler-plugins/controller:v0.24.9",
            resource_topology_exporter: "quay.io/k8stopologyawareschedwg/resource-topology-exporter:v0.6.0",
            node_feature_discovery: "gcr.io/k8s-staging-nfd/node-feature-discovery:v0.10.1",
        }
    }

    /// Images pinned by digest.
    pub const fn pinned() -> Self {
        Self {
            scheduler_plugin_scheduler: "registry.k8s.io/scheduler-plugins/kube-scheduler@sha256:7e5681d6ee55da2a371111401fafd1ba371df83c4f1da088a0a7b20a2951eb72",
            scheduler_plugin_controller: "registry.k8s.io/scheduler-plugins/controller@sha256:28ade406054565a06a7585acd839c420e1a0b8969f5bbe81ca7f0d97a4a483f3",
            resource_topology_exporter: "quay.io/k8stopologyawareschedwg/resource-topology-exporter@sha256:c4721e940250ef3a31600e70d4c933551492b22ed54c9593ad2a246da976d6f1",
            node_feature_discovery: "gcr.io/k8s-staging-nfd/node-feature-discovery@sha256:4aebf17c8b72ee91cb468a6f21dd9f0312c1fcfdf8c86341f7aee0ec2d5991d7",
        }
    }

    /// `(component, image)` pairs in a stable order.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("scheduler-plugin-scheduler", self.scheduler_plugin_scheduler),
            ("scheduler-plugin-controller", self.scheduler_plugin_controller),
            ("resource-topology-exporter", self.resource_topology_exporter),
            ("node-feature-discovery", self.node_feature_discovery),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::Images;

    #[test]
    fn pinned_images_use_digests() {
        for (_, image) in Images::pinned().entries() {
            assert!(image.contains("@sha256:"), "{image}");
        }
        for (_, image) in Images::tagged().entries() {
            assert!(!image.contains('@'), "{image}");
        }
    }
}
