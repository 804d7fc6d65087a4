//! Scheduler configuration patcher.
//!
//! Applies `ConfigParams` overrides to a serialized kube-scheduler
//! configuration, touching only the profile named by the caller and the
//! `NodeResourceTopologyMatch` plugin args inside it.

mod configmap;
mod error;
mod render;

/// Error type returned by the patcher.
pub use error::SchedError;
/// Patch the scheduler configuration held in a `ConfigMap`.
pub use configmap::scheduler_config;
/// Patch raw scheduler configuration bytes.
pub use render::{Rendered, render_config};
