//! Public SDK surface for the topology-aware scheduler deployer.
//!
//! Re-exports the manifest vocabulary and the scheduler config patcher, and
//! provides the file-level operations used by the `deployer-rs` binary.

pub mod commands;

/// Re-export for convenience.
pub use deployer_rs_manifests as manifests;
/// Re-export for convenience.
pub use deployer_rs_sched as sched;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}
