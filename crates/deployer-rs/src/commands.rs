//! File-backed render operations.

use anyhow::Context;
use deployer_rs_manifests::{ConfigMap, ConfigParams};
use deployer_rs_sched::{render_config, scheduler_config};
use log::info;
use std::fs;
use std::path::Path;

/// Result of a file-level render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Rendered document text.
    pub contents: String,
    /// Whether any override changed the document.
    pub updated: bool,
}

/// Load override params, or `None` to run in pass-through mode.
pub fn load_params(path: Option<&Path>) -> anyhow::Result<Option<ConfigParams>> {
    path.map(|path| {
        ConfigParams::load_from_path(path)
            .with_context(|| format!("failed to load params from {}", path.display()))
    })
    .transpose()
}

/// Render a bare scheduler configuration file.
pub fn render_file(
    config_path: &Path,
    scheduler_name: &str,
    params: Option<&ConfigParams>,
) -> anyhow::Result<RenderOutcome> {
    let data = fs::read(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    let rendered = render_config(&data, scheduler_name, params)
        .with_context(|| format!("failed to render {}", config_path.display()))?;
    let contents = String::from_utf8(rendered.data.into_owned())
        .context("rendered scheduler config is not valid UTF-8")?;
    info!(
        "rendered scheduler config (path={}, updated={})",
        config_path.display(),
        rendered.updated
    );
    Ok(RenderOutcome {
        contents,
        updated: rendered.updated,
    })
}

/// Render the scheduler configuration embedded in a `ConfigMap` manifest.
pub fn render_configmap_file(
    manifest_path: &Path,
    scheduler_name: &str,
    params: Option<&ConfigParams>,
) -> anyhow::Result<RenderOutcome> {
    let mut cm = ConfigMap::load_from_path(manifest_path)
        .with_context(|| format!("failed to load {}", manifest_path.display()))?;
    let updated = scheduler_config(&mut cm, scheduler_name, params)
        .with_context(|| format!("failed to render ConfigMap {}", cm.key()))?;
    let contents = cm.to_yaml().context("failed to encode ConfigMap")?;
    info!(
        "rendered ConfigMap (path={}, updated={})",
        manifest_path.display(),
        updated
    );
    Ok(RenderOutcome { contents, updated })
}

/// Write rendered output to `path`, or stdout when absent.
pub fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}
