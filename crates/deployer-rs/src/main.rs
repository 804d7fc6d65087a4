//! Command-line front end for rendering scheduler configurations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use deployer_rs::commands::{self, RenderOutcome};
use deployer_rs::manifests::Images;
use log::debug;
use std::path::PathBuf;

/// Command-line options for the deployer.
#[derive(Parser)]
#[command(name = "deployer-rs", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Patch a scheduler-config.yaml file
    Render {
        /// Path to the scheduler configuration
        #[arg(long)]
        config: PathBuf,
        #[command(flatten)]
        target: Target,
    },
    /// Patch the scheduler configuration inside a ConfigMap manifest
    Configmap {
        /// Path to the ConfigMap manifest
        #[arg(long)]
        manifest: PathBuf,
        #[command(flatten)]
        target: Target,
    },
    /// Print the default images
    Images {
        /// Print digest-pinned references instead of tags
        #[arg(long)]
        pinned: bool,
    },
}

/// Options shared by the render commands.
#[derive(clap::Args)]
struct Target {
    /// Scheduler profile to patch
    #[arg(long)]
    scheduler_name: String,
    /// Optional JSON5 params file; without it the config passes through
    #[arg(long)]
    params: Option<PathBuf>,
    /// Output path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    deployer_rs::init_logging();

    let cli = Cli::parse();
    match cli.command {
        Command::Render { config, target } => {
            let params = commands::load_params(target.params.as_deref())?;
            let outcome =
                commands::render_file(&config, &target.scheduler_name, params.as_ref())?;
            finish(&target, outcome)
        }
        Command::Configmap { manifest, target } => {
            let params = commands::load_params(target.params.as_deref())?;
            let outcome = commands::render_configmap_file(
                &manifest,
                &target.scheduler_name,
                params.as_ref(),
            )?;
            finish(&target, outcome)
        }
        Command::Images { pinned } => {
            let images = if pinned {
                Images::pinned()
            } else {
                Images::tagged()
            };
            for (component, image) in images.entries() {
                println!("{component}\t{image}");
            }
            Ok(())
        }
    }
}

fn finish(target: &Target, outcome: RenderOutcome) -> anyhow::Result<()> {
    debug!("render finished (updated={})", outcome.updated);
    commands::write_output(target.output.as_deref(), &outcome.contents)
        .context("failed to emit rendered output")
}
