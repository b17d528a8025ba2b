//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use geocam_static::{BuildConfig, SiteBuilder};

use crate::config::ConfigFile;

/// Run the build command.
pub fn run(file_config: ConfigFile, output: Option<PathBuf>) -> Result<()> {
    let config = build_config(file_config, output);

    let result = SiteBuilder::new(config).build()?;

    tracing::info!(
        "Built {} pages and copied {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    Ok(())
}

/// Resolve the builder configuration, letting `--output` win over the file.
fn build_config(file_config: ConfigFile, output: Option<PathBuf>) -> BuildConfig {
    let paths = file_config.paths;

    BuildConfig {
        content_dir: PathBuf::from(paths.content),
        template_dir: PathBuf::from(paths.templates),
        output_dir: output.unwrap_or_else(|| PathBuf::from(paths.output)),
        assets_dir: PathBuf::from(paths.assets),
        assets_dest: paths.assets_dest,
        ..Default::default()
    }
}
