//! Configuration file (geocam.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Input and output locations, relative to the working directory.
#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_content")]
    pub content: String,
    #[serde(default = "default_templates")]
    pub templates: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_assets")]
    pub assets: String,
    /// Subdirectory of the output that receives the assets
    #[serde(default = "default_assets_dest")]
    pub assets_dest: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: default_content(),
            templates: default_templates(),
            output: default_output(),
            assets: default_assets(),
            assets_dest: default_assets_dest(),
        }
    }
}

/// Preview server settings.
#[derive(Debug, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open a browser once the server is listening
    #[serde(default = "default_open")]
    pub open: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: default_open(),
        }
    }
}

fn default_content() -> String {
    "content".to_string()
}
fn default_templates() -> String {
    "templates".to_string()
}
fn default_output() -> String {
    "public".to_string()
}
fn default_assets() -> String {
    "src".to_string()
}
fn default_assets_dest() -> String {
    "assets".to_string()
}
fn default_port() -> u16 {
    4000
}
fn default_open() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
