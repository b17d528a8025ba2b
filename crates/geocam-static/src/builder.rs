//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use geocam_content::{load_site, load_template, ContentError, PageKind, SiteData};

use crate::assets::copy_assets;
use crate::fragments::{render_footer, render_navigation};
use crate::pages::{load_page, RenderError};
use crate::templates::{Fragments, TemplateEngine, TemplateError};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// JSON content directory
    pub content_dir: PathBuf,

    /// HTML template directory
    pub template_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Static assets copied verbatim into the output
    pub assets_dir: PathBuf,

    /// Directory under `output_dir` that receives the assets
    pub assets_dest: String,

    /// Pages to build, in order
    pub pages: Vec<PageKind>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("public"),
            assets_dir: PathBuf::from("src"),
            assets_dest: "assets".to_string(),
            pages: PageKind::ALL.to_vec(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of asset files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to render {page} page: {source}")]
    Render {
        page: PageKind,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build every configured page, then copy assets.
    ///
    /// Pages are built one after another. The first failure stops the build;
    /// pages written before it are left in place.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        tracing::info!("Building GeoCam website...");

        fs::create_dir_all(&self.config.output_dir).map_err(|e| BuildError::Write {
            path: self.config.output_dir.clone(),
            source: e,
        })?;

        let site = load_site(&self.config.content_dir)?;
        let mut templates = TemplateEngine::new();

        for &kind in &self.config.pages {
            self.build_page(kind, &site, &mut templates)?;
        }

        tracing::info!("Copying assets...");
        let assets_dest = self.config.output_dir.join(&self.config.assets_dest);
        let assets = copy_assets(&self.config.assets_dir, &assets_dest).map_err(|e| {
            BuildError::Write {
                path: assets_dest.clone(),
                source: e,
            }
        })?;

        tracing::info!(
            "Build complete! Site is in the '{}' directory.",
            self.config.output_dir.display()
        );

        Ok(BuildResult {
            pages: self.config.pages.len(),
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Build a single page.
    fn build_page(
        &self,
        kind: PageKind,
        site: &SiteData,
        templates: &mut TemplateEngine,
    ) -> Result<(), BuildError> {
        tracing::info!("Building {}...", kind.output_file());

        let page = load_page(kind, &self.config.content_dir)?;

        let name = kind.template_name();
        if !templates.has_template(name) {
            let source = load_template(&self.config.template_dir.join(name))?;
            templates.add_template(name, source);
        }

        let content = page
            .render()
            .map_err(|source| BuildError::Render { page: kind, source })?;
        let navigation = render_navigation(site, kind.page_id());
        let footer = render_footer(site);

        let html = templates.render_page(
            name,
            &Fragments {
                site_name: &site.site_name,
                navigation: &navigation,
                content: &content,
                footer: &footer,
            },
        )?;

        write_page(&self.config.output_dir.join(kind.output_file()), &html)
    }
}

/// Write a page, creating parent directories as needed.
fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)
    };

    write().map_err(|e| BuildError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
