//! Static page builder for the GeoCam site.
//!
//! Renders each page's JSON content into HTML fragments, splices them into the
//! page template together with the shared navigation and footer, and writes the
//! result to the output directory.

pub mod assets;
pub mod builder;
pub mod fragments;
pub mod pages;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use geocam_content::PageKind;
pub use pages::{PageRenderer, RenderError};
pub use templates::{Fragments, TemplateEngine, TemplateError};
