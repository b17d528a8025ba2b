//! Page templates.
//!
//! Templates are plain HTML documents with four placeholders:
//! `{{SITE_NAME}}`, `{{NAVIGATION}}`, `{{CONTENT}}` and `{{FOOTER}}`.
//! Substitution is a single pass over the template text. Everything else in
//! the template, including other `{{ ... }}`, `{%` or `{#` sequences, is
//! copied through unchanged, and inserted fragments are never rescanned.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(SITE_NAME|NAVIGATION|CONTENT|FOOTER)\}\}")
        .expect("Invalid placeholder regex")
});

/// The rendered pieces spliced into a page template.
#[derive(Debug, Clone, Copy)]
pub struct Fragments<'a> {
    pub site_name: &'a str,
    pub navigation: &'a str,
    pub content: &'a str,
    pub footer: &'a str,
}

impl<'a> Fragments<'a> {
    fn get(&self, placeholder: &str) -> &'a str {
        match placeholder {
            "SITE_NAME" => self.site_name,
            "NAVIGATION" => self.navigation,
            "CONTENT" => self.content,
            "FOOTER" => self.footer,
            _ => "",
        }
    }
}

/// Errors from rendering a page template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template not loaded: {0}")]
    Unknown(String),
}

/// Cache of template sources keyed by template name.
#[derive(Debug, Default)]
pub struct TemplateEngine {
    templates: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create an engine with no templates registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `name`.
    ///
    /// Registering a name twice replaces the earlier template.
    pub fn add_template(&mut self, name: &str, source: String) {
        self.templates.insert(name.to_string(), source);
    }

    /// Whether a template is registered under `name`.
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render a registered template with the given fragments.
    ///
    /// A placeholder the template does not contain is simply not emitted; a
    /// placeholder that appears several times is filled at every occurrence.
    pub fn render_page(
        &self,
        name: &str,
        fragments: &Fragments<'_>,
    ) -> Result<String, TemplateError> {
        let source = self
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::Unknown(name.to_string()))?;

        Ok(fill_placeholders(source, fragments))
    }
}

/// Replace each placeholder in `source` with its fragment.
pub fn fill_placeholders(source: &str, fragments: &Fragments<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(source, |caps: &Captures| fragments.get(&caps[1]))
        .into_owned()
}
