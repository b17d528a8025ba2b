//! Page body renderers.
//!
//! Each page kind has a typed content document and one [`PageRenderer`]
//! implementation that turns it into the HTML placed at `{{CONTENT}}`.

mod contact;
mod data;
mod events;
mod home;
mod industries;
mod product;

use std::path::Path;

use geocam_content::{
    load_json, ContactPage, ContentError, DataPage, EventsPage, HomePage, IndustriesPage,
    PageHero, PageKind, ProductPage,
};

/// Errors that can occur while rendering page content.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Select field '{field}' has no options")]
    MissingOptions { field: String },
}

/// Renders a page's content document into its body fragment.
pub trait PageRenderer {
    /// Render the body fragment.
    fn render(&self) -> Result<String, RenderError>;
}

/// Load the content document for `kind` from `content_dir`.
pub fn load_page(
    kind: PageKind,
    content_dir: &Path,
) -> Result<Box<dyn PageRenderer>, ContentError> {
    let path = content_dir.join(kind.content_file());

    let page: Box<dyn PageRenderer> = match kind {
        PageKind::Home => Box::new(load_json::<HomePage>(&path)?),
        PageKind::Product => Box::new(load_json::<ProductPage>(&path)?),
        PageKind::Data => Box::new(load_json::<DataPage>(&path)?),
        PageKind::Industries => Box::new(load_json::<IndustriesPage>(&path)?),
        PageKind::Events => Box::new(load_json::<EventsPage>(&path)?),
        PageKind::Contact => Box::new(load_json::<ContactPage>(&path)?),
    };

    Ok(page)
}

/// Title banner used by every page except home.
fn page_hero(hero: &PageHero) -> String {
    format!(
        r#"
        <section class="page-hero">
            <div class="container">
                <h1>{}</h1>
                <p class="page-subtitle">{}</p>
            </div>
        </section>
"#,
        hero.title, hero.subtitle
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_renderer_for_kind() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("industries.json"),
            r#"{"hero": {"title": "Industries", "subtitle": "Who we serve"}, "industries": []}"#,
        )
        .unwrap();

        let page = load_page(PageKind::Industries, temp.path()).unwrap();
        let html = page.render().unwrap();

        assert!(html.contains("<h1>Industries</h1>"));
        assert!(!html.contains("industry-detail"));
    }

    #[test]
    fn content_for_another_kind_fails_to_load() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("events.json"),
            r#"{"hero": {"title": "Industries", "subtitle": "S"}, "industries": []}"#,
        )
        .unwrap();

        let err = load_page(PageKind::Events, temp.path()).err().unwrap();

        assert!(matches!(err, ContentError::MissingField { .. }));
    }

    #[test]
    fn missing_content_is_not_found() {
        let temp = tempdir().unwrap();

        let err = load_page(PageKind::Contact, temp.path()).err().unwrap();

        assert!(matches!(err, ContentError::NotFound { .. }));
    }
}
