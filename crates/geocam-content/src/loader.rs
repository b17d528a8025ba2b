//! Loading content documents and templates from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::site::SiteData;

/// File name of the site-wide document inside the content directory.
pub const SITE_FILE: &str = "site.json";

const MISSING_FIELD_PREFIX: &str = "missing field";

/// Errors that can occur while loading content or templates.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing field in {}: {message}", path.display())]
    MissingField { path: PathBuf, message: String },
}

impl ContentError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            ContentError::NotFound { path }
            | ContentError::Io { path, .. }
            | ContentError::Parse { path, .. }
            | ContentError::MissingField { path, .. } => path,
        }
    }

    fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ContentError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ContentError::Io {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    fn from_json(path: &Path, err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde has no structured kind for an absent field, only this message
        // from `de::Error::missing_field`. Pinned by a test below.
        if err.is_data() && message.starts_with(MISSING_FIELD_PREFIX) {
            ContentError::MissingField {
                path: path.to_path_buf(),
                message,
            }
        } else {
            ContentError::Parse {
                path: path.to_path_buf(),
                message,
            }
        }
    }
}

/// Read a file to a string.
fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|e| ContentError::from_io(path, e))
}

/// Load and deserialize a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let source = read(path)?;
    let value = serde_json::from_str(&source).map_err(|e| ContentError::from_json(path, e))?;
    tracing::debug!("Loaded {}", path.display());
    Ok(value)
}

/// Load `site.json` from the content directory.
pub fn load_site(content_dir: &Path) -> Result<SiteData, ContentError> {
    load_json(&content_dir.join(SITE_FILE))
}

/// Load a template as raw text.
pub fn load_template(path: &Path) -> Result<String, ContentError> {
    read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HomePage;
    use tempfile::tempdir;

    const SITE: &str = r#"{
        "siteName": "GeoCam",
        "description": "Mapping",
        "navigation": [{"name": "Home", "href": "index.html"}],
        "events": [],
        "contact": {"email": "a@b.com"}
    }"#;

    #[test]
    fn loads_site_from_content_dir() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(SITE_FILE), SITE).unwrap();

        let site = load_site(temp.path()).unwrap();

        assert_eq!(site.site_name, "GeoCam");
        assert_eq!(site.navigation.len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = tempdir().unwrap();

        let err = load_site(temp.path()).unwrap_err();

        assert!(matches!(err, ContentError::NotFound { .. }));
        assert_eq!(err.path(), temp.path().join(SITE_FILE));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(SITE_FILE), "{ not json").unwrap();

        let err = load_site(temp.path()).unwrap_err();

        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn absent_field_is_missing_field() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("home.json");
        fs::write(
            &path,
            r##"{
                "hero": {
                    "subtitle": "S", "description": "D",
                    "cta": {"primary": {"text": "a", "href": "#"},
                            "secondary": {"text": "b", "href": "#"}}
                },
                "workflow": {"title": "W", "subtitle": "S", "steps": []},
                "deployment": {"title": "D", "subtitle": "S", "methods": []},
                "industries": {"title": "I", "subtitle": "S", "sectors": []}
            }"##,
        )
        .unwrap();

        let err = load_json::<HomePage>(&path).unwrap_err();

        match err {
            ContentError::MissingField { message, .. } => {
                assert!(message.starts_with("missing field `title`"));
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn serde_missing_field_message_has_expected_prefix() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Named {
            name: String,
        }

        let err = serde_json::from_str::<Named>("{}").unwrap_err();

        assert!(err.is_data());
        assert!(err.to_string().starts_with(MISSING_FIELD_PREFIX));
        assert!(err.to_string().starts_with("missing field `name`"));
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(SITE_FILE),
            r#"{"siteName": 7, "description": "", "navigation": [], "events": [],
                "contact": {"email": ""}}"#,
        )
        .unwrap();

        let err = load_site(temp.path()).unwrap_err();

        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn loads_template_verbatim() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("home.html");
        fs::write(&path, "<title>{{SITE_NAME}}</title>\n").unwrap();

        let template = load_template(&path).unwrap();

        assert_eq!(template, "<title>{{SITE_NAME}}</title>\n");
    }
}
