//! Preview server for a built site.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use geocam_static::PageKind;
use tower_http::services::ServeDir;

/// Options for the preview server.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Built site to serve
    pub dir: PathBuf,

    /// Port on 127.0.0.1; 0 picks a free port
    pub port: u16,

    /// Open the home page in a browser once bound
    pub open_browser: bool,
}

/// Run the serve command.
pub async fn run(options: ServeOptions) -> Result<()> {
    let dir = &options.dir;
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'geocam build' first.",
            dir.display()
        );
    }

    let missing = missing_pages(dir);
    if missing.is_empty() {
        tracing::debug!("All {} pages present", PageKind::ALL.len());
    } else {
        tracing::warn!(
            "{} is missing {} of {} pages: {}",
            dir.display(),
            missing.len(),
            PageKind::ALL.len(),
            missing.join(", ")
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], options.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let addr = listener.local_addr()?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    if options.open_browser {
        let url = format!("http://{}/{}", addr, PageKind::Home.output_file());
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    axum::serve(listener, router(dir)).await?;

    Ok(())
}

/// Static file routes over `dir`; `/` resolves to `index.html`.
fn router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Output files of the site's pages that are not in `dir`.
fn missing_pages(dir: &Path) -> Vec<&'static str> {
    PageKind::ALL
        .iter()
        .map(|kind| kind.output_file())
        .filter(|file| !dir.join(file).is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn get(app: Router, path: &str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request =
            format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn refuses_missing_directory() {
        let temp = tempdir().unwrap();

        let err = run(ServeOptions {
            dir: temp.path().join("public"),
            port: 0,
            open_browser: false,
        })
        .await
        .unwrap_err();

        assert!(err.to_string().contains("Run 'geocam build' first"));
    }

    #[test]
    fn lists_pages_not_yet_built() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "home").unwrap();
        fs::write(temp.path().join("contact.html"), "contact").unwrap();

        let missing = missing_pages(temp.path());

        assert_eq!(
            missing,
            vec!["product.html", "data.html", "industries.html", "events.html"]
        );
    }

    #[tokio::test]
    async fn root_serves_home_page() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<h1>GeoCam</h1>").unwrap();

        let response = get(router(temp.path()), "/").await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("<h1>GeoCam</h1>"));
    }

    #[tokio::test]
    async fn serves_copied_assets() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("assets/css")).unwrap();
        fs::write(temp.path().join("assets/css/main.css"), "body {}").unwrap();

        let response = get(router(temp.path()), "/assets/css/main.css").await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("text/css"));
        assert!(response.ends_with("body {}"));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let temp = tempdir().unwrap();

        let response = get(router(temp.path()), "/about.html").await;

        assert!(response.starts_with("HTTP/1.1 404"));
    }
}
