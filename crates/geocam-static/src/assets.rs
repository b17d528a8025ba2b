//! Static asset copying.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Recursively copy `source` into `dest`, overwriting files that already exist.
///
/// Returns the number of files copied. A missing `source` is skipped and
/// copies nothing.
pub fn copy_assets(source: &Path, dest: &Path) -> io::Result<usize> {
    if !source.exists() {
        tracing::debug!("Assets directory not found, skipping: {}", source.display());
        return Ok(0);
    }

    let mut count = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(io::Error::other)?;
        let path = entry.path();

        let relative = path.strip_prefix(source).unwrap_or(path);
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        tracing::debug!("Copied {}", relative.display());
        count += 1;
    }

    Ok(count)
}
