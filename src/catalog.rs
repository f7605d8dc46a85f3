use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task;

/// A single file discovered under the static root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    pub variable: String,
    pub filepath: String,
}

/// The two kinds of file the API serves per variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Binary,
}

impl FileKind {
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Image => "png",
            FileKind::Binary => "dat",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            FileKind::Image => "image/png",
            FileKind::Binary => "application/octet-stream",
        }
    }
}

/// Shareable catalog service over the static root for use across async handlers
///
/// The catalog holds no state beyond the root path: every call re-reads the
/// filesystem, so files added or removed out of band are visible on the next
/// request.
#[derive(Clone)]
pub struct Catalog {
    root: Arc<PathBuf>,
}

impl Catalog {
    /// Create a catalog over the given static root
    ///
    /// The root does not have to exist yet; a missing root behaves like an
    /// empty one.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Get the static root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the static root and return one entry per regular file
    ///
    /// `variable` is the name of the first-level subdirectory containing the
    /// file; files sitting directly at the root get an empty variable. Paths
    /// in the result include the root prefix. No ordering is guaranteed.
    /// Symlinks to files are listed; symlinked directories are not followed.
    ///
    /// # Errors
    /// Returns an error if a directory under the root cannot be read
    pub async fn list_all(&self) -> Result<Vec<FileEntry>> {
        let root = Arc::clone(&self.root);
        let entries = task::spawn_blocking(move || walk_root(&root))
            .await
            .context("Listing task panicked")??;

        tracing::debug!(
            "Listed {} files under {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    /// Read the first file of the given kind under `<root>/<variable>/`
    ///
    /// Candidates are sorted lexicographically before taking the first, so
    /// resolution is deterministic when a directory holds several files of
    /// the same kind.
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - A matching file was found and read in full
    /// * `Ok(None)` - The variable directory is absent or holds no match
    /// * `Err(_)` - A matched file could not be read
    ///
    /// # Errors
    /// Returns an error if the directory scan fails for a reason other than
    /// the directory being absent, or if the matched file cannot be read
    /// (deleted or made unreadable between match and read)
    pub async fn resolve(&self, variable: &str, kind: FileKind) -> Result<Option<Vec<u8>>> {
        let dir = self.root.join(variable);

        let candidate = {
            let dir = dir.clone();
            task::spawn_blocking(move || first_match(&dir, kind))
                .await
                .context("Resolve task panicked")??
        };

        let Some(path) = candidate else {
            tracing::debug!(
                "No .{} file for variable '{}' in {}",
                kind.extension(),
                variable,
                dir.display()
            );
            return Ok(None);
        };

        let data = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        tracing::debug!(
            "Resolved variable '{}' to {} ({} bytes)",
            variable,
            path.display(),
            data.len()
        );
        Ok(Some(data))
    }
}

fn walk_root(root: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    // A missing root lists as empty rather than erroring
    if root.is_dir() {
        walk_dir(root, root, &mut entries)?;
    }
    Ok(entries)
}

fn walk_dir(root: &Path, dir: &Path, out: &mut Vec<FileEntry>) -> Result<()> {
    let reader = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in reader {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        let path = entry.path();

        if file_type.is_dir() {
            walk_dir(root, &path, out)?;
        } else if path.is_file() {
            // is_file follows symlinks, so a link to a file is listed like
            // the file itself; links to directories are not traversed
            let relative = path
                .strip_prefix(root)
                .context("Walked file is not under the static root")?;
            // First path segment under the root; empty for top-level files
            let variable = relative
                .parent()
                .and_then(|parent| parent.components().next())
                .map(|segment| segment.as_os_str().to_string_lossy().into_owned())
                .unwrap_or_default();

            out.push(FileEntry {
                variable,
                filepath: path.to_string_lossy().into_owned(),
            });
        }
    }

    Ok(())
}

fn first_match(dir: &Path, kind: FileKind) -> Result<Option<PathBuf>> {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        // Absent (or not a directory at all) collapses into not-found
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read directory {}", dir.display()));
        }
    };

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in reader {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        // is_file follows symlinks, matching the listing behavior
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(kind.extension())
        {
            matches.push(path);
        }
    }

    // Directory enumeration order is platform-dependent; sort for a
    // deterministic first match
    matches.sort();
    Ok(matches.into_iter().next())
}
