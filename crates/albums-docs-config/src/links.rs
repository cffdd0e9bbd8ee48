//! Link checking against a Markdown source directory.
//!
//! A target path maps to a document the same way the build tool maps it:
//!
//! - `/` -> `index.md`
//! - `/tutorial/step-1` -> `tutorial/step-1.md`, else `tutorial/step-1/index.md`
//!
//! Trailing slashes are ignored. Hidden segments (starting with `.`) never
//! resolve.

use std::path::{Path, PathBuf};

use crate::site::SiteConfig;

/// Link whose target has no matching document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// Where the link was declared (e.g., "navigation", "sidebar \"Tutorial\"").
    pub location: String,
    pub label: String,
    pub target_path: String,
}

impl std::fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: \"{}\" -> {}",
            self.location, self.label, self.target_path
        )
    }
}

/// Link checking error.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Source directory does not exist.
    #[error("Source directory not found: {}", .0.display())]
    SourceDirMissing(PathBuf),
}

/// Resolve a target path to an existing Markdown file under `source_dir`.
///
/// Returns `None` if no document exists for the path.
pub fn resolve_target(source_dir: &Path, target_path: &str) -> Option<PathBuf> {
    let trimmed = target_path.trim_matches('/');
    if trimmed.is_empty() {
        let index = source_dir.join("index.md");
        return index.is_file().then_some(index);
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    if segments
        .iter()
        .any(|s| s.is_empty() || s.starts_with('.'))
    {
        return None;
    }

    let base: PathBuf = segments.iter().collect();
    let mut file = source_dir.join(&base);
    file.as_mut_os_string().push(".md");
    if file.is_file() {
        return Some(file);
    }

    let index = source_dir.join(base).join("index.md");
    index.is_file().then_some(index)
}

/// Check every link in `config` against `source_dir`.
///
/// Broken links are returned in render order.
///
/// # Errors
///
/// Returns `LinkError::SourceDirMissing` if `source_dir` is not a directory.
pub fn check_links(config: &SiteConfig, source_dir: &Path) -> Result<Vec<BrokenLink>, LinkError> {
    if !source_dir.is_dir() {
        return Err(LinkError::SourceDirMissing(source_dir.to_path_buf()));
    }

    let mut broken = Vec::new();
    let mut checked = 0usize;
    for (location, item) in config.all_links() {
        checked += 1;
        if let Some(path) = resolve_target(source_dir, &item.target_path) {
            tracing::debug!(target_path = %item.target_path, file = %path.display(), "Link resolved");
            continue;
        }
        tracing::warn!(
            %location,
            label = %item.label,
            target_path = %item.target_path,
            "Broken link"
        );
        broken.push(BrokenLink {
            location: location.to_string(),
            label: item.label.clone(),
            target_path: item.target_path.clone(),
        });
    }

    tracing::info!(checked, broken = broken.len(), "Link check finished");
    Ok(broken)
}
