use crate::core::absolute::absolutize;
use crate::domain::ports::{PathOperation, WorkingDirectory};
use crate::utils::error::{PathToolError, Result};
use std::path::{Component, Path, PathBuf};

/// Computes the path that leads from `base` (or the working directory) to
/// `path`. Both sides are absolutized first; identical paths yield `.`.
pub fn relative_to(
    path: &Path,
    base: Option<&Path>,
    wd: &dyn WorkingDirectory,
) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(PathToolError::EmptyPath {
            field: "dir1".to_string(),
        });
    }
    if base.is_some_and(|b| b.as_os_str().is_empty()) {
        return Err(PathToolError::EmptyPath {
            field: "dir2".to_string(),
        });
    }

    let target = absolutize(path, wd)?;
    let base = absolutize(base.unwrap_or(Path::new(".")), wd)?;

    if volume_of(&target) != volume_of(&base) {
        return Err(PathToolError::DifferentRoots { path: target, base });
    }

    let relative = pathdiff::diff_paths(without_volume(&target), without_volume(&base))
        .ok_or_else(|| PathToolError::DifferentRoots {
            path: target.clone(),
            base: base.clone(),
        })?;

    tracing::debug!(
        "{} relative to {} is {}",
        target.display(),
        base.display(),
        relative.display()
    );

    if relative.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(relative)
    }
}

/// Drive or UNC share, lowercased. Always `None` on Unix.
fn volume_of(path: &Path) -> Option<String> {
    match path.components().next() {
        Some(Component::Prefix(prefix)) => {
            Some(prefix.as_os_str().to_string_lossy().to_ascii_lowercase())
        }
        _ => None,
    }
}

// Prefixes that only differ in case would otherwise never match component-wise.
fn without_volume(path: &Path) -> &Path {
    let mut components = path.components();
    match components.next() {
        Some(Component::Prefix(_)) => components.as_path(),
        _ => path,
    }
}

#[derive(Debug, Clone)]
pub struct RelativePath {
    pub path: PathBuf,
    pub base: Option<PathBuf>,
}

impl RelativePath {
    pub fn new(path: impl Into<PathBuf>, base: Option<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base,
        }
    }
}

impl PathOperation for RelativePath {
    fn name(&self) -> &'static str {
        "relpath"
    }

    fn compute(&self, wd: &dyn WorkingDirectory) -> Result<PathBuf> {
        relative_to(&self.path, self.base.as_deref(), wd)
    }
}
