use crate::domain::ports::{PathOperation, WorkingDirectory};
use crate::utils::error::Result;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Lexically resolves `path` against the working directory.
///
/// `.` and `..` segments are folded, redundant and trailing separators are
/// dropped, and symlinks are left alone. `..` at the root stays at the root.
/// An empty path means the working directory itself.
pub fn absolutize(path: &Path, wd: &dyn WorkingDirectory) -> Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };

    let resolved = if path.is_absolute() {
        // the base is ignored for absolute input, so don't touch the cwd
        path.absolutize_from(path)?.into_owned()
    } else {
        let cwd = wd.current_dir()?;
        path.absolutize_from(cwd.as_path())?.into_owned()
    };

    Ok(resolved.components().collect())
}

#[derive(Debug, Clone)]
pub struct AbsolutePath {
    pub path: PathBuf,
}

impl AbsolutePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PathOperation for AbsolutePath {
    fn name(&self) -> &'static str {
        "abspath"
    }

    fn compute(&self, wd: &dyn WorkingDirectory) -> Result<PathBuf> {
        absolutize(&self.path, wd)
    }
}
