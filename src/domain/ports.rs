use crate::utils::error::Result;
use std::path::PathBuf;

/// Supplies the directory that relative inputs are resolved against.
pub trait WorkingDirectory {
    fn current_dir(&self) -> Result<PathBuf>;
}

/// A single path computation, e.g. "absolute form of X".
///
/// Implementations only call `wd.current_dir()` when an input is relative,
/// so fully absolute invocations work even if the cwd has been removed.
pub trait PathOperation {
    fn name(&self) -> &'static str;
    fn compute(&self, wd: &dyn WorkingDirectory) -> Result<PathBuf>;
}
