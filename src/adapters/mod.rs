// Adapters layer: concrete implementations of the domain ports.

use crate::domain::ports::WorkingDirectory;
use crate::utils::error::{PathToolError, Result};
use std::path::PathBuf;

/// The process's real current directory, read on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(|source| PathToolError::CurrentDirUnavailable { source })
    }
}

#[derive(Debug, Clone)]
pub struct FixedWorkingDirectory {
    dir: PathBuf,
}

impl FixedWorkingDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WorkingDirectory for FixedWorkingDirectory {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.dir.clone())
    }
}
