use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathToolError {
    #[error("Cannot read current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: std::io::Error,
    },

    #[error("No path specified for {field}")]
    EmptyPath { field: String },

    #[error("Path {} is on a different volume than {}", .path.display(), .base.display())]
    DifferentRoots { path: PathBuf, base: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PathToolError {
    /// Usage errors exit with 2 from the argument parser; everything that
    /// reaches here failed after parsing.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, PathToolError>;
