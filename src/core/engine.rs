use crate::domain::ports::{PathOperation, WorkingDirectory};
use crate::utils::error::Result;
use crate::utils::output::write_path_line;
use std::io::Write;
use std::path::PathBuf;

pub struct PathEngine<W: WorkingDirectory> {
    working_dir: W,
}

impl<W: WorkingDirectory> PathEngine<W> {
    pub fn new(working_dir: W) -> Self {
        Self { working_dir }
    }

    pub fn run<O: PathOperation>(&self, operation: &O) -> Result<PathBuf> {
        tracing::debug!("Running {}", operation.name());
        let result = operation.compute(&self.working_dir)?;
        tracing::debug!("{} -> {}", operation.name(), result.display());
        Ok(result)
    }

    /// Runs `operation` and writes the result as one line to `out`.
    pub fn run_to<O: PathOperation, Out: Write>(&self, operation: &O, out: &mut Out) -> Result<()> {
        let result = self.run(operation)?;
        write_path_line(out, &result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::adapters::FixedWorkingDirectory;
    use crate::core::absolute::AbsolutePath;
    use crate::core::relative::RelativePath;

    #[test]
    fn test_engine_writes_absolute_path_line() {
        let engine = PathEngine::new(FixedWorkingDirectory::new("/home/user"));
        let mut out = Vec::new();
        engine.run_to(&AbsolutePath::new("."), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/home/user\n");
    }

    #[test]
    fn test_engine_writes_relative_path_line() {
        let engine = PathEngine::new(FixedWorkingDirectory::new("/"));
        let mut out = Vec::new();
        let op = RelativePath::new("/a/b/c", Some(PathBuf::from("/a/x/y")));
        engine.run_to(&op, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "../../b/c\n");
    }

    #[test]
    fn test_engine_writes_nothing_on_error() {
        let engine = PathEngine::new(FixedWorkingDirectory::new("/"));
        let mut out = Vec::new();
        let result = engine.run_to(&RelativePath::new("", None), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
