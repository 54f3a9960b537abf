use crate::core::absolute::AbsolutePath;
use crate::core::relative::RelativePath;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use std::path::PathBuf;

// Unlike clap's default `PathBuf` parser this lets an empty argument through.
fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

#[derive(Debug, Clone, Parser)]
#[command(name = "abspath", version)]
#[command(about = "Print the absolute, normalized form of a path")]
pub struct AbspathConfig {
    /// Path to resolve against the current directory
    #[arg(value_parser = path_parser())]
    pub dir1: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl AbspathConfig {
    pub fn operation(&self) -> AbsolutePath {
        AbsolutePath::new(self.dir1.clone())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "relpath", version)]
#[command(about = "Print the relative path from dir2 (or the current directory) to dir1")]
pub struct RelpathConfig {
    /// Path to express relatively
    #[arg(value_parser = path_parser())]
    pub dir1: PathBuf,

    /// Base directory, defaults to the current directory
    #[arg(value_parser = path_parser())]
    pub dir2: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl RelpathConfig {
    pub fn operation(&self) -> RelativePath {
        RelativePath::new(self.dir1.clone(), self.dir2.clone())
    }
}
