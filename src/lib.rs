pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{AbspathConfig, RelpathConfig};

pub use adapters::{FixedWorkingDirectory, ProcessWorkingDirectory};
pub use core::{
    absolute::{absolutize, AbsolutePath},
    engine::PathEngine,
    relative::{relative_to, RelativePath},
};
pub use utils::error::{PathToolError, Result};
