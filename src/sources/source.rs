//! SourceFinder trait - common interface for module file enumeration.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::Module;
use crate::util::fs::{relative_path, to_slash};

/// Enumerates the candidate files of a module.
pub trait SourceFinder {
    /// Get the finder name for display.
    fn name(&self) -> &str;

    /// Return every file belonging to `module`, in a stable order.
    fn find_module_source_files(&self, module: &Module) -> Result<Vec<PathBuf>>;
}

/// A file found during discovery, with its path relative to the engine directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute file path
    pub path: PathBuf,

    /// Path relative to the engine directory, `/`-separated.
    /// Files outside the engine directory start with `..`.
    pub relative: String,
}

impl DiscoveredFile {
    /// Create a discovered file, computing its path relative to `engine_dir`.
    pub fn new(path: impl Into<PathBuf>, engine_dir: &Path) -> Self {
        let path = path.into();
        let relative = to_slash(&relative_path(engine_dir, &path));
        DiscoveredFile { path, relative }
    }

    /// Whether the file lies inside the engine directory.
    pub fn is_under_root(&self) -> bool {
        !self.relative.starts_with("..") && !Path::new(&self.relative).is_absolute()
    }
}
