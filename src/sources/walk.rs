//! Walk source - enumerates module files from the local filesystem.

use std::path::PathBuf;

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

use crate::core::Module;
use crate::generator::GenerateError;
use crate::sources::SourceFinder;

/// Directories never searched for module sources.
const SKIPPED_DIRS: &[&str] = &["Intermediate", "Binaries"];

/// A source finder that walks the module's directory on disk.
#[derive(Debug, Clone, Default)]
pub struct WalkSourceFinder;

impl WalkSourceFinder {
    /// Create a new walk source finder.
    pub fn new() -> Self {
        WalkSourceFinder
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| *dir == name)
}

impl SourceFinder for WalkSourceFinder {
    fn name(&self) -> &str {
        "walk"
    }

    fn find_module_source_files(&self, module: &Module) -> Result<Vec<PathBuf>> {
        let dir = module.dir();
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_skipped(e));

        for entry in walker {
            let entry = entry.map_err(|source| GenerateError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(
            "found {} files for module `{}` in {}",
            files.len(),
            module.name,
            dir.display()
        );

        Ok(files)
    }
}
