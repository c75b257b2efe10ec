//! Test utilities and mocks for cmakegen unit tests.
//!
//! This module provides an in-memory [`SourceFinder`] so generation can be
//! tested without a real engine tree on disk, plus build-model fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use cmakegen::test_support::{engine_project, MockSourceFinder};
//!
//! #[test]
//! fn test_example() {
//!     let module = Module::from_rules_file("/work/UE4/Engine/Source/Core/Core.Build.cs");
//!     let mut finder = MockSourceFinder::new();
//!     finder.add_files(&module, ["/work/UE4/Engine/Source/Core/Core.cpp"]);
//!
//!     // Pass `&finder` to `generate`...
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::core::Module;
use crate::sources::SourceFinder;

// Re-export fixtures for convenience
pub use fixtures::*;

/// In-memory source finder keyed by module rules file.
#[derive(Debug, Clone, Default)]
pub struct MockSourceFinder {
    files: HashMap<PathBuf, Vec<PathBuf>>,
    fail: bool,
}

impl MockSourceFinder {
    /// Create a finder that knows no modules.
    pub fn new() -> Self {
        MockSourceFinder::default()
    }

    /// Register the files of a module, in the order they should be returned.
    pub fn add_files<I, P>(&mut self, module: &Module, files: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files
            .entry(module.rules_file.clone())
            .or_default()
            .extend(files.into_iter().map(Into::into));
    }

    /// Make every lookup fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl SourceFinder for MockSourceFinder {
    fn name(&self) -> &str {
        "mock"
    }

    fn find_module_source_files(&self, module: &Module) -> Result<Vec<PathBuf>> {
        if self.fail {
            bail!("mock lookup failed for `{}`", module.name);
        }
        Ok(self
            .files
            .get(&module.rules_file)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_finder_returns_registered_files() {
        let module = Module::from_rules_file("/work/UE4/Engine/Source/Core/Core.Build.cs");
        let mut finder = MockSourceFinder::new();
        finder.add_files(&module, ["/a.cpp", "/b.h"]);

        let files = finder.find_module_source_files(&module).unwrap();
        assert_eq!(files, [PathBuf::from("/a.cpp"), PathBuf::from("/b.h")]);

        let other = Module::from_rules_file("/work/UE4/Engine/Source/Other/Other.Build.cs");
        assert!(finder.find_module_source_files(&other).unwrap().is_empty());
    }
}
