//! cmakegen - CMakeLists.txt generator for engine build models
//!
//! This crate turns an already-resolved build model (modules, intellisense
//! metadata, targets and configurations) into a single CMake descriptor.
//! It never compiles anything; the descriptor only shells out to the
//! engine's own build command.

pub mod core;
pub mod generator;
pub mod ops;
pub mod sources;
pub mod util;

/// Test utilities and mocks for cmakegen unit tests.
///
/// Only compiled for tests. Provides an in-memory source finder and
/// builders for common build-model fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    BuildModel, Configuration, GameProject, GenerationContext, HostPlatform, Module, ProjectFile,
    Target,
};
pub use generator::{generate, Descriptor, GenerateError};
pub use sources::{DiscoveredFile, SourceFinder, WalkSourceFinder};
