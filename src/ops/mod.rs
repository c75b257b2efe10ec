//! High-level operations.
//!
//! This module contains the implementation of cmakegen commands.

pub mod generate;

pub use generate::{generate_project_files, DescriptorStatus, GenerateMode, GenerateOptions, GenerateResult};
