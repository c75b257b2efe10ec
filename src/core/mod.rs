//! Core data structures for cmakegen.
//!
//! This module contains the build-model types the generator consumes:
//! - Host platforms and their file filters
//! - Build configurations
//! - Modules, project files and targets
//! - The per-run generation context

pub mod configuration;
pub mod context;
pub mod model;
pub mod platform;

pub use configuration::Configuration;
pub use context::{GameProject, GenerationContext};
pub use model::{BuildModel, Module, ProjectFile, Target, MODEL_FILE_NAME};
pub use platform::HostPlatform;
