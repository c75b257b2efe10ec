//! Shared utilities

pub mod config;
pub mod fs;

pub use config::Config;
pub use fs::WriteOutcome;
