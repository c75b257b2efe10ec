//! Per-run generation context.
//!
//! Everything that would otherwise be ambient process state (host platform,
//! root paths, the external project) is carried here explicitly so the
//! generator stays a pure transform.

use std::path::{Path, PathBuf};

use crate::core::{Configuration, HostPlatform};

/// Name of the engine directory under the shared root.
pub const ENGINE_DIR_NAME: &str = "Engine";

/// An external (game) project outside the engine directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProject {
    /// Absolute path of the project descriptor file (e.g. `MyGame.uproject`).
    pub file: PathBuf,
}

impl GameProject {
    /// Create a game project from its descriptor file.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        GameProject { file: file.into() }
    }

    /// The project name: the descriptor's file stem.
    pub fn name(&self) -> String {
        self.file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The directory containing the project descriptor.
    pub fn dir(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new(""))
    }

    /// The directory external file paths are made relative to.
    pub fn rewrite_base(&self) -> &Path {
        let dir = self.dir();
        dir.parent().unwrap_or(dir)
    }

    /// Whether a target belongs to this project (`<name>` or `<name>Editor`).
    pub fn owns_target(&self, target_name: &str) -> bool {
        let name = self.name();
        !name.is_empty() && (target_name == name || target_name == format!("{}Editor", name))
    }
}

/// Inputs shared by every stage of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Shared root containing the engine directory.
    root_dir: PathBuf,

    /// Directory the descriptor is written to.
    master_dir: PathBuf,

    /// Optional external project.
    game: Option<GameProject>,

    /// Host platform being generated for.
    host: HostPlatform,

    /// Configurations the host considers valid.
    valid_configurations: Vec<Configuration>,
}

impl GenerationContext {
    /// Create a context rooted at `root_dir` for the given host.
    ///
    /// The descriptor directory defaults to the root and every configuration
    /// except `Unknown` is considered valid.
    pub fn new(root_dir: impl Into<PathBuf>, host: HostPlatform) -> Self {
        let root_dir = root_dir.into();
        GenerationContext {
            master_dir: root_dir.clone(),
            root_dir,
            game: None,
            host,
            valid_configurations: Configuration::defaults(),
        }
    }

    /// Set the directory the descriptor is written to.
    pub fn with_master_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.master_dir = dir.into();
        self
    }

    /// Configure an external project.
    pub fn with_game_project(mut self, game: GameProject) -> Self {
        self.game = Some(game);
        self
    }

    /// Restrict the configurations considered valid on the host.
    pub fn with_valid_configurations(mut self, configs: Vec<Configuration>) -> Self {
        self.valid_configurations = configs;
        self
    }

    /// Get the shared root.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get the engine directory; root-relative paths are relative to it.
    pub fn engine_dir(&self) -> PathBuf {
        self.root_dir.join(ENGINE_DIR_NAME)
    }

    /// Get the descriptor directory.
    pub fn master_dir(&self) -> &Path {
        &self.master_dir
    }

    /// Get the external project, if any.
    pub fn game(&self) -> Option<&GameProject> {
        self.game.as_ref()
    }

    /// Get the host platform.
    pub fn host(&self) -> HostPlatform {
        self.host
    }

    /// Check whether the host considers a configuration valid.
    pub fn is_valid_configuration(&self, config: Configuration) -> bool {
        self.valid_configurations.contains(&config)
    }
}
