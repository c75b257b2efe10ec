//! Build model file parsing.
//!
//! The build model is the already-resolved project model the generator
//! consumes: modules, generated project files with their intellisense
//! metadata, and the targets each project builds. It is read from a TOML
//! file, conventionally `BuildModel.toml`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::{Configuration, GameProject, GenerationContext, HostPlatform};
use crate::generator::GenerateError;
use crate::util::fs::{file_name_without_extensions, glob_files, normalize_lexically};

/// Default name of the build model file.
pub const MODEL_FILE_NAME: &str = "BuildModel.toml";

/// A buildable unit of source code, identified by its rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Module name (rules file name without extensions)
    pub name: String,

    /// Absolute path of the module rules file (e.g. `Core.Build.cs`)
    pub rules_file: PathBuf,
}

impl Module {
    /// Create a module from its rules file.
    pub fn from_rules_file(rules_file: impl Into<PathBuf>) -> Self {
        let rules_file = rules_file.into();
        Module {
            name: file_name_without_extensions(&rules_file),
            rules_file,
        }
    }

    /// The directory holding the module's sources.
    pub fn dir(&self) -> &Path {
        self.rules_file.parent().unwrap_or(Path::new(""))
    }
}

/// A named, independently buildable artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Display name
    pub name: String,

    /// Path of the defining target file, when it could be resolved
    pub file: Option<PathBuf>,

    /// Name of the project this target belongs to
    pub project: String,
}

impl Target {
    /// The identifier used in rule names: the defining file's name with
    /// every extension removed (`MyGame.Target.cs` -> `MyGame`).
    ///
    /// Returns `None` when the target has no defining file.
    pub fn rule_name(&self) -> Option<String> {
        self.file.as_deref().map(file_name_without_extensions)
    }
}

/// A generated project file and its intellisense metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// Project name
    pub name: String,

    /// Absolute path of the project file; include paths are relative to its directory
    pub file: PathBuf,

    /// Intellisense include search paths
    pub include_paths: Vec<String>,

    /// Intellisense preprocessor definitions, in declaration order
    pub definitions: Vec<String>,

    /// Targets built by this project
    pub targets: Vec<Target>,
}

impl ProjectFile {
    /// The directory containing the project file.
    pub fn dir(&self) -> &Path {
        self.file.parent().unwrap_or(Path::new(""))
    }
}

/// The resolved build model.
#[derive(Debug, Clone)]
pub struct BuildModel {
    /// Shared root containing the `Engine` directory
    pub root: PathBuf,

    /// Directory the descriptor is written to
    pub output_dir: PathBuf,

    /// Host platform override
    pub host: Option<HostPlatform>,

    /// Configurations valid on the host (None = all)
    pub configurations: Option<Vec<Configuration>>,

    /// External project, if any
    pub game: Option<GameProject>,

    /// Module rules files or glob patterns, relative to the root
    pub modules: Vec<String>,

    /// Generated project files
    pub projects: Vec<ProjectFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawModel {
    root: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    host: Option<String>,
    configurations: Option<Vec<String>>,
    #[serde(default)]
    modules: Vec<String>,
    game: Option<RawGame>,
    #[serde(default, rename = "project")]
    projects: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGame {
    file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawProject {
    name: String,
    file: PathBuf,
    #[serde(default)]
    include_paths: Vec<String>,
    #[serde(default)]
    definitions: Vec<String>,
    #[serde(default)]
    targets: Vec<RawTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTarget {
    name: String,
    file: Option<PathBuf>,
}

impl BuildModel {
    /// Load a build model from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build model: {}", path.display()))?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        let base_dir = if base_dir.as_os_str().is_empty() {
            std::env::current_dir().context("failed to get current directory")?
        } else {
            std::path::absolute(base_dir)
                .with_context(|| format!("failed to resolve {}", base_dir.display()))?
        };

        Self::parse(&contents, &base_dir)
            .with_context(|| format!("failed to parse build model: {}", path.display()))
    }

    /// Parse a build model, resolving the root against `base_dir`.
    ///
    /// Every other relative path resolves against the root.
    pub fn parse(contents: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawModel = toml::from_str(contents)?;

        let root = resolve(base_dir, raw.root.as_deref().unwrap_or(Path::new(".")));
        let output_dir = raw
            .output_dir
            .as_deref()
            .map(|dir| resolve(&root, dir))
            .unwrap_or_else(|| root.clone());

        let host = raw
            .host
            .as_deref()
            .map(str::parse::<HostPlatform>)
            .transpose()?;

        let configurations = raw
            .configurations
            .map(|names| {
                names
                    .iter()
                    .map(|name| name.parse::<Configuration>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let game = raw.game.map(|g| GameProject::new(resolve(&root, &g.file)));

        let mut projects = Vec::with_capacity(raw.projects.len());
        for project in raw.projects {
            if project.name.is_empty() {
                bail!(GenerateError::InvalidModel(
                    "project name must not be empty".to_string()
                ));
            }

            let targets = project
                .targets
                .into_iter()
                .map(|t| Target {
                    name: t.name,
                    file: t.file.map(|f| resolve(&root, &f)),
                    project: project.name.clone(),
                })
                .collect();

            projects.push(ProjectFile {
                file: resolve(&root, &project.file),
                name: project.name,
                include_paths: project.include_paths,
                definitions: project.definitions,
                targets,
            });
        }

        Ok(BuildModel {
            root,
            output_dir,
            host,
            configurations,
            game,
            modules: raw.modules,
            projects,
        })
    }

    /// Expand module entries into a sorted, deduplicated module list.
    pub fn discover_modules(&self) -> Result<Vec<Module>> {
        let mut files = Vec::new();
        for pattern in &self.modules {
            let matched = glob_files(&self.root, std::slice::from_ref(pattern))?;
            if matched.is_empty() {
                tracing::warn!("module pattern `{}` matched no files", pattern);
            }
            files.extend(matched.iter().map(|f| normalize_lexically(f)));
        }
        files.sort();
        files.dedup();

        Ok(files.into_iter().map(Module::from_rules_file).collect())
    }

    /// Build the generation context for this model.
    pub fn context(&self, host: HostPlatform) -> GenerationContext {
        let mut ctx = GenerationContext::new(&self.root, host).with_master_dir(&self.output_dir);

        if let Some(game) = &self.game {
            ctx = ctx.with_game_project(game.clone());
        }
        if let Some(configs) = &self.configurations {
            ctx = ctx.with_valid_configurations(configs.clone());
        }

        ctx
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize_lexically(&base.join(path))
}
