//! Test fixtures for common test scenarios.
//!
//! Builders for project files and on-disk engine trees used across the
//! generator and ops tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ProjectFile;

/// A project file for the engine with no metadata or targets.
pub fn engine_project() -> ProjectFile {
    ProjectFile {
        name: "UE4".to_string(),
        file: PathBuf::from("/work/UE4/Engine/Intermediate/ProjectFiles/UE4.vcxproj"),
        include_paths: Vec::new(),
        definitions: Vec::new(),
        targets: Vec::new(),
    }
}

/// Fixture for an engine tree on disk.
#[derive(Debug, Clone)]
pub struct EngineFixture {
    /// Files relative to the root, with their contents.
    pub files: Vec<(PathBuf, String)>,
    /// Build model file content.
    pub model: String,
}

impl EngineFixture {
    /// A root with a single `Core` module and one editor target.
    pub fn core() -> Self {
        let files = [
            "Engine/Source/Runtime/Core/Core.Build.cs",
            "Engine/Source/Runtime/Core/Private/Core.cpp",
            "Engine/Source/Runtime/Core/Public/Core.h",
            "Engine/Source/ThirdParty/zlib/zlib.Build.cs",
            "Engine/Source/ThirdParty/zlib/zlib.h",
            "Engine/Source/UE4Editor.Target.cs",
        ]
        .into_iter()
        .map(|p| (PathBuf::from(p), String::new()))
        .collect();

        let model = r#"host = "linux"
modules = ["Engine/Source/**/*.Build.cs"]

[[project]]
name = "UE4"
file = "Engine/Intermediate/ProjectFiles/UE4.vcxproj"
include-paths = ["../../Source/Runtime/Core/Public"]
definitions = ["WITH_EDITORONLY_DATA=0", "FOO=1", "FOO=0"]
targets = [{ name = "UE4Editor", file = "Engine/Source/UE4Editor.Target.cs" }]
"#
        .to_string();

        EngineFixture { files, model }
    }

    /// Write the fixture under `root` and return the model file path.
    pub fn create_in(&self, root: &Path) -> PathBuf {
        for (path, content) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, content).unwrap();
        }

        let model_path = root.join("BuildModel.toml");
        fs::write(&model_path, &self.model).unwrap();
        model_path
    }
}
