//! Implementation of `cmakegen generate`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{BuildModel, HostPlatform};
use crate::generator::{generate, Descriptor};
use crate::sources::SourceFinder;
use crate::util::config::DEFAULT_DESCRIPTOR_NAME;
use crate::util::fs::{is_up_to_date, normalize_lexically, write_if_changed};
use crate::util::WriteOutcome;

/// What to do with the generated descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerateMode {
    /// Write the descriptor if its contents changed
    #[default]
    Write,
    /// Only compare against the descriptor on disk
    Check,
    /// Generate without touching the filesystem
    DryRun,
}

/// Outcome for the descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorStatus {
    /// The descriptor was written
    Written,
    /// The descriptor on disk already matches
    Unchanged,
    /// The descriptor on disk is missing or differs (check mode)
    Stale,
    /// Nothing was compared or written (dry run)
    Skipped,
}

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Path to the build model file
    pub model_path: PathBuf,

    /// Host platform override (CLI > model > detected host)
    pub host: Option<HostPlatform>,

    /// Output directory override (default: the model's output dir)
    pub output_dir: Option<PathBuf>,

    /// Descriptor file name
    pub file_name: String,

    /// What to do with the result
    pub mode: GenerateMode,
}

impl GenerateOptions {
    /// Options for writing `CMakeLists.txt` from a model file.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            model_path: model_path.into(),
            host: None,
            output_dir: None,
            file_name: DEFAULT_DESCRIPTOR_NAME.to_string(),
            mode: GenerateMode::Write,
        }
    }
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Full path of the descriptor file
    pub path: PathBuf,

    /// Host the descriptor was generated for
    pub host: HostPlatform,

    /// The generated descriptor
    pub descriptor: Descriptor,

    /// What happened to the descriptor file
    pub status: DescriptorStatus,
}

/// Load the build model, generate the descriptor and persist it.
///
/// An unsupported host aborts before anything is written.
pub fn generate_project_files(
    opts: &GenerateOptions,
    finder: &dyn SourceFinder,
) -> Result<GenerateResult> {
    let mut model = BuildModel::load(&opts.model_path)?;
    if let Some(dir) = &opts.output_dir {
        let dir = std::path::absolute(dir)
            .with_context(|| format!("failed to resolve {}", dir.display()))?;
        model.output_dir = normalize_lexically(&dir);
    }

    let host = match opts.host.or(model.host) {
        Some(host) => host,
        None => HostPlatform::current()?,
    };

    let ctx = model.context(host);
    let modules = model.discover_modules()?;

    tracing::debug!(
        "generating for {} with {} modules and {} projects (finder: {})",
        host,
        modules.len(),
        model.projects.len(),
        finder.name()
    );

    let descriptor = generate(&model.projects, &modules, &ctx, finder)
        .context("failed to generate project files")?;

    let path = model.output_dir.join(&opts.file_name);
    let status = match opts.mode {
        GenerateMode::Write => match write_if_changed(&path, &descriptor.text)? {
            WriteOutcome::Written => DescriptorStatus::Written,
            WriteOutcome::Unchanged => DescriptorStatus::Unchanged,
        },
        GenerateMode::Check => {
            if is_up_to_date(&path, &descriptor.text) {
                DescriptorStatus::Unchanged
            } else {
                DescriptorStatus::Stale
            }
        }
        GenerateMode::DryRun => DescriptorStatus::Skipped,
    };

    tracing::info!("{}: {:?}", path.display(), status);

    Ok(GenerateResult {
        path,
        host,
        descriptor,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::WalkSourceFinder;
    use crate::test_support::EngineFixture;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_descriptor() {
        let tmp = TempDir::new().unwrap();
        let model_path = EngineFixture::core().create_in(tmp.path());

        let result =
            generate_project_files(&GenerateOptions::new(&model_path), &WalkSourceFinder::new())
                .unwrap();

        assert_eq!(result.status, DescriptorStatus::Written);
        assert_eq!(result.host, HostPlatform::Linux);
        assert_eq!(result.path, tmp.path().join("CMakeLists.txt"));

        let text = std::fs::read_to_string(&result.path).unwrap();
        assert_eq!(text, result.descriptor.text);
        assert!(text.contains("\t\"${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Private/Core.cpp\"\n"));
        assert!(text.contains("\t\"${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Public/Core.h\"\n"));
        assert!(text.contains("\t\"${UE4_ROOT_PATH}/Engine/Source/Runtime/Core/Core.Build.cs\"\n"));
        assert!(text.contains("\t\"Engine/Source/Runtime/Core/Public\"\n"));
        assert!(text.contains("\t-DWITH_EDITORONLY_DATA=1\n\t-DFOO=1\n )"));
        assert!(!text.contains("ThirdParty"));
        assert!(text.contains("add_custom_target(UE4Editor-Linux-Shipping "));
    }

    #[test]
    fn test_generate_second_run_is_unchanged() {
        let tmp = TempDir::new().unwrap();
        let model_path = EngineFixture::core().create_in(tmp.path());
        let opts = GenerateOptions::new(&model_path);

        let first = generate_project_files(&opts, &WalkSourceFinder::new()).unwrap();
        let second = generate_project_files(&opts, &WalkSourceFinder::new()).unwrap();

        assert_eq!(first.status, DescriptorStatus::Written);
        assert_eq!(second.status, DescriptorStatus::Unchanged);
        assert_eq!(first.descriptor.text, second.descriptor.text);
    }

    #[test]
    fn test_check_mode_reports_stale_without_writing() {
        let tmp = TempDir::new().unwrap();
        let model_path = EngineFixture::core().create_in(tmp.path());
        let mut opts = GenerateOptions::new(&model_path);
        opts.mode = GenerateMode::Check;

        let result = generate_project_files(&opts, &WalkSourceFinder::new()).unwrap();
        assert_eq!(result.status, DescriptorStatus::Stale);
        assert!(!result.path.exists());
    }

    #[test]
    fn test_host_override_and_output_dir() {
        let tmp = TempDir::new().unwrap();
        let model_path = EngineFixture::core().create_in(tmp.path());
        let out = tmp.path().join("Intermediate");
        let mut opts = GenerateOptions::new(&model_path);
        opts.host = Some(HostPlatform::Win64);
        opts.output_dir = Some(out.clone());

        let result = generate_project_files(&opts, &WalkSourceFinder::new()).unwrap();
        assert_eq!(result.path, out.join("CMakeLists.txt"));
        assert!(result.path.exists());

        // No filtering on Windows.
        assert!(result.descriptor.text.contains("ThirdParty/zlib/zlib.h"));
        assert!(result.descriptor.text.contains("UE4Editor-Win64-Debug"));
    }

    #[test]
    fn test_output_dir_with_parent_components_is_normalized() {
        let tmp = TempDir::new().unwrap();
        let model_path = EngineFixture::core().create_in(tmp.path());

        let mut direct = GenerateOptions::new(&model_path);
        direct.mode = GenerateMode::DryRun;
        direct.output_dir = Some(tmp.path().join("out"));

        let mut dotted = direct.clone();
        dotted.output_dir = Some(tmp.path().join("Engine").join("..").join("out"));

        let a = generate_project_files(&direct, &WalkSourceFinder::new()).unwrap();
        let b = generate_project_files(&dotted, &WalkSourceFinder::new()).unwrap();

        assert_eq!(b.path, tmp.path().join("out").join("CMakeLists.txt"));
        assert_eq!(
            b.descriptor.sections.include_dirs.entries(),
            ["../Engine/Source/Runtime/Core/Public"]
        );
        assert_eq!(a.descriptor.text, b.descriptor.text);
    }

    #[test]
    fn test_missing_model_fails() {
        let tmp = TempDir::new().unwrap();
        let opts = GenerateOptions::new(tmp.path().join("BuildModel.toml"));
        let err = generate_project_files(&opts, &WalkSourceFinder::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read build model"));
    }
}
