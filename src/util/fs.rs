//! Filesystem utilities.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;

/// Result of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was missing or differed and has been written.
    Written,
    /// The file already had the requested contents.
    Unchanged,
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Check whether a file already holds exactly `contents`.
pub fn is_up_to_date(path: &Path, contents: &str) -> bool {
    fs::read(path)
        .map(|existing| existing == contents.as_bytes())
        .unwrap_or(false)
}

/// Write a string to a file only if its contents differ.
///
/// Parent directories are created as needed.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    if is_up_to_date(path, contents) {
        return Ok(WriteOutcome::Unchanged);
    }

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    Ok(WriteOutcome::Written)
}

/// Find files matching glob patterns relative to a base directory.
pub fn glob_files(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for pattern in patterns {
        // Make pattern absolute by joining with base
        let full_pattern = base.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        for entry in glob(&pattern_str)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        results.push(path);
                    }
                }
                Err(e) => {
                    tracing::warn!("glob error: {}", e);
                }
            }
        }
    }

    results.sort();
    results.dedup();
    Ok(results)
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// Leading `..` components of a relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Get the relative path from `base` to `path`.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// Render a path with `/` separators.
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        s.replace('\\', "/")
    } else {
        s.into_owned()
    }
}

/// A file name with every extension removed (`Core.Build.cs` -> `Core`).
pub fn file_name_without_extensions(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.find('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_glob_files() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Core.Build.cs"), "").unwrap();
        fs::write(src.join("Engine.Build.cs"), "").unwrap();
        fs::write(src.join("readme.txt"), "readme").unwrap();

        let files = glob_files(tmp.path(), &["src/**/*.Build.cs".to_string()]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_write_if_changed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join("CMakeLists.txt");

        assert_eq!(write_if_changed(&path, "a").unwrap(), WriteOutcome::Written);
        assert_eq!(write_if_changed(&path, "a").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(write_if_changed(&path, "b").unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "b");
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/work/UE4/Engine/Intermediate/../../Source/./Core")),
            PathBuf::from("/work/UE4/Source/Core")
        );
        assert_eq!(
            normalize_lexically(Path::new("../a/../../b")),
            PathBuf::from("../../b")
        );
        assert_eq!(normalize_lexically(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/work/UE4/Engine"), Path::new("/work/MyGame/Source/A.cpp")),
            PathBuf::from("../../MyGame/Source/A.cpp")
        );
    }

    #[test]
    fn test_file_name_without_extensions() {
        assert_eq!(file_name_without_extensions(Path::new("/a/Core.Build.cs")), "Core");
        assert_eq!(file_name_without_extensions(Path::new("MyGame.Target.cs")), "MyGame");
        assert_eq!(file_name_without_extensions(Path::new("Makefile")), "Makefile");
    }
}
