//! Path rewriting for emitted entries.
//!
//! Emitted file paths never carry a machine-absolute prefix; they are
//! expressed against the `UE4_ROOT_PATH` or `GAME_ROOT_PATH` variables so
//! the descriptor stays portable.

use std::path::Path;

use crate::core::GenerationContext;
use crate::sources::DiscoveredFile;
use crate::util::fs::{normalize_lexically, relative_path, to_slash};

/// Variable holding the shared root.
pub const ROOT_VAR: &str = "${UE4_ROOT_PATH}";

/// Variable holding the external project directory.
pub const GAME_ROOT_VAR: &str = "${GAME_ROOT_PATH}";

/// Rewrites discovered files into descriptor path expressions.
#[derive(Debug, Clone, Copy)]
pub struct PathRewriter<'a> {
    ctx: &'a GenerationContext,
}

impl<'a> PathRewriter<'a> {
    pub fn new(ctx: &'a GenerationContext) -> Self {
        PathRewriter { ctx }
    }

    /// Produce the path expression to emit for a discovered file.
    pub fn rewrite(&self, file: &DiscoveredFile) -> String {
        if file.is_under_root() {
            return format!("{}/Engine/{}", ROOT_VAR, file.relative);
        }

        match self.ctx.game() {
            Some(game) => format!(
                "{}/{}",
                GAME_ROOT_VAR,
                to_slash(&relative_path(game.rewrite_base(), &file.path))
            ),
            // Assumes the file sits exactly one level above the engine
            // directory (`../<rest>`). Deeper or absolute paths come out
            // mangled; a real "inside root" check would change the output.
            None => file.relative.get(3..).unwrap_or_default().to_string(),
        }
    }
}

/// Normalize an intellisense include path declared by a project file.
///
/// Absolute paths outside the descriptor directory are kept verbatim.
/// Everything else is resolved against `project_dir` and made relative to
/// the descriptor directory, without a trailing `/`.
pub fn include_directory(include: &str, project_dir: &Path, master_dir: &Path) -> String {
    let include_path = Path::new(include);
    if include_path.is_absolute() && !include_path.starts_with(master_dir) {
        return include.to_string();
    }

    let full = normalize_lexically(&project_dir.join(include_path));
    let relative = to_slash(&relative_path(master_dir, &full));
    relative.trim_end_matches('/').to_string()
}
