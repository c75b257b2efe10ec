//! CMake descriptor generation.
//!
//! The pipeline is a pure transform over the build model:
//! - intellisense include paths and definitions feed their sections,
//! - every module file passes the host's filter, is rewritten against the
//!   symbolic roots and lands in its category's section,
//! - every target contributes its rules,
//! - the writer concatenates everything in a fixed order.

pub mod definitions;
pub mod errors;
pub mod paths;
pub mod rules;
pub mod sections;
pub mod writer;

use anyhow::Result;
use serde::Serialize;

use crate::core::{GenerationContext, Module, ProjectFile};
use crate::sources::{DiscoveredFile, SourceFinder};

pub use definitions::DefinitionSet;
pub use errors::GenerateError;
pub use paths::{include_directory, PathRewriter};
pub use rules::{emit_rules, TargetRule};
pub use sections::{FileCategory, Section, SectionAccumulator, SectionKind};

/// A generated descriptor: its structured parts and final text.
#[derive(Debug, Clone, Serialize)]
pub struct Descriptor {
    /// Accumulated sections
    pub sections: SectionAccumulator,

    /// Emitted target rules, in target-then-configuration order
    pub rules: Vec<TargetRule>,

    /// Final descriptor text
    #[serde(skip)]
    pub text: String,
}

/// Collect intellisense include directories and definitions from every project.
pub fn collect_intellisense(
    projects: &[ProjectFile],
    ctx: &GenerationContext,
    sections: &mut SectionAccumulator,
) {
    let mut definitions = DefinitionSet::new();

    for project in projects {
        for include in &project.include_paths {
            let dir = include_directory(include, project.dir(), ctx.master_dir());
            sections.include_dirs.push(dir);
        }
        definitions.extend(project.definitions.iter().map(String::as_str));
    }

    for definition in definitions.iter() {
        sections.definitions.push(definition);
    }
}

/// Filter, rewrite and categorize every file of every module.
pub fn collect_module_files(
    modules: &[Module],
    ctx: &GenerationContext,
    finder: &dyn SourceFinder,
    sections: &mut SectionAccumulator,
) -> Result<()> {
    let engine_dir = ctx.engine_dir();
    let rewriter = PathRewriter::new(ctx);
    let host = ctx.host();

    for module in modules {
        for path in finder.find_module_source_files(module)? {
            let file = DiscoveredFile::new(path, &engine_dir);
            if !host.includes(&file.relative) {
                continue;
            }
            let Some(category) = FileCategory::from_path(&file.relative) else {
                continue;
            };
            sections.add_file(category, rewriter.rewrite(&file));
        }
    }

    Ok(())
}

/// Run one generation pass.
///
/// Deterministic: identical inputs and finder output produce identical text.
pub fn generate(
    projects: &[ProjectFile],
    modules: &[Module],
    ctx: &GenerationContext,
    finder: &dyn SourceFinder,
) -> Result<Descriptor> {
    let mut sections = SectionAccumulator::new();

    collect_intellisense(projects, ctx, &mut sections);
    collect_module_files(modules, ctx, finder, &mut sections)?;

    let rules = emit_rules(projects, ctx);
    let text = writer::assemble(ctx, &sections, &rules);

    tracing::debug!(
        "generated {} sources, {} headers, {} configs, {} rules for {}",
        sections.sources.entries().len(),
        sections.headers.entries().len(),
        sections.configs.entries().len(),
        rules.len(),
        ctx.host()
    );

    Ok(Descriptor {
        sections,
        rules,
        text,
    })
}
