//! Categorized, deduplicated descriptor sections.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

/// Closing marker of every section.
const SECTION_END: &str = " )\n\n";

/// Category of a discovered file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Source,
    Header,
    Config,
}

impl FileCategory {
    /// Categorize a path; `None` means the file is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        if path.ends_with(".cpp") {
            Some(FileCategory::Source)
        } else if path.ends_with(".h") {
            Some(FileCategory::Header)
        } else if path.ends_with(".cs") {
            Some(FileCategory::Config)
        } else {
            None
        }
    }
}

/// The five descriptor sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    SourceFiles,
    HeaderFiles,
    ConfigFiles,
    IncludeDirectories,
    Definitions,
}

impl SectionKind {
    /// The opening line of the section block.
    pub fn opener(&self) -> &'static str {
        match self {
            SectionKind::SourceFiles => "set(SOURCE_FILES \n",
            SectionKind::HeaderFiles => "set(HEADER_FILES \n",
            SectionKind::ConfigFiles => "set(CONFIG_FILES \n",
            SectionKind::IncludeDirectories => "include_directories( \n",
            SectionKind::Definitions => "add_definitions( \n",
        }
    }

    /// Render one entry line.
    fn write_entry(&self, out: &mut String, entry: &str) {
        // Writing to a String cannot fail.
        let _ = match self {
            SectionKind::Definitions => writeln!(out, "\t-D{}", entry),
            _ => writeln!(out, "\t\"{}\"", entry),
        };
    }
}

impl From<FileCategory> for SectionKind {
    fn from(category: FileCategory) -> Self {
        match category {
            FileCategory::Source => SectionKind::SourceFiles,
            FileCategory::Header => SectionKind::HeaderFiles,
            FileCategory::Config => SectionKind::ConfigFiles,
        }
    }
}

/// An insertion-ordered, deduplicated list of entries.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    kind: SectionKind,
    entries: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Section {
            kind,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append an entry. No-op if already present.
    pub fn push(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.seen.contains(&entry) {
            return false;
        }
        self.seen.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render the section as a named block.
    pub fn render(&self, out: &mut String) {
        out.push_str(self.kind.opener());
        for entry in &self.entries {
            self.kind.write_entry(out, entry);
        }
        out.push_str(SECTION_END);
    }
}

/// Collects the five sections of a descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct SectionAccumulator {
    pub sources: Section,
    pub headers: Section,
    pub configs: Section,
    pub include_dirs: Section,
    pub definitions: Section,
}

impl Default for SectionAccumulator {
    fn default() -> Self {
        SectionAccumulator {
            sources: Section::new(SectionKind::SourceFiles),
            headers: Section::new(SectionKind::HeaderFiles),
            configs: Section::new(SectionKind::ConfigFiles),
            include_dirs: Section::new(SectionKind::IncludeDirectories),
            definitions: Section::new(SectionKind::Definitions),
        }
    }
}

impl SectionAccumulator {
    pub fn new() -> Self {
        SectionAccumulator::default()
    }

    /// Get a mutable section by kind.
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::SourceFiles => &mut self.sources,
            SectionKind::HeaderFiles => &mut self.headers,
            SectionKind::ConfigFiles => &mut self.configs,
            SectionKind::IncludeDirectories => &mut self.include_dirs,
            SectionKind::Definitions => &mut self.definitions,
        }
    }

    /// Add a rewritten file path to its category's section.
    pub fn add_file(&mut self, category: FileCategory, path: impl Into<String>) -> bool {
        self.section_mut(category.into()).push(path)
    }

    /// Render every section in descriptor order.
    pub fn render(&self, out: &mut String) {
        for section in [
            &self.sources,
            &self.headers,
            &self.configs,
            &self.include_dirs,
            &self.definitions,
        ] {
            section.render(out);
        }
    }
}
