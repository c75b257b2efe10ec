//! Preprocessor definition normalization.
//!
//! Definitions are collected across every project's intellisense metadata.
//! `NAME=0` and `NAME=1` are treated as the same entry: whichever is seen
//! first wins, so the descriptor never carries contradictory flags.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Prefixes of per-file or per-build definitions that are never emitted.
pub const RESERVED_PREFIXES: &[&str] = &["UE_ENGINE_DIRECTORY", "ORIGINAL_FILE_NAME"];

/// Definitions whose observed value is tooling-specific and is always flipped.
pub const FORCED_FLIPS: &[&str] = &["WITH_EDITORONLY_DATA=0", "WITH_DATABASE_SUPPORT=1"];

static TOGGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=([01])$").expect("toggle pattern is valid"));

/// Split a `NAME=0` / `NAME=1` definition into its name and value.
pub fn parse_toggle(definition: &str) -> Option<(&str, bool)> {
    let caps = TOGGLE.captures(definition)?;
    let name = caps.get(1)?.as_str();
    Some((name, &caps[2] == "1"))
}

/// The opposite value of a toggle definition, if it is one.
pub fn toggled(definition: &str) -> Option<String> {
    parse_toggle(definition).map(|(name, on)| format!("{}={}", name, if on { 0 } else { 1 }))
}

/// Ordered set of definitions with toggle-equivalence dedup.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    /// Accepted definitions in first-seen order
    entries: Vec<String>,

    /// Toggle name -> chosen value
    toggles: HashMap<String, bool>,

    /// Non-toggle definitions already accepted
    literals: HashSet<String>,
}

impl DefinitionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        DefinitionSet::default()
    }

    /// Offer a raw definition. Returns true if it was added.
    pub fn insert(&mut self, raw: &str) -> bool {
        let definition = if FORCED_FLIPS.contains(&raw) {
            toggled(raw).unwrap_or_else(|| raw.to_string())
        } else {
            raw.to_string()
        };

        if RESERVED_PREFIXES
            .iter()
            .any(|prefix| definition.starts_with(prefix))
        {
            return false;
        }

        let added = match parse_toggle(&definition) {
            Some((name, on)) => {
                if self.toggles.contains_key(name) {
                    false
                } else {
                    self.toggles.insert(name.to_string(), on);
                    true
                }
            }
            None => self.literals.insert(definition.clone()),
        };

        if added {
            self.entries.push(definition);
        }
        added
    }

    /// Offer every definition of a sequence, in order.
    pub fn extend<'a>(&mut self, raw: impl IntoIterator<Item = &'a str>) {
        for definition in raw {
            self.insert(definition);
        }
    }

    /// Accepted definitions in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
