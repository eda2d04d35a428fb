//! Library selection: turning raw key lists into an ordered view over the registry
//!
//! Unknown keys are dropped without an error. A typo'd key therefore produces a project
//! without that library rather than a failure; callers that want stricter behavior can
//! compare [`LibrarySelection::len`] against the number of tokens they passed in.

use super::{LibraryEntry, LibraryRegistry};

/// Ordered, duplicate-free set of registry entries
///
/// Order is the order keys were first given in, and decides the order of fetch blocks,
/// include lines, example statements and link targets in the generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySelection<'r> {
    entries: Vec<&'r LibraryEntry>,
}

impl<'r> LibrarySelection<'r> {
    /// Selection with no libraries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'r LibraryEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.key).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: &'r LibraryEntry) {
        if !self.contains(entry.key) {
            self.entries.push(entry);
        }
    }
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Resolve a comma- or whitespace-separated key list
pub fn resolve<'r>(raw: &str, registry: &'r LibraryRegistry) -> LibrarySelection<'r> {
    resolve_keys(raw.split(is_delimiter), registry)
}

/// Resolve already-split keys, e.g. the output of an interactive multiselect
pub fn resolve_keys<'r, I, S>(keys: I, registry: &'r LibraryRegistry) -> LibrarySelection<'r>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selection = LibrarySelection::empty();

    for key in keys {
        let key = key.as_ref().trim();
        if key.is_empty() {
            continue;
        }
        match registry.lookup(key) {
            Some(entry) => selection.push(entry),
            None => tracing::debug!(key, "ignoring unknown library key"),
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys_dropped_and_order_kept() {
        let registry = LibraryRegistry::builtin();
        let selection = resolve("fmt,bogus,spdlog", &registry);
        assert_eq!(selection.keys(), vec!["fmt", "spdlog"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_position() {
        let registry = LibraryRegistry::builtin();
        let selection = resolve("json,fmt,json", &registry);
        assert_eq!(selection.keys(), vec!["json", "fmt"]);
    }

    #[test]
    fn test_empty_input_is_empty_selection() {
        let registry = LibraryRegistry::builtin();
        assert!(resolve("", &registry).is_empty());
        assert!(resolve(" , ,", &registry).is_empty());
    }

    #[test]
    fn test_whitespace_and_mixed_delimiters() {
        let registry = LibraryRegistry::builtin();
        let selection = resolve(" eigen  cli11,\tfmt ", &registry);
        assert_eq!(selection.keys(), vec!["eigen", "cli11", "fmt"]);
    }

    #[test]
    fn test_resolve_keys_from_prompt_output() {
        let registry = LibraryRegistry::builtin();
        let picked = vec!["spdlog".to_string(), "nope".to_string()];
        let selection = resolve_keys(picked, &registry);
        assert_eq!(selection.keys(), vec!["spdlog"]);
        assert!(selection.contains("spdlog"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_selection_borrows_registry_entries() {
        let registry = LibraryRegistry::builtin();
        let selection = registry.resolve("fmt");
        let entry = selection.iter().next().unwrap();
        assert_eq!(entry.version_tag, registry.lookup("fmt").unwrap().version_tag);
    }
}
