//! Library registry: the fixed table of third-party libraries a project can pull in
//!
//! Every piece of per-library text that ends up in a generated file (fetch declaration,
//! include line, example statement, link target, README line) comes from a
//! [`LibraryEntry`]. Nothing else in the crate knows about individual libraries.

pub mod selection;

use crate::error::ScaffoldError;
use colored::Colorize;
use std::collections::HashSet;

pub use selection::{resolve, resolve_keys, LibrarySelection};

/// A fetchable third-party library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Short identifier used on the command line and as the FetchContent name
    pub key: &'static str,

    /// Git repository the dependency is fetched from
    pub source_location: &'static str,

    /// Git tag to check out (opaque to cppinit)
    pub version_tag: &'static str,

    /// One-line description shown in listings and the README
    pub description: &'static str,

    /// Header path included by the starter source, without angle brackets
    pub include: &'static str,

    /// Statement placed in `main` to show the library in use
    pub example: Option<&'static str>,

    /// Imported CMake target linked into the executable
    pub link_target: Option<&'static str>,
}

impl LibraryEntry {
    /// `#include` line for the starter source file
    pub fn include_line(&self) -> String {
        format!("#include <{}>", self.include)
    }
}

/// Libraries shipped with cppinit
pub const BUILTIN_LIBRARIES: &[LibraryEntry] = &[
    LibraryEntry {
        key: "fmt",
        source_location: "https://github.com/fmtlib/fmt.git",
        version_tag: "10.2.1",
        description: "A modern formatting library",
        include: "fmt/core.h",
        example: Some(r#"fmt::print("fmt is ready: {}\n", 42);"#),
        link_target: Some("fmt::fmt"),
    },
    LibraryEntry {
        key: "spdlog",
        source_location: "https://github.com/gabime/spdlog.git",
        version_tag: "v1.13.0",
        description: "Fast C++ logging library",
        include: "spdlog/spdlog.h",
        example: Some(r#"spdlog::info("spdlog is ready");"#),
        link_target: Some("spdlog::spdlog"),
    },
    LibraryEntry {
        key: "json",
        source_location: "https://github.com/nlohmann/json.git",
        version_tag: "v3.11.3",
        description: "JSON for Modern C++",
        include: "nlohmann/json.hpp",
        example: Some(
            r#"std::cout << nlohmann::json{{"json", "ready"}}.dump() << std::endl;"#,
        ),
        link_target: Some("nlohmann_json::nlohmann_json"),
    },
    LibraryEntry {
        key: "eigen",
        source_location: "https://gitlab.com/libeigen/eigen.git",
        version_tag: "3.4.0",
        description: "C++ template library for linear algebra",
        include: "Eigen/Dense",
        example: None,
        link_target: Some("Eigen3::Eigen"),
    },
    LibraryEntry {
        key: "cli11",
        source_location: "https://github.com/CLIUtils/CLI11.git",
        version_tag: "v2.4.1",
        description: "Command line parser for C++11 and beyond",
        include: "CLI/CLI.hpp",
        example: None,
        link_target: Some("CLI11::CLI11"),
    },
    LibraryEntry {
        key: "magic_enum",
        source_location: "https://github.com/Neargye/magic_enum.git",
        version_tag: "v0.9.5",
        description: "Static reflection for enums",
        include: "magic_enum.hpp",
        example: None,
        link_target: Some("magic_enum::magic_enum"),
    },
];

/// Read-only lookup table of libraries, keyed by [`LibraryEntry::key`]
#[derive(Debug, Clone)]
pub struct LibraryRegistry {
    entries: Vec<LibraryEntry>,
}

impl LibraryRegistry {
    /// Registry holding [`BUILTIN_LIBRARIES`]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_LIBRARIES.to_vec(),
        }
    }

    /// Build a registry from an explicit table, rejecting duplicate keys
    pub fn from_entries(entries: Vec<LibraryEntry>) -> Result<Self, ScaffoldError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key) {
                return Err(ScaffoldError::DuplicateLibrary(entry.key));
            }
        }
        Ok(Self { entries })
    }

    /// Find a library by key
    pub fn lookup(&self, key: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// All libraries, in declaration order
    pub fn list_all(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// All libraries sorted by key, for display
    pub fn sorted(&self) -> Vec<&LibraryEntry> {
        let mut entries: Vec<&LibraryEntry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.key);
        entries
    }

    /// Resolve a comma- or whitespace-separated list of keys against this registry
    pub fn resolve(&self, raw: &str) -> LibrarySelection<'_> {
        selection::resolve(raw, self)
    }
}

impl Default for LibraryRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Print the registry contents for `--list-libs`
pub fn print_libraries(registry: &LibraryRegistry) {
    let entries = registry.sorted();
    let key_width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    let tag_width = entries.iter().map(|e| e.version_tag.len()).max().unwrap_or(0);

    println!("{}", "Available libraries:".cyan().bold());
    println!();
    for entry in entries {
        println!(
            "  {}  {}  {}",
            format!("{:<key_width$}", entry.key).green(),
            format!("{:<tag_width$}", entry.version_tag).dimmed(),
            entry.description
        );
    }
    println!();
    println!(
        "Use {} to include libraries.",
        "--with-libs=<key>,<key>".yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_are_unique() {
        let registry = LibraryRegistry::from_entries(BUILTIN_LIBRARIES.to_vec());
        assert!(registry.is_ok());
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let registry = LibraryRegistry::builtin();
        let fmt = registry.lookup("fmt").unwrap();
        assert_eq!(fmt.source_location, "https://github.com/fmtlib/fmt.git");
        assert!(registry.lookup("bogus").is_none());
    }

    #[test]
    fn test_json_links_against_nlohmann_target() {
        let registry = LibraryRegistry::builtin();
        let json = registry.lookup("json").unwrap();
        assert_eq!(json.link_target, Some("nlohmann_json::nlohmann_json"));
        assert_eq!(json.include_line(), "#include <nlohmann/json.hpp>");
    }

    #[test]
    fn test_eigen_has_no_example() {
        let registry = LibraryRegistry::builtin();
        assert!(registry.lookup("eigen").unwrap().example.is_none());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let entry = BUILTIN_LIBRARIES[0].clone();
        let err = LibraryRegistry::from_entries(vec![entry.clone(), entry]).unwrap_err();
        assert!(matches!(err, ScaffoldError::DuplicateLibrary("fmt")));
    }

    #[test]
    fn test_sorted_orders_by_key() {
        let registry = LibraryRegistry::builtin();
        let keys: Vec<&str> = registry.sorted().iter().map(|e| e.key).collect();
        let mut expected = keys.clone();
        expected.sort();
        assert_eq!(keys, expected);
        assert_eq!(keys.len(), registry.list_all().len());
    }
}
