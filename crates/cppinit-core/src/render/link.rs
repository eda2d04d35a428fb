//! Wiring selected libraries into the executable target

use super::build_config::ExecutableTarget;
use crate::registry::LibrarySelection;

/// Append each selected library's link target to the executable, in selection order
///
/// Libraries without a link target are skipped. Must run before the target is
/// serialized.
pub fn link_dependencies(target: &mut ExecutableTarget, selection: &LibrarySelection<'_>) {
    for entry in selection.iter() {
        let Some(link_target) = entry.link_target else {
            tracing::debug!(library = entry.key, "no link target, skipping");
            continue;
        };
        if !target.link_libraries.iter().any(|l| l == link_target) {
            target.link_libraries.push(link_target.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{LibraryEntry, LibraryRegistry};

    fn fixture_registry() -> LibraryRegistry {
        let base = LibraryEntry {
            key: "",
            source_location: "https://example.com/repo.git",
            version_tag: "v1",
            description: "fixture",
            include: "fixture.h",
            example: None,
            link_target: None,
        };
        LibraryRegistry::from_entries(vec![
            LibraryEntry {
                key: "alpha",
                link_target: Some("alpha::alpha"),
                ..base.clone()
            },
            LibraryEntry {
                key: "headers",
                ..base.clone()
            },
            LibraryEntry {
                key: "beta",
                link_target: Some("beta::beta"),
                ..base
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_link_in_selection_order() {
        let registry = fixture_registry();
        let mut target = ExecutableTarget::new("demo", ["main.cpp"]);
        link_dependencies(&mut target, &registry.resolve("beta alpha"));
        assert_eq!(target.link_libraries, vec!["beta::beta", "alpha::alpha"]);
    }

    #[test]
    fn test_entries_without_link_target_skipped() {
        let registry = fixture_registry();
        let mut target = ExecutableTarget::new("demo", ["main.cpp"]);
        link_dependencies(&mut target, &registry.resolve("alpha,headers,beta"));
        assert_eq!(target.link_libraries, vec!["alpha::alpha", "beta::beta"]);
    }

    #[test]
    fn test_empty_selection_links_nothing() {
        let mut target = ExecutableTarget::new("demo", ["main.cpp"]);
        link_dependencies(&mut target, &LibrarySelection::empty());
        assert!(target.link_libraries.is_empty());
    }
}
