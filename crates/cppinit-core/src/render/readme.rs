//! `README.md` and `.gitignore`

use crate::project::ProjectDescriptor;
use std::fmt::Write as _;

const PREREQUISITES: &[&str] = &[
    "A C++17 compiler (GCC 9+, Clang 10+ or MSVC 2019+)",
    "CMake 3.20 or newer",
    "Git (dependencies are fetched at configure time)",
];

const IGNORE_PATTERNS: &[&str] = &[
    "# Build output",
    "build/",
    "cmake-build-*/",
    "compile_commands.json",
    "",
    "# Editor files",
    ".vscode/",
    ".idea/",
    "*.swp",
    "*~",
    ".DS_Store",
];

pub fn render_readme(project: &ProjectDescriptor<'_>) -> String {
    let name = project.name();
    let mut out = String::new();

    let _ = writeln!(out, "# {name}");
    out.push('\n');
    let _ = writeln!(out, "A C++17 project generated by cppinit.");
    out.push('\n');

    out.push_str("## Prerequisites\n\n");
    for prerequisite in PREREQUISITES {
        let _ = writeln!(out, "- {prerequisite}");
    }
    out.push('\n');

    if !project.selection().is_empty() {
        out.push_str("## Included libraries\n\n");
        for entry in project.selection().iter() {
            let _ = writeln!(
                out,
                "- **{}** ({}): {}",
                entry.key, entry.version_tag, entry.description
            );
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "## Building\n\n\
         ```sh\n\
         cmake -S . -B build\n\
         cmake --build build\n\
         ./build/bin/{name}\n\
         ```\n\
         \n\
         ## Testing\n\n\
         ```sh\n\
         ctest --test-dir build --output-on-failure\n\
         ```\n"
    );

    out
}

pub fn render_gitignore() -> String {
    let mut out = IGNORE_PATTERNS.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{LibraryRegistry, LibrarySelection};
    use std::path::Path;

    #[test]
    fn test_readme_without_libraries_omits_section() {
        let project =
            ProjectDescriptor::new("demo", Path::new("."), LibrarySelection::empty()).unwrap();
        let readme = render_readme(&project);

        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("## Prerequisites"));
        assert!(readme.contains("CMake 3.20 or newer"));
        assert!(!readme.contains("Included libraries"));
        assert!(readme.contains("cmake --build build"));
        assert!(readme.contains("ctest --test-dir build"));
    }

    #[test]
    fn test_readme_lists_selected_libraries_from_registry() {
        let registry = LibraryRegistry::builtin();
        let project =
            ProjectDescriptor::new("demo", Path::new("."), registry.resolve("fmt,eigen")).unwrap();
        let readme = render_readme(&project);

        assert!(readme.contains("## Included libraries"));
        assert!(readme.contains("- **fmt** (10.2.1): A modern formatting library"));
        assert!(readme.contains("- **eigen** (3.4.0): C++ template library for linear algebra"));
        assert!(readme.find("**fmt**").unwrap() < readme.find("**eigen**").unwrap());
    }

    #[test]
    fn test_gitignore_ignores_build_dir() {
        let ignore = render_gitignore();
        assert!(ignore.lines().any(|l| l == "build/"));
        assert!(ignore.ends_with('\n'));
    }
}
