//! Rendering of every generated file
//!
//! Each renderer is a pure function of the [`ProjectDescriptor`]. Library-specific text
//! comes only from the registry entries held by the descriptor's selection, so a library
//! added to the registry shows up consistently in all outputs.

pub mod build_config;
pub mod cmake;
pub mod dependencies;
pub mod link;
pub mod readme;
pub mod source;
pub mod toolchain;

use crate::error::ScaffoldError;
use crate::project::ProjectDescriptor;
use crate::scaffold::{IGNORE_FILE, SOURCE_FILE, TEST_FILE};
use std::path::{Path, PathBuf};
use tokio::fs;

pub use build_config::{render_build_config, BuildConfig, ExecutableTarget, RenderedBuildConfig};
pub use dependencies::render_dependency_module;
pub use link::link_dependencies;
pub use readme::{render_gitignore, render_readme};
pub use source::{render_source_file, render_test_file};
pub use toolchain::ToolchainFamily;

/// A file produced by generation, with its path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// The complete output of one generation run
#[derive(Debug, Clone, Default)]
pub struct GeneratedFileSet {
    files: Vec<GeneratedFile>,
}

impl GeneratedFileSet {
    pub fn push(&mut self, path: impl Into<PathBuf>, contents: String) {
        self.files.push(GeneratedFile {
            path: path.into(),
            contents,
        });
    }

    /// Contents of the file at `path` (relative to the project root)
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.contents.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.files.iter().map(|file| file.path.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file under `root`, creating parent directories as needed
    pub async fn write_to(&self, root: &Path) -> Result<(), ScaffoldError> {
        for file in &self.files {
            let target = root.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ScaffoldError::io(parent, e))?;
            }
            fs::write(&target, &file.contents)
                .await
                .map_err(|e| ScaffoldError::io(&target, e))?;
        }
        Ok(())
    }
}

/// Render all text files of a project
pub fn render_all(project: &ProjectDescriptor<'_>) -> GeneratedFileSet {
    let build = render_build_config(project);
    let mut files = GeneratedFileSet::default();

    files.push("CMakeLists.txt", build.root);
    files.push("src/CMakeLists.txt", build.src);
    files.push("tests/CMakeLists.txt", build.tests);
    files.push(
        format!("cmake/{}.cmake", build_config::DEPENDENCY_MODULE),
        render_dependency_module(project),
    );
    files.push(SOURCE_FILE, render_source_file(project));
    files.push(TEST_FILE, render_test_file(project));
    files.push("README.md", render_readme(project));
    files.push(IGNORE_FILE, render_gitignore());

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LibraryRegistry;
    use tempfile::TempDir;

    #[test]
    fn test_render_all_file_set() {
        let registry = LibraryRegistry::builtin();
        let project = ProjectDescriptor::new("demo", Path::new("."), registry.resolve("fmt"))
            .unwrap();
        let files = render_all(&project);

        let paths: Vec<String> = files
            .paths()
            .iter()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "CMakeLists.txt",
                "src/CMakeLists.txt",
                "tests/CMakeLists.txt",
                "cmake/Dependencies.cmake",
                "src/main.cpp",
                "tests/test_main.cpp",
                "README.md",
                ".gitignore",
            ]
        );
    }

    #[test]
    fn test_library_text_consistent_across_files() {
        let registry = LibraryRegistry::builtin();
        let project =
            ProjectDescriptor::new("demo", Path::new("."), registry.resolve("spdlog")).unwrap();
        let files = render_all(&project);
        let spdlog = registry.lookup("spdlog").unwrap();

        assert!(files
            .get("cmake/Dependencies.cmake")
            .unwrap()
            .contains(&format!("GIT_TAG {}", spdlog.version_tag)));
        assert!(files
            .get("src/CMakeLists.txt")
            .unwrap()
            .contains(spdlog.link_target.unwrap()));
        assert!(files
            .get("src/main.cpp")
            .unwrap()
            .contains(&spdlog.include_line()));
        assert!(files
            .get("README.md")
            .unwrap()
            .contains(spdlog.description));
    }

    #[tokio::test]
    async fn test_write_to_creates_files() {
        let tmp = TempDir::new().unwrap();
        let mut files = GeneratedFileSet::default();
        files.push("nested/dir/file.txt", "hello\n".to_string());

        files.write_to(tmp.path()).await.unwrap();

        let written = std::fs::read_to_string(tmp.path().join("nested/dir/file.txt")).unwrap();
        assert_eq!(written, "hello\n");
        assert_eq!(files.len(), 1);
        assert!(!files.is_empty());
    }
}
