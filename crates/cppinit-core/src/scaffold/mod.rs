//! Directory skeleton for a new project
//!
//! The project root is created with a single non-recursive `create_dir`, which is the
//! existence check: if anything is already at the root path nothing is written at all.

use crate::error::ScaffoldError;
use crate::project::ProjectDescriptor;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Subdirectories created under every project root
pub const PROJECT_DIRS: &[&str] = &["src", "include", "lib", "build", "tests", "cmake"];

/// Primary source file, relative to the project root
pub const SOURCE_FILE: &str = "src/main.cpp";

/// Primary test file, relative to the project root
pub const TEST_FILE: &str = "tests/test_main.cpp";

pub const IGNORE_FILE: &str = ".gitignore";

/// Where the bundled single-header test framework is written
pub const TEST_HEADER_FILE: &str = "include/doctest.h";

/// How the smoke test includes the bundled header
pub const TEST_HEADER_INCLUDE: &str = "doctest.h";

/// Create the project root, its subdirectories and empty placeholder files
///
/// Returns [`ScaffoldError::AlreadyExists`] without touching the filesystem when the
/// root is already present.
pub async fn build(project: &ProjectDescriptor<'_>) -> Result<PathBuf, ScaffoldError> {
    let root = project.root_path();

    if let Some(parent) = root.parent() {
        if parent != Path::new("") && !fs::try_exists(parent).await.unwrap_or(false) {
            return Err(ScaffoldError::ParentMissing(parent.to_path_buf()));
        }
    }

    match fs::create_dir(root).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ScaffoldError::AlreadyExists(root.to_path_buf()));
        }
        Err(e) => return Err(ScaffoldError::io(root, e)),
    }
    tracing::debug!(root = %root.display(), "created project root");

    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        fs::create_dir(&path)
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
    }

    for file in [SOURCE_FILE, TEST_FILE, IGNORE_FILE] {
        let path = root.join(file);
        fs::write(&path, "")
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
    }

    Ok(root.to_path_buf())
}
