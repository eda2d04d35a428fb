//! Project identity: validated name, target location and library selection

pub mod name;

use crate::error::ScaffoldError;
use crate::registry::LibrarySelection;
use std::path::{Path, PathBuf};

pub use name::validate_name;

/// Everything one invocation needs to generate a project
///
/// Built once, after validation, and never changed afterwards.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor<'r> {
    name: String,
    root_path: PathBuf,
    selection: LibrarySelection<'r>,
}

impl<'r> ProjectDescriptor<'r> {
    /// Validate `name` and place the project at `parent/name`
    pub fn new(
        name: &str,
        parent: &Path,
        selection: LibrarySelection<'r>,
    ) -> Result<Self, ScaffoldError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            root_path: parent.join(name),
            selection,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn selection(&self) -> &LibrarySelection<'r> {
        &self.selection
    }
}
