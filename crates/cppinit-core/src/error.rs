//! Error types for the preconditions that gate project creation

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a project name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Collides with a target or command name CMake reserves
    Reserved,
    /// Does not start with a letter, or contains characters outside `[A-Za-z0-9_-]`
    InvalidCharacters,
    /// Empty or longer than the maximum name length
    InvalidLength,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NameRejection::Reserved => "reserved by CMake",
            NameRejection::InvalidCharacters => {
                "must start with a letter and contain only letters, digits, '_' or '-'"
            }
            NameRejection::InvalidLength => "must be between 1 and 50 characters long",
        };
        f.write_str(reason)
    }
}

/// Failures that stop generation before (or while) the project tree is written
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: NameRejection },

    #[error("destination '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("parent directory does not exist: {}", .0.display())]
    ParentMissing(PathBuf),

    #[error("library '{0}' is declared more than once in the registry")]
    DuplicateLibrary(&'static str),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}
