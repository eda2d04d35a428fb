//! cppinit Core - Library for bootstrapping CMake-based C++ projects
//!
//! This library turns a project name and a selection of third-party libraries into a
//! ready-to-build project tree: directory skeleton, CMake build descriptions, starter
//! source and test files, README, and a bundled single-header test framework.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions: name validation, library selection,
//!   rendering of every generated file from the [`LibraryRegistry`]
//! - **Layer 2: Workflow Orchestration** - [`ProductConfig`] trait and [`generate`] for
//!   custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use cppinit_core::{generate, GenerateOptions, HeaderSource, LibraryRegistry, ProjectDescriptor};
//!
//! let registry = LibraryRegistry::builtin();
//! let selection = registry.resolve("fmt,spdlog");
//! let project = ProjectDescriptor::new("demo", Path::new("."), selection)?;
//! let options = GenerateOptions::new(HeaderSource::Local("doctest.h".into()), "cppinit");
//! let files = generate(&project, &options).await?;
//! ```

pub mod error;
pub mod fetch;
pub mod generator;
pub mod product;
pub mod project;
pub mod registry;
pub mod render;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{NameRejection, ScaffoldError};
pub use fetch::{HeaderFetcher, HeaderSource};
pub use generator::{generate, GenerateOptions};
pub use product::ProductConfig;
pub use project::{validate_name, ProjectDescriptor};
pub use registry::{LibraryEntry, LibraryRegistry, LibrarySelection};
pub use render::{GeneratedFile, GeneratedFileSet};

#[cfg(feature = "tui")]
pub use tui::run;
