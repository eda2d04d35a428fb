//! Host environment inspection and external tools
//!
//! This module provides:
//! - Detection of the tools a generated project needs (CMake, Git, a C++ compiler)
//! - Git repository initialization for the new project

pub mod check;
pub mod git;

pub use check::{check_tool, check_tools_with_advisory, RuntimeInfo, Tool};
pub use git::init_repository;
