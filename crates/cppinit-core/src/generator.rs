//! The generation pipeline: scaffold, render, write, bundle the test header, init git
//!
//! Name validation and library selection happen earlier, when the [`ProjectDescriptor`]
//! is built. Once the scaffold step succeeds the root directory is owned by this run;
//! a later failure (network, git) leaves the partially written tree in place.

use crate::error::ScaffoldError;
use crate::fetch::{HeaderFetcher, HeaderSource};
use crate::project::ProjectDescriptor;
use crate::render::{self, GeneratedFileSet};
use crate::runtime::git;
use crate::scaffold::{self, TEST_HEADER_FILE};
use anyhow::{Context, Result};
use tokio::fs;

/// Knobs for one generation run
pub struct GenerateOptions {
    fetcher: HeaderFetcher,
    init_git: bool,
}

impl GenerateOptions {
    pub fn new(header_source: HeaderSource, user_agent: &str) -> Self {
        Self {
            fetcher: HeaderFetcher::new(header_source, user_agent),
            init_git: true,
        }
    }

    /// Skip `git init` in the new project
    pub fn without_git(mut self) -> Self {
        self.init_git = false;
        self
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }
}

/// Generate the project described by `project`, returning every file written
pub async fn generate(
    project: &ProjectDescriptor<'_>,
    options: &GenerateOptions,
) -> Result<GeneratedFileSet> {
    let root = scaffold::build(project).await?;
    tracing::info!(root = %root.display(), "scaffolded project");

    let mut files = render::render_all(project);
    files.write_to(&root).await?;
    tracing::debug!(count = files.len(), "wrote rendered files");

    let header = options
        .fetcher
        .fetch()
        .await
        .context("Failed to bundle the test framework header")?;
    let header_path = root.join(TEST_HEADER_FILE);
    fs::write(&header_path, &header)
        .await
        .map_err(|e| ScaffoldError::io(&header_path, e))?;
    files.push(TEST_HEADER_FILE, header);

    if options.init_git {
        git::init_repository(&root)
            .await
            .context("Failed to initialize git repository")?;
    }

    Ok(files)
}
