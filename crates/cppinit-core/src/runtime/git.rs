//! Git repository initialization

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command as TokioCommand;

/// Run `git init` in `dir`
pub async fn init_repository(dir: &Path) -> Result<()> {
    tracing::debug!(dir = %dir.display(), "initializing git repository");

    let output = TokioCommand::new("git")
        .arg("init")
        .arg("--quiet")
        .current_dir(dir)
        .output()
        .await
        .context("Failed to run git")?;

    if !output.status.success() {
        anyhow::bail!(
            "git init failed with exit code {}: {}",
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_in_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let result = init_repository(&tmp.path().join("missing")).await;
        assert!(result.is_err());
    }
}
