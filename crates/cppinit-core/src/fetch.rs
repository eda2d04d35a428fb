//! Retrieval of the bundled single-header test framework
//!
//! The header normally comes from a remote URL (overridable through the product's
//! environment variable). A local file can be used instead for offline generation.

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Where the test header comes from
#[derive(Debug, Clone)]
pub enum HeaderSource {
    Remote(Url),
    Local(PathBuf),
}

impl HeaderSource {
    /// Create a remote header source from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.test_header_url_env())
            .unwrap_or_else(|_| config.default_test_header_url().to_string());
        Self::remote(&url_str)
    }

    /// Create a remote header source from a URL string
    pub fn remote(url_str: &str) -> Result<Self> {
        let url =
            Url::parse(url_str).with_context(|| format!("Invalid test header URL: {}", url_str))?;
        Ok(Self::Remote(url))
    }

    /// Create a local header source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Fetcher for the test header
pub struct HeaderFetcher {
    source: HeaderSource,
    client: reqwest::Client,
}

impl HeaderFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: HeaderSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Fetch the header contents
    pub async fn fetch(&self) -> Result<String> {
        let bytes = match &self.source {
            HeaderSource::Remote(url) => {
                tracing::debug!(%url, "downloading test header");
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch test header from {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!(
                        "Failed to fetch test header from {}: HTTP {}",
                        url,
                        response.status()
                    );
                }

                response.bytes().await?.to_vec()
            }
            HeaderSource::Local(path) => fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?,
        };

        String::from_utf8(bytes).context("Test header is not valid UTF-8")
    }

    /// Get the header source
    pub fn source(&self) -> &HeaderSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remote_parses_url() {
        let source = HeaderSource::remote("https://example.com/doctest.h").unwrap();
        match source {
            HeaderSource::Remote(url) => assert_eq!(url.path(), "/doctest.h"),
            HeaderSource::Local(_) => panic!("expected remote source"),
        }
    }

    #[test]
    fn test_remote_rejects_invalid_url() {
        let err = HeaderSource::remote("not a url").unwrap_err();
        assert!(err.to_string().contains("Invalid test header URL"));
    }

    #[tokio::test]
    async fn test_local_source_reads_file() {
        let tmp = TempDir::new().unwrap();
        let header = tmp.path().join("doctest.h");
        std::fs::write(&header, "#pragma once\n").unwrap();

        let fetcher = HeaderFetcher::new(HeaderSource::local(header), "cppinit-test");
        assert_eq!(fetcher.fetch().await.unwrap(), "#pragma once\n");
        assert!(matches!(fetcher.source(), HeaderSource::Local(_)));
    }

    #[tokio::test]
    async fn test_local_source_missing_file() {
        let tmp = TempDir::new().unwrap();
        let fetcher =
            HeaderFetcher::new(HeaderSource::local(tmp.path().join("missing.h")), "cppinit");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
