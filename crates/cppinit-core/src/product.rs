//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to configure the scaffolding behavior: where the
//! bundled test header is downloaded from, what the operator sees, and which user agent
//! is sent over the network.

use crate::registry::LibrarySelection;
use std::path::Path;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default URL for fetching the single-header test framework
    fn default_test_header_url(&self) -> &'static str;

    /// Environment variable name for overriding the test header URL
    fn test_header_url_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, selection: &LibrarySelection<'_>) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
