//! cppinit CLI - Project scaffolding for CMake-based C++ projects

use anyhow::Result;
use clap::Parser;
use cppinit_core::registry::{print_libraries, LibraryRegistry, LibrarySelection};
use cppinit_core::tui::{CreateArgs, LibraryChoice};
use cppinit_core::ProductConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// cppinit product configuration
#[derive(Clone)]
pub struct CppInitConfig;

impl ProductConfig for CppInitConfig {
    fn name(&self) -> &'static str {
        "cppinit"
    }

    fn display_name(&self) -> &'static str {
        "cppinit"
    }

    fn default_test_header_url(&self) -> &'static str {
        "https://raw.githubusercontent.com/doctest/doctest/v2.4.11/doctest/doctest.h"
    }

    fn test_header_url_env(&self) -> &'static str {
        "CPPINIT_TEST_HEADER_URL"
    }

    fn next_steps(&self, dir: &Path, selection: &LibrarySelection<'_>) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Configure (downloads the selected libraries)
        if selection.is_empty() {
            steps.push("cmake -S . -B build".to_string());
        } else {
            steps.push(format!(
                "cmake -S . -B build   (fetches {})",
                selection.keys().join(", ")
            ));
        }

        // Step 3: Build and test
        steps.push("cmake --build build".to_string());
        steps.push("ctest --test-dir build --output-on-failure".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "cppinit")]
#[command(about = "CLI for scaffolding CMake-based C++ projects")]
#[command(version)]
pub struct Args {
    /// Name of the project (and of the directory created for it)
    #[arg(required_unless_present = "list_libs")]
    pub name: Option<String>,

    /// Create the project without any third-party libraries
    #[arg(long = "no-lib", conflicts_with = "with_libs")]
    pub no_lib: bool,

    /// Libraries to include (comma-separated keys, see --list-libs)
    #[arg(long = "with-libs", value_name = "LIBS")]
    pub with_libs: Option<String>,

    /// List the available libraries and exit
    #[arg(long = "list-libs")]
    pub list_libs: bool,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Bundle this local test header instead of downloading it
    #[arg(long = "test-header", value_name = "PATH")]
    pub test_header: Option<PathBuf>,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn into_create_args(self, name: String) -> CreateArgs {
        let libraries = match (self.no_lib, self.with_libs) {
            (true, _) => LibraryChoice::None,
            (false, Some(list)) => LibraryChoice::List(list),
            (false, None) => LibraryChoice::Prompt,
        };

        CreateArgs {
            name,
            directory: self.directory,
            libraries,
            test_header: self.test_header,
            skip_git: self.no_git,
            yes: self.yes,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cppinit=debug,cppinit_core=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let registry = LibraryRegistry::builtin();

    if args.list_libs {
        print_libraries(&registry);
        return Ok(());
    }

    let Some(name) = args.name.clone() else {
        anyhow::bail!("a project name is required");
    };

    let config = CppInitConfig;
    cppinit_core::run(&config, &registry, args.into_create_args(name)).await
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
