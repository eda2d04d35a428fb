//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::fetch::HeaderSource;
use crate::generator::{self, GenerateOptions};
use crate::product::ProductConfig;
use crate::project::{validate_name, ProjectDescriptor};
use crate::registry::{self, LibraryRegistry, LibrarySelection};
use crate::runtime::check::{self, Tool};
use anyhow::Result;
use std::path::PathBuf;

/// How the library selection is obtained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LibraryChoice {
    /// Ask interactively (empty selection with `--yes`)
    #[default]
    Prompt,
    /// `--no-lib`
    None,
    /// `--with-libs=<list>`, resolved against the registry
    List(String),
}

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory created
    pub name: String,

    /// Parent directory for the project (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Library selection mode
    pub libraries: LibraryChoice,

    /// Local test header to bundle instead of downloading it
    pub test_header: Option<PathBuf>,

    /// Skip `git init`
    pub skip_git: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(
    config: &C,
    registry: &LibraryRegistry,
    args: CreateArgs,
) -> Result<()> {
    // Step 1: Reject bad names before anything is printed or written
    validate_name(&args.name)?;

    cliclack::intro(config.display_name())?;

    // Step 2: Resolve target location
    let parent = select_directory(&args)?;
    let root = parent.join(&args.name);
    if root.exists() {
        return Err(ScaffoldError::AlreadyExists(root).into());
    }

    // Step 3: Check tools (git is only required when we initialize a repository)
    check_tools(&args)?;

    // Step 4: Select libraries
    let selection = select_libraries(registry, &args)?;

    // Step 5: Create project
    let project = ProjectDescriptor::new(&args.name, &parent, selection)?;
    let header_source = match &args.test_header {
        Some(path) => {
            cliclack::log::info(format!("Using local test header {}", path.display()))?;
            HeaderSource::local(path.clone())
        }
        None => HeaderSource::from_config(config)?,
    };
    let mut options = GenerateOptions::new(header_source, config.user_agent());
    if args.skip_git {
        options = options.without_git();
    }
    create_project(&project, &options).await?;

    // Step 6: Show next steps
    print_next_steps(config, &project)?;

    Ok(())
}

fn select_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let parent = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !parent.is_dir() {
        return Err(ScaffoldError::ParentMissing(parent).into());
    }

    cliclack::log::info(format!(
        "Project directory: {}",
        parent.join(&args.name).display()
    ))?;
    Ok(parent)
}

fn check_tools(args: &CreateArgs) -> Result<()> {
    let required: &[Tool] = if args.skip_git { &[] } else { &[Tool::Git] };
    let advisory = [Tool::CMake, Tool::Compiler];

    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    match check::check_tools_with_advisory(required, &advisory) {
        Ok(tools) => {
            let tool_info: Vec<String> = tools
                .iter()
                .map(|t| {
                    if t.available {
                        format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown"))
                    } else {
                        format!("{} (not installed)", t.name)
                    }
                })
                .collect();
            spinner.stop(format!("Detected tools: {}", tool_info.join(", ")));

            for tool in tools.iter().filter(|t| !t.available) {
                cliclack::log::warning(format!(
                    "{} not found: the project will be generated but cannot be built yet",
                    tool.name
                ))?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools or pass --no-git.");
        }
    }
}

fn select_libraries<'r>(
    registry: &'r LibraryRegistry,
    args: &CreateArgs,
) -> Result<LibrarySelection<'r>> {
    let selection = match &args.libraries {
        LibraryChoice::None => LibrarySelection::empty(),
        LibraryChoice::List(raw) => registry.resolve(raw),
        LibraryChoice::Prompt if args.yes => LibrarySelection::empty(),
        LibraryChoice::Prompt => {
            let mut multi = cliclack::multiselect("Select libraries (optional)");
            for entry in registry.sorted() {
                multi = multi.item(
                    entry.key,
                    entry.key,
                    format!("{} - {}", entry.version_tag, entry.description),
                );
            }
            let picked: Vec<&'static str> = multi.required(false).interact()?;
            registry::resolve_keys(picked, registry)
        }
    };

    if selection.is_empty() {
        cliclack::log::info("No libraries selected")?;
    } else {
        cliclack::log::success(format!("Libraries: {}", selection.keys().join(", ")))?;
    }

    Ok(selection)
}

async fn create_project(project: &ProjectDescriptor<'_>, options: &GenerateOptions) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match generator::generate(project, options).await {
        Ok(files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                files.len(),
                project.root_path().display()
            ));
            if options.init_git() {
                cliclack::log::success("Initialized git repository")?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Project creation failed");
            Err(e)
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, project: &ProjectDescriptor<'_>) -> Result<()> {
    let steps = config.next_steps(project.root_path(), project.selection());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
