//! CMake build descriptions: root `CMakeLists.txt`, `src/` and `tests/`

use super::cmake::{Block, ListFile};
use super::link::link_dependencies;
use super::toolchain::ToolchainFamily;
use crate::project::ProjectDescriptor;

/// Version written into `project()`
pub const PROJECT_VERSION: &str = "0.1.0";

pub const CMAKE_MINIMUM_VERSION: &str = "3.20";

/// Language standard the generated project compiles with
pub const CXX_STANDARD: &str = "17";

/// Name of the dependency module under `cmake/` (without `.cmake`)
pub const DEPENDENCY_MODULE: &str = "Dependencies";

/// Toggleable options declared in the root listfile: (name, description, default)
pub const BUILD_OPTIONS: &[(&str, &str, bool)] = &[
    ("BUILD_TESTING", "Build the test suite", true),
    ("BUILD_DOCS", "Build the documentation", false),
    (
        "ENABLE_WARNINGS_AS_ERRORS",
        "Treat compiler warnings as errors",
        false,
    ),
];

const INCLUDE_DIR: &str = "${PROJECT_SOURCE_DIR}/include";

/// The project's main executable as a structured target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableTarget {
    pub name: String,
    pub sources: Vec<String>,
    pub include_dirs: Vec<String>,
    pub link_libraries: Vec<String>,
}

impl ExecutableTarget {
    pub fn new<I, S>(name: &str, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            sources: sources.into_iter().map(Into::into).collect(),
            include_dirs: vec![INCLUDE_DIR.to_string()],
            link_libraries: Vec::new(),
        }
    }

    /// Opening line of the private link-library list
    pub fn link_anchor(&self) -> String {
        format!("target_link_libraries({} PRIVATE", self.name)
    }

    fn warning_block(&self, family: ToolchainFamily) -> Vec<Block> {
        let mut flags = vec![self.name.clone(), "PRIVATE".to_string()];
        flags.extend(family.warning_flags().iter().map(|f| f.to_string()));
        vec![
            Block::command("target_compile_options", flags),
            Block::If {
                condition: "ENABLE_WARNINGS_AS_ERRORS".to_string(),
                then: vec![Block::command(
                    "target_compile_options",
                    [
                        self.name.as_str(),
                        "PRIVATE",
                        family.warnings_as_errors_flag(),
                    ],
                )],
                otherwise: Vec::new(),
            },
        ]
    }

    pub fn to_list_file(&self) -> ListFile {
        let mut file = ListFile::new();

        let mut add_executable = vec![self.name.clone()];
        add_executable.extend(self.sources.iter().cloned());
        file.command("add_executable", add_executable).blank();

        let mut includes = vec![self.name.clone(), "PRIVATE".to_string()];
        includes.extend(self.include_dirs.iter().cloned());
        file.command("target_include_directories", includes).blank();

        file.push(Block::If {
            condition: ToolchainFamily::Msvc.cmake_condition().to_string(),
            then: self.warning_block(ToolchainFamily::Msvc),
            otherwise: self.warning_block(ToolchainFamily::GnuLike),
        })
        .blank();

        file.push(Block::item_list(
            "target_link_libraries",
            [self.name.as_str(), "PRIVATE"],
            self.link_libraries.iter().cloned(),
        ));
        file
    }
}

/// Rendered contents of the three build descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBuildConfig {
    pub root: String,
    pub src: String,
    pub tests: String,
}

/// Structured form of the build descriptions, before serialization
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub root: ListFile,
    pub app: ExecutableTarget,
    pub tests: ListFile,
}

impl BuildConfig {
    /// Build descriptions for `project` with no libraries linked yet
    pub fn new(project: &ProjectDescriptor<'_>) -> Self {
        let name = project.name();
        Self {
            root: root_list_file(name),
            app: ExecutableTarget::new(name, ["main.cpp"]),
            tests: tests_list_file(name),
        }
    }

    pub fn render(&self) -> RenderedBuildConfig {
        RenderedBuildConfig {
            root: self.root.render(),
            src: self.app.to_list_file().render(),
            tests: self.tests.render(),
        }
    }
}

/// Render all build descriptions with the selected libraries linked into the executable
pub fn render_build_config(project: &ProjectDescriptor<'_>) -> RenderedBuildConfig {
    let mut config = BuildConfig::new(project);
    link_dependencies(&mut config.app, project.selection());
    config.render()
}

/// Name of the test executable and its single registered test
pub fn test_target_name(project_name: &str) -> String {
    format!("{project_name}_tests")
}

fn root_list_file(name: &str) -> ListFile {
    let mut file = ListFile::new();

    file.command("cmake_minimum_required", ["VERSION", CMAKE_MINIMUM_VERSION])
        .command(
            "project",
            [name, "VERSION", PROJECT_VERSION, "LANGUAGES", "CXX"],
        )
        .blank();

    file.command("set", ["CMAKE_CXX_STANDARD", CXX_STANDARD])
        .command("set", ["CMAKE_CXX_STANDARD_REQUIRED", "ON"])
        .command("set", ["CMAKE_CXX_EXTENSIONS", "OFF"])
        .blank();

    for (option, description, default) in BUILD_OPTIONS {
        file.command(
            "option",
            [
                option.to_string(),
                format!("\"{description}\""),
                String::from(if *default { "ON" } else { "OFF" }),
            ],
        );
    }
    file.blank();

    file.command(
        "set",
        ["CMAKE_RUNTIME_OUTPUT_DIRECTORY", "${CMAKE_BINARY_DIR}/bin"],
    )
    .command(
        "set",
        ["CMAKE_LIBRARY_OUTPUT_DIRECTORY", "${CMAKE_BINARY_DIR}/lib"],
    )
    .command(
        "set",
        ["CMAKE_ARCHIVE_OUTPUT_DIRECTORY", "${CMAKE_BINARY_DIR}/lib"],
    )
    .command("set", ["CMAKE_EXPORT_COMPILE_COMMANDS", "ON"])
    .blank();

    file.command(
        "list",
        ["APPEND", "CMAKE_MODULE_PATH", "${PROJECT_SOURCE_DIR}/cmake"],
    )
    .command("include", [DEPENDENCY_MODULE])
    .blank();

    file.command("add_subdirectory", ["src"]).blank();

    file.push(Block::If {
        condition: "BUILD_TESTING".to_string(),
        then: vec![
            Block::command("enable_testing", Vec::<String>::new()),
            Block::command("add_subdirectory", ["tests"]),
        ],
        otherwise: Vec::new(),
    });
    file
}

fn tests_list_file(name: &str) -> ListFile {
    let target = test_target_name(name);
    let mut file = ListFile::new();

    file.command("add_executable", [target.as_str(), "test_main.cpp"])
        .blank()
        .command(
            "target_include_directories",
            [target.as_str(), "PRIVATE", INCLUDE_DIR],
        )
        .blank()
        .command(
            "add_test",
            ["NAME", target.as_str(), "COMMAND", target.as_str()],
        );
    file
}
