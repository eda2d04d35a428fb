//! Starter C++ sources: `src/main.cpp` and `tests/test_main.cpp`

use crate::project::ProjectDescriptor;
use crate::scaffold::TEST_HEADER_INCLUDE;

/// Render the primary source file
///
/// One include per selected library, and one example statement for each library that
/// defines one.
pub fn render_source_file(project: &ProjectDescriptor<'_>) -> String {
    let name = project.name();
    let mut lines = vec![
        format!("// {name}: entry point generated by cppinit"),
        String::new(),
        "#include <iostream>".to_string(),
    ];

    lines.extend(project.selection().iter().map(|entry| entry.include_line()));
    lines.push(String::new());

    lines.push("int main() {".to_string());
    lines.push(format!(
        "    std::cout << \"Hello from {name}!\" << std::endl;"
    ));
    lines.extend(
        project
            .selection()
            .iter()
            .filter_map(|entry| entry.example)
            .map(|example| format!("    {example}")),
    );
    lines.push("    return 0;".to_string());
    lines.push("}".to_string());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

/// Render the smoke test, which only depends on the bundled test header
pub fn render_test_file(project: &ProjectDescriptor<'_>) -> String {
    format!(
        r#"// {name}: smoke test generated by cppinit
#define DOCTEST_CONFIG_IMPLEMENT_WITH_MAIN
#include "{TEST_HEADER_INCLUDE}"

TEST_CASE("{name} builds and runs") {{
    CHECK(1 + 1 == 2);
}}
"#,
        name = project.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{LibraryRegistry, LibrarySelection};
    use std::path::Path;

    fn render(libs: &str) -> String {
        let registry = LibraryRegistry::builtin();
        let project =
            ProjectDescriptor::new("demo", Path::new("."), registry.resolve(libs)).unwrap();
        render_source_file(&project)
    }

    #[test]
    fn test_baseline_source_without_libraries() {
        let source = render("");
        let expected = "\
// demo: entry point generated by cppinit

#include <iostream>

int main() {
    std::cout << \"Hello from demo!\" << std::endl;
    return 0;
}
";
        assert_eq!(source, expected);
    }

    #[test]
    fn test_json_has_one_include_and_one_example() {
        let source = render("json");
        assert_eq!(source.matches("#include <nlohmann/json.hpp>").count(), 1);
        assert_eq!(source.matches("nlohmann::json{").count(), 1);
    }

    #[test]
    fn test_eigen_has_include_but_no_example() {
        let source = render("eigen");
        assert_eq!(source.matches("#include <Eigen/Dense>").count(), 1);
        assert!(!source.contains("Eigen::"));

        let body_lines = source
            .lines()
            .skip_while(|l| *l != "int main() {")
            .count();
        assert_eq!(body_lines, render("").lines().skip_while(|l| *l != "int main() {").count());
    }

    #[test]
    fn test_includes_and_examples_follow_selection_order() {
        let source = render("spdlog,fmt");
        let spdlog_inc = source.find("#include <spdlog/spdlog.h>").unwrap();
        let fmt_inc = source.find("#include <fmt/core.h>").unwrap();
        assert!(spdlog_inc < fmt_inc);

        let spdlog_ex = source.find("spdlog::info").unwrap();
        let fmt_ex = source.find("fmt::print").unwrap();
        assert!(spdlog_ex < fmt_ex);
    }

    #[test]
    fn test_test_file_ignores_selection() {
        let registry = LibraryRegistry::builtin();
        let with_libs =
            ProjectDescriptor::new("demo", Path::new("."), registry.resolve("fmt,json")).unwrap();
        let without =
            ProjectDescriptor::new("demo", Path::new("."), LibrarySelection::empty()).unwrap();

        let test_file = render_test_file(&with_libs);
        assert_eq!(test_file, render_test_file(&without));
        assert!(test_file.contains("#include \"doctest.h\""));
        assert_eq!(test_file.matches("CHECK(").count(), 1);
    }
}
