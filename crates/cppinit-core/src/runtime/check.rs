//! Detection of CMake, Git and a C++ compiler

use anyhow::Result;
use std::fmt;
use std::process::Command;

/// External tools a generated project relies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    CMake,
    Git,
    Compiler,
}

impl Tool {
    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::CMake => "CMake",
            Tool::Git => "Git",
            Tool::Compiler => "C++ compiler",
        }
    }

    /// Executables probed for this tool, in order of preference
    fn candidates(&self) -> &'static [&'static str] {
        match self {
            Tool::CMake => &["cmake"],
            Tool::Git => &["git"],
            Tool::Compiler => &["c++", "g++", "clang++"],
        }
    }

    fn install_hint(&self) -> &'static str {
        match self {
            Tool::CMake => "CMake (install from https://cmake.org/download)",
            Tool::Git => "Git (install from https://git-scm.com)",
            Tool::Compiler => "a C++17 compiler (GCC, Clang or MSVC)",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(program: &str) -> Option<String> {
    let output = Command::new(program).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(stdout.lines().next().unwrap_or_default().trim().to_string())
}

/// Check whether a tool is available, using the first candidate that answers `--version`
pub fn check_tool(tool: Tool) -> RuntimeInfo {
    let version = tool.candidates().iter().find_map(|program| probe(program));

    RuntimeInfo {
        name: tool.display_name(),
        available: version.is_some(),
        version,
    }
}

/// Check tools; tools in `advisory` get availability reported but don't cause failure.
pub fn check_tools_with_advisory(tools: &[Tool], advisory: &[Tool]) -> Result<Vec<RuntimeInfo>> {
    check_with(tools, advisory, check_tool)
}

fn check_with(
    tools: &[Tool],
    advisory: &[Tool],
    detect: impl Fn(Tool) -> RuntimeInfo,
) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    for tool in tools.iter().chain(advisory.iter()) {
        if results.iter().any(|r: &RuntimeInfo| r.name == tool.display_name()) {
            continue;
        }
        let info = detect(*tool);
        if !info.available && !advisory.contains(tool) {
            missing.push(tool.install_hint());
        }
        results.push(info);
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(available: &'static [Tool]) -> impl Fn(Tool) -> RuntimeInfo {
        move |tool| RuntimeInfo {
            name: tool.display_name(),
            version: available.contains(&tool).then(|| "1.0".to_string()),
            available: available.contains(&tool),
        }
    }

    #[test]
    fn test_missing_required_tool_fails() {
        let err = check_with(&[Tool::Git], &[], fake(&[])).unwrap_err();
        assert!(err.to_string().contains("Git"));
    }

    #[test]
    fn test_missing_advisory_tool_reported() {
        let results =
            check_with(&[Tool::Git], &[Tool::CMake, Tool::Compiler], fake(&[Tool::Git])).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results[0].available);
        assert!(!results[1].available);
        assert_eq!(results[1].name, "CMake");
    }

    #[test]
    fn test_tool_listed_twice_checked_once() {
        let results = check_with(&[Tool::Git], &[Tool::Git], fake(&[Tool::Git])).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_unknown_program_is_unavailable() {
        assert!(probe("cppinit-definitely-not-a-program").is_none());
    }
}
