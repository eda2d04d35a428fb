//! Compiler families the generated build distinguishes between

/// Toolchain family, as CMake tells them apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolchainFamily {
    /// Microsoft Visual C++ (`if(MSVC)`)
    Msvc,
    /// GCC, Clang and anything else accepting GNU-style flags
    GnuLike,
}

impl ToolchainFamily {
    /// CMake condition that is true when this family is the active compiler
    pub fn cmake_condition(self) -> &'static str {
        match self {
            ToolchainFamily::Msvc => "MSVC",
            ToolchainFamily::GnuLike => "NOT MSVC",
        }
    }

    pub fn warning_flags(self) -> &'static [&'static str] {
        match self {
            ToolchainFamily::Msvc => &["/W4"],
            ToolchainFamily::GnuLike => &["-Wall", "-Wextra", "-Wpedantic"],
        }
    }

    pub fn warnings_as_errors_flag(self) -> &'static str {
        match self {
            ToolchainFamily::Msvc => "/WX",
            ToolchainFamily::GnuLike => "-Werror",
        }
    }
}
