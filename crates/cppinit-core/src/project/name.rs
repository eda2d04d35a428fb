//! Project name validation
//!
//! Rules are evaluated in order and the first failing rule decides the rejection.

use crate::error::{NameRejection, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

/// Names CMake reserves for its own targets (compared case-insensitively)
pub const RESERVED_NAMES: &[&str] = &[
    "test",
    "all",
    "help",
    "install",
    "package",
    "edit_cache",
    "rebuild_cache",
    "clean",
    "testing",
];

pub const MAX_NAME_LEN: usize = 50;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("valid name pattern"));

struct NameRule {
    passes: fn(&str) -> bool,
    rejection: NameRejection,
}

const RULES: &[NameRule] = &[
    NameRule {
        passes: is_not_reserved,
        rejection: NameRejection::Reserved,
    },
    NameRule {
        passes: has_valid_characters,
        rejection: NameRejection::InvalidCharacters,
    },
    NameRule {
        passes: has_valid_length,
        rejection: NameRejection::InvalidLength,
    },
];

fn is_not_reserved(name: &str) -> bool {
    !RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

fn has_valid_characters(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

fn has_valid_length(name: &str) -> bool {
    (1..=MAX_NAME_LEN).contains(&name.len())
}

/// Check a candidate project name, returning the first rule it breaks
pub fn check_name(name: &str) -> Result<(), NameRejection> {
    match RULES.iter().find(|rule| !(rule.passes)(name)) {
        Some(rule) => Err(rule.rejection),
        None => Ok(()),
    }
}

/// [`check_name`] wrapped in a [`ScaffoldError`] that names the candidate
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    check_name(name).map_err(|reason| ScaffoldError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
