//! `cmake/Dependencies.cmake`: FetchContent declarations for the selected libraries

use super::cmake::{Block, ListFile};
use crate::project::ProjectDescriptor;

/// Render the dependency module
///
/// The FetchContent preamble is always emitted so the root listfile can include the
/// module unconditionally, even when no libraries are selected.
pub fn render_dependency_module(project: &ProjectDescriptor<'_>) -> String {
    let mut file = ListFile::new();

    file.push(Block::comment(
        "Third-party dependencies, fetched at configure time",
    ))
    .command("include", ["FetchContent"])
    .blank()
    .command("set", ["FETCHCONTENT_QUIET", "OFF"])
    .command("set", ["FETCHCONTENT_UPDATES_DISCONNECTED", "ON"]);

    for entry in project.selection().iter() {
        file.blank()
            .push(Block::comment(entry.description))
            .push(Block::item_list(
                "FetchContent_Declare",
                Vec::<String>::new(),
                [
                    entry.key.to_string(),
                    format!("GIT_REPOSITORY {}", entry.source_location),
                    format!("GIT_TAG {}", entry.version_tag),
                    "GIT_SHALLOW TRUE".to_string(),
                ],
            ))
            .command("FetchContent_MakeAvailable", [entry.key]);
    }

    file.render()
}
