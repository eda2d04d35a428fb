//! Minimal structured representation of CMake listfiles
//!
//! Generated build descriptions are assembled as [`Block`]s and serialized once, so
//! later steps (such as linking selected libraries) edit fields instead of text.

use std::fmt::Write as _;

const INDENT: &str = "    ";

/// One statement (or compound statement) in a listfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Blank,
    Comment(String),
    /// `name(arg arg ...)` on a single line
    Command { name: String, args: Vec<String> },
    /// `name(head ...`, one item per indented line, then `)`
    ItemList {
        name: String,
        head: Vec<String>,
        items: Vec<String>,
    },
    /// `if(condition)` with an optional `else()` branch
    If {
        condition: String,
        then: Vec<Block>,
        otherwise: Vec<Block>,
    },
}

impl Block {
    pub fn command<I, S>(name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::Command {
            name: name.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn item_list<H, I, S, T>(name: &str, head: H, items: I) -> Self
    where
        H: IntoIterator<Item = S>,
        I: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Block::ItemList {
            name: name.to_string(),
            head: head.into_iter().map(Into::into).collect(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Block::Comment(text.into())
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = INDENT.repeat(depth);
        match self {
            Block::Blank => out.push('\n'),
            Block::Comment(text) => {
                let _ = writeln!(out, "{indent}# {text}");
            }
            Block::Command { name, args } => {
                let _ = writeln!(out, "{indent}{name}({})", args.join(" "));
            }
            Block::ItemList { name, head, items } => {
                let _ = writeln!(out, "{indent}{name}({}", head.join(" "));
                for item in items {
                    let _ = writeln!(out, "{indent}{INDENT}{item}");
                }
                let _ = writeln!(out, "{indent})");
            }
            Block::If {
                condition,
                then,
                otherwise,
            } => {
                let _ = writeln!(out, "{indent}if({condition})");
                for block in then {
                    block.write(out, depth + 1);
                }
                if !otherwise.is_empty() {
                    let _ = writeln!(out, "{indent}else()");
                    for block in otherwise {
                        block.write(out, depth + 1);
                    }
                }
                let _ = writeln!(out, "{indent}endif()");
            }
        }
    }
}

/// An ordered sequence of blocks making up one `CMakeLists.txt` or `.cmake` module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFile {
    blocks: Vec<Block>,
}

impl ListFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn command<I, S>(&mut self, name: &str, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::command(name, args))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Block::Blank)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.write(&mut out, 0);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_and_item_list() {
        let mut file = ListFile::new();
        file.command("project", ["demo", "LANGUAGES", "CXX"])
            .blank()
            .push(Block::item_list(
                "target_link_libraries",
                ["demo", "PRIVATE"],
                ["fmt::fmt"],
            ));

        assert_eq!(
            file.render(),
            "project(demo LANGUAGES CXX)\n\ntarget_link_libraries(demo PRIVATE\n    fmt::fmt\n)\n"
        );
    }

    #[test]
    fn test_render_empty_item_list_keeps_anchor() {
        let mut file = ListFile::new();
        file.push(Block::item_list(
            "target_link_libraries",
            ["demo", "PRIVATE"],
            Vec::<String>::new(),
        ));
        assert_eq!(file.render(), "target_link_libraries(demo PRIVATE\n)\n");
    }

    #[test]
    fn test_render_nested_if_else() {
        let mut file = ListFile::new();
        file.push(Block::If {
            condition: "MSVC".to_string(),
            then: vec![Block::command("add_compile_options", ["/W4"])],
            otherwise: vec![Block::If {
                condition: "APPLE".to_string(),
                then: vec![Block::comment("mac")],
                otherwise: Vec::new(),
            }],
        });

        let expected = "\
if(MSVC)
    add_compile_options(/W4)
else()
    if(APPLE)
        # mac
    endif()
endif()
";
        assert_eq!(file.render(), expected);
    }
}
