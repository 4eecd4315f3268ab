//! Outline rendering in the three supported display formats.

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::Error;

use super::Section;

/// How an outline is formatted, one section per line in preorder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutlineMode {
    /// Titles only.
    Plain,
    /// Tab indentation equal to each section's depth.
    Indented,
    /// Tab indentation plus a dotted position prefix, e.g. `1.2.1 Title`.
    #[default]
    IndentedNumbered,
}

impl FromStr for OutlineMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("plain") {
            Ok(OutlineMode::Plain)
        } else if s.eq_ignore_ascii_case("indented") {
            Ok(OutlineMode::Indented)
        } else if s.eq_ignore_ascii_case("indented+numbered") {
            Ok(OutlineMode::IndentedNumbered)
        } else {
            Err(Error::UnknownMode(s.to_string()))
        }
    }
}

/// Write the outline rooted at `root` into `writer`, one line per
/// preorder section.
pub fn write_outline<W: Write>(
    root: &Section,
    writer: &mut W,
    mode: OutlineMode,
) -> io::Result<()> {
    for section in root.iter() {
        match mode {
            OutlineMode::Plain => writeln!(writer, "{}", section.title)?,
            OutlineMode::Indented => {
                writeln!(writer, "{}{}", "\t".repeat(section.level()), section.title)?;
            }
            OutlineMode::IndentedNumbered => {
                let indent = "\t".repeat(section.level());
                if section.path().is_empty() {
                    // The root has no position prefix
                    writeln!(writer, "{indent}{}", section.title)?;
                } else {
                    let dotted: Vec<String> =
                        section.path().iter().map(u32::to_string).collect();
                    writeln!(writer, "{indent}{} {}", dotted.join("."), section.title)?;
                }
            }
        }
    }
    Ok(())
}

impl Section {
    /// Print this tree's outline to stdout.
    pub fn print(&self, mode: OutlineMode) -> io::Result<()> {
        let stdout = io::stdout();
        write_outline(self, &mut stdout.lock(), mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Section {
        let mut root = Section::new("Book");
        root.insert(&[1], "One").unwrap();
        root.insert(&[1, 2], "One-B").unwrap();
        root.insert(&[1, 2, 1], "Deep").unwrap();
        root
    }

    fn render(root: &Section, mode: OutlineMode) -> String {
        let mut out = Vec::new();
        write_outline(root, &mut out, mode).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain() {
        assert_eq!(
            render(&sample_tree(), OutlineMode::Plain),
            "Book\nOne\nOne-B\nDeep\n"
        );
    }

    #[test]
    fn test_indented() {
        assert_eq!(
            render(&sample_tree(), OutlineMode::Indented),
            "Book\n\tOne\n\t\tOne-B\n\t\t\tDeep\n"
        );
    }

    #[test]
    fn test_indented_numbered() {
        assert_eq!(
            render(&sample_tree(), OutlineMode::IndentedNumbered),
            "Book\n\t1 One\n\t\t1.2 One-B\n\t\t\t1.2.1 Deep\n"
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("plain".parse::<OutlineMode>().unwrap(), OutlineMode::Plain);
        assert_eq!(
            "Indented".parse::<OutlineMode>().unwrap(),
            OutlineMode::Indented
        );
        assert_eq!(
            "INDENTED+NUMBERED".parse::<OutlineMode>().unwrap(),
            OutlineMode::IndentedNumbered
        );
    }

    #[test]
    fn test_unknown_mode_fails() {
        match "fancy".parse::<OutlineMode>().unwrap_err() {
            Error::UnknownMode(s) => assert_eq!(s, "fancy"),
            other => panic!("expected UnknownMode, got {other:?}"),
        }
    }
}
