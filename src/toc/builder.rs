//! Table-of-contents construction from raw text lines.

use std::path::Path;

use crate::error::{Error, Result};
use crate::util;

use super::Section;
use super::parse::{TitleMarker, parse_title};

/// Build a table of contents from a sequence of text lines.
///
/// Each line is classified by [`parse_title`]; lines matching no title
/// pattern (blank lines, body text) are expected noise and skipped
/// silently. Recognized titles are inserted in document order, so every
/// section's ancestors are present by the time it is inserted.
///
/// With `include_parts` set, `Part` lines become top-level sections and
/// each one becomes the enclosing part for the chapters and subsections
/// that follow it. A chapter or subsection seen before any part has no
/// resolvable position and is skipped like any other noise line. With
/// `include_parts` unset, parts are never inserted and chapters are
/// top-level throughout.
///
/// Structural errors from out-of-order input propagate as
/// [`Error::InvalidPath`].
pub fn construct_toc<I, S>(lines: I, title: &str, include_parts: bool) -> Result<Section>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut toc = Section::new(title);
    let mut current_part: Option<u32> = None;

    for line in lines {
        let parsed = match parse_title(line.as_ref()) {
            Ok(parsed) => parsed,
            Err(Error::TitleFormat(_)) => continue,
            Err(e) => return Err(e),
        };

        let path: Vec<u32> = match parsed.marker {
            TitleMarker::Part(part) => {
                if !include_parts {
                    continue;
                }
                current_part = Some(part);
                vec![part]
            }
            TitleMarker::Chapter(chapter) => {
                if !include_parts {
                    vec![chapter]
                } else if let Some(part) = current_part {
                    vec![part, chapter]
                } else {
                    // No enclosing part yet: the position is unresolvable
                    continue;
                }
            }
            TitleMarker::Subsection(ids) => {
                if !include_parts {
                    ids
                } else if let Some(part) = current_part {
                    let mut path = Vec::with_capacity(ids.len() + 1);
                    path.push(part);
                    path.extend(ids);
                    path
                } else {
                    continue;
                }
            }
        };

        toc.insert(&path, &parsed.title)?;
    }

    Ok(toc)
}

/// Read a table-of-contents text file into a [`Section`] tree.
///
/// The file is decoded tolerantly (UTF-8 with a Windows-1252 fallback)
/// and fed line-by-line through [`construct_toc`].
pub fn read_toc<P: AsRef<Path>>(path: P, title: &str, include_parts: bool) -> Result<Section> {
    let text = util::read_text(path)?;
    construct_toc(text.lines(), title, include_parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 7] = [
        "Part I: One",
        "Chapter 1 A",
        "Chapter 2 B",
        "2.1 B-sub",
        "Chapter 3 C",
        "Part II: Two",
        "Chapter 4 D",
    ];

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_construct_with_parts() {
        let toc = construct_toc(LINES, "Book", true).unwrap();

        assert_eq!(titles(&toc.children), ["One", "Two"]);
        let one = &toc.children[0];
        assert_eq!(titles(&one.children), ["A", "B", "C"]);
        assert_eq!(titles(&one.children[1].children), ["B-sub"]);
        assert_eq!(toc.height(), 3);
    }

    #[test]
    fn test_construct_without_parts() {
        let toc = construct_toc(LINES, "Book", false).unwrap();

        assert_eq!(titles(&toc.children), ["A", "B", "C", "D"]);
        assert_eq!(titles(&toc.children[1].children), ["B-sub"]);
        assert_eq!(toc.height(), 2);
    }

    #[test]
    fn test_noise_lines_skipped() {
        let lines = [
            "Table of Contents",
            "",
            "Chapter 1 Intro",
            "some body text",
            "1.1 Details",
        ];
        let toc = construct_toc(lines, "Book", false).unwrap();
        assert_eq!(titles(&toc.children), ["Intro"]);
        assert_eq!(titles(&toc.children[0].children), ["Details"]);
    }

    #[test]
    fn test_chapter_before_any_part_is_skipped() {
        let lines = ["Chapter 1 Early", "1.1 Early-sub", "Part I: Late", "Chapter 2 Inside"];
        let toc = construct_toc(lines, "Book", true).unwrap();
        assert_eq!(titles(&toc.children), ["Late"]);
        assert_eq!(titles(&toc.children[0].children), ["Inside"]);
    }

    #[test]
    fn test_early_chapter_does_not_collide_with_later_part_id() {
        // "Chapter 1" precedes "Part I"; both would claim top-level id 1
        // if the chapter were inserted, aborting the build
        let lines = ["Chapter 1 Early", "Part I: Late", "Chapter 2 Inside"];
        let toc = construct_toc(lines, "Book", true).unwrap();
        assert_eq!(titles(&toc.children), ["Late"]);
        assert_eq!(toc.depth("Early"), None);
    }

    #[test]
    fn test_subsection_without_ancestor_fails() {
        let lines = ["Chapter 1 A", "2.1 Orphan"];
        let err = construct_toc(lines, "Book", false).unwrap_err();
        match err {
            Error::InvalidPath(path) => assert_eq!(path, vec![2, 1]),
            other => panic!("expected InvalidPath, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let toc = construct_toc(std::iter::empty::<&str>(), "Book", true).unwrap();
        assert!(toc.children.is_empty());
        assert_eq!(toc.title, "Book");
        assert_eq!(toc.height(), 0);
    }
}
