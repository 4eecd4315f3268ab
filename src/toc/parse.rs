//! Title line classification.
//!
//! Recognizes the three section title conventions used by the book's
//! table of contents, checked in priority order: a top-level part
//! (`Part <ROMAN>: <title>`), a chapter within the current part
//! (`Chapter <N> <title>`), and a dotted numeric subsection
//! (`<N.N[.N]> <title>`).
//!
//! Anything else is rejected with [`Error::TitleFormat`] naming the
//! exact offending line.

use crate::error::{Error, Result};

/// Which kind of section title a line was classified as, carrying the
/// numeric position it declares.
///
/// `Chapter` and `Subsection` markers do not know their enclosing part;
/// the tree builder resolves that from the most recently seen `Part`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMarker {
    /// `Part III: ...` with the roman numeral decoded to an integer.
    Part(u32),
    /// `Chapter 5 ...` with the chapter number.
    Chapter(u32),
    /// `10.11 ...` as each dot-separated integer, outermost first.
    Subsection(Vec<u32>),
}

/// A successfully classified title line: the positional marker plus the
/// cleaned title text (marker and separator stripped, whitespace trimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    pub marker: TitleMarker,
    pub title: String,
}

/// Decode a roman numeral string to an integer.
///
/// Standard subtractive-pair decoding in a single left-to-right pass: a
/// numeral's value is subtracted when it is less than the value of the
/// numeral immediately following it, otherwise added. Canonical
/// well-formedness is not validated, so non-canonical spellings like
/// `IIII` decode to a value rather than failing.
///
/// Returns `None` for an empty string or any character outside `IVXLCDM`.
pub fn decode_roman(numerals: &str) -> Option<u32> {
    let values: Vec<u32> = numerals.chars().map(roman_digit).collect::<Option<_>>()?;
    if values.is_empty() {
        return None;
    }

    let mut total: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        if values.get(i + 1).is_some_and(|&next| value < next) {
            total -= i64::from(value);
        } else {
            total += i64::from(value);
        }
    }

    u32::try_from(total).ok()
}

fn roman_digit(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Classify one line of table-of-contents text.
///
/// Leading and trailing whitespace is ignored for matching, but a
/// rejected line is reported exactly as given, whitespace included.
pub fn parse_title(line: &str) -> Result<ParsedTitle> {
    let trimmed = line.trim();
    parse_part(trimmed)
        .or_else(|| parse_chapter(trimmed))
        .or_else(|| parse_subsection(trimmed))
        .ok_or_else(|| Error::TitleFormat(line.to_string()))
}

/// `Part <ROMAN>: <title>`
fn parse_part(line: &str) -> Option<ParsedTitle> {
    let rest = line.strip_prefix("Part ")?;
    let (numerals, title) = rest.split_once(':')?;
    let part = decode_roman(numerals.trim())?;

    Some(ParsedTitle {
        marker: TitleMarker::Part(part),
        title: title.trim().to_string(),
    })
}

/// `Chapter <digits><title>`
fn parse_chapter(line: &str) -> Option<ParsedTitle> {
    let rest = line.strip_prefix("Chapter ")?;
    let digits_len = rest.chars().take_while(char::is_ascii_digit).count();
    let chapter: u32 = rest[..digits_len].parse().ok()?;

    Some(ParsedTitle {
        marker: TitleMarker::Chapter(chapter),
        title: rest[digits_len..].trim().to_string(),
    })
}

/// `<d.d[.d]> <title>`, at least two dot-separated integers.
fn parse_subsection(line: &str) -> Option<ParsedTitle> {
    let token = line.split_whitespace().next()?;
    if !token.contains('.') {
        return None;
    }

    let ids: Vec<u32> = token
        .split('.')
        .map(|n| n.parse().ok())
        .collect::<Option<_>>()?;

    Some(ParsedTitle {
        marker: TitleMarker::Subsection(ids),
        title: line[token.len()..].trim().to_string(),
    })
}
