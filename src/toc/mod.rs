//! Table-of-contents modeling.
//!
//! This module contains:
//! - Title line classification (`Part` / `Chapter` / dotted subsections)
//! - The [`Section`] tree with positional insertion
//! - Preorder traversal and depth/height queries
//! - Outline rendering in plain, indented, and numbered formats

mod builder;
mod parse;
mod render;
mod section;
mod traverse;

pub use builder::{construct_toc, read_toc};
pub use parse::{ParsedTitle, TitleMarker, decode_roman, parse_title};
pub use render::{OutlineMode, write_outline};
pub use section::Section;
pub use traverse::Preorder;
