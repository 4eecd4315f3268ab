//! # folio
//!
//! A small library for analyzing a book's structure and text.
//!
//! ## Features
//!
//! - Parse table-of-contents text into a hierarchical [`Section`] tree
//! - Query section depth and tree height, traverse in preorder
//! - Render outlines in plain, indented, or numbered formats
//! - Compute word, letter, and n-gram frequency statistics over raw text
//!
//! ## Quick Start
//!
//! ```
//! use folio::{OutlineMode, construct_toc};
//!
//! let lines = [
//!     "Part I: Artificial Intelligence",
//!     "Chapter 1 Introduction",
//!     "1.1 What Is AI?",
//! ];
//!
//! let toc = construct_toc(lines, "AI: A Modern Approach", true)?;
//! assert_eq!(toc.height(), 3);
//! assert_eq!(toc.depth("Introduction"), Some(2));
//! toc.print(OutlineMode::IndentedNumbered)?;
//! # Ok::<(), folio::Error>(())
//! ```
//!
//! Section equality is intentionally title-only, matching the depth
//! lookup's first-preorder-match behavior; see [`Section`] for details.

pub mod stats;
pub mod toc;

mod error;
mod util;

pub use error::{Error, Result};
pub use toc::{
    OutlineMode, ParsedTitle, Preorder, Section, TitleMarker, construct_toc, decode_roman,
    parse_title, read_toc, write_outline,
};
pub use util::decode_text;
