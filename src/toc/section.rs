//! Section tree nodes and positional insertion.

use std::fmt;

use crate::error::{Error, Result};

/// A node in a table-of-contents tree.
///
/// The root section represents the book itself: it has an empty path and
/// usually the book title. Every other node carries the full sequence of
/// sibling ids from the root down to itself, so its depth and position
/// prefix fall out of the path without parent pointers.
///
/// # Equality caveat
///
/// Two sections compare equal when their **titles** are equal, regardless
/// of where they sit in the tree. This mirrors how [`Section::depth`]
/// looks sections up: when a title repeats, the first preorder match
/// wins. Callers needing structural identity should compare [`path`]s.
///
/// [`path`]: Section::path
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Section {
    /// Display title; may be empty for a synthetic root.
    pub title: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    path: Vec<u32>,
    /// Child sections, ordered by ascending id.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Section>,
}

impl Section {
    /// Create an empty root section for a book.
    pub fn new(title: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            path: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The sequence of sibling ids locating this node from the root.
    /// Empty for the root itself.
    pub fn path(&self) -> &[u32] {
        &self.path
    }

    /// This node's position among its siblings, or `None` for the root.
    pub fn id(&self) -> Option<u32> {
        self.path.last().copied()
    }

    /// Distance from the root: 0 for the root, parent's level + 1 below.
    pub fn level(&self) -> usize {
        self.path.len()
    }

    /// Insert a section at the position named by `path`.
    ///
    /// Walks down from this node one path id at a time. Every id except
    /// the last must name an existing child at its level; the last id
    /// becomes the new node's position among the siblings reached, kept
    /// in ascending-id order.
    ///
    /// Fails with [`Error::InvalidPath`] when an intermediate ancestor is
    /// missing (ancestors are never fabricated), when the full path
    /// already names an existing node, or when `path` is empty. Parents
    /// must therefore be inserted before their children, which holds for
    /// input in document order.
    pub fn insert(&mut self, path: &[u32], title: &str) -> Result<()> {
        let Some((&id, ancestors)) = path.split_last() else {
            return Err(Error::InvalidPath(path.to_vec()));
        };

        let mut current = self;
        for &ancestor_id in ancestors {
            match current.child_position(ancestor_id) {
                Some(i) => current = &mut current.children[i],
                None => return Err(Error::InvalidPath(path.to_vec())),
            }
        }

        if current.child_position(id).is_some() {
            // The full path already names a node; a duplicate sibling id
            // would be unreachable by any later lookup.
            return Err(Error::InvalidPath(path.to_vec()));
        }

        let section = Section {
            title: title.to_string(),
            path: path.to_vec(),
            children: Vec::new(),
        };

        // Ascending-id order holds whether or not sibling numbering is
        // dense or starts at 1.
        let at = current
            .children
            .partition_point(|c| c.id().is_some_and(|cid| cid < id));
        current.children.insert(at, section);
        Ok(())
    }

    fn child_position(&self, id: u32) -> Option<usize> {
        self.children.iter().position(|c| c.id() == Some(id))
    }

    /// Depth of the first section whose title matches, in preorder, or
    /// `None` when no section carries that title.
    ///
    /// Matching is title-only (see the type-level caveat): with repeated
    /// titles the earliest match in reading order is reported.
    pub fn depth(&self, title: &str) -> Option<usize> {
        self.iter().find(|s| s.title == title).map(Section::level)
    }

    /// Longest downward edge-path from this node to a leaf. A leaf has
    /// height 0; the root's height measures the whole tree.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(Section::height)
            .max()
            .map_or(0, |h| h + 1)
    }
}

/// Title-only equality; see the caveat on [`Section`].
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Section {}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.title);
        }
        let dotted: Vec<String> = self.path.iter().map(u32::to_string).collect();
        write!(f, "({}) {}", dotted.join("."), self.title)
    }
}
