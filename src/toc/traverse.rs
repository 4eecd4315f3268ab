//! Preorder traversal over a section tree.

use super::Section;

/// Depth-first preorder iterator: yields a node, then its children
/// left-to-right. The order matches the book's top-to-bottom structure.
pub struct Preorder<'a> {
    stack: Vec<&'a Section>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children pushed right-to-left so the leftmost pops first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl Section {
    /// Iterate over this subtree in preorder, starting with `self`.
    /// Deterministic and restartable: each call starts a fresh pass.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Section;
    type IntoIter = Preorder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
