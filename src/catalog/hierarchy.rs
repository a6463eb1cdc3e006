//! Indented hierarchy lines for a control subtree
//!
//! Depth is reconstructed from the parent map rather than recursion depth:
//! the walk over the subtree is a flat iterator, and an explicit ancestor
//! stack tracks the chain from the control down to the current node's
//! parent.

use crate::catalog::ControlCatalog;
use crate::xml::{local_name, Descendants, NodeId};

/// Lazy iterator over one control's indented tag lines
#[derive(Debug)]
pub struct HierarchyLines<'a> {
    catalog: &'a ControlCatalog,
    walk: Descendants<'a>,
    /// Ancestor chain from the control node to the current node's parent
    stack: Vec<NodeId>,
}

impl<'a> HierarchyLines<'a> {
    pub(crate) fn new(catalog: &'a ControlCatalog, control: NodeId) -> Self {
        Self {
            catalog,
            walk: catalog.document().descendants(control),
            stack: vec![control],
        }
    }
}

impl Iterator for HierarchyLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let id = self.walk.next()?;
            let node = self.catalog.document().node(id);
            let tag = local_name(&node.name);
            // The synthetic "control" wrapper never appears in the output.
            if tag == "control" {
                continue;
            }

            if let Some(parent) = self.catalog.parent(id) {
                if let Some(pos) = self.stack.iter().position(|&p| p == parent) {
                    // Parent already on the stack: pop back down to it.
                    self.stack.truncate(pos + 1);
                } else {
                    self.stack.push(parent);
                }
            }

            let depth = self.stack.len().saturating_sub(1);
            return Some(format!("{}{}", "\t".repeat(depth), tag));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn test_sibling_backtrack_resets_depth() -> Result<()> {
        let xml = "<root><control>\
            <number>X-1</number>\
            <statement><statement><description>deep</description></statement></statement>\
            <references>r</references>\
            </control></root>";
        let catalog = ControlCatalog::parse(xml)?;
        let lines: Vec<String> = catalog.hierarchy("number", "X-1")?.collect();
        assert_eq!(
            lines,
            [
                "number",
                "statement",
                "\tstatement",
                "\t\tdescription",
                "references",
            ]
        );
        Ok(())
    }
}
