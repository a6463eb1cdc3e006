//! Arena-backed XML document tree
//!
//! Elements live in a flat arena and are addressed by [`NodeId`] handles.
//! Handle equality is identity equality, which is what the catalog's
//! parent map is keyed on; structural comparison of nodes is never used
//! for lookups.

use indexmap::IndexMap;

/// Handle to an element in a [`Document`] arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// One XML element
#[derive(Clone, Debug)]
pub struct Node {
    /// Qualified tag name, exactly as written in the source
    pub name: String,
    /// Attributes in source order
    pub attributes: IndexMap<String, String>,
    /// Text content before the first child element, if any non-whitespace
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<NodeId>,
}

/// A parsed XML document, immutable after construction
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// Handle of the document root element
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by handle.
    ///
    /// Handles are only minted by the parser for this arena, so the index
    /// is always in bounds.
    #[allow(clippy::indexing_slicing)]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Direct children of a node in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first walk of `id` and all of its descendants in document order
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }
}

/// Document-order iterator over a subtree
#[derive(Debug)]
pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.document.node(id);
        self.stack.extend(node.children.iter().rev().copied());
        Some(id)
    }
}

/// Strip the namespace part of a qualified name.
///
/// Handles both the `{uri}local` convention and the `prefix:local` form
/// found in raw catalog files; bare names pass through untouched.
pub fn local_name(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix('{') {
        if let Some((_, local)) = rest.split_once('}') {
            return local;
        }
    }
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Node {
        Node {
            name: name.to_string(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_descendants_document_order() {
        // root -> (a -> (b), c)
        let mut nodes = vec![leaf("root"), leaf("a"), leaf("b"), leaf("c")];
        nodes[0].children = vec![NodeId::new(1), NodeId::new(3)];
        nodes[1].children = vec![NodeId::new(2)];
        let doc = Document::new(nodes, NodeId::new(0));

        let names: Vec<&str> = doc
            .descendants(doc.root())
            .map(|id| doc.node(id).name.as_str())
            .collect();
        assert_eq!(names, ["root", "a", "b", "c"]);
    }

    #[test]
    fn test_local_name_brace_form() {
        assert_eq!(
            local_name("{http://scap.nist.gov/schema/sp800-53/2.0}control"),
            "control"
        );
    }

    #[test]
    fn test_local_name_prefix_form() {
        assert_eq!(local_name("controls:control"), "control");
        assert_eq!(local_name("number"), "number");
    }

    #[test]
    fn test_local_name_unterminated_brace() {
        assert_eq!(local_name("{broken"), "{broken");
    }
}
