//! Control catalog traversal
//!
//! [`ControlCatalog`] loads a NIST 800-53 catalog document once and exposes
//! lookup, hierarchy printing, assignment extraction and text dumps over it.
//! The document is immutable for the lifetime of the catalog; the
//! child-to-parent map is built a single time at load and never recomputed.

mod assignments;
pub mod hierarchy;

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogErrorKind, QueryError, Result};
use crate::utils::{read_file, write_file};
use crate::xml::{local_name, Document, NodeId, Parser};

pub use hierarchy::HierarchyLines;

/// Placeholder pattern for organization-defined assignments. The published
/// catalog misspells a handful of entries as "organized-defined", so both
/// forms are accepted; the captured value is group 2.
const ASSIGNMENT_PATTERN: &str = r"\[Assignment: organiz(ed|ation)-defined (.*?)\]";

/// A loaded security-control catalog
#[derive(Debug)]
pub struct ControlCatalog {
    document: Document,
    parent_map: HashMap<NodeId, NodeId>,
    assignment_re: Regex,
}

impl ControlCatalog {
    /// Load a catalog from an XML file.
    ///
    /// Fails on missing or unreadable files and on malformed XML; both are
    /// fatal for a batch tool and are propagated to the caller.
    pub fn from_file(path: &str) -> Result<Self> {
        debug!("Reading catalog file: {}", path);
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.with_context(format!("while loading {}", path)))
    }

    /// Parse a catalog from an XML string
    pub fn parse(xml: &str) -> Result<Self> {
        let document = Parser::new(xml.as_bytes()).parse()?;
        let parent_map = build_parent_map(&document);
        let assignment_re = Regex::new(ASSIGNMENT_PATTERN).map_err(|e| {
            CatalogError::new(CatalogErrorKind::Query(QueryError::InvalidPattern(
                e.to_string(),
            )))
        })?;
        info!("Catalog loaded: {} elements", document.len());
        Ok(Self {
            document,
            parent_map,
            assignment_re,
        })
    }

    /// The underlying document tree
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Parent of a node, from the map built at load time
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent_map.get(&id).copied()
    }

    /// Find the first control whose direct child field matches.
    ///
    /// The scan is fixed at two levels: the root's direct children are the
    /// candidate controls and their direct children the candidate fields.
    /// A field matches when its namespace-stripped tag equals `tag` and its
    /// text equals `text` exactly. First match in document order wins.
    pub fn find_control(&self, tag: &str, text: &str) -> Option<NodeId> {
        let root = self.document.root();
        for &control in self.document.children(root) {
            for &field in self.document.children(control) {
                let node = self.document.node(field);
                if local_name(&node.name) == tag && node.text.as_deref() == Some(text) {
                    return Some(control);
                }
            }
        }
        None
    }

    fn require_control(&self, tag: &str, text: &str) -> Result<NodeId> {
        self.find_control(tag, text).ok_or_else(|| {
            CatalogError::new(CatalogErrorKind::Query(QueryError::ControlNotFound {
                tag: tag.to_string(),
                text: text.to_string(),
            }))
        })
    }

    /// Lazy sequence of indented tag names for one control's subtree.
    ///
    /// Errors with the control-not-found kind when the lookup misses.
    pub fn hierarchy(&self, tag: &str, text: &str) -> Result<HierarchyLines<'_>> {
        let control = self.require_control(tag, text)?;
        Ok(HierarchyLines::new(self, control))
    }

    /// Print a control's hierarchy to stdout, one tag per line
    pub fn print_hierarchy(&self, tag: &str, text: &str) -> Result<()> {
        for line in self.hierarchy(tag, text)? {
            println!("{}", line);
        }
        Ok(())
    }

    /// Extract every assignment placeholder into document lines.
    ///
    /// Each returned line is already newline-terminated; joining them yields
    /// the assignment document verbatim.
    pub fn assignment_document(&self) -> Vec<String> {
        assignments::extract(&self.document, &self.assignment_re)
    }

    /// Write the assignment document to a created/truncated file
    pub fn write_assignment_document(&self, path: &str) -> Result<()> {
        let lines = self.assignment_document();
        write_file(path, &lines.concat())?;
        info!("Wrote {} assignment lines to {}", lines.len(), path);
        Ok(())
    }

    /// All descendant text of one control, space-separated on one line
    pub fn control_text(&self, tag: &str, text: &str) -> Result<String> {
        let control = self.require_control(tag, text)?;
        Ok(self.subtree_text(control))
    }

    /// All text in the document, space-separated on one line
    pub fn document_text(&self) -> String {
        self.subtree_text(self.document.root())
    }

    fn subtree_text(&self, id: NodeId) -> String {
        self.document
            .descendants(id)
            .filter_map(|n| self.document.node(n).text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the child-to-parent map with one full document-order walk.
///
/// The underlying tree only carries child links; ancestry during hierarchy
/// printing is reconstructed from this map. Keyed by node handle, so the
/// entries stay valid as long as the document does.
fn build_parent_map(document: &Document) -> HashMap<NodeId, NodeId> {
    let mut map = HashMap::with_capacity(document.len());
    for parent in document.descendants(document.root()) {
        for &child in document.children(parent) {
            map.insert(child, parent);
        }
    }
    map
}
