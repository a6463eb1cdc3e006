//! nistcat: traversal utilities for NIST 800-53 control catalogs in XML
//!
//! This crate provides functionality to:
//! - Parse a catalog document into an immutable in-memory tree
//! - Look up individual controls by a (tag, text) field pair
//! - Print a control's element hierarchy with tab indentation
//! - Extract organization-defined assignment placeholders into a flat
//!   document ready for manual completion
//!
//! # Examples
//! ```
//! use nistcat::{load_catalog, Result};
//!
//! fn example() -> Result<()> {
//!     let catalog = load_catalog("800-53-controls.xml")?;
//!     catalog.print_hierarchy("number", "AC-1")?;
//!     catalog.write_assignment_document("assignments.txt")?;
//!     Ok(())
//! }
//! ```

use tracing::{debug, info, instrument};

pub mod catalog;
pub mod error;
pub mod test_utils;
pub mod utils;
pub mod xml;

// Re-exports
pub use catalog::{ControlCatalog, HierarchyLines};
pub use error::{CatalogError, CatalogErrorKind, IOError, QueryError, Result, XmlError};
pub use xml::local_name;

/// Load a catalog file, parsing it fully into memory.
#[instrument]
pub fn load_catalog(path: &str) -> Result<ControlCatalog> {
    debug!("Starting to load catalog: {}", path);

    let catalog = ControlCatalog::from_file(path)?;

    info!("Catalog ready with {} elements", catalog.document().len());
    Ok(catalog)
}
