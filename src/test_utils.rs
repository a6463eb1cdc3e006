mod data;
mod helpers;

pub use data::{sample_catalog, SAMPLE_CATALOG};
pub use helpers::tmp_file_path;

// Re-export common test types/traits
pub use crate::{
    catalog::{ControlCatalog, HierarchyLines},
    error::{CatalogError, CatalogErrorKind, IOError, QueryError, Result, XmlError},
    load_catalog,
    utils::{read_file, write_file},
    xml::{local_name, Document, NodeId, Parser},
};
