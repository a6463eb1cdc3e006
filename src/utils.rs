use std::fs;

use crate::error::{CatalogError, CatalogErrorKind, IOError, Result};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::new(CatalogErrorKind::IO(
            IOError::FileNotFound(path.to_string()),
        )),
        std::io::ErrorKind::PermissionDenied => CatalogError::new(CatalogErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => CatalogError::new(CatalogErrorKind::IO(IOError::ReadError(e.to_string()))),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => CatalogError::new(CatalogErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => CatalogError::new(CatalogErrorKind::IO(IOError::WriteError(e.to_string()))),
    })
}
