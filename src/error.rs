//! Error handling types for the catalog reader
//!
//! This module provides custom error types that give detailed information
//! about failures, including line and column information where available.

use std::{error::Error, fmt};

/// Main error type for catalog operations
#[derive(Debug)]
pub struct CatalogError {
    /// The specific kind of error
    kind: CatalogErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum CatalogErrorKind {
    IO(IOError),
    Xml(XmlError),
    Query(QueryError),
}

/// XML reading errors
#[derive(Debug, Clone)]
pub enum XmlError {
    /// Closing tag does not match the open element
    MismatchedTag(String),
    /// Attribute name appears twice on one element
    DuplicateAttribute(String),
    /// Found an invalid entity reference
    InvalidEntity(String),
    /// Element or attribute name is malformed
    InvalidName,
    /// Input is not valid UTF-8
    InvalidUtf8,
    /// Found an unexpected character in the input
    UnexpectedCharacter(char),
    /// Reached end of input unexpectedly
    UnexpectedEOF,
    /// Closing tag with no matching open element
    UnexpectedClosingTag,
    /// Content remains after the document root was closed
    TrailingContent,
}

/// Lookup and pattern errors
#[derive(Debug, Clone)]
pub enum QueryError {
    /// No control has a direct child with the given tag and text
    ControlNotFound { tag: String, text: String },
    /// A scan pattern failed to compile
    InvalidPattern(String),
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl Location {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl CatalogError {
    pub fn new(kind: CatalogErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &CatalogErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            CatalogErrorKind::IO(err) => err.to_string(),
            CatalogErrorKind::Xml(err) => err.to_string(),
            CatalogErrorKind::Query(err) => err.to_string(),
        };

        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, base_error
            )?;
        } else {
            write!(f, "Error: {}", base_error)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTag(name) => write!(f, "Mismatched closing tag '</{}>'", name),
            Self::DuplicateAttribute(name) => write!(f, "Duplicate attribute '{}'", name),
            Self::InvalidEntity(e) => write!(f, "Invalid entity reference '&{};'", e),
            Self::InvalidName => write!(f, "Invalid element or attribute name"),
            Self::InvalidUtf8 => write!(f, "Input is not valid UTF-8"),
            Self::UnexpectedCharacter(c) => write!(f, "Unexpected character '{}'", c),
            Self::UnexpectedEOF => write!(f, "Unexpected end of input"),
            Self::UnexpectedClosingTag => write!(f, "Closing tag without an open element"),
            Self::TrailingContent => write!(f, "Content after the document root"),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlNotFound { tag, text } => {
                write!(f, "No control with <{}> matching '{}'", tag, text)
            }
            Self::InvalidPattern(msg) => write!(f, "Invalid scan pattern: {}", msg),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
