//! Error types for XML document generation.

use std::fmt::{self, Display};
use std::io;

/// Result type alias for minxml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for XML document generation.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of error that occurred.
#[derive(Debug)]
pub enum ErrorKind {
    /// An element name failed validation. Carries the offending name.
    InvalidElementName(String),
    /// A namespace prefix failed validation. Carries the offending prefix.
    InvalidNamespace(String),
    /// An attribute name failed validation. Carries the offending name.
    InvalidAttributeName(String),
    /// An I/O error from one of the persistence helpers.
    Io(io::Error),
}

impl Error {
    /// Creates a new error with the given kind.
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Creates an invalid element name error.
    #[inline]
    pub fn invalid_element_name<S: Into<String>>(name: S) -> Self {
        Self::new(ErrorKind::InvalidElementName(name.into()))
    }

    /// Creates an invalid namespace error.
    #[inline]
    pub fn invalid_namespace<S: Into<String>>(namespace: S) -> Self {
        Self::new(ErrorKind::InvalidNamespace(namespace.into()))
    }

    /// Creates an invalid attribute name error.
    #[inline]
    pub fn invalid_attribute_name<S: Into<String>>(name: S) -> Self {
        Self::new(ErrorKind::InvalidAttributeName(name.into()))
    }

    /// Returns the offending name for validation errors, `None` for I/O
    /// errors.
    pub fn offending_name(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::InvalidElementName(name)
            | ErrorKind::InvalidNamespace(name)
            | ErrorKind::InvalidAttributeName(name) => Some(name),
            ErrorKind::Io(_) => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidElementName(name) => {
                write!(f, "the XML element name '{}' contains invalid characters or is empty", name)
            }
            ErrorKind::InvalidNamespace(namespace) => {
                write!(f, "the XML namespace '{}' contains invalid characters or is empty", namespace)
            }
            ErrorKind::InvalidAttributeName(name) => {
                write!(f, "the XML attribute name '{}' contains invalid characters or is empty", name)
            }
            ErrorKind::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::new(ErrorKind::Io(e))
    }
}
