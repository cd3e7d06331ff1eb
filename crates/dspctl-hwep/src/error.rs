//! Error types for interface table loading and lookup.

use std::path::PathBuf;

use dspctl_core::ErrorKind;
use thiserror::Error;

use crate::endpoint::EndpointFamily;

/// Errors returned by table loading and endpoint lookup.
#[derive(Debug, Error)]
pub enum Error {
    /// The XML file could not be read
    #[error("failed to read interface description '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML
    #[error("failed to parse interface description: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Endpoint name has no link index
    #[error("unknown endpoint name: {0}")]
    UnknownEndpoint(String),

    /// No entry of the family carries the endpoint's link index
    #[error("no {family} entry for endpoint '{name}' (link index {link_index})")]
    NoEntry {
        /// Family that was searched.
        family: EndpointFamily,
        /// Endpoint name requested.
        name: String,
        /// Link index the name resolved to.
        link_index: u32,
    },

    /// Endpoint name does not identify any interface family
    #[error("endpoint '{0}' does not name an interface family")]
    UnknownFamily(String),
}

impl Error {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ReadFile { .. } => ErrorKind::ConfigurationNotFound,
            Error::Xml(_) => ErrorKind::MalformedInput,
            Error::UnknownEndpoint(_) | Error::NoEntry { .. } | Error::UnknownFamily(_) => {
                ErrorKind::ConfigurationNotFound
            }
        }
    }
}

/// Reason a single XML element was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// Attribute at `position` has the wrong name
    #[error("expected attribute '{expected}' at position {position}, found '{found}'")]
    AttributeMismatch {
        /// Zero-based attribute position.
        position: usize,
        /// Name required at that position.
        expected: &'static str,
        /// Name actually present.
        found: String,
    },

    /// Element has fewer attributes than required
    #[error("missing attribute '{expected}' at position {position}")]
    MissingAttribute {
        /// Zero-based attribute position.
        position: usize,
        /// Name required at that position.
        expected: &'static str,
    },

    /// Attribute value is not in its lookup table
    #[error("unknown value '{value}' for attribute '{attribute}'")]
    UnknownValue {
        /// Attribute name.
        attribute: &'static str,
        /// Offending value.
        value: String,
    },

    /// I2S line mask selects an unsupported combination of serial-data lines
    #[error("invalid i2s serial-data line mask: {0:#x}")]
    InvalidLineMask(u32),
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;
