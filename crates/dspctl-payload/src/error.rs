//! Error types for payload encoding.

use std::collections::TryReserveError;

use dspctl_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur while encoding a payload.
#[derive(Debug, Error)]
pub enum Error {
    /// Output buffer could not be allocated
    #[error("failed to allocate {requested}-byte payload: {source}")]
    Allocation {
        /// Padded size that was requested.
        requested: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// Writing into the output buffer failed
    #[error("failed to write payload: {0}")]
    Write(#[from] std::io::Error),

    /// Trailer does not fit the 32-bit size field
    #[error("payload trailer of {0} bytes exceeds the envelope size field")]
    TooLarge(usize),

    /// Module list has no entries
    #[error("module info has no entries")]
    NoModule,

    /// A required input was empty
    #[error("empty {0}")]
    Empty(&'static str),

    /// A field holds more entries than the firmware accepts
    #[error("{field} has {count} entries, at most {max} supported")]
    TooMany {
        /// Field name.
        field: &'static str,
        /// Entries supplied.
        count: usize,
        /// Firmware limit.
        max: usize,
    },

    /// Two parallel arrays differ in length
    #[error("{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Field name.
        field: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Media format not representable
    #[error(transparent)]
    Format(#[from] dspctl_core::Error),

    /// Endpoint lookup failed
    #[error(transparent)]
    Endpoint(#[from] dspctl_hwep::Error),
}

impl Error {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Allocation { .. } | Error::Write(_) => ErrorKind::AllocationFailure,
            Error::TooLarge(_)
            | Error::NoModule
            | Error::Empty(_)
            | Error::TooMany { .. }
            | Error::LengthMismatch { .. } => ErrorKind::MalformedInput,
            Error::Format(e) => e.kind(),
            Error::Endpoint(e) => e.kind(),
        }
    }
}

/// Result alias for encoders.
pub type Result<T> = std::result::Result<T, Error>;
