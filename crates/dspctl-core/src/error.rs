//! Error taxonomy shared by every dspctl crate.

use thiserror::Error;

/// Failure class of an encode or resolve call.
///
/// Each crate has its own error enum; all of them map onto one of these
/// kinds so callers can decide policy without matching crate-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A lookup against a closed table (endpoint, device, stream type) failed.
    ConfigurationNotFound,
    /// A required input structure was missing or empty.
    MalformedInput,
    /// The stream type, direction or format combination is not modelled.
    UnsupportedCombination,
    /// The output buffer could not be allocated.
    AllocationFailure,
}

impl ErrorKind {
    /// Short lowercase name, used in log fields and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::ConfigurationNotFound => "configuration-not-found",
            ErrorKind::MalformedInput => "malformed-input",
            ErrorKind::UnsupportedCombination => "unsupported-combination",
            ErrorKind::AllocationFailure => "allocation-failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the core media-format rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Bit width outside {16, 24, 32}
    #[error("unsupported bit width: {0}")]
    UnsupportedBitWidth(u16),
}

impl Error {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedBitWidth(_) => ErrorKind::UnsupportedCombination,
        }
    }
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_distinct() {
        let kinds = [
            ErrorKind::ConfigurationNotFound,
            ErrorKind::MalformedInput,
            ErrorKind::UnsupportedCombination,
            ErrorKind::AllocationFailure,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn bit_width_error_display_and_kind() {
        let err = Error::UnsupportedBitWidth(20);
        assert_eq!(err.to_string(), "unsupported bit width: 20");
        assert_eq!(err.kind(), ErrorKind::UnsupportedCombination);
    }
}
