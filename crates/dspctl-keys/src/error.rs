//! Resolver errors.

use dspctl_core::{Direction, ErrorKind};
use thiserror::Error;

use crate::stream::StreamType;

/// Errors raised while resolving key vectors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The stream could not report its attributes, devices or volume.
    #[error("stream {what} unavailable: {reason}")]
    Source {
        /// Which query failed.
        what: &'static str,
        /// Collaborator's explanation.
        reason: String,
    },

    /// The resolver has no rule for this stream type.
    #[error("{resolver}: unsupported stream type {stream_type}")]
    UnsupportedStreamType {
        /// Resolver that rejected the stream.
        resolver: &'static str,
        /// Offending stream type.
        stream_type: StreamType,
    },

    /// The stream type does not support this direction.
    #[error("{stream_type} does not support direction {direction:?}")]
    InvalidDirection {
        /// Stream type.
        stream_type: StreamType,
        /// Requested direction.
        direction: Direction,
    },

    /// A calibration gain outside [0, 1].
    #[error("volume {0} outside the calibration curve")]
    VolumeOutOfRange(f32),

    /// Calibration needs at least one volume pair.
    #[error("stream has no volume pairs")]
    NoVolume,

    /// A control tag name that is not in the catalogue.
    #[error("unknown control tag: {0}")]
    UnknownTag(String),
}

impl Error {
    /// Shorthand for a collaborator failure.
    pub fn unavailable(what: &'static str, reason: impl Into<String>) -> Self {
        Error::Source {
            what,
            reason: reason.into(),
        }
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Source { .. } | Error::NoVolume | Error::UnknownTag(_) => {
                ErrorKind::MalformedInput
            }
            Error::UnsupportedStreamType { .. }
            | Error::InvalidDirection { .. }
            | Error::VolumeOutOfRange(_) => ErrorKind::UnsupportedCombination,
        }
    }
}

/// Result alias for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            Error::unavailable("attributes", "closed").kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            Error::InvalidDirection {
                stream_type: StreamType::DeepBuffer,
                direction: Direction::Input,
            }
            .kind(),
            ErrorKind::UnsupportedCombination
        );
        assert_eq!(
            Error::VolumeOutOfRange(1.5).kind(),
            ErrorKind::UnsupportedCombination
        );
    }

    #[test]
    fn display() {
        let err = Error::UnsupportedStreamType {
            resolver: "graph",
            stream_type: StreamType::VoiceCall,
        };
        assert_eq!(err.to_string(), "graph: unsupported stream type voice-call");
        assert_eq!(
            Error::unavailable("devices", "detached").to_string(),
            "stream devices unavailable: detached"
        );
    }
}
