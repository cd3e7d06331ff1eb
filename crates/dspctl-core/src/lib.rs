//! dspctl Core - shared vocabulary for DSP control payloads
//!
//! Everything the payload compiler and the key-vector resolver agree on lives
//! here: the error taxonomy, stream direction, PCM sample-format rules, the
//! fixed channel-role tables and per-channel volume data.
//!
//! # Contents
//!
//! - [`ErrorKind`] - the four failure classes every dspctl error reports
//! - [`Direction`] - playback, capture or loopback
//! - [`PcmSampleFormat`] - bit width to container width and Q-factor
//! - [`MediaConfig`] - negotiated sample rate, width and channel count
//! - [`ChannelRole`], [`channel_roles`], [`active_channel_mask`] - channel layout tables
//! - [`VolumeData`] - per-channel-mask gain pairs
//!
//! # Example
//!
//! ```rust
//! use dspctl_core::{PcmSampleFormat, channel_roles, ChannelRole};
//!
//! let fmt = PcmSampleFormat::from_bit_width(24).unwrap();
//! assert_eq!(fmt.bits_per_sample, 32);
//! assert_eq!(fmt.q_factor, 27);
//!
//! assert_eq!(channel_roles(2), vec![ChannelRole::Left, ChannelRole::Right]);
//! ```

mod channel;
mod error;
mod media;
mod volume;

pub use channel::{ChannelRole, MAX_MAPPED_CHANNELS, active_channel_mask, channel_roles};
pub use error::{Error, ErrorKind, Result};
pub use media::{Direction, MediaConfig, PcmSampleFormat, SpeakerRotation};
pub use volume::{ChannelVolume, VolumeData};
