//! Media-format vocabulary: direction, sample format, negotiated configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction of a stream or device path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Playback (rx).
    #[default]
    Output,
    /// Capture (tx).
    Input,
    /// Loopback, both directions.
    InputOutput,
}

impl Direction {
    /// Numeric direction code used by the session layer.
    pub const fn raw(self) -> u32 {
        match self {
            Direction::Output => 0x1,
            Direction::Input => 0x2,
            Direction::InputOutput => 0x3,
        }
    }
}

/// Speaker channel rotation applied by the media-format converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeakerRotation {
    /// Natural order.
    #[default]
    LeftRight,
    /// Stereo pair swapped.
    RightLeft,
}

/// Storage layout of one PCM sample for a given bit width.
///
/// 16- and 32-bit samples are stored at their natural width in Q15/Q31.
/// 24-bit samples always occupy a 32-bit container in Q27.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmSampleFormat {
    /// Significant bits per sample as requested.
    pub bit_width: u16,
    /// Container width in bits.
    pub bits_per_sample: u16,
    /// Fractional bits of the fixed-point representation.
    pub q_factor: u16,
}

impl PcmSampleFormat {
    /// Apply the container/Q-factor rule to `bit_width`.
    pub fn from_bit_width(bit_width: u16) -> Result<Self> {
        match bit_width {
            16 | 32 => Ok(Self {
                bit_width,
                bits_per_sample: bit_width,
                q_factor: bit_width - 1,
            }),
            24 => Ok(Self {
                bit_width,
                bits_per_sample: 32,
                q_factor: 27,
            }),
            other => Err(Error::UnsupportedBitWidth(other)),
        }
    }
}

/// Negotiated media configuration of a stream or device, as handed to the
/// payload encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit width: 16, 24 or 32.
    pub bit_width: u16,
    /// Channel count.
    pub channels: u16,
    /// Let the DSP keep its native channel count.
    #[serde(default)]
    pub native: bool,
    /// Path direction.
    #[serde(default)]
    pub direction: Direction,
    /// Stereo rotation for the media-format converter.
    #[serde(default)]
    pub rotation: SpeakerRotation,
}

impl Default for MediaConfig {
    /// 48 kHz, 16-bit stereo playback.
    fn default() -> Self {
        Self::new(48000, 16, 2)
    }
}

impl MediaConfig {
    /// Create a playback configuration with natural channel order.
    pub fn new(sample_rate: u32, bit_width: u16, channels: u16) -> Self {
        Self {
            sample_rate,
            bit_width,
            channels,
            native: false,
            direction: Direction::Output,
            rotation: SpeakerRotation::LeftRight,
        }
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the speaker rotation.
    pub fn with_rotation(mut self, rotation: SpeakerRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Mark the channel count as DSP-native.
    pub fn with_native(mut self, native: bool) -> Self {
        self.native = native;
        self
    }

    /// Sample format derived from the bit width.
    pub fn sample_format(&self) -> Result<PcmSampleFormat> {
        PcmSampleFormat::from_bit_width(self.bit_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_widths_keep_their_container() {
        for width in [16u16, 32] {
            let fmt = PcmSampleFormat::from_bit_width(width).unwrap();
            assert_eq!(fmt.bits_per_sample, width);
            assert_eq!(fmt.q_factor, width - 1);
        }
    }

    #[test]
    fn twenty_four_bit_uses_q27_in_32() {
        let fmt = PcmSampleFormat::from_bit_width(24).unwrap();
        assert_eq!(fmt.bit_width, 24);
        assert_eq!(fmt.bits_per_sample, 32);
        assert_eq!(fmt.q_factor, 27);
    }

    #[test]
    fn other_widths_rejected() {
        for width in [0u16, 8, 20, 64] {
            assert_eq!(
                PcmSampleFormat::from_bit_width(width),
                Err(Error::UnsupportedBitWidth(width))
            );
        }
    }

    #[test]
    fn direction_codes() {
        assert_eq!(Direction::Output.raw(), 1);
        assert_eq!(Direction::Input.raw(), 2);
        assert_eq!(Direction::InputOutput.raw(), 3);
    }

    #[test]
    fn media_config_defaults_from_toml() {
        let cfg: MediaConfig =
            toml::from_str("sample_rate = 48000\nbit_width = 24\nchannels = 2\n").unwrap();
        assert_eq!(cfg, MediaConfig::new(48000, 24, 2));
        assert!(!cfg.native);
    }

    #[test]
    fn media_config_builders() {
        let cfg = MediaConfig::new(16000, 16, 1)
            .with_direction(Direction::Input)
            .with_rotation(SpeakerRotation::RightLeft)
            .with_native(true);
        assert_eq!(cfg.direction, Direction::Input);
        assert_eq!(cfg.rotation, SpeakerRotation::RightLeft);
        assert!(cfg.native);
    }
}
