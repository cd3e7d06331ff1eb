//! Per-channel volume data.

use serde::{Deserialize, Serialize};

/// Linear gain applied to the channels selected by `channel_mask`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelVolume {
    /// Bitmask of the channels this gain applies to.
    pub channel_mask: u32,
    /// Normalized linear gain, nominally in [0, 1].
    pub gain: f32,
}

/// Ordered list of channel-mask/gain pairs for one stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeData {
    /// Gain pairs in the order they are sent to the DSP.
    pub pairs: Vec<ChannelVolume>,
}

impl VolumeData {
    /// Single gain applied to every channel selected by `channel_mask`.
    pub fn uniform(channel_mask: u32, gain: f32) -> Self {
        Self {
            pairs: vec![ChannelVolume { channel_mask, gain }],
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no pairs are present.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Gain of the first pair, which drives calibration-level selection.
    pub fn first_gain(&self) -> Option<f32> {
        self.pairs.first().map(|p| p.gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_has_one_pair() {
        let v = VolumeData::uniform(0x3, 0.5);
        assert_eq!(v.len(), 1);
        assert_eq!(v.first_gain(), Some(0.5));
    }

    #[test]
    fn empty_has_no_first_gain() {
        let v = VolumeData::default();
        assert!(v.is_empty());
        assert_eq!(v.first_gain(), None);
    }
}
