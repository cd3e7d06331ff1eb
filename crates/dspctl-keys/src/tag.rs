//! Control tags: runtime edits applied to a tagged module of a running graph.

use std::fmt;
use std::str::FromStr;

use dspctl_core::Direction;
use serde::Serialize;

use crate::catalogue::{
    BITWIDTH, BITWIDTH_16, BITWIDTH_24, BITWIDTH_32, CHANNELS, CHANNELS_1, CHANNELS_2,
    CHANNELS_3, CHANNELS_4, FLUENCE, FLUENCE_EC, FLUENCE_NS, FLUENCE_OFF, FLUENCE_ON, MUTE, OFF,
    ON, PAUSE, SAMPLINGRATE, SAMPLINGRATE_8K, SAMPLINGRATE_16K, SAMPLINGRATE_24K,
    SAMPLINGRATE_32K, SAMPLINGRATE_44K, SAMPLINGRATE_48K, SAMPLINGRATE_96K, SAMPLINGRATE_192K,
    SAMPLINGRATE_384K, TAG_DEVICE_MFC, TAG_FLUENCE, TAG_MUTE, TAG_PAUSE, TAG_STREAM_MFC,
    TAG_STREAM_VOLUME,
};
use crate::error::{Error, Result};
use crate::kv::{KeyValue, KeyVector};
use crate::stream::StreamAttributes;

/// Graph-side tag naming the module a key vector is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphTag {
    /// Soft pause module.
    Pause,
    /// Mute module.
    Mute,
    /// Media-format converter on the stream leg.
    StreamMfc,
    /// Media-format converter on the device leg.
    DeviceMfc,
    /// Fluence noise suppression.
    Fluence,
    /// Stream volume control.
    StreamVolume,
}

impl GraphTag {
    /// Firmware tag identifier.
    pub const fn raw(self) -> u32 {
        match self {
            GraphTag::Pause => TAG_PAUSE,
            GraphTag::Mute => TAG_MUTE,
            GraphTag::StreamMfc => TAG_STREAM_MFC,
            GraphTag::DeviceMfc => TAG_DEVICE_MFC,
            GraphTag::Fluence => TAG_FLUENCE,
            GraphTag::StreamVolume => TAG_STREAM_VOLUME,
        }
    }
}

impl fmt::Display for GraphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.raw())
    }
}

/// A discrete control intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlTag {
    /// Mute on.
    Mute,
    /// Mute off.
    Unmute,
    /// Soft pause.
    Pause,
    /// Resume after pause.
    Resume,
    /// Converter rate change; the value is in Hz and is one of [`ControlTag::RATES`].
    SampleRate(u32),
    /// Noise suppression on.
    FluenceOn,
    /// Noise suppression off.
    FluenceOff,
    /// Echo cancellation only.
    FluenceEc,
    /// Noise suppression only.
    FluenceNs,
    /// Converter channel change, 1 to 4.
    Channels(u8),
    /// Converter width change: 16, 24 or 32.
    BitWidth(u8),
}

impl ControlTag {
    /// Rates a converter can be retuned to.
    pub const RATES: [u32; 9] = [
        SAMPLINGRATE_8K,
        SAMPLINGRATE_16K,
        SAMPLINGRATE_24K,
        SAMPLINGRATE_32K,
        SAMPLINGRATE_44K,
        SAMPLINGRATE_48K,
        SAMPLINGRATE_96K,
        SAMPLINGRATE_192K,
        SAMPLINGRATE_384K,
    ];

    fn sample_rate_value(hz: u32) -> Option<u32> {
        Self::RATES.contains(&hz).then_some(hz)
    }

    fn channels_value(n: u8) -> Option<u32> {
        match n {
            1 => Some(CHANNELS_1),
            2 => Some(CHANNELS_2),
            3 => Some(CHANNELS_3),
            4 => Some(CHANNELS_4),
            _ => None,
        }
    }

    fn bit_width_value(bits: u8) -> Option<u32> {
        match bits {
            16 => Some(BITWIDTH_16),
            24 => Some(BITWIDTH_24),
            32 => Some(BITWIDTH_32),
            _ => None,
        }
    }

    /// True when the tag's parameter is within its closed range.
    pub fn is_valid(self) -> bool {
        match self {
            ControlTag::SampleRate(hz) => Self::sample_rate_value(hz).is_some(),
            ControlTag::Channels(n) => Self::channels_value(n).is_some(),
            ControlTag::BitWidth(bits) => Self::bit_width_value(bits).is_some(),
            _ => true,
        }
    }
}

impl fmt::Display for ControlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlTag::Mute => f.write_str("mute"),
            ControlTag::Unmute => f.write_str("unmute"),
            ControlTag::Pause => f.write_str("pause"),
            ControlTag::Resume => f.write_str("resume"),
            ControlTag::SampleRate(hz) => write!(f, "rate-{hz}"),
            ControlTag::FluenceOn => f.write_str("fluence-on"),
            ControlTag::FluenceOff => f.write_str("fluence-off"),
            ControlTag::FluenceEc => f.write_str("fluence-ec"),
            ControlTag::FluenceNs => f.write_str("fluence-ns"),
            ControlTag::Channels(n) => write!(f, "channels-{n}"),
            ControlTag::BitWidth(bits) => write!(f, "bitwidth-{bits}"),
        }
    }
}

impl FromStr for ControlTag {
    type Err = Error;

    /// Parse the [`Display`](fmt::Display) form, e.g. `mute`, `rate-48000`,
    /// `channels-2`, `bitwidth-24`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownTag(s.to_string());
        let tag = match s {
            "mute" => ControlTag::Mute,
            "unmute" => ControlTag::Unmute,
            "pause" => ControlTag::Pause,
            "resume" => ControlTag::Resume,
            "fluence-on" => ControlTag::FluenceOn,
            "fluence-off" => ControlTag::FluenceOff,
            "fluence-ec" => ControlTag::FluenceEc,
            "fluence-ns" => ControlTag::FluenceNs,
            _ => {
                let (name, arg) = s.split_once('-').ok_or_else(unknown)?;
                match name {
                    "rate" => ControlTag::SampleRate(arg.parse().map_err(|_| unknown())?),
                    "channels" => ControlTag::Channels(arg.parse().map_err(|_| unknown())?),
                    "bitwidth" => ControlTag::BitWidth(arg.parse().map_err(|_| unknown())?),
                    _ => return Err(unknown()),
                }
            }
        };
        if tag.is_valid() { Ok(tag) } else { Err(unknown()) }
    }
}

/// Key vector for a control intent and the tag it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagKeyVector {
    /// Module the keys are applied to.
    pub tag: GraphTag,
    /// Keys to apply.
    pub kv: KeyVector,
}

/// Resolve `tag` for a stream.
///
/// Converter edits (rate, channels, width) target the stream-side converter
/// for capture streams and the device-side converter otherwise.
pub fn tag_key_vector(attrs: &StreamAttributes, tag: ControlTag) -> Result<TagKeyVector> {
    let mfc = if attrs.direction == Direction::Input {
        GraphTag::StreamMfc
    } else {
        GraphTag::DeviceMfc
    };
    let unsupported = || {
        tracing::warn!(%tag, "control tag parameter out of range");
        Error::UnknownTag(tag.to_string())
    };

    let (graph_tag, kv) = match tag {
        ControlTag::Mute => (GraphTag::Mute, KeyValue::new(MUTE, ON)),
        ControlTag::Unmute => (GraphTag::Mute, KeyValue::new(MUTE, OFF)),
        ControlTag::Pause => (GraphTag::Pause, KeyValue::new(PAUSE, ON)),
        ControlTag::Resume => (GraphTag::Pause, KeyValue::new(PAUSE, OFF)),
        ControlTag::SampleRate(hz) => {
            let value = ControlTag::sample_rate_value(hz).ok_or_else(unsupported)?;
            (mfc, KeyValue::new(SAMPLINGRATE, value))
        }
        ControlTag::FluenceOn => (GraphTag::Fluence, KeyValue::new(FLUENCE, FLUENCE_ON)),
        ControlTag::FluenceOff => (GraphTag::Fluence, KeyValue::new(FLUENCE, FLUENCE_OFF)),
        ControlTag::FluenceEc => (GraphTag::Fluence, KeyValue::new(FLUENCE, FLUENCE_EC)),
        ControlTag::FluenceNs => (GraphTag::Fluence, KeyValue::new(FLUENCE, FLUENCE_NS)),
        ControlTag::Channels(n) => {
            let value = ControlTag::channels_value(n).ok_or_else(unsupported)?;
            (mfc, KeyValue::new(CHANNELS, value))
        }
        ControlTag::BitWidth(bits) => {
            let value = ControlTag::bit_width_value(bits).ok_or_else(unsupported)?;
            (mfc, KeyValue::new(BITWIDTH, value))
        }
    };
    tracing::debug!(%tag, graph_tag = %graph_tag, kv = %kv, "tag key vector");
    Ok(TagKeyVector {
        tag: graph_tag,
        kv: vec![kv],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::StreamType;

    fn playback() -> StreamAttributes {
        StreamAttributes::new(StreamType::LowLatency, Direction::Output)
    }

    fn capture() -> StreamAttributes {
        StreamAttributes::new(StreamType::LowLatency, Direction::Input)
    }

    #[test]
    fn mute_and_pause() {
        let t = tag_key_vector(&playback(), ControlTag::Mute).unwrap();
        assert_eq!(t.tag, GraphTag::Mute);
        assert_eq!(t.kv, vec![KeyValue::new(MUTE, ON)]);

        let t = tag_key_vector(&capture(), ControlTag::Resume).unwrap();
        assert_eq!(t.tag, GraphTag::Pause);
        assert_eq!(t.kv, vec![KeyValue::new(PAUSE, OFF)]);
    }

    #[test]
    fn converter_side_follows_direction() {
        for tag in [
            ControlTag::SampleRate(48000),
            ControlTag::Channels(2),
            ControlTag::BitWidth(24),
        ] {
            assert_eq!(
                tag_key_vector(&capture(), tag).unwrap().tag,
                GraphTag::StreamMfc
            );
            assert_eq!(
                tag_key_vector(&playback(), tag).unwrap().tag,
                GraphTag::DeviceMfc
            );
            let loopback = StreamAttributes::new(StreamType::LowLatency, Direction::InputOutput);
            assert_eq!(
                tag_key_vector(&loopback, tag).unwrap().tag,
                GraphTag::DeviceMfc
            );
        }
    }

    #[test]
    fn every_rate_resolves() {
        for hz in ControlTag::RATES {
            let t = tag_key_vector(&playback(), ControlTag::SampleRate(hz)).unwrap();
            assert_eq!(t.kv, vec![KeyValue::new(SAMPLINGRATE, hz)]);
        }
        assert!(tag_key_vector(&playback(), ControlTag::SampleRate(22050)).is_err());
    }

    #[test]
    fn fluence_modes() {
        let t = tag_key_vector(&capture(), ControlTag::FluenceNs).unwrap();
        assert_eq!(t.tag, GraphTag::Fluence);
        assert_eq!(t.kv, vec![KeyValue::new(FLUENCE, FLUENCE_NS)]);
    }

    #[test]
    fn out_of_range_parameters() {
        assert!(tag_key_vector(&playback(), ControlTag::Channels(5)).is_err());
        assert!(tag_key_vector(&playback(), ControlTag::BitWidth(8)).is_err());
    }

    #[test]
    fn parse_round_trip() {
        let tags = [
            ControlTag::Mute,
            ControlTag::Unmute,
            ControlTag::Pause,
            ControlTag::Resume,
            ControlTag::SampleRate(44100),
            ControlTag::FluenceOn,
            ControlTag::FluenceOff,
            ControlTag::FluenceEc,
            ControlTag::FluenceNs,
            ControlTag::Channels(4),
            ControlTag::BitWidth(32),
        ];
        for tag in tags {
            assert_eq!(tag.to_string().parse::<ControlTag>().unwrap(), tag);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        for s in ["", "loud", "rate-22050", "channels-x", "bitwidth-20", "volume-3"] {
            assert!(matches!(s.parse::<ControlTag>(), Err(Error::UnknownTag(_))), "{s}");
        }
    }

    #[test]
    fn graph_tag_ids() {
        assert_eq!(GraphTag::StreamMfc.raw(), 0xC000_0004);
        assert_eq!(GraphTag::StreamVolume.to_string(), "0xc0000008");
    }
}
