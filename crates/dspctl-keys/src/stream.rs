//! Stream and device descriptions consumed by the resolvers.

use std::fmt;

use dspctl_core::{Direction, MediaConfig, VolumeData};
use serde::{Deserialize, Serialize};

use crate::catalogue::VSID;
use crate::error::{Error, Result};
use crate::kv::KeyValue;

/// Use case of an audio stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreamType {
    /// Low-latency PCM.
    LowLatency,
    /// Deep-buffer PCM playback.
    DeepBuffer,
    /// Compressed offload playback.
    Compressed,
    /// PCM offload playback.
    PcmOffload,
    /// Generic stream with no stream-level keys.
    Generic,
    /// VoIP capture.
    VoipTx,
    /// VoIP playback.
    VoipRx,
    /// Voice-trigger capture.
    VoiceUi,
    /// Cellular voice call.
    VoiceCall,
    /// Device-to-device loopback.
    Loopback,
}

impl StreamType {
    /// Every stream type.
    pub const ALL: [StreamType; 10] = [
        StreamType::LowLatency,
        StreamType::DeepBuffer,
        StreamType::Compressed,
        StreamType::PcmOffload,
        StreamType::Generic,
        StreamType::VoipTx,
        StreamType::VoipRx,
        StreamType::VoiceUi,
        StreamType::VoiceCall,
        StreamType::Loopback,
    ];

    /// Kebab-case name.
    pub const fn name(self) -> &'static str {
        match self {
            StreamType::LowLatency => "low-latency",
            StreamType::DeepBuffer => "deep-buffer",
            StreamType::Compressed => "compressed",
            StreamType::PcmOffload => "pcm-offload",
            StreamType::Generic => "generic",
            StreamType::VoipTx => "voip-tx",
            StreamType::VoipRx => "voip-rx",
            StreamType::VoiceUi => "voice-ui",
            StreamType::VoiceCall => "voice-call",
            StreamType::Loopback => "loopback",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loopback sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopbackType {
    /// Plain PCM loopback.
    #[default]
    Pcm,
    /// Hands-free profile, far-end audio to the local speaker.
    HfpRx,
    /// Hands-free profile, local microphone to the far end.
    HfpTx,
}

/// Attributes a stream reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamAttributes {
    /// Use case.
    #[serde(rename = "type")]
    pub stream_type: StreamType,
    /// Path direction.
    #[serde(default)]
    pub direction: Direction,
    /// Loopback sub-type; only read for [`StreamType::Loopback`].
    #[serde(default)]
    pub loopback: LoopbackType,
    /// Voice-session mode of a voice call.
    #[serde(default)]
    pub vsid: Option<u32>,
}

impl StreamAttributes {
    /// Attributes for `stream_type` in `direction`.
    pub const fn new(stream_type: StreamType, direction: Direction) -> Self {
        Self {
            stream_type,
            direction,
            loopback: LoopbackType::Pcm,
            vsid: None,
        }
    }

    /// Set the loopback sub-type.
    pub const fn with_loopback(mut self, loopback: LoopbackType) -> Self {
        self.loopback = loopback;
        self
    }

    /// Set the voice-session mode.
    pub const fn with_vsid(mut self, vsid: u32) -> Self {
        self.vsid = Some(vsid);
        self
    }
}

/// Voice-session key and per-mode overrides.
///
/// Every known mode maps to value 0 unless `mode_pairs` overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VsidInfo {
    /// Key the session value is published under.
    #[serde(default = "default_vsid_key")]
    pub vsid_key: u32,
    /// `(mode, value)` overrides; `key` is the mode.
    #[serde(default)]
    pub mode_pairs: Vec<KeyValue>,
}

fn default_vsid_key() -> u32 {
    VSID
}

impl Default for VsidInfo {
    fn default() -> Self {
        Self {
            vsid_key: VSID,
            mode_pairs: Vec::new(),
        }
    }
}

/// A device attached to a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Raw device identifier; see [`DeviceId`].
    pub id: u32,
    /// Negotiated device format.
    #[serde(default)]
    pub media: MediaConfig,
}

impl DeviceInfo {
    /// Device `id` at the default format.
    pub fn new(id: DeviceId) -> Self {
        Self {
            id: id.raw(),
            media: MediaConfig::default(),
        }
    }
}

/// Closed device enumeration. Output devices are numbered 1–16, input
/// devices 17–31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DeviceId {
    OutHandset,
    OutSpeaker,
    OutWiredHeadset,
    OutWiredHeadphone,
    OutLine,
    OutBluetoothSco,
    OutBluetoothA2dp,
    OutAuxDigital,
    OutHdmi,
    OutUsbDevice,
    OutUsbHeadset,
    OutSpdif,
    OutFm,
    OutAuxLine,
    OutProxy,
    OutAuxDigital1,
    InHandsetMic,
    InSpeakerMic,
    InBluetoothScoHeadset,
    InWiredHeadset,
    InAuxDigital,
    InHdmi,
    InUsbAccessory,
    InUsbDevice,
    InUsbHeadset,
    InFmTuner,
    InLine,
    InSpdif,
    InProxy,
    InHandsetVaMic,
    InHeadsetVaMic,
}

const DEVICE_IDS: [DeviceId; 31] = [
    DeviceId::OutHandset,
    DeviceId::OutSpeaker,
    DeviceId::OutWiredHeadset,
    DeviceId::OutWiredHeadphone,
    DeviceId::OutLine,
    DeviceId::OutBluetoothSco,
    DeviceId::OutBluetoothA2dp,
    DeviceId::OutAuxDigital,
    DeviceId::OutHdmi,
    DeviceId::OutUsbDevice,
    DeviceId::OutUsbHeadset,
    DeviceId::OutSpdif,
    DeviceId::OutFm,
    DeviceId::OutAuxLine,
    DeviceId::OutProxy,
    DeviceId::OutAuxDigital1,
    DeviceId::InHandsetMic,
    DeviceId::InSpeakerMic,
    DeviceId::InBluetoothScoHeadset,
    DeviceId::InWiredHeadset,
    DeviceId::InAuxDigital,
    DeviceId::InHdmi,
    DeviceId::InUsbAccessory,
    DeviceId::InUsbDevice,
    DeviceId::InUsbHeadset,
    DeviceId::InFmTuner,
    DeviceId::InLine,
    DeviceId::InSpdif,
    DeviceId::InProxy,
    DeviceId::InHandsetVaMic,
    DeviceId::InHeadsetVaMic,
];

impl DeviceId {
    /// Decode a raw identifier. Unknown values give `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let index = usize::try_from(raw.checked_sub(1)?).ok()?;
        DEVICE_IDS.get(index).copied()
    }

    /// Raw identifier.
    pub fn raw(self) -> u32 {
        DEVICE_IDS
            .iter()
            .position(|&d| d == self)
            .map_or(0, |i| i as u32 + 1)
    }

    /// True for capture devices.
    pub fn is_input(self) -> bool {
        self.raw() > 16
    }
}

/// Read access to a live stream, as the resolvers need it.
pub trait StreamSource {
    /// Stream type, direction and sub-type.
    fn attributes(&self) -> Result<StreamAttributes>;
    /// Devices the stream is routed to.
    fn associated_devices(&self) -> Result<Vec<DeviceInfo>>;
    /// Current per-channel volume.
    fn volume(&self) -> Result<VolumeData>;
}

/// An owned, fully known stream description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream attributes.
    #[serde(flatten)]
    pub attributes: StreamAttributes,
    /// Routed devices.
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
    /// Volume, if one has been set.
    #[serde(default)]
    pub volume: Option<VolumeData>,
}

impl StreamDescriptor {
    /// A stream with no devices and no volume.
    pub fn new(attributes: StreamAttributes) -> Self {
        Self {
            attributes,
            devices: Vec::new(),
            volume: None,
        }
    }

    /// Route the stream to `device`.
    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.devices.push(DeviceInfo::new(device));
        self
    }

    /// Set the volume.
    pub fn with_volume(mut self, volume: VolumeData) -> Self {
        self.volume = Some(volume);
        self
    }
}

impl StreamSource for StreamDescriptor {
    fn attributes(&self) -> Result<StreamAttributes> {
        Ok(self.attributes)
    }

    fn associated_devices(&self) -> Result<Vec<DeviceInfo>> {
        Ok(self.devices.clone())
    }

    fn volume(&self) -> Result<VolumeData> {
        self.volume
            .clone()
            .ok_or_else(|| Error::unavailable("volume", "no volume set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_ids_round_trip() {
        for (i, id) in DEVICE_IDS.iter().enumerate() {
            assert_eq!(id.raw(), i as u32 + 1);
            assert_eq!(DeviceId::from_raw(id.raw()), Some(*id));
        }
        assert_eq!(DeviceId::from_raw(0), None);
        assert_eq!(DeviceId::from_raw(32), None);
        assert_eq!(DeviceId::from_raw(u32::MAX), None);
    }

    #[test]
    fn numbering_splits_at_sixteen() {
        assert_eq!(DeviceId::OutAuxDigital1.raw(), 16);
        assert!(!DeviceId::OutAuxDigital1.is_input());
        assert_eq!(DeviceId::InHandsetMic.raw(), 17);
        assert!(DeviceId::InHandsetMic.is_input());
    }

    #[test]
    fn descriptor_from_toml() {
        let stream: StreamDescriptor = toml::from_str(
            r#"
            type = "voice-call"
            vsid = 0x11C05000

            [[devices]]
            id = 1

            [[devices]]
            id = 17
            media = { sample_rate = 16000, bit_width = 16, channels = 1 }
            "#,
        )
        .unwrap();
        assert_eq!(stream.attributes.stream_type, StreamType::VoiceCall);
        assert_eq!(stream.attributes.direction, Direction::Output);
        assert_eq!(stream.attributes.vsid, Some(0x11C0_5000));
        assert_eq!(stream.devices.len(), 2);
        assert_eq!(stream.devices[1].media.sample_rate, 16000);
        assert!(stream.volume().is_err());
    }

    #[test]
    fn stream_type_names_match_serde() {
        for t in StreamType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.name()));
        }
    }
}
