//! Closed catalogue of graph keys, key values and graph tags.
//!
//! Keys occupy the top byte (`0xA1..`, `0xB1..`); use-case values of a key
//! share its prefix. Level, rate, width and channel values are plain numbers.
#![allow(missing_docs)]

// Keys
pub const STREAMRX: u32 = 0xA100_0000;
pub const DEVICERX: u32 = 0xA200_0000;
pub const DEVICETX: u32 = 0xA300_0000;
pub const VOLUME: u32 = 0xA400_0000;
pub const SAMPLINGRATE: u32 = 0xA500_0000;
pub const BITWIDTH: u32 = 0xA600_0000;
pub const PAUSE: u32 = 0xA700_0000;
pub const MUTE: u32 = 0xA800_0000;
pub const CHANNELS: u32 = 0xA900_0000;
pub const FLUENCE: u32 = 0xAA00_0000;
pub const INSTANCE: u32 = 0xAB00_0000;
pub const DEVICEPP_RX: u32 = 0xAC00_0000;
pub const DEVICEPP_TX: u32 = 0xAD00_0000;
pub const STREAMPP_RX: u32 = 0xAF00_0000;
pub const STREAMTX: u32 = 0xB100_0000;
pub const VSID: u32 = 0xB300_0000;
pub const BT_PROFILE: u32 = 0xB400_0000;

// STREAMRX
pub const PCM_DEEP_BUFFER: u32 = 0xA100_0001;
pub const PCM_RX_LOOPBACK: u32 = 0xA100_0003;
pub const VOIP_RX_PLAYBACK: u32 = 0xA100_0005;
pub const COMPRESSED_OFFLOAD_PLAYBACK: u32 = 0xA100_000A;
pub const HFP_RX_PLAYBACK: u32 = 0xA100_000C;
pub const PCM_LL_PLAYBACK: u32 = 0xA100_000E;
pub const PCM_OFFLOAD_PLAYBACK: u32 = 0xA100_000F;
pub const VOICE_CALL_RX: u32 = 0xA100_0010;

// STREAMTX
pub const PCM_RECORD: u32 = 0xB100_0001;
pub const VOICE_UI: u32 = 0xB100_0003;
pub const VOIP_TX_RECORD: u32 = 0xB100_0004;
pub const HFP_RX_CAPTURE: u32 = 0xB100_0005;
pub const VOICE_CALL_TX: u32 = 0xB100_0007;

// DEVICERX
pub const SPEAKER: u32 = 0xA200_0001;
pub const HEADPHONES: u32 = 0xA200_0002;
pub const BT_RX: u32 = 0xA200_0003;
pub const HANDSET: u32 = 0xA200_0004;
pub const USB_RX: u32 = 0xA200_0005;
pub const HDMI_RX: u32 = 0xA200_0006;

// DEVICETX
pub const HANDSETMIC: u32 = 0xA300_0001;
pub const SPEAKER_MIC: u32 = 0xA300_0002;
pub const BT_TX: u32 = 0xA300_0003;
pub const HEADPHONE_MIC: u32 = 0xA300_0004;
pub const USB_TX: u32 = 0xA300_0005;
pub const HANDSETMIC_VA: u32 = 0xA300_0006;
pub const HEADSETMIC_VA: u32 = 0xA300_0007;

// DEVICEPP_RX
pub const DEVICEPP_RX_DEFAULT: u32 = 0xAC00_0001;
pub const DEVICEPP_RX_AUDIO_MBDRC: u32 = 0xAC00_0002;
pub const DEVICEPP_RX_VOIP_MBDRC: u32 = 0xAC00_0003;
pub const DEVICEPP_RX_HFPSINK: u32 = 0xAC00_0004;
pub const DEVICEPP_RX_VOICE_DEFAULT: u32 = 0xAC00_0005;

// DEVICEPP_TX
pub const DEVICEPP_TX_FLUENCE_FFNS: u32 = 0xAD00_0001;
pub const DEVICEPP_TX_FLUENCE_FFECNS: u32 = 0xAD00_0002;
pub const DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS: u32 = 0xAD00_0003;
pub const DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS: u32 = 0xAD00_0004;
pub const DEVICEPP_TX_VOICE_FLUENCE_SMECNS: u32 = 0xAD00_0005;

// STREAMPP_RX
pub const STREAMPP_RX_DEFAULT: u32 = 0xAF00_0001;

// BT_PROFILE
pub const A2DP: u32 = 0xB400_0001;
pub const SCO: u32 = 0xB400_0002;

// VSID
pub const VOICEMMODE1: u32 = 0x11C0_5000;
pub const VOICEMMODE2: u32 = 0x11DC_5000;
pub const VOICELBMMODE1: u32 = 0x1200_6000;
pub const VOICELBMMODE2: u32 = 0x121A_6000;

// INSTANCE
pub const INSTANCE_1: u32 = 1;

// PAUSE, MUTE
pub const OFF: u32 = 0;
pub const ON: u32 = 1;

// FLUENCE
pub const FLUENCE_OFF: u32 = 0;
pub const FLUENCE_ON: u32 = 1;
pub const FLUENCE_EC: u32 = 2;
pub const FLUENCE_NS: u32 = 3;

// SAMPLINGRATE
pub const SAMPLINGRATE_8K: u32 = 8000;
pub const SAMPLINGRATE_16K: u32 = 16000;
pub const SAMPLINGRATE_24K: u32 = 24000;
pub const SAMPLINGRATE_32K: u32 = 32000;
pub const SAMPLINGRATE_44K: u32 = 44100;
pub const SAMPLINGRATE_48K: u32 = 48000;
pub const SAMPLINGRATE_96K: u32 = 96000;
pub const SAMPLINGRATE_192K: u32 = 192_000;
pub const SAMPLINGRATE_384K: u32 = 384_000;

// BITWIDTH
pub const BITWIDTH_16: u32 = 16;
pub const BITWIDTH_24: u32 = 24;
pub const BITWIDTH_32: u32 = 32;

// CHANNELS
pub const CHANNELS_1: u32 = 1;
pub const CHANNELS_2: u32 = 2;
pub const CHANNELS_3: u32 = 3;
pub const CHANNELS_4: u32 = 4;

// VOLUME: LEVEL_0 is the loudest bucket, LEVEL_15 the quietest.
pub const LEVEL_0: u32 = 0;
pub const LEVEL_1: u32 = 1;
pub const LEVEL_2: u32 = 2;
pub const LEVEL_3: u32 = 3;
pub const LEVEL_4: u32 = 4;
pub const LEVEL_5: u32 = 5;
pub const LEVEL_6: u32 = 6;
pub const LEVEL_7: u32 = 7;
pub const LEVEL_8: u32 = 8;
pub const LEVEL_9: u32 = 9;
pub const LEVEL_10: u32 = 10;
pub const LEVEL_11: u32 = 11;
pub const LEVEL_12: u32 = 12;
pub const LEVEL_13: u32 = 13;
pub const LEVEL_14: u32 = 14;
pub const LEVEL_15: u32 = 15;

// Graph tags
pub const TAG_PAUSE: u32 = 0xC000_0001;
pub const TAG_MUTE: u32 = 0xC000_0002;
pub const TAG_STREAM_MFC: u32 = 0xC000_0004;
pub const TAG_DEVICE_MFC: u32 = 0xC000_0005;
pub const TAG_FLUENCE: u32 = 0xC000_0006;
pub const TAG_STREAM_VOLUME: u32 = 0xC000_0008;

const KEY_NAMES: &[(u32, &str)] = &[
    (STREAMRX, "STREAMRX"),
    (DEVICERX, "DEVICERX"),
    (DEVICETX, "DEVICETX"),
    (VOLUME, "VOLUME"),
    (SAMPLINGRATE, "SAMPLINGRATE"),
    (BITWIDTH, "BITWIDTH"),
    (PAUSE, "PAUSE"),
    (MUTE, "MUTE"),
    (CHANNELS, "CHANNELS"),
    (FLUENCE, "FLUENCE"),
    (INSTANCE, "INSTANCE"),
    (DEVICEPP_RX, "DEVICEPP_RX"),
    (DEVICEPP_TX, "DEVICEPP_TX"),
    (STREAMPP_RX, "STREAMPP_RX"),
    (STREAMTX, "STREAMTX"),
    (VSID, "VSID"),
    (BT_PROFILE, "BT_PROFILE"),
];

const PREFIXED_VALUE_NAMES: &[(u32, &str)] = &[
    (PCM_DEEP_BUFFER, "PCM_DEEP_BUFFER"),
    (PCM_RX_LOOPBACK, "PCM_RX_LOOPBACK"),
    (VOIP_RX_PLAYBACK, "VOIP_RX_PLAYBACK"),
    (COMPRESSED_OFFLOAD_PLAYBACK, "COMPRESSED_OFFLOAD_PLAYBACK"),
    (HFP_RX_PLAYBACK, "HFP_RX_PLAYBACK"),
    (PCM_LL_PLAYBACK, "PCM_LL_PLAYBACK"),
    (PCM_OFFLOAD_PLAYBACK, "PCM_OFFLOAD_PLAYBACK"),
    (VOICE_CALL_RX, "VOICE_CALL_RX"),
    (PCM_RECORD, "PCM_RECORD"),
    (VOICE_UI, "VOICE_UI"),
    (VOIP_TX_RECORD, "VOIP_TX_RECORD"),
    (HFP_RX_CAPTURE, "HFP_RX_CAPTURE"),
    (VOICE_CALL_TX, "VOICE_CALL_TX"),
    (SPEAKER, "SPEAKER"),
    (HEADPHONES, "HEADPHONES"),
    (BT_RX, "BT_RX"),
    (HANDSET, "HANDSET"),
    (USB_RX, "USB_RX"),
    (HDMI_RX, "HDMI_RX"),
    (HANDSETMIC, "HANDSETMIC"),
    (SPEAKER_MIC, "SPEAKER_MIC"),
    (BT_TX, "BT_TX"),
    (HEADPHONE_MIC, "HEADPHONE_MIC"),
    (USB_TX, "USB_TX"),
    (HANDSETMIC_VA, "HANDSETMIC_VA"),
    (HEADSETMIC_VA, "HEADSETMIC_VA"),
    (DEVICEPP_RX_DEFAULT, "DEVICEPP_RX_DEFAULT"),
    (DEVICEPP_RX_AUDIO_MBDRC, "DEVICEPP_RX_AUDIO_MBDRC"),
    (DEVICEPP_RX_VOIP_MBDRC, "DEVICEPP_RX_VOIP_MBDRC"),
    (DEVICEPP_RX_HFPSINK, "DEVICEPP_RX_HFPSINK"),
    (DEVICEPP_RX_VOICE_DEFAULT, "DEVICEPP_RX_VOICE_DEFAULT"),
    (DEVICEPP_TX_FLUENCE_FFNS, "DEVICEPP_TX_FLUENCE_FFNS"),
    (DEVICEPP_TX_FLUENCE_FFECNS, "DEVICEPP_TX_FLUENCE_FFECNS"),
    (DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS, "DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS"),
    (DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS, "DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS"),
    (DEVICEPP_TX_VOICE_FLUENCE_SMECNS, "DEVICEPP_TX_VOICE_FLUENCE_SMECNS"),
    (STREAMPP_RX_DEFAULT, "STREAMPP_RX_DEFAULT"),
    (A2DP, "A2DP"),
    (SCO, "SCO"),
];

/// Symbolic name of a graph key.
pub fn key_name(key: u32) -> Option<&'static str> {
    KEY_NAMES.iter().find(|&&(k, _)| k == key).map(|&(_, n)| n)
}

/// Symbolic name of a prefixed use-case or profile value.
///
/// Plain numeric values (levels, rates, widths) have no name.
pub fn value_name(value: u32) -> Option<&'static str> {
    PREFIXED_VALUE_NAMES
        .iter()
        .find(|&&(v, _)| v == value)
        .map(|&(_, n)| n)
}
