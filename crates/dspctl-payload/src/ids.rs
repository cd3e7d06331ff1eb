//! Parameter identifiers and fixed field values of the DSP firmware API.

/// Input media format of a PCM stream.
pub const PARAM_ID_MEDIA_FORMAT: u32 = 0x0800_100C;
/// Output format of a PCM encoder, decoder or converter.
pub const PARAM_ID_PCM_OUTPUT_FORMAT_CFG: u32 = 0x0800_1008;
/// Codec DMA interface configuration.
pub const PARAM_ID_CODEC_DMA_INTF_CFG: u32 = 0x0800_1063;
/// I2S interface configuration.
pub const PARAM_ID_I2S_INTF_CFG: u32 = 0x0800_100E;
/// TDM interface configuration.
pub const PARAM_ID_TDM_INTF_CFG: u32 = 0x0800_101A;
/// Auxiliary PCM interface configuration.
pub const PARAM_ID_HW_PCM_INTF_CFG: u32 = 0x0800_102A;
/// SLIMbus interface configuration.
pub const PARAM_ID_SLIMBUS_CONFIG: u32 = 0x0800_10D4;
/// USB audio interface configuration.
pub const PARAM_ID_USB_AUDIO_INTF_CFG: u32 = 0x0800_10D6;
/// DisplayPort interface configuration.
pub const PARAM_ID_DISPLAY_PORT_INTF_CFG: u32 = 0x0800_1154;
/// Hardware endpoint media format.
pub const PARAM_ID_HW_EP_MF_CFG: u32 = 0x0800_1017;
/// Media-format converter output format.
pub const PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT: u32 = 0x0800_1024;
/// Multichannel volume gain.
pub const PARAM_ID_VOL_CTRL_MULTICHANNEL_GAIN: u32 = 0x0800_1038;
/// Soft pause start.
pub const PARAM_ID_SOFT_PAUSE_START: u32 = 0x0800_102E;
/// Soft pause resume.
pub const PARAM_ID_SOFT_PAUSE_RESUME: u32 = 0x0800_102F;
/// Session time query.
pub const PARAM_ID_SPR_SESSION_TIME: u32 = 0x0800_114F;
/// Detection engine sound model.
pub const PARAM_ID_DETECTION_ENGINE_SOUND_MODEL: u32 = 0x0800_1049;
/// Detection engine voice wakeup configuration.
pub const PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP: u32 = 0x0800_1048;
/// Voice wakeup buffering configuration.
pub const PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG: u32 = 0x0800_1044;
/// Downstream setup duration of the data-arbitration module.
pub const PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION: u32 = 0x0800_1052;
/// Detection engine generic event configuration.
pub const PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG: u32 = 0x0800_104E;
/// Detection engine reset.
pub const PARAM_ID_DETECTION_ENGINE_RESET: u32 = 0x0800_1051;
/// Direction-of-arrival tracking monitor.
pub const PARAM_ID_FFV_DOA_TRACKING_MONITOR: u32 = 0x0800_10E4;
/// aptX classic encoder input switch.
pub const PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT: u32 = 0x0800_101F;
/// aptX adaptive mono/stereo switch.
pub const PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO: u32 = 0x0800_1186;
/// Rate-adapter media format.
pub const PARAM_ID_RAT_MEDIA_FORMAT: u32 = 0x0800_1123;
/// COP packetizer output media format.
pub const PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT: u32 = 0x0800_122B;

/// Linear PCM media format identifier.
pub const MEDIA_FMT_ID_PCM: u32 = 0x0900_1000;
/// Fixed-point sample data.
pub const DATA_FORMAT_FIXED_POINT: u32 = 1;
/// Little-endian samples.
pub const PCM_LITTLE_ENDIAN: u16 = 1;
/// Interleaved channels.
pub const PCM_INTERLEAVED: u16 = 1;
/// Deinterleaved, one packed buffer.
pub const PCM_DEINTERLEAVED_PACKED: u16 = 2;
/// Deinterleaved, one buffer per channel.
pub const PCM_DEINTERLEAVED_UNPACKED: u16 = 3;
/// Keep the DSP's native value for a field.
pub const PARAM_VAL_NATIVE: i16 = -1;

/// TDM slot mask written for every TDM link.
pub const TDM_SLOT_MASK: u32 = 0x3;
/// TDM slots per frame.
pub const TDM_SLOTS_PER_FRAME: u16 = 8;
/// TDM slot width in bits.
pub const TDM_SLOT_WIDTH: u16 = 32;

/// Master gain applied on top of the linear volume.
pub const VOLUME_MASTER_GAIN_DEFAULT: u32 = 0x2000;

/// Session time result area.
pub const SESSION_TIME_LEN: usize = 28;
/// Direction-of-arrival monitor result area.
pub const DOA_TRACKING_MONITOR_LEN: usize = 368;
