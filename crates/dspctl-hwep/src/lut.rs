//! Closed lookup tables for XML attribute values.
//!
//! Each table maps the literal attribute text to the numeric value the DSP
//! firmware expects. The values are part of the firmware ABI.

use crate::error::ElementError;

/// A closed string-to-value table.
pub type Table = &'static [(&'static str, u32)];

/// Endpoint name to hardware link index.
pub const LINK_INDEX: Table = &[
    ("cdc-pri", 1),
    ("cdc-sec", 2),
    ("i2s-pri", 3),
    ("i2s-sec", 4),
    ("tdm-pri", 5),
    ("tdm-sec", 6),
    ("auxpcm-pri-rx", 7),
    ("auxpcm-pri-tx", 8),
    ("slim-0-rx", 7),
    ("slim-0-tx", 8),
];

/// LPAIF controller instance.
pub const LPAIF_TYPE: Table = &[
    ("LPAIF", 0),
    ("LPAIF_RXTX", 1),
    ("LPAIF_WSA", 2),
    ("LPAIF_VA", 3),
    ("LPAIF_AXI", 4),
];

/// Codec-DMA interface index.
pub const CODEC_INTF_IDX: Table = &[
    ("CODEC_RX0", 1),
    ("CODEC_TX0", 1),
    ("CODEC_RX1", 2),
    ("CODEC_TX1", 2),
    ("CODEC_RX2", 3),
    ("CODEC_TX2", 3),
    ("CODEC_RX3", 4),
    ("CODEC_TX3", 4),
    ("CODEC_RX4", 5),
    ("CODEC_TX4", 5),
    ("CODEC_RX5", 6),
    ("CODEC_TX5", 6),
    ("CODEC_RX6", 7),
    ("CODEC_RX7", 8),
];

/// Primary interface type shared by I2S, TDM and PCM links.
pub const INTF_TYPE_PRIMARY: u32 = 0;

/// I2S interface type by endpoint name. The secondary link reports the
/// primary interface type.
pub const I2S_INTF_IDX: Table = &[
    ("i2s-pri", INTF_TYPE_PRIMARY),
    ("i2s-sec", INTF_TYPE_PRIMARY),
];

/// TDM interface type by endpoint name.
pub const TDM_INTF_IDX: Table = &[
    ("tdm-pri", INTF_TYPE_PRIMARY),
    ("tdm-sec", INTF_TYPE_PRIMARY),
];

/// Auxiliary-PCM interface type by endpoint name.
pub const AUXPCM_INTF_IDX: Table = &[
    ("auxpcm-pri-rx", INTF_TYPE_PRIMARY),
    ("auxpcm-pri-tx", INTF_TYPE_PRIMARY),
];

/// I2S word-select clock source.
pub const I2S_WS_SRC: Table = &[
    ("CONFIG_I2S_WS_SRC_EXTERNAL", 0),
    ("CONFIG_I2S_WS_SRC_INTERNAL", 1),
];

/// TDM frame-sync source.
pub const TDM_SYNC_SRC: Table = &[("TDM_SYNC_SRC_EXTERNAL", 0), ("TDM_SYNC_SRC_INTERNAL", 1)];

/// TDM data-out enable control.
pub const TDM_CTRL_DATA: Table = &[
    ("TDM_CTRL_DATA_OE_DISABLE", 0),
    ("TDM_CTRL_DATA_OE_ENABLE", 1),
];

/// TDM sync pulse mode.
pub const TDM_SYNC_MODE: Table = &[
    ("TDM_SHORT_SYNC_BIT_MODE", 0),
    ("TDM_LONG_SYNC_MODE", 1),
    ("TDM_SHORT_SYNC_SLOT_MODE", 2),
];

/// TDM sync pulse polarity.
pub const TDM_INVERT_SYNC: Table = &[("TDM_SYNC_NORMAL", 0), ("TDM_SYNC_INVERT", 1)];

/// TDM data delay relative to sync, in bit-clock cycles.
pub const TDM_SYNC_DATA_DELAY: Table = &[
    ("TDM_DATA_DELAY_0_BCLK_CYCLE", 0),
    ("TDM_DATA_DELAY_1_BCLK_CYCLE", 1),
    ("TDM_DATA_DELAY_2_BCLK_CYCLE", 2),
];

/// Auxiliary-PCM frame-sync source.
pub const PCM_SYNC_SRC: Table = &[("PCM_SYNC_SRC_EXTERNAL", 0), ("PCM_SYNC_SRC_INTERNAL", 1)];

/// Auxiliary-PCM data-out enable control.
pub const PCM_CTRL_DATA: Table = &[
    ("PCM_CTRL_DATA_OE_DISABLE", 0),
    ("PCM_CTRL_DATA_OE_ENABLE", 1),
];

/// Auxiliary-PCM bits per frame.
pub const PCM_FRAME_SETTING: Table = &[
    ("PCM_BITS_PER_FRAME_16", 0),
    ("PCM_BITS_PER_FRAME_32", 1),
    ("PCM_BITS_PER_FRAME_64", 2),
    ("PCM_BITS_PER_FRAME_128", 3),
    ("PCM_BITS_PER_FRAME_256", 4),
];

/// Auxiliary-PCM framing mode.
pub const PCM_AUX_MODE: Table = &[("PCM_MODE", 0), ("AUX_MODE", 1)];

/// SLIMbus device.
pub const SLIM_DEV_ID: Table = &[("SLIMBUS_DEVICE_1", 0), ("SLIMBUS_DEVICE_2", 1)];

/// SLIMbus shared channel number.
pub const SLIM_SHARED_CHANNEL: Table = &[
    ("SLIM_RX0", 128),
    ("SLIM_RX1", 129),
    ("SLIM_TX0", 144),
    ("SLIM_TX1", 145),
    ("SLIM_TX7", 151),
];

/// Resolve `value` through `table`.
pub fn lookup(table: Table, attribute: &'static str, value: &str) -> Result<u32, ElementError> {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map(|&(_, v)| v)
        .ok_or_else(|| ElementError::UnknownValue {
            attribute,
            value: value.to_string(),
        })
}

/// Link index of an endpoint name, if it has one.
pub fn link_index(name: &str) -> Option<u32> {
    LINK_INDEX
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, v)| v)
}

const SD0: u32 = 1 << 0;
const SD1: u32 = 1 << 1;
const SD2: u32 = 1 << 2;
const SD3: u32 = 1 << 3;

/// Firmware serial-data line selector for an I2S line bitmask.
///
/// A mask with no lines yields 0; the caller decides whether to keep it.
pub fn i2s_sd_line(mask: u32) -> Result<u16, ElementError> {
    match mask {
        0 => Ok(0),
        SD0 => Ok(1),
        SD1 => Ok(2),
        SD2 => Ok(3),
        SD3 => Ok(4),
        m if m == SD0 | SD1 => Ok(5),
        m if m == SD2 | SD3 => Ok(6),
        m if m == SD0 | SD1 | SD2 => Ok(7),
        m if m == SD0 | SD1 | SD2 | SD3 => Ok(8),
        other => Err(ElementError::InvalidLineMask(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(lookup(LPAIF_TYPE, "lpaif_type", "LPAIF_VA"), Ok(3));
        assert_eq!(
            lookup(LPAIF_TYPE, "lpaif_type", "lpaif_va"),
            Err(ElementError::UnknownValue {
                attribute: "lpaif_type",
                value: "lpaif_va".into(),
            })
        );
    }

    #[test]
    fn link_indices() {
        assert_eq!(link_index("cdc-pri"), Some(1));
        assert_eq!(link_index("auxpcm-pri-tx"), Some(8));
        assert_eq!(link_index("slim-0-rx"), Some(7));
        assert_eq!(link_index("dp-0-rx"), None);
    }

    #[test]
    fn secondary_links_report_primary_type() {
        assert_eq!(lookup(I2S_INTF_IDX, "name", "i2s-sec"), Ok(INTF_TYPE_PRIMARY));
        assert_eq!(lookup(TDM_INTF_IDX, "name", "tdm-sec"), Ok(INTF_TYPE_PRIMARY));
    }

    #[test]
    fn sd_line_masks() {
        assert_eq!(i2s_sd_line(0), Ok(0));
        assert_eq!(i2s_sd_line(0b0001), Ok(1));
        assert_eq!(i2s_sd_line(0b1000), Ok(4));
        assert_eq!(i2s_sd_line(0b0011), Ok(5));
        assert_eq!(i2s_sd_line(0b1100), Ok(6));
        assert_eq!(i2s_sd_line(0b0111), Ok(7));
        assert_eq!(i2s_sd_line(0b1111), Ok(8));
        assert_eq!(i2s_sd_line(0b0101), Err(ElementError::InvalidLineMask(5)));
        assert_eq!(i2s_sd_line(0b1110), Err(ElementError::InvalidLineMask(14)));
        assert_eq!(i2s_sd_line(0x10), Err(ElementError::InvalidLineMask(16)));
    }

    #[test]
    fn codec_indices_are_one_based() {
        assert_eq!(lookup(CODEC_INTF_IDX, "intf_idx", "CODEC_RX0"), Ok(1));
        assert_eq!(lookup(CODEC_INTF_IDX, "intf_idx", "CODEC_RX7"), Ok(8));
        assert_eq!(lookup(CODEC_INTF_IDX, "intf_idx", "CODEC_TX5"), Ok(6));
        assert!(lookup(CODEC_INTF_IDX, "intf_idx", "CODEC_TX6").is_err());
    }
}
