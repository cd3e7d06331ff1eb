//! Hardware endpoint interface encoders.
//!
//! The physical-link encoders resolve their endpoint in the
//! [`InterfaceTable`]; a name the table does not know fails the call.

use byteorder::{LittleEndian, WriteBytesExt};
use dspctl_core::{MediaConfig, active_channel_mask};
use dspctl_hwep::InterfaceTable;

use crate::dispatch::ModuleInfo;
use crate::envelope::{Payload, PayloadWriter};
use crate::error::Result;
use crate::ids::{
    PARAM_ID_CODEC_DMA_INTF_CFG, PARAM_ID_DISPLAY_PORT_INTF_CFG, PARAM_ID_HW_PCM_INTF_CFG,
    PARAM_ID_I2S_INTF_CFG, PARAM_ID_SLIMBUS_CONFIG, PARAM_ID_TDM_INTF_CFG,
    PARAM_ID_USB_AUDIO_INTF_CFG, TDM_SLOT_MASK, TDM_SLOT_WIDTH, TDM_SLOTS_PER_FRAME,
};

const SLIMBUS_MAPPING_SLOTS: usize = 8;

/// Codec DMA interface (`PARAM_ID_CODEC_DMA_INTF_CFG`).
pub fn codec_dma(
    table: &InterfaceTable,
    module: &ModuleInfo,
    endpoint: &str,
    media: &MediaConfig,
) -> Result<Payload> {
    let miid = module.miid()?;
    let cdc = table.codec_dma(endpoint)?;
    let mask = active_channel_mask(media.channels);

    let mut w = PayloadWriter::begin(miid, PARAM_ID_CODEC_DMA_INTF_CFG, 12)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(cdc.lpaif_type)?;
    out.write_u32::<LittleEndian>(cdc.intf_idx)?;
    out.write_u32::<LittleEndian>(mask)?;

    tracing::debug!(
        endpoint,
        lpaif_type = cdc.lpaif_type,
        intf_idx = cdc.intf_idx,
        active_channels_mask = format_args!("{mask:#x}"),
        "codec dma config"
    );
    Ok(w.finish())
}

/// I2S interface (`PARAM_ID_I2S_INTF_CFG`).
pub fn i2s(table: &InterfaceTable, module: &ModuleInfo, endpoint: &str) -> Result<Payload> {
    let miid = module.miid()?;
    let ep = table.i2s(endpoint)?;

    let mut w = PayloadWriter::begin(miid, PARAM_ID_I2S_INTF_CFG, 12)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(ep.lpaif_type)?;
    out.write_u16::<LittleEndian>(ep.intf_idx)?;
    out.write_u16::<LittleEndian>(ep.sd_line_idx)?;
    out.write_u16::<LittleEndian>(ep.ws_src)?;
    out.write_u16::<LittleEndian>(0)?;

    tracing::debug!(
        endpoint,
        intf_idx = ep.intf_idx,
        sd_line_idx = ep.sd_line_idx,
        ws_src = ep.ws_src,
        "i2s config"
    );
    Ok(w.finish())
}

/// TDM interface (`PARAM_ID_TDM_INTF_CFG`). Slot layout is fixed at
/// eight 32-bit slots with the first two active.
pub fn tdm(table: &InterfaceTable, module: &ModuleInfo, endpoint: &str) -> Result<Payload> {
    let miid = module.miid()?;
    let ep = table.tdm(endpoint)?;

    let mut w = PayloadWriter::begin(miid, PARAM_ID_TDM_INTF_CFG, 28)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(ep.lpaif_type)?;
    out.write_u16::<LittleEndian>(ep.intf_idx)?;
    out.write_u16::<LittleEndian>(ep.sync_src)?;
    out.write_u16::<LittleEndian>(ep.ctrl_data_out_enable)?;
    out.write_u16::<LittleEndian>(0)?;
    out.write_u32::<LittleEndian>(TDM_SLOT_MASK)?;
    out.write_u16::<LittleEndian>(TDM_SLOTS_PER_FRAME)?;
    out.write_u16::<LittleEndian>(TDM_SLOT_WIDTH)?;
    out.write_u16::<LittleEndian>(ep.sync_mode)?;
    out.write_u16::<LittleEndian>(ep.ctrl_invert_sync_pulse)?;
    out.write_u16::<LittleEndian>(ep.ctrl_sync_data_delay)?;
    out.write_u16::<LittleEndian>(0)?;

    tracing::debug!(
        endpoint,
        intf_idx = ep.intf_idx,
        sync_src = ep.sync_src,
        sync_mode = ep.sync_mode,
        "tdm config"
    );
    Ok(w.finish())
}

/// Auxiliary PCM interface (`PARAM_ID_HW_PCM_INTF_CFG`). The slot mask
/// follows the channel count.
pub fn auxpcm(
    table: &InterfaceTable,
    module: &ModuleInfo,
    endpoint: &str,
    media: &MediaConfig,
) -> Result<Payload> {
    let miid = module.miid()?;
    let ep = table.auxpcm(endpoint)?;
    let slot_mask = active_channel_mask(media.channels);

    let mut w = PayloadWriter::begin(miid, PARAM_ID_HW_PCM_INTF_CFG, 20)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(ep.lpaif_type)?;
    out.write_u16::<LittleEndian>(ep.intf_idx)?;
    out.write_u16::<LittleEndian>(ep.sync_src)?;
    out.write_u16::<LittleEndian>(ep.ctrl_data_out_enable)?;
    out.write_u16::<LittleEndian>(0)?;
    out.write_u32::<LittleEndian>(slot_mask)?;
    out.write_u16::<LittleEndian>(ep.frame_setting)?;
    out.write_u16::<LittleEndian>(ep.aux_mode)?;

    tracing::debug!(
        endpoint,
        intf_idx = ep.intf_idx,
        slot_mask = format_args!("{slot_mask:#x}"),
        frame_setting = ep.frame_setting,
        aux_mode = ep.aux_mode,
        "auxpcm config"
    );
    Ok(w.finish())
}

/// SLIMbus interface (`PARAM_ID_SLIMBUS_CONFIG`).
pub fn slimbus(table: &InterfaceTable, module: &ModuleInfo, endpoint: &str) -> Result<Payload> {
    let miid = module.miid()?;
    let ep = table.slimbus(endpoint)?;

    let mut mapping = [0u8; SLIMBUS_MAPPING_SLOTS];
    mapping[..2].copy_from_slice(&ep.shared_channels);

    let mut w = PayloadWriter::begin(miid, PARAM_ID_SLIMBUS_CONFIG, 4 + SLIMBUS_MAPPING_SLOTS)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(ep.dev_id)?;
    for slot in mapping {
        out.write_u8(slot)?;
    }

    tracing::debug!(
        endpoint,
        dev_id = ep.dev_id,
        index_0 = ep.shared_channels[0],
        index_1 = ep.shared_channels[1],
        "slimbus config"
    );
    Ok(w.finish())
}

/// USB audio link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbAudioConfig {
    /// Card and device token of the USB audio device.
    pub usb_token: u32,
    /// Service interval in microseconds.
    pub svc_interval: u32,
}

/// USB audio interface (`PARAM_ID_USB_AUDIO_INTF_CFG`).
pub fn usb_audio(miid: u32, config: &UsbAudioConfig) -> Result<Payload> {
    let mut w = PayloadWriter::begin(miid, PARAM_ID_USB_AUDIO_INTF_CFG, 8)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(config.usb_token)?;
    out.write_u32::<LittleEndian>(config.svc_interval)?;
    Ok(w.finish())
}

/// DisplayPort link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPortConfig {
    /// CEA-861 speaker allocation.
    pub channel_allocation: u32,
    /// Multi-stream transport index.
    pub mst_idx: u32,
    /// DisplayPort transmitter index.
    pub dptx_idx: u32,
}

/// DisplayPort interface (`PARAM_ID_DISPLAY_PORT_INTF_CFG`).
pub fn display_port(miid: u32, config: &DisplayPortConfig) -> Result<Payload> {
    let mut w = PayloadWriter::begin(miid, PARAM_ID_DISPLAY_PORT_INTF_CFG, 12)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(config.channel_allocation)?;
    out.write_u32::<LittleEndian>(config.mst_idx)?;
    out.write_u32::<LittleEndian>(config.dptx_idx)?;
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian as LE};
    use dspctl_core::ErrorKind;

    fn table() -> InterfaceTable {
        InterfaceTable::from_xml(
            r#"<hw_ep_info>
            <codec_hw_intf name="cdc-pri" lpaif_type="LPAIF_WSA" intf_idx="CODEC_RX1"/>
            <i2s_hw_intf name="i2s-pri" line_mask="1" ws_src="CONFIG_I2S_WS_SRC_INTERNAL" lpaif_type="LPAIF_RXTX"/>
            <tdm_hw_intf name="tdm-pri" lpaif_type="LPAIF" sync_src="TDM_SYNC_SRC_EXTERNAL"
                ctrl_data="TDM_CTRL_DATA_OE_ENABLE" sync_mode="TDM_LONG_SYNC_MODE"
                ctrl_invert_sync_pulse="TDM_SYNC_INVERT" ctrl_sync_data_delay="TDM_DATA_DELAY_2_BCLK_CYCLE"/>
            <auxpcm_hw_intf name="auxpcm-pri-tx" lpaif_type="LPAIF_AXI" sync_src="PCM_SYNC_SRC_INTERNAL"
                ctrl_data="PCM_CTRL_DATA_OE_ENABLE" frame_setting="PCM_BITS_PER_FRAME_64" aux_mode="PCM_MODE"/>
            <slim_hw_intf name="slim-0-tx" slim_dev_id="SLIMBUS_DEVICE_1" index_0="SLIM_TX0" index_1="SLIM_TX1"/>
            </hw_ep_info>"#,
        )
        .unwrap()
    }

    #[test]
    fn codec_dma_layout() {
        let p = codec_dma(
            &table(),
            &ModuleInfo::single(9),
            "cdc-pri",
            &MediaConfig::new(48000, 16, 4),
        )
        .unwrap();
        assert_eq!(p.envelope().param_size, 12);
        assert_eq!(p.len(), 32);
        let t = p.trailer();
        assert_eq!(LE::read_u32(&t[0..4]), 2);
        assert_eq!(LE::read_u32(&t[4..8]), 2);
        assert_eq!(LE::read_u32(&t[8..12]), 0xF);
    }

    #[test]
    fn codec_dma_unknown_endpoint() {
        let err = codec_dma(
            &table(),
            &ModuleInfo::single(9),
            "cdc-sec",
            &MediaConfig::new(48000, 16, 2),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationNotFound);
    }

    #[test]
    fn i2s_layout() {
        let p = i2s(&table(), &ModuleInfo::single(9), "i2s-pri").unwrap();
        let t = p.trailer();
        assert_eq!(t.len(), 12);
        assert_eq!(LE::read_u32(&t[0..4]), 1);
        assert_eq!(LE::read_u16(&t[4..6]), 0);
        assert_eq!(LE::read_u16(&t[6..8]), 1);
        assert_eq!(LE::read_u16(&t[8..10]), 1);
    }

    #[test]
    fn tdm_layout() {
        let p = tdm(&table(), &ModuleInfo::single(9), "tdm-pri").unwrap();
        assert_eq!(p.envelope().param_size, 28);
        assert_eq!(p.len(), 48);
        let t = p.trailer();
        assert_eq!(LE::read_u16(&t[6..8]), 0);
        assert_eq!(LE::read_u16(&t[8..10]), 1);
        assert_eq!(LE::read_u32(&t[12..16]), TDM_SLOT_MASK);
        assert_eq!(LE::read_u16(&t[16..18]), 8);
        assert_eq!(LE::read_u16(&t[18..20]), 32);
        assert_eq!(LE::read_u16(&t[20..22]), 1);
        assert_eq!(LE::read_u16(&t[22..24]), 1);
        assert_eq!(LE::read_u16(&t[24..26]), 2);
    }

    #[test]
    fn auxpcm_layout() {
        let p = auxpcm(
            &table(),
            &ModuleInfo::single(9),
            "auxpcm-pri-tx",
            &MediaConfig::new(8000, 16, 1),
        )
        .unwrap();
        assert_eq!(p.envelope().param_size, 20);
        let t = p.trailer();
        assert_eq!(LE::read_u32(&t[0..4]), 4);
        assert_eq!(LE::read_u16(&t[6..8]), 1);
        assert_eq!(LE::read_u32(&t[12..16]), 0x1);
        assert_eq!(LE::read_u16(&t[16..18]), 2);
        assert_eq!(LE::read_u16(&t[18..20]), 0);
    }

    #[test]
    fn slimbus_layout() {
        let p = slimbus(&table(), &ModuleInfo::single(9), "slim-0-tx").unwrap();
        assert_eq!(p.envelope().param_size, 12);
        assert_eq!(p.len(), 32);
        let t = p.trailer();
        assert_eq!(LE::read_u32(&t[0..4]), 0);
        assert_eq!(&t[4..12], &[144, 145, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn usb_and_dp_use_padding_rule() {
        let usb = usb_audio(
            5,
            &UsbAudioConfig {
                usb_token: 0x0001_0002,
                svc_interval: 125,
            },
        )
        .unwrap();
        assert_eq!(usb.envelope().param_size, 8);
        assert_eq!(usb.len(), 24);

        let dp = display_port(
            5,
            &DisplayPortConfig {
                channel_allocation: 0x13,
                mst_idx: 0,
                dptx_idx: 1,
            },
        )
        .unwrap();
        assert_eq!(dp.envelope().param_size, 12);
        assert_eq!(dp.len(), 32);
        assert_eq!(LE::read_u32(&dp.trailer()[8..12]), 1);
    }
}
