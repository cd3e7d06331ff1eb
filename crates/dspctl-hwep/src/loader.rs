//! XML element parsers.
//!
//! Each parser checks attribute names positionally before resolving values,
//! so a misordered element is rejected even when every name is valid.

use roxmltree::{Document, Node};

use crate::endpoint::{
    AuxPcmEndpoint, CodecDmaEndpoint, EndpointFamily, I2sEndpoint, SlimbusEndpoint, TdmEndpoint,
};
use crate::error::ElementError;
use crate::lut::{self, lookup};
use crate::table::InterfaceTableBuilder;

type ElementResult<T> = std::result::Result<T, ElementError>;

/// Ordered attribute list of one element.
struct Attrs<'a> {
    items: Vec<(&'a str, &'a str)>,
}

impl<'a> Attrs<'a> {
    fn of(node: Node<'a, '_>) -> Self {
        Self {
            items: node.attributes().map(|a| (a.name(), a.value())).collect(),
        }
    }

    /// Value at `position`, provided the attribute there is named `expected`.
    fn at(&self, position: usize, expected: &'static str) -> ElementResult<&'a str> {
        let (name, value) = self
            .items
            .get(position)
            .ok_or(ElementError::MissingAttribute { position, expected })?;
        if *name != expected {
            return Err(ElementError::AttributeMismatch {
                position,
                expected,
                found: (*name).to_string(),
            });
        }
        Ok(value)
    }

    fn name(&self) -> ElementResult<(&'a str, u32)> {
        let name = self.at(0, "name")?;
        let link_index = lut::link_index(name).ok_or_else(|| ElementError::UnknownValue {
            attribute: "name",
            value: name.to_string(),
        })?;
        Ok((name, link_index))
    }
}

/// Parse every recognized element of `xml` into `builder`.
pub(crate) fn load(builder: &mut InterfaceTableBuilder, xml: &str) -> crate::error::Result<()> {
    let doc = Document::parse(xml)?;
    for node in doc.descendants().filter(Node::is_element) {
        let Some(family) = EndpointFamily::from_element_name(node.tag_name().name()) else {
            continue;
        };
        let attrs = Attrs::of(node);
        let parsed = match family {
            EndpointFamily::CodecDma => parse_codec(&attrs).map(|e| builder.push_codec_dma(e)),
            EndpointFamily::I2s => parse_i2s(&attrs).map(|e| builder.push_i2s(e)),
            EndpointFamily::Tdm => parse_tdm(&attrs).map(|e| builder.push_tdm(e)),
            EndpointFamily::AuxPcm => parse_auxpcm(&attrs).map(|e| builder.push_auxpcm(e)),
            EndpointFamily::Slimbus => parse_slim(&attrs).map(|e| builder.push_slimbus(e)),
        };
        if let Err(reason) = parsed {
            let line = doc.text_pos_at(node.range().start).row;
            tracing::warn!(
                element = family.element_name(),
                line,
                "skipping endpoint: {reason}"
            );
            builder.skip(family, line, reason);
        }
    }
    Ok(())
}

fn parse_codec(attrs: &Attrs<'_>) -> ElementResult<CodecDmaEndpoint> {
    let (name, link_index) = attrs.name()?;
    let lpaif_type = lookup(lut::LPAIF_TYPE, "lpaif_type", attrs.at(1, "lpaif_type")?)?;
    let intf_idx = lookup(lut::CODEC_INTF_IDX, "intf_idx", attrs.at(2, "intf_idx")?)?;
    Ok(CodecDmaEndpoint {
        name: name.to_string(),
        link_index,
        lpaif_type,
        intf_idx,
    })
}

fn parse_i2s(attrs: &Attrs<'_>) -> ElementResult<I2sEndpoint> {
    let (name, link_index) = attrs.name()?;
    let intf_idx = lookup(lut::I2S_INTF_IDX, "name", name)?;

    let raw_mask = attrs.at(1, "line_mask")?;
    let mask: u32 = raw_mask
        .trim()
        .parse()
        .map_err(|_| ElementError::UnknownValue {
            attribute: "line_mask",
            value: raw_mask.to_string(),
        })?;
    let sd_line_idx = lut::i2s_sd_line(mask)?;
    if mask == 0 {
        tracing::warn!(endpoint = name, "no serial-data line assigned");
    }

    let ws_src = lookup(lut::I2S_WS_SRC, "ws_src", attrs.at(2, "ws_src")?)?;
    let lpaif_type = lookup(lut::LPAIF_TYPE, "lpaif_type", attrs.at(3, "lpaif_type")?)?;
    Ok(I2sEndpoint {
        name: name.to_string(),
        link_index,
        lpaif_type,
        intf_idx: intf_idx as u16,
        sd_line_idx,
        ws_src: ws_src as u16,
    })
}

fn parse_tdm(attrs: &Attrs<'_>) -> ElementResult<TdmEndpoint> {
    let (name, link_index) = attrs.name()?;
    let intf_idx = lookup(lut::TDM_INTF_IDX, "name", name)?;
    let lpaif_type = lookup(lut::LPAIF_TYPE, "lpaif_type", attrs.at(1, "lpaif_type")?)?;
    let sync_src = lookup(lut::TDM_SYNC_SRC, "sync_src", attrs.at(2, "sync_src")?)?;
    let ctrl_data = lookup(lut::TDM_CTRL_DATA, "ctrl_data", attrs.at(3, "ctrl_data")?)?;
    let sync_mode = lookup(lut::TDM_SYNC_MODE, "sync_mode", attrs.at(4, "sync_mode")?)?;
    let invert = lookup(
        lut::TDM_INVERT_SYNC,
        "ctrl_invert_sync_pulse",
        attrs.at(5, "ctrl_invert_sync_pulse")?,
    )?;
    let delay = lookup(
        lut::TDM_SYNC_DATA_DELAY,
        "ctrl_sync_data_delay",
        attrs.at(6, "ctrl_sync_data_delay")?,
    )?;
    Ok(TdmEndpoint {
        name: name.to_string(),
        link_index,
        lpaif_type,
        intf_idx: intf_idx as u16,
        sync_src: sync_src as u16,
        ctrl_data_out_enable: ctrl_data as u16,
        sync_mode: sync_mode as u16,
        ctrl_invert_sync_pulse: invert as u16,
        ctrl_sync_data_delay: delay as u16,
    })
}

fn parse_auxpcm(attrs: &Attrs<'_>) -> ElementResult<AuxPcmEndpoint> {
    let (name, link_index) = attrs.name()?;
    let intf_idx = lookup(lut::AUXPCM_INTF_IDX, "name", name)?;
    let lpaif_type = lookup(lut::LPAIF_TYPE, "lpaif_type", attrs.at(1, "lpaif_type")?)?;
    let sync_src = lookup(lut::PCM_SYNC_SRC, "sync_src", attrs.at(2, "sync_src")?)?;
    let ctrl_data = lookup(lut::PCM_CTRL_DATA, "ctrl_data", attrs.at(3, "ctrl_data")?)?;
    let frame_setting = lookup(
        lut::PCM_FRAME_SETTING,
        "frame_setting",
        attrs.at(4, "frame_setting")?,
    )?;
    let aux_mode = lookup(lut::PCM_AUX_MODE, "aux_mode", attrs.at(5, "aux_mode")?)?;
    Ok(AuxPcmEndpoint {
        name: name.to_string(),
        link_index,
        lpaif_type,
        intf_idx: intf_idx as u16,
        sync_src: sync_src as u16,
        ctrl_data_out_enable: ctrl_data as u16,
        frame_setting: frame_setting as u16,
        aux_mode: aux_mode as u16,
    })
}

fn parse_slim(attrs: &Attrs<'_>) -> ElementResult<SlimbusEndpoint> {
    let (name, link_index) = attrs.name()?;
    let dev_id = lookup(lut::SLIM_DEV_ID, "slim_dev_id", attrs.at(1, "slim_dev_id")?)?;
    let index_0 = lookup(lut::SLIM_SHARED_CHANNEL, "index_0", attrs.at(2, "index_0")?)?;
    let index_1 = lookup(lut::SLIM_SHARED_CHANNEL, "index_1", attrs.at(3, "index_1")?)?;
    Ok(SlimbusEndpoint {
        name: name.to_string(),
        link_index,
        dev_id,
        shared_channels: [index_0 as u8, index_1 as u8],
    })
}
