//! Endpoint records, one type per interface family.

use std::fmt;

/// Hardware interface family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointFamily {
    /// Codec DMA link.
    CodecDma,
    /// Inter-IC sound.
    I2s,
    /// Time-division multiplexed serial port.
    Tdm,
    /// Auxiliary PCM.
    AuxPcm,
    /// MIPI SLIMbus.
    Slimbus,
}

impl EndpointFamily {
    /// All families, in XML grammar order.
    pub const ALL: [EndpointFamily; 5] = [
        EndpointFamily::CodecDma,
        EndpointFamily::I2s,
        EndpointFamily::Tdm,
        EndpointFamily::AuxPcm,
        EndpointFamily::Slimbus,
    ];

    /// XML element describing endpoints of this family.
    pub const fn element_name(self) -> &'static str {
        match self {
            EndpointFamily::CodecDma => "codec_hw_intf",
            EndpointFamily::I2s => "i2s_hw_intf",
            EndpointFamily::Tdm => "tdm_hw_intf",
            EndpointFamily::AuxPcm => "auxpcm_hw_intf",
            EndpointFamily::Slimbus => "slim_hw_intf",
        }
    }

    /// Family for an XML element name.
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_name() == name)
    }

    /// Substring that marks an endpoint name as belonging to this family.
    pub const fn name_marker(self) -> &'static str {
        match self {
            EndpointFamily::CodecDma => "cdc",
            EndpointFamily::I2s => "i2s",
            EndpointFamily::Tdm => "tdm",
            EndpointFamily::AuxPcm => "auxpcm",
            EndpointFamily::Slimbus => "slim",
        }
    }

    /// Family an endpoint name belongs to, judged by the first marker it contains.
    pub fn from_endpoint_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| name.contains(f.name_marker()))
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            EndpointFamily::CodecDma => "codec-dma",
            EndpointFamily::I2s => "i2s",
            EndpointFamily::Tdm => "tdm",
            EndpointFamily::AuxPcm => "auxpcm",
            EndpointFamily::Slimbus => "slimbus",
        }
    }
}

impl fmt::Display for EndpointFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Codec DMA endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecDmaEndpoint {
    /// Endpoint name as written in the XML.
    pub name: String,
    /// Hardware link index.
    pub link_index: u32,
    /// LPAIF controller instance.
    pub lpaif_type: u32,
    /// Codec interface index.
    pub intf_idx: u32,
}

/// I2S endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I2sEndpoint {
    /// Endpoint name as written in the XML.
    pub name: String,
    /// Hardware link index.
    pub link_index: u32,
    /// LPAIF controller instance.
    pub lpaif_type: u32,
    /// Interface type.
    pub intf_idx: u16,
    /// Serial-data line selector.
    pub sd_line_idx: u16,
    /// Word-select clock source.
    pub ws_src: u16,
}

/// TDM endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TdmEndpoint {
    /// Endpoint name as written in the XML.
    pub name: String,
    /// Hardware link index.
    pub link_index: u32,
    /// LPAIF controller instance.
    pub lpaif_type: u32,
    /// Interface type.
    pub intf_idx: u16,
    /// Frame-sync source.
    pub sync_src: u16,
    /// Data-out enable.
    pub ctrl_data_out_enable: u16,
    /// Sync pulse mode.
    pub sync_mode: u16,
    /// Sync pulse polarity.
    pub ctrl_invert_sync_pulse: u16,
    /// Data delay in bit-clock cycles.
    pub ctrl_sync_data_delay: u16,
}

/// Auxiliary PCM endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxPcmEndpoint {
    /// Endpoint name as written in the XML.
    pub name: String,
    /// Hardware link index.
    pub link_index: u32,
    /// LPAIF controller instance.
    pub lpaif_type: u32,
    /// Interface type.
    pub intf_idx: u16,
    /// Frame-sync source.
    pub sync_src: u16,
    /// Data-out enable.
    pub ctrl_data_out_enable: u16,
    /// Bits-per-frame selector.
    pub frame_setting: u16,
    /// PCM or AUX framing.
    pub aux_mode: u16,
}

/// SLIMbus endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlimbusEndpoint {
    /// Endpoint name as written in the XML.
    pub name: String,
    /// Hardware link index.
    pub link_index: u32,
    /// SLIMbus device.
    pub dev_id: u32,
    /// Shared channel numbers for mapping slots 0 and 1.
    pub shared_channels: [u8; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_names_round_trip() {
        for family in EndpointFamily::ALL {
            assert_eq!(
                EndpointFamily::from_element_name(family.element_name()),
                Some(family)
            );
        }
        assert_eq!(EndpointFamily::from_element_name("usb_hw_intf"), None);
    }

    #[test]
    fn endpoint_name_markers() {
        assert_eq!(
            EndpointFamily::from_endpoint_name("cdc-pri"),
            Some(EndpointFamily::CodecDma)
        );
        assert_eq!(
            EndpointFamily::from_endpoint_name("auxpcm-pri-rx"),
            Some(EndpointFamily::AuxPcm)
        );
        assert_eq!(
            EndpointFamily::from_endpoint_name("slim-0-tx"),
            Some(EndpointFamily::Slimbus)
        );
        assert_eq!(EndpointFamily::from_endpoint_name("dp-0-rx"), None);
        assert_eq!(EndpointFamily::from_endpoint_name("CDC-PRI"), None);
    }
}
