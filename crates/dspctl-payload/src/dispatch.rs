//! Module descriptors and tag-driven encoder selection.

use dspctl_core::MediaConfig;
use dspctl_hwep::{EndpointFamily, InterfaceTable};

use crate::endpoint;
use crate::envelope::Payload;
use crate::error::{Error, Result};
use crate::media;

/// One module of an instantiated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Static module type identifier.
    pub module_id: u32,
    /// Runtime instance identifier.
    pub module_iid: u32,
}

/// Modules the graph manager resolved for a tag. Encoders that take a
/// descriptor target the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Resolved modules, in graph-manager order.
    pub entries: Vec<ModuleEntry>,
}

impl ModuleInfo {
    /// Descriptor holding a single instance.
    pub fn single(module_iid: u32) -> Self {
        Self {
            entries: vec![ModuleEntry {
                module_id: 0,
                module_iid,
            }],
        }
    }

    /// Instance id of the first module.
    pub fn miid(&self) -> Result<u32> {
        self.entries
            .first()
            .map(|e| e.module_iid)
            .ok_or(Error::NoModule)
    }
}

/// Stream-side module whose format is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamConfigTag {
    /// Shared-memory endpoint input format.
    InMedia,
    /// PCM encoder output.
    PcmEncoder,
    /// PCM decoder output.
    PcmDecoder,
    /// PCM converter output.
    PcmConverter,
}

/// Encode the stream-side media format for `tag`.
pub fn stream_config(
    tag: StreamConfigTag,
    module: &ModuleInfo,
    media: &MediaConfig,
) -> Result<Payload> {
    match tag {
        StreamConfigTag::InMedia => media::in_media_format(module, media),
        StreamConfigTag::PcmEncoder | StreamConfigTag::PcmDecoder | StreamConfigTag::PcmConverter => {
            media::out_media_format(module, media)
        }
    }
}

/// Encode the device-side media format.
pub fn device_config(module: &ModuleInfo, media: &MediaConfig) -> Result<Payload> {
    media::hw_ep_media_format(module, media)
}

/// Encode the interface configuration for the endpoint named `endpoint_name`.
///
/// The family is picked from the name (`cdc`, `i2s`, `tdm`, `auxpcm`, `slim`).
pub fn device_endpoint_config(
    table: &InterfaceTable,
    module: &ModuleInfo,
    endpoint_name: &str,
    media: &MediaConfig,
) -> Result<Payload> {
    let family = EndpointFamily::from_endpoint_name(endpoint_name)
        .ok_or_else(|| dspctl_hwep::Error::UnknownFamily(endpoint_name.to_string()))?;
    tracing::debug!(endpoint = endpoint_name, %family, "device endpoint config");
    match family {
        EndpointFamily::CodecDma => endpoint::codec_dma(table, module, endpoint_name, media),
        EndpointFamily::I2s => endpoint::i2s(table, module, endpoint_name),
        EndpointFamily::Tdm => endpoint::tdm(table, module, endpoint_name),
        EndpointFamily::AuxPcm => endpoint::auxpcm(table, module, endpoint_name, media),
        EndpointFamily::Slimbus => endpoint::slimbus(table, module, endpoint_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;

    #[test]
    fn first_entry_is_the_target() {
        let info = ModuleInfo {
            entries: vec![
                ModuleEntry {
                    module_id: 0x0700_1000,
                    module_iid: 0x10,
                },
                ModuleEntry {
                    module_id: 0x0700_1001,
                    module_iid: 0x20,
                },
            ],
        };
        assert_eq!(info.miid().unwrap(), 0x10);
        assert!(matches!(ModuleInfo::default().miid(), Err(Error::NoModule)));
    }

    #[test]
    fn stream_tags_select_encoder() {
        let module = ModuleInfo::single(1);
        let media = MediaConfig::new(48000, 16, 2);
        let in_media = stream_config(StreamConfigTag::InMedia, &module, &media).unwrap();
        assert_eq!(in_media.envelope().param_id, ids::PARAM_ID_MEDIA_FORMAT);
        for tag in [
            StreamConfigTag::PcmEncoder,
            StreamConfigTag::PcmDecoder,
            StreamConfigTag::PcmConverter,
        ] {
            let p = stream_config(tag, &module, &media).unwrap();
            assert_eq!(p.envelope().param_id, ids::PARAM_ID_PCM_OUTPUT_FORMAT_CFG);
        }
    }

    #[test]
    fn device_config_is_hw_ep() {
        let p = device_config(&ModuleInfo::single(3), &MediaConfig::new(8000, 16, 1)).unwrap();
        assert_eq!(p.envelope().param_id, ids::PARAM_ID_HW_EP_MF_CFG);
    }

    #[test]
    fn endpoint_without_family_is_not_found() {
        let table = InterfaceTable::default();
        let err = device_endpoint_config(
            &table,
            &ModuleInfo::single(3),
            "dp-0-rx",
            &MediaConfig::new(48000, 16, 2),
        )
        .unwrap_err();
        assert_eq!(err.kind(), dspctl_core::ErrorKind::ConfigurationNotFound);
    }
}
