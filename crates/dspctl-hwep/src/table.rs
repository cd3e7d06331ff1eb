//! The interface configuration table.

use std::path::Path;

use crate::endpoint::{
    AuxPcmEndpoint, CodecDmaEndpoint, EndpointFamily, I2sEndpoint, SlimbusEndpoint, TdmEndpoint,
};
use crate::error::{ElementError, Error, Result};
use crate::{loader, lut};

/// An element the loader rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedElement {
    /// Family of the rejected element.
    pub family: EndpointFamily,
    /// One-based source line.
    pub line: u32,
    /// Why it was rejected.
    pub reason: ElementError,
}

/// Per-family entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Codec DMA entries.
    pub codec_dma: usize,
    /// I2S entries.
    pub i2s: usize,
    /// TDM entries.
    pub tdm: usize,
    /// Auxiliary PCM entries.
    pub auxpcm: usize,
    /// SLIMbus entries.
    pub slimbus: usize,
    /// Elements rejected during load.
    pub skipped: usize,
}

/// Accumulates endpoints during load. Consumed by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct InterfaceTableBuilder {
    table: InterfaceTable,
}

impl InterfaceTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a codec DMA endpoint.
    pub fn push_codec_dma(&mut self, entry: CodecDmaEndpoint) {
        self.table.codec_dma.push(entry);
    }

    /// Append an I2S endpoint.
    pub fn push_i2s(&mut self, entry: I2sEndpoint) {
        self.table.i2s.push(entry);
    }

    /// Append a TDM endpoint.
    pub fn push_tdm(&mut self, entry: TdmEndpoint) {
        self.table.tdm.push(entry);
    }

    /// Append an auxiliary PCM endpoint.
    pub fn push_auxpcm(&mut self, entry: AuxPcmEndpoint) {
        self.table.auxpcm.push(entry);
    }

    /// Append a SLIMbus endpoint.
    pub fn push_slimbus(&mut self, entry: SlimbusEndpoint) {
        self.table.slimbus.push(entry);
    }

    /// Record a rejected element.
    pub fn skip(&mut self, family: EndpointFamily, line: u32, reason: ElementError) {
        self.table.skipped.push(SkippedElement {
            family,
            line,
            reason,
        });
    }

    /// Parse `xml` and append every accepted element.
    pub fn parse(mut self, xml: &str) -> Result<Self> {
        loader::load(&mut self, xml)?;
        Ok(self)
    }

    /// Freeze the table.
    pub fn build(self) -> InterfaceTable {
        let summary = self.table.summary();
        tracing::info!(
            codec_dma = summary.codec_dma,
            i2s = summary.i2s,
            tdm = summary.tdm,
            auxpcm = summary.auxpcm,
            slimbus = summary.slimbus,
            skipped = summary.skipped,
            "interface table loaded"
        );
        self.table
    }
}

/// Hardware endpoints known to the DSP, grouped by family in file order.
///
/// Built once through [`InterfaceTableBuilder`] (or [`from_xml`](Self::from_xml) /
/// [`load`](Self::load)); no method mutates it afterwards, so a shared
/// reference can be handed to any number of readers.
#[derive(Debug, Default, Clone)]
pub struct InterfaceTable {
    codec_dma: Vec<CodecDmaEndpoint>,
    i2s: Vec<I2sEndpoint>,
    tdm: Vec<TdmEndpoint>,
    auxpcm: Vec<AuxPcmEndpoint>,
    slimbus: Vec<SlimbusEndpoint>,
    skipped: Vec<SkippedElement>,
}

impl InterfaceTable {
    /// Parse a vendor XML description.
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(InterfaceTableBuilder::new().parse(xml)?.build())
    }

    /// Read and parse a vendor XML description from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|e| Error::read_file(path, e))?;
        tracing::debug!(path = %path.display(), "loading interface description");
        Self::from_xml(&xml)
    }

    /// Codec DMA endpoint by name.
    pub fn codec_dma(&self, name: &str) -> Result<&CodecDmaEndpoint> {
        find(&self.codec_dma, EndpointFamily::CodecDma, name, |e| e.link_index)
    }

    /// I2S endpoint by name.
    pub fn i2s(&self, name: &str) -> Result<&I2sEndpoint> {
        find(&self.i2s, EndpointFamily::I2s, name, |e| e.link_index)
    }

    /// TDM endpoint by name.
    pub fn tdm(&self, name: &str) -> Result<&TdmEndpoint> {
        find(&self.tdm, EndpointFamily::Tdm, name, |e| e.link_index)
    }

    /// Auxiliary PCM endpoint by name.
    pub fn auxpcm(&self, name: &str) -> Result<&AuxPcmEndpoint> {
        find(&self.auxpcm, EndpointFamily::AuxPcm, name, |e| e.link_index)
    }

    /// SLIMbus endpoint by name.
    pub fn slimbus(&self, name: &str) -> Result<&SlimbusEndpoint> {
        find(&self.slimbus, EndpointFamily::Slimbus, name, |e| {
            e.link_index
        })
    }

    /// All codec DMA entries in file order.
    pub fn codec_dma_entries(&self) -> &[CodecDmaEndpoint] {
        &self.codec_dma
    }

    /// All I2S entries in file order.
    pub fn i2s_entries(&self) -> &[I2sEndpoint] {
        &self.i2s
    }

    /// All TDM entries in file order.
    pub fn tdm_entries(&self) -> &[TdmEndpoint] {
        &self.tdm
    }

    /// All auxiliary PCM entries in file order.
    pub fn auxpcm_entries(&self) -> &[AuxPcmEndpoint] {
        &self.auxpcm
    }

    /// All SLIMbus entries in file order.
    pub fn slimbus_entries(&self) -> &[SlimbusEndpoint] {
        &self.slimbus
    }

    /// Elements rejected during load.
    pub fn skipped(&self) -> &[SkippedElement] {
        &self.skipped
    }

    /// Entry counts per family.
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            codec_dma: self.codec_dma.len(),
            i2s: self.i2s.len(),
            tdm: self.tdm.len(),
            auxpcm: self.auxpcm.len(),
            slimbus: self.slimbus.len(),
            skipped: self.skipped.len(),
        }
    }
}

/// First entry whose link index matches the one `name` resolves to.
fn find<'a, T>(
    entries: &'a [T],
    family: EndpointFamily,
    name: &str,
    link_of: impl Fn(&T) -> u32,
) -> Result<&'a T> {
    let link_index = lut::link_index(name).ok_or_else(|| Error::UnknownEndpoint(name.into()))?;
    entries
        .iter()
        .find(|e| link_of(e) == link_index)
        .ok_or_else(|| Error::NoEntry {
            family,
            name: name.into(),
            link_index,
        })
}
