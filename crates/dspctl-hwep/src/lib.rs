//! dspctl Hardware Endpoints - the interface configuration table
//!
//! The DSP needs numeric identifiers (link index, LPAIF controller, serial-data
//! lines, sync modes) for every physical audio link it drives. Those are
//! described once per board in a vendor XML file; this crate parses that file
//! into an [`InterfaceTable`] that is immutable once built and is shared by
//! reference with the payload compiler.
//!
//! # Grammar
//!
//! Five element types are recognized anywhere in the document:
//!
//! | element | attributes, in order |
//! |---|---|
//! | `codec_hw_intf` | `name`, `lpaif_type`, `intf_idx` |
//! | `i2s_hw_intf` | `name`, `line_mask`, `ws_src`, `lpaif_type` |
//! | `tdm_hw_intf` | `name`, `lpaif_type`, `sync_src`, `ctrl_data`, `sync_mode`, `ctrl_invert_sync_pulse`, `ctrl_sync_data_delay` |
//! | `auxpcm_hw_intf` | `name`, `lpaif_type`, `sync_src`, `ctrl_data`, `frame_setting`, `aux_mode` |
//! | `slim_hw_intf` | `name`, `slim_dev_id`, `index_0`, `index_1` |
//!
//! An element whose attributes are out of order, misnamed, or carry a value
//! outside the closed lookup tables is logged and skipped; the rest of the
//! file still loads. Other elements are ignored.
//!
//! # Example
//!
//! ```rust
//! use dspctl_hwep::InterfaceTable;
//!
//! let xml = r#"<hw_ep_info>
//!     <codec_hw_intf name="cdc-pri" lpaif_type="LPAIF_WSA" intf_idx="CODEC_RX0"/>
//! </hw_ep_info>"#;
//!
//! let table = InterfaceTable::from_xml(xml).unwrap();
//! let cdc = table.codec_dma("cdc-pri").unwrap();
//! assert_eq!(cdc.lpaif_type, 2);
//! assert_eq!(cdc.intf_idx, 1);
//! ```

mod endpoint;
mod error;
mod loader;
pub mod lut;
mod table;

pub use endpoint::{
    AuxPcmEndpoint, CodecDmaEndpoint, EndpointFamily, I2sEndpoint, SlimbusEndpoint, TdmEndpoint,
};
pub use error::{ElementError, Error, Result};
pub use table::{InterfaceTable, InterfaceTableBuilder, SkippedElement, TableSummary};
