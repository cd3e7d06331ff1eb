//! dspctl Payload - DSP parameter payload compiler
//!
//! Every configurable DSP module takes its parameters as a binary block: a
//! 16-byte envelope naming the target module instance and parameter, then a
//! parameter-specific trailer, zero-padded to a multiple of eight bytes.
//! This crate has one encoder per parameter family. Each encoder writes its
//! fields explicitly in firmware order and returns an owned [`Payload`].
//!
//! # Layout
//!
//! ```text
//! +-----------+-----------+------------+------------+---------------+---------+
//! | miid u32  | param u32 | error u32  | size u32   | trailer       | padding |
//! +-----------+-----------+------------+------------+---------------+---------+
//!  <------------------ envelope (16) ------------->  <- size bytes -> <- 0..7 ->
//! ```
//!
//! All fields are little-endian. `size` counts the trailer only.
//!
//! # Encoders
//!
//! - Media format: [`in_media_format`], [`out_media_format`], [`hw_ep_media_format`],
//!   [`mfc_output`], [`rat_media_format`], [`cop_packetizer`]
//! - Hardware endpoints: [`codec_dma`], [`i2s`], [`tdm`], [`auxpcm`], [`slimbus`],
//!   [`usb_audio`], [`display_port`]
//! - Stream control: [`volume`], [`pause`], [`resume`], [`timestamp`], [`tws`]
//! - Voice trigger: [`sound_model`], [`wakeup_config`], [`wakeup_buffer_config`],
//!   [`setup_duration`], [`event_config`], [`engine_reset`], [`doa_info`]
//! - Generic: [`custom_param`], [`query`]
//! - Dispatch: [`stream_config`], [`device_config`], [`device_endpoint_config`]
//!
//! # Example
//!
//! ```rust
//! use dspctl_core::MediaConfig;
//! use dspctl_payload::{ModuleInfo, in_media_format};
//!
//! let module = ModuleInfo::single(0x4001);
//! let payload = in_media_format(&module, &MediaConfig::new(48000, 24, 2)).unwrap();
//!
//! assert_eq!(payload.len() % 8, 0);
//! assert_eq!(payload.envelope().param_size, 12 + 16 + 2);
//! ```

mod control;
mod detection;
mod dispatch;
mod endpoint;
mod envelope;
mod error;
pub mod ids;
mod media;

pub use control::{TwsCodec, custom_param, doa_info, pause, query, resume, timestamp, tws, volume};
pub use detection::{
    DownstreamSetup, MAX_SOUND_MODELS, PortSetupDuration, WakeupBufferConfig, WakeupConfig,
    engine_reset, event_config, setup_duration, sound_model, wakeup_buffer_config, wakeup_config,
};
pub use dispatch::{
    ModuleEntry, ModuleInfo, StreamConfigTag, device_config, device_endpoint_config,
    stream_config,
};
pub use endpoint::{
    DisplayPortConfig, UsbAudioConfig, auxpcm, codec_dma, display_port, i2s, slimbus, tdm,
    usb_audio,
};
pub use envelope::{ENVELOPE_LEN, ParamEnvelope, Payload, padded_len};
pub use error::{Error, Result};
pub use media::{
    cop_packetizer, hw_ep_media_format, in_media_format, mfc_output, out_media_format,
    rat_media_format,
};
