//! dspctl Keys - graph key-vector resolution
//!
//! The graph manager selects sub-graphs, calibration sets and runtime
//! controls by ordered key/value vectors. This crate derives those vectors
//! from what a stream reports about itself: its use case, direction, routed
//! devices and volume.
//!
//! # Resolvers
//!
//! | Resolver | Produces |
//! |----------|----------|
//! | [`graph_key_vector`] | stream use case plus one key per routed device |
//! | [`stream_device_key_vectors`] | rx/tx vectors of a loopback or voice call |
//! | [`stream_pp_key_vectors`] | stream post-processing profile |
//! | [`stream_calibration_key_vector`], [`calibration_key_vector`] | calibration level |
//! | [`tag_key_vector`] | runtime control keys and the tag they target |
//! | [`device_pp_key_vectors`] | device post-processing profile per leg |
//!
//! Resolvers read the stream through [`StreamSource`]; [`StreamDescriptor`]
//! is an owned implementation that can be loaded from TOML or JSON.
//!
//! # Example
//!
//! ```rust
//! use dspctl_core::Direction;
//! use dspctl_keys::{
//!     DeviceId, KeyValue, StreamAttributes, StreamDescriptor, StreamType, catalogue,
//!     graph_key_vector,
//! };
//!
//! let stream = StreamDescriptor::new(StreamAttributes::new(StreamType::LowLatency, Direction::Output))
//!     .with_device(DeviceId::OutSpeaker);
//!
//! let kv = graph_key_vector(&stream).unwrap();
//! assert_eq!(
//!     kv,
//!     vec![
//!         KeyValue::new(catalogue::STREAMRX, catalogue::PCM_LL_PLAYBACK),
//!         KeyValue::new(catalogue::INSTANCE, catalogue::INSTANCE_1),
//!         KeyValue::new(catalogue::DEVICERX, catalogue::SPEAKER),
//!     ]
//! );
//! ```

mod calibration;
pub mod catalogue;
mod devicepp;
mod error;
mod graph;
mod kv;
mod stream;
mod tag;

pub use calibration::{
    VOLUME_CURVE, calibration_key_vector, stream_calibration_key_vector, volume_level,
};
pub use devicepp::{DevicePpKeyVectors, device_pp_key_vectors};
pub use error::{Error, Result};
pub use graph::{
    device_key_vector, graph_key_vector, stream_device_key_vectors, stream_key_vector,
    stream_key_vector_pair, stream_pp_key_vectors,
};
pub use kv::{KeyValue, KeyVector, KeyVectorPair};
pub use stream::{
    DeviceId, DeviceInfo, LoopbackType, StreamAttributes, StreamDescriptor, StreamSource,
    StreamType, VsidInfo,
};
pub use tag::{ControlTag, GraphTag, TagKeyVector, tag_key_vector};
