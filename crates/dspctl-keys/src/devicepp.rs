//! Device post-processing key vectors.

use dspctl_core::Direction;
use serde::Serialize;

use crate::catalogue::{
    DEVICEPP_RX, DEVICEPP_RX_AUDIO_MBDRC, DEVICEPP_RX_HFPSINK, DEVICEPP_RX_VOICE_DEFAULT,
    DEVICEPP_RX_VOIP_MBDRC, DEVICEPP_TX, DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS,
    DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS,
};
use crate::error::Result;
use crate::graph::device_key_vector;
use crate::kv::{KeyValue, KeyVector};
use crate::stream::{LoopbackType, StreamSource, StreamType};

/// Post-processing keys of both device legs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DevicePpKeyVectors {
    /// Playback leg.
    pub rx: KeyVector,
    /// Capture leg.
    pub tx: KeyVector,
    /// Devices skipped because the stream type has no post-processing rule.
    pub unsupported: Vec<u32>,
}

/// Resolve device post-processing keys for every device routed to `stream`.
///
/// `fallback` is the caller's capture-side profile, used where the profile
/// depends on the device's microphone setup. Voice-trigger streams on the
/// low-power island always use the island's own profile. Device keys of
/// `rx_device` and `tx_device` are appended last.
pub fn device_pp_key_vectors<S: StreamSource + ?Sized>(
    stream: &S,
    rx_device: u32,
    tx_device: u32,
    fallback: &[KeyValue],
    low_power_island: bool,
) -> Result<DevicePpKeyVectors> {
    let attrs = stream.attributes()?;
    let devices = stream.associated_devices()?;
    let mut out = DevicePpKeyVectors::default();

    for device in &devices {
        if device.id == rx_device || device.id == tx_device {
            tracing::trace!(
                device = device.id,
                channels = device.media.channels,
                "device pp for routed device"
            );
        }

        match attrs.stream_type {
            StreamType::VoiceCall => {
                if device.id == rx_device {
                    out.rx
                        .push(KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_VOICE_DEFAULT));
                }
                if device.id == tx_device {
                    out.tx.extend_from_slice(fallback);
                }
            }
            StreamType::LowLatency
            | StreamType::Compressed
            | StreamType::DeepBuffer
            | StreamType::PcmOffload => match attrs.direction {
                Direction::Output => out
                    .rx
                    .push(KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_AUDIO_MBDRC)),
                Direction::Input => out.tx.extend_from_slice(fallback),
                Direction::InputOutput => {}
            },
            StreamType::VoipRx => out
                .rx
                .push(KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_VOIP_MBDRC)),
            StreamType::Loopback => match attrs.loopback {
                LoopbackType::HfpRx => out.rx.push(KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_HFPSINK)),
                LoopbackType::HfpTx => out.tx.push(KeyValue::new(
                    DEVICEPP_TX,
                    DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS,
                )),
                LoopbackType::Pcm => {}
            },
            StreamType::VoipTx => out.tx.extend_from_slice(fallback),
            StreamType::VoiceUi => {
                if low_power_island {
                    out.tx.push(KeyValue::new(
                        DEVICEPP_TX,
                        DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS,
                    ));
                } else {
                    out.tx.extend_from_slice(fallback);
                }
            }
            StreamType::Generic => {
                tracing::warn!(
                    stream_type = %attrs.stream_type,
                    device = device.id,
                    "stream type has no device pp keys"
                );
                out.unsupported.push(device.id);
            }
        }
    }

    device_key_vector(rx_device, &mut out.rx);
    device_key_vector(tx_device, &mut out.tx);
    tracing::debug!(
        rx = ?out.rx,
        tx = ?out.tx,
        unsupported = out.unsupported.len(),
        "device pp key vectors"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{
        DEVICEPP_TX_FLUENCE_FFECNS, DEVICERX, DEVICETX, HANDSET, HANDSETMIC, HANDSETMIC_VA,
        SPEAKER,
    };
    use crate::stream::{DeviceId, StreamAttributes, StreamDescriptor};

    const FALLBACK: [KeyValue; 1] = [KeyValue::new(DEVICEPP_TX, DEVICEPP_TX_FLUENCE_FFECNS)];

    fn stream(t: StreamType, d: Direction) -> StreamDescriptor {
        StreamDescriptor::new(StreamAttributes::new(t, d))
    }

    #[test]
    fn voice_call_splits_by_device() {
        let call = stream(StreamType::VoiceCall, Direction::InputOutput)
            .with_device(DeviceId::OutHandset)
            .with_device(DeviceId::InHandsetMic);
        let pp = device_pp_key_vectors(
            &call,
            DeviceId::OutHandset.raw(),
            DeviceId::InHandsetMic.raw(),
            &FALLBACK,
            false,
        )
        .unwrap();
        assert_eq!(
            pp.rx,
            vec![
                KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_VOICE_DEFAULT),
                KeyValue::new(DEVICERX, HANDSET),
            ]
        );
        assert_eq!(pp.tx, vec![FALLBACK[0], KeyValue::new(DEVICETX, HANDSETMIC)]);
        assert!(pp.unsupported.is_empty());
    }

    #[test]
    fn playback_gets_mbdrc_per_device() {
        let music = stream(StreamType::DeepBuffer, Direction::Output)
            .with_device(DeviceId::OutSpeaker);
        let pp =
            device_pp_key_vectors(&music, DeviceId::OutSpeaker.raw(), 0, &FALLBACK, false).unwrap();
        assert_eq!(
            pp.rx,
            vec![
                KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_AUDIO_MBDRC),
                KeyValue::new(DEVICERX, SPEAKER),
            ]
        );
        assert!(pp.tx.is_empty());
    }

    #[test]
    fn voice_ui_on_island_ignores_fallback() {
        let vui = stream(StreamType::VoiceUi, Direction::Input).with_device(DeviceId::InHandsetVaMic);
        let tx = DeviceId::InHandsetVaMic.raw();

        let lpi = device_pp_key_vectors(&vui, 0, tx, &FALLBACK, true).unwrap();
        assert_eq!(
            lpi.tx,
            vec![
                KeyValue::new(DEVICEPP_TX, DEVICEPP_TX_VOICE_UI_FLUENCE_FFNS),
                KeyValue::new(DEVICETX, HANDSETMIC_VA),
            ]
        );

        let non_lpi = device_pp_key_vectors(&vui, 0, tx, &FALLBACK, false).unwrap();
        assert_eq!(non_lpi.tx[0], FALLBACK[0]);
    }

    #[test]
    fn hfp_loopback_profiles() {
        let rx = StreamDescriptor::new(
            StreamAttributes::new(StreamType::Loopback, Direction::InputOutput)
                .with_loopback(LoopbackType::HfpRx),
        )
        .with_device(DeviceId::OutSpeaker);
        let pp = device_pp_key_vectors(&rx, 0, 0, &[], false).unwrap();
        assert_eq!(pp.rx, vec![KeyValue::new(DEVICEPP_RX, DEVICEPP_RX_HFPSINK)]);

        let mut tx = rx.clone();
        tx.attributes.loopback = LoopbackType::HfpTx;
        let pp = device_pp_key_vectors(&tx, 0, 0, &[], false).unwrap();
        assert_eq!(
            pp.tx,
            vec![KeyValue::new(DEVICEPP_TX, DEVICEPP_TX_HFP_SINK_FLUENCE_SMECNS)]
        );
    }

    #[test]
    fn unsupported_stream_still_gets_device_keys() {
        let generic = stream(StreamType::Generic, Direction::Output)
            .with_device(DeviceId::OutSpeaker)
            .with_device(DeviceId::OutHandset);
        let pp =
            device_pp_key_vectors(&generic, DeviceId::OutSpeaker.raw(), 0, &FALLBACK, false)
                .unwrap();
        assert_eq!(
            pp.unsupported,
            vec![DeviceId::OutSpeaker.raw(), DeviceId::OutHandset.raw()]
        );
        assert_eq!(pp.rx, vec![KeyValue::new(DEVICERX, SPEAKER)]);
    }
}
