//! Graph key vectors: stream use case plus routed devices.

use dspctl_core::Direction;

use crate::catalogue::{
    BT_PROFILE, BT_RX, BT_TX, COMPRESSED_OFFLOAD_PLAYBACK, DEVICERX, DEVICETX, HANDSET,
    HANDSETMIC, HANDSETMIC_VA, HDMI_RX, HEADPHONE_MIC, HEADPHONES, HEADSETMIC_VA,
    HFP_RX_CAPTURE, HFP_RX_PLAYBACK, INSTANCE, INSTANCE_1, PCM_DEEP_BUFFER, PCM_LL_PLAYBACK,
    PCM_OFFLOAD_PLAYBACK, PCM_RECORD, PCM_RX_LOOPBACK, SCO, SPEAKER, SPEAKER_MIC, STREAMPP_RX,
    STREAMPP_RX_DEFAULT, STREAMRX, STREAMTX, USB_RX, USB_TX, VOICE_CALL_RX, VOICE_CALL_TX,
    VOICE_UI, VOICELBMMODE1, VOICELBMMODE2, VOICEMMODE1, VOICEMMODE2, VOIP_RX_PLAYBACK,
    VOIP_TX_RECORD,
};
use crate::error::{Error, Result};
use crate::kv::{KeyValue, KeyVector, KeyVectorPair};
use crate::stream::{DeviceId, LoopbackType, StreamAttributes, StreamSource, StreamType, VsidInfo};

/// Voice-session modes and the value each publishes by default.
const DEFAULT_VSID_MODES: [(u32, u32); 4] = [
    (VOICEMMODE1, 0),
    (VOICEMMODE2, 0),
    (VOICELBMMODE1, 0),
    (VOICELBMMODE2, 0),
];

/// Stream-level keys of a single-sided graph.
pub fn stream_key_vector(attrs: &StreamAttributes) -> Result<KeyVector> {
    let invalid = || Error::InvalidDirection {
        stream_type: attrs.stream_type,
        direction: attrs.direction,
    };

    let kv = match attrs.stream_type {
        StreamType::LowLatency => match attrs.direction {
            Direction::Output => vec![
                KeyValue::new(STREAMRX, PCM_LL_PLAYBACK),
                KeyValue::new(INSTANCE, INSTANCE_1),
            ],
            Direction::Input => vec![KeyValue::new(STREAMTX, PCM_RECORD)],
            Direction::InputOutput => vec![KeyValue::new(STREAMRX, PCM_RX_LOOPBACK)],
        },
        StreamType::DeepBuffer => match attrs.direction {
            Direction::Output => vec![KeyValue::new(STREAMRX, PCM_DEEP_BUFFER)],
            _ => return Err(invalid()),
        },
        StreamType::PcmOffload => match attrs.direction {
            Direction::Output => vec![
                KeyValue::new(STREAMRX, PCM_OFFLOAD_PLAYBACK),
                KeyValue::new(INSTANCE, INSTANCE_1),
            ],
            _ => return Err(invalid()),
        },
        StreamType::Compressed => match attrs.direction {
            Direction::Output => vec![
                KeyValue::new(STREAMRX, COMPRESSED_OFFLOAD_PLAYBACK),
                KeyValue::new(INSTANCE, INSTANCE_1),
            ],
            _ => Vec::new(),
        },
        StreamType::Generic => Vec::new(),
        StreamType::VoipTx => vec![KeyValue::new(STREAMTX, VOIP_TX_RECORD)],
        StreamType::VoipRx => vec![KeyValue::new(STREAMRX, VOIP_RX_PLAYBACK)],
        StreamType::VoiceUi => vec![KeyValue::new(STREAMTX, VOICE_UI)],
        StreamType::VoiceCall | StreamType::Loopback => {
            return Err(Error::UnsupportedStreamType {
                resolver: "stream",
                stream_type: attrs.stream_type,
            });
        }
    };
    Ok(kv)
}

/// Append the graph keys of device `device_id` to `kv`.
///
/// A2DP is configured elsewhere and unknown ids carry no graph key; both
/// append nothing.
pub fn device_key_vector(device_id: u32, kv: &mut KeyVector) {
    let Some(device) = DeviceId::from_raw(device_id) else {
        tracing::debug!(device_id, "no graph key for device");
        return;
    };
    match device {
        DeviceId::OutSpeaker => kv.push(KeyValue::new(DEVICERX, SPEAKER)),
        DeviceId::OutHandset => kv.push(KeyValue::new(DEVICERX, HANDSET)),
        DeviceId::OutBluetoothSco => {
            kv.push(KeyValue::new(DEVICERX, BT_RX));
            kv.push(KeyValue::new(BT_PROFILE, SCO));
        }
        DeviceId::OutAuxDigital | DeviceId::OutAuxDigital1 | DeviceId::OutHdmi => {
            kv.push(KeyValue::new(DEVICERX, HDMI_RX));
        }
        DeviceId::OutWiredHeadset | DeviceId::OutWiredHeadphone => {
            kv.push(KeyValue::new(DEVICERX, HEADPHONES));
        }
        DeviceId::OutUsbHeadset | DeviceId::OutUsbDevice => {
            kv.push(KeyValue::new(DEVICERX, USB_RX));
        }
        DeviceId::InSpeakerMic => kv.push(KeyValue::new(DEVICETX, SPEAKER_MIC)),
        DeviceId::InBluetoothScoHeadset => {
            kv.push(KeyValue::new(DEVICETX, BT_TX));
            kv.push(KeyValue::new(BT_PROFILE, SCO));
        }
        DeviceId::InWiredHeadset => kv.push(KeyValue::new(DEVICETX, HEADPHONE_MIC)),
        DeviceId::InUsbDevice | DeviceId::InUsbHeadset => {
            kv.push(KeyValue::new(DEVICETX, USB_TX));
        }
        DeviceId::InHandsetMic => kv.push(KeyValue::new(DEVICETX, HANDSETMIC)),
        DeviceId::InHandsetVaMic => kv.push(KeyValue::new(DEVICETX, HANDSETMIC_VA)),
        DeviceId::InHeadsetVaMic => kv.push(KeyValue::new(DEVICETX, HEADSETMIC_VA)),
        other => tracing::debug!(device = ?other, "no graph key for device"),
    }
}

/// Full graph key vector of `stream`: stream keys, then one entry per
/// routed device.
pub fn graph_key_vector<S: StreamSource + ?Sized>(stream: &S) -> Result<KeyVector> {
    let attrs = stream.attributes()?;
    let mut kv = stream_key_vector(&attrs)?;
    for device in stream.associated_devices()? {
        device_key_vector(device.id, &mut kv);
    }
    tracing::debug!(
        stream_type = %attrs.stream_type,
        kv = ?kv,
        "graph key vector"
    );
    Ok(kv)
}

/// Stream-level keys of a two-sided graph (loopback or voice call).
pub fn stream_key_vector_pair(attrs: &StreamAttributes, vsid: &VsidInfo) -> Result<KeyVectorPair> {
    let mut pair = KeyVectorPair::default();
    match attrs.stream_type {
        StreamType::Loopback => match attrs.loopback {
            LoopbackType::HfpRx => {
                pair.rx.push(KeyValue::new(STREAMRX, HFP_RX_PLAYBACK));
                pair.tx.push(KeyValue::new(STREAMTX, HFP_RX_CAPTURE));
            }
            LoopbackType::HfpTx => {}
            LoopbackType::Pcm => pair.rx.push(KeyValue::new(STREAMRX, PCM_RX_LOOPBACK)),
        },
        StreamType::VoiceCall => {
            let mut modes = DEFAULT_VSID_MODES;
            for over in &vsid.mode_pairs {
                for entry in modes.iter_mut().filter(|(mode, _)| *mode == over.key) {
                    entry.1 = over.value;
                }
            }

            pair.rx.push(KeyValue::new(STREAMRX, VOICE_CALL_RX));
            pair.tx.push(KeyValue::new(STREAMTX, VOICE_CALL_TX));
            if let Some(session) = attrs.vsid {
                for &(_, value) in modes.iter().filter(|(mode, _)| *mode == session) {
                    pair.rx.push(KeyValue::new(vsid.vsid_key, value));
                    pair.tx.push(KeyValue::new(vsid.vsid_key, value));
                }
            }
        }
        other => {
            tracing::warn!(stream_type = %other, "no two-sided graph for stream type");
            return Err(Error::UnsupportedStreamType {
                resolver: "stream pair",
                stream_type: other,
            });
        }
    }
    Ok(pair)
}

/// Two-sided graph keys with the rx and tx device keys appended.
pub fn stream_device_key_vectors<S: StreamSource + ?Sized>(
    stream: &S,
    rx_device: u32,
    tx_device: u32,
    vsid: &VsidInfo,
) -> Result<KeyVectorPair> {
    let attrs = stream.attributes()?;
    let mut pair = stream_key_vector_pair(&attrs, vsid)?;
    device_key_vector(rx_device, &mut pair.rx);
    device_key_vector(tx_device, &mut pair.tx);
    tracing::debug!(rx = ?pair.rx, tx = ?pair.tx, "stream device key vectors");
    Ok(pair)
}

/// Stream post-processing keys. Only voice calls carry any.
pub fn stream_pp_key_vectors(attrs: &StreamAttributes) -> KeyVectorPair {
    let mut pair = KeyVectorPair::default();
    match attrs.stream_type {
        StreamType::VoiceCall => pair.rx.push(KeyValue::new(STREAMPP_RX, STREAMPP_RX_DEFAULT)),
        other => tracing::debug!(stream_type = %other, "no stream pp keys"),
    }
    pair
}
