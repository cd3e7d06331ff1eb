//! Stream-control encoders: volume, soft pause, timestamps, generic blobs.

use byteorder::{LittleEndian, WriteBytesExt};
use dspctl_core::VolumeData;

use crate::envelope::{Payload, PayloadWriter};
use crate::error::{Error, Result};
use crate::ids::{
    DOA_TRACKING_MONITOR_LEN, PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO,
    PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT, PARAM_ID_FFV_DOA_TRACKING_MONITOR,
    PARAM_ID_SOFT_PAUSE_RESUME, PARAM_ID_SOFT_PAUSE_START, PARAM_ID_SPR_SESSION_TIME,
    PARAM_ID_VOL_CTRL_MULTICHANNEL_GAIN, SESSION_TIME_LEN, VOLUME_MASTER_GAIN_DEFAULT,
};

/// Bytes per channel gain entry: mask lsb, mask msb, gain.
const GAIN_ENTRY_LEN: usize = 12;

/// Fixed-point gain word for a linear volume. Saturates outside the u32 range.
fn gain_word(gain: f32) -> u32 {
    (f64::from(gain) * f64::from(VOLUME_MASTER_GAIN_DEFAULT) * f64::from(1u32 << 15)) as u32
}

/// Multichannel volume (`PARAM_ID_VOL_CTRL_MULTICHANNEL_GAIN`).
pub fn volume(miid: u32, data: &VolumeData) -> Result<Payload> {
    if data.is_empty() {
        return Err(Error::Empty("volume data"));
    }
    let mut w = PayloadWriter::begin(
        miid,
        PARAM_ID_VOL_CTRL_MULTICHANNEL_GAIN,
        4 + GAIN_ENTRY_LEN * data.len(),
    )?;
    let out = w.body();
    out.write_u32::<LittleEndian>(data.len() as u32)?;
    for pair in &data.pairs {
        let gain = gain_word(pair.gain);
        out.write_u32::<LittleEndian>(pair.channel_mask)?;
        out.write_u32::<LittleEndian>(0)?;
        out.write_u32::<LittleEndian>(gain)?;
        tracing::trace!(
            channel_mask = format_args!("{:#x}", pair.channel_mask),
            volume = pair.gain,
            gain = format_args!("{gain:#x}"),
            "volume pair"
        );
    }
    Ok(w.finish())
}

/// Soft pause (`PARAM_ID_SOFT_PAUSE_START`).
pub fn pause(miid: u32) -> Result<Payload> {
    Ok(PayloadWriter::begin(miid, PARAM_ID_SOFT_PAUSE_START, 0)?.finish())
}

/// Soft resume (`PARAM_ID_SOFT_PAUSE_RESUME`).
pub fn resume(miid: u32) -> Result<Payload> {
    Ok(PayloadWriter::begin(miid, PARAM_ID_SOFT_PAUSE_RESUME, 0)?.finish())
}

/// Session-time query (`PARAM_ID_SPR_SESSION_TIME`); the trailer is a zeroed
/// result area.
pub fn timestamp(miid: u32) -> Result<Payload> {
    Ok(PayloadWriter::begin(miid, PARAM_ID_SPR_SESSION_TIME, SESSION_TIME_LEN)?.finish())
}

/// Direction-of-arrival monitor query (`PARAM_ID_FFV_DOA_TRACKING_MONITOR`).
pub fn doa_info(miid: u32) -> Result<Payload> {
    Ok(
        PayloadWriter::begin(miid, PARAM_ID_FFV_DOA_TRACKING_MONITOR, DOA_TRACKING_MONITOR_LEN)?
            .finish(),
    )
}

/// Read request for `param_id` with a zeroed result area of `query_size` bytes.
pub fn query(miid: u32, param_id: u32, query_size: usize) -> Result<Payload> {
    Ok(PayloadWriter::begin(miid, param_id, query_size)?.finish())
}

/// Opaque parameter block supplied by the caller.
pub fn custom_param(miid: u32, param_id: u32, blob: &[u8]) -> Result<Payload> {
    if blob.is_empty() {
        return Err(Error::Empty("custom payload"));
    }
    let mut w = PayloadWriter::begin(miid, param_id, blob.len())?;
    w.body().extend_from_slice(blob);
    Ok(w.finish())
}

/// Bluetooth encoder targeted by a TWS mono/stereo switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwsCodec {
    /// aptX classic in dual-mono mode.
    AptxDualMono,
    /// aptX adaptive.
    AptxAdaptive,
}

/// True-wireless-stereo mono switch for the aptX encoders.
pub fn tws(miid: u32, mono: bool, codec: TwsCodec) -> Result<Payload> {
    let value: u32 = if mono { 1 } else { 2 };
    let param_id = match codec {
        TwsCodec::AptxDualMono => PARAM_ID_APTX_CLASSIC_SWITCH_ENC_PCM_INPUT,
        TwsCodec::AptxAdaptive => PARAM_ID_APTX_ADAPTIVE_ENC_SWITCH_TO_MONO,
    };
    let mut w = PayloadWriter::begin(miid, param_id, 4)?;
    w.body().write_u32::<LittleEndian>(value)?;
    tracing::debug!(?codec, mono, "tws config");
    Ok(w.finish())
}
