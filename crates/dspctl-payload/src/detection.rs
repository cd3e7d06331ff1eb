//! Voice-trigger detection engine and data-arbitration encoders.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::envelope::{Payload, PayloadWriter};
use crate::error::{Error, Result};
use crate::ids::{
    PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION, PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP,
    PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG, PARAM_ID_DETECTION_ENGINE_RESET,
    PARAM_ID_DETECTION_ENGINE_SOUND_MODEL, PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG,
};

/// Upper bound on concurrently active keyword models.
pub const MAX_SOUND_MODELS: usize = 8;

/// Keyword detection thresholds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WakeupConfig {
    /// Detection mode bits.
    pub mode: u16,
    /// Size of any vendor payload following the fixed fields.
    pub custom_payload_size: u16,
    /// One confidence threshold per active model.
    pub confidence_levels: Vec<u8>,
    /// One user-enable flag per active model.
    pub keyword_user_enables: Vec<u8>,
}

/// History and pre-roll lengths kept around a detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WakeupBufferConfig {
    /// Audio retained before the keyword end.
    pub hist_buffer_duration_ms: u32,
    /// Audio retained before the keyword start.
    pub pre_roll_duration_ms: u32,
}

/// Setup latency of one downstream output port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSetupDuration {
    /// Output port of the arbitration module.
    pub port_id: u32,
    /// Time the downstream graph needs before data flows.
    pub duration_ms: u32,
}

/// Per-port setup durations of the data-arbitration module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownstreamSetup {
    /// Ports in firmware order.
    pub ports: Vec<PortSetupDuration>,
}

/// Opaque keyword model blob (`PARAM_ID_DETECTION_ENGINE_SOUND_MODEL`).
pub fn sound_model(miid: u32, model: &[u8]) -> Result<Payload> {
    if model.is_empty() {
        return Err(Error::Empty("sound model"));
    }
    let mut w = PayloadWriter::begin(miid, PARAM_ID_DETECTION_ENGINE_SOUND_MODEL, model.len())?;
    w.body().extend_from_slice(model);
    tracing::debug!(len = model.len(), "sound model");
    Ok(w.finish())
}

/// Wakeup thresholds (`PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP`).
///
/// Only the active entries are written: a 6-byte fixed part, then `n`
/// confidence levels, then `n` enable flags.
pub fn wakeup_config(miid: u32, config: &WakeupConfig) -> Result<Payload> {
    let n = config.confidence_levels.len();
    if n > MAX_SOUND_MODELS {
        return Err(Error::TooMany {
            field: "confidence levels",
            count: n,
            max: MAX_SOUND_MODELS,
        });
    }
    if config.keyword_user_enables.len() != n {
        return Err(Error::LengthMismatch {
            field: "keyword user enables",
            expected: n,
            actual: config.keyword_user_enables.len(),
        });
    }

    let mut w = PayloadWriter::begin(miid, PARAM_ID_DETECTION_ENGINE_CONFIG_VOICE_WAKEUP, 6 + 2 * n)?;
    let out = w.body();
    out.write_u16::<LittleEndian>(config.mode)?;
    out.write_u16::<LittleEndian>(config.custom_payload_size)?;
    out.write_u8(n as u8)?;
    out.write_u8(0)?;
    out.extend_from_slice(&config.confidence_levels);
    out.extend_from_slice(&config.keyword_user_enables);
    tracing::debug!(
        mode = config.mode,
        custom_payload_size = config.custom_payload_size,
        active_models = n,
        "wakeup config"
    );
    Ok(w.finish())
}

/// Buffering around a detection (`PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG`).
pub fn wakeup_buffer_config(miid: u32, config: &WakeupBufferConfig) -> Result<Payload> {
    let mut w = PayloadWriter::begin(miid, PARAM_ID_VOICE_WAKEUP_BUFFERING_CONFIG, 8)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(config.hist_buffer_duration_ms)?;
    out.write_u32::<LittleEndian>(config.pre_roll_duration_ms)?;
    Ok(w.finish())
}

/// Downstream setup durations (`PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION`).
pub fn setup_duration(miid: u32, setup: &DownstreamSetup) -> Result<Payload> {
    let ports = setup.ports.len();
    let mut w =
        PayloadWriter::begin(miid, PARAM_ID_AUDIO_DAM_DOWNSTREAM_SETUP_DURATION, 4 + 8 * ports)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(ports as u32)?;
    for port in &setup.ports {
        out.write_u32::<LittleEndian>(port.port_id)?;
        out.write_u32::<LittleEndian>(port.duration_ms)?;
    }
    Ok(w.finish())
}

/// Detection event mode (`PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG`).
pub fn event_config(miid: u32, event_mode: u32) -> Result<Payload> {
    let mut w = PayloadWriter::begin(miid, PARAM_ID_DETECTION_ENGINE_GENERIC_EVENT_CFG, 4)?;
    w.body().write_u32::<LittleEndian>(event_mode)?;
    Ok(w.finish())
}

/// Re-arm the detection engine (`PARAM_ID_DETECTION_ENGINE_RESET`).
pub fn engine_reset(miid: u32) -> Result<Payload> {
    Ok(PayloadWriter::begin(miid, PARAM_ID_DETECTION_ENGINE_RESET, 0)?.finish())
}
