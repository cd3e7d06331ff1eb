//! Calibration key vectors and the volume-to-level curve.

use crate::catalogue::{
    LEVEL_0, LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5, LEVEL_6, LEVEL_7, LEVEL_8, LEVEL_9,
    LEVEL_10, LEVEL_11, LEVEL_12, LEVEL_13, LEVEL_14, LEVEL_15, VOLUME,
};
use crate::error::{Error, Result};
use crate::kv::{KeyValue, KeyVector};
use crate::stream::StreamSource;
use crate::tag::GraphTag;

/// Upper bounds (exclusive) of the volume buckets, loudest level last.
///
/// A gain below `VOLUME_CURVE[i].0` resolves to `VOLUME_CURVE[i].1`; gains
/// from 0.9 up to and including 1.0 resolve to [`LEVEL_0`].
pub const VOLUME_CURVE: [(f32, u32); 15] = [
    (0.002_172, LEVEL_15),
    (0.004_660, LEVEL_14),
    (0.01, LEVEL_13),
    (0.014_877, LEVEL_12),
    (0.023_646, LEVEL_11),
    (0.037_584, LEVEL_10),
    (0.055_912, LEVEL_9),
    (0.088_869, LEVEL_8),
    (0.141_254, LEVEL_7),
    (0.189_453, LEVEL_6),
    (0.266_840, LEVEL_5),
    (0.375_838, LEVEL_4),
    (0.504_081, LEVEL_3),
    (0.709_987, LEVEL_2),
    (0.9, LEVEL_1),
];

/// Calibration level for a linear gain.
///
/// Silence and anything below the first boundary map to [`LEVEL_15`].
/// Gains above 1.0 and NaN are rejected.
pub fn volume_level(gain: f32) -> Result<u32> {
    if gain == 0.0 {
        return Ok(LEVEL_15);
    }
    if let Some(&(_, level)) = VOLUME_CURVE.iter().find(|&&(bound, _)| gain < bound) {
        return Ok(level);
    }
    if gain <= 1.0 {
        return Ok(LEVEL_0);
    }
    tracing::warn!(gain, "volume outside the calibration curve");
    Err(Error::VolumeOutOfRange(gain))
}

/// Calibration keys sent when a graph is opened.
pub fn stream_calibration_key_vector() -> KeyVector {
    vec![KeyValue::new(VOLUME, LEVEL_0)]
}

/// Calibration keys for `tag`.
///
/// [`GraphTag::StreamVolume`] buckets the gain of the stream's first volume
/// pair; every other tag has no calibration keys.
pub fn calibration_key_vector<S: StreamSource + ?Sized>(
    stream: &S,
    tag: GraphTag,
) -> Result<KeyVector> {
    if tag != GraphTag::StreamVolume {
        tracing::debug!(%tag, "no calibration keys for tag");
        return Ok(KeyVector::new());
    }
    let volume = stream.volume()?;
    let gain = volume.first_gain().ok_or(Error::NoVolume)?;
    let level = volume_level(gain)?;
    tracing::debug!(gain, level, "stream volume calibration");
    Ok(vec![KeyValue::new(VOLUME, level)])
}
