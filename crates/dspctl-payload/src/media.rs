//! Media-format encoders.
//!
//! Every encoder here that carries a bit depth applies the same sample-format
//! rule: 16 and 32 bit at natural width, 24 bit in a 32-bit container in Q27.

use byteorder::{LittleEndian, WriteBytesExt};
use dspctl_core::{ChannelRole, Direction, MediaConfig, SpeakerRotation, channel_roles};

use crate::dispatch::ModuleInfo;
use crate::envelope::{Payload, PayloadWriter};
use crate::error::Result;
use crate::ids::{
    DATA_FORMAT_FIXED_POINT, MEDIA_FMT_ID_PCM, PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT,
    PARAM_ID_HW_EP_MF_CFG, PARAM_ID_MEDIA_FORMAT, PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT,
    PARAM_ID_PCM_OUTPUT_FORMAT_CFG, PARAM_ID_RAT_MEDIA_FORMAT, PARAM_VAL_NATIVE,
    PCM_DEINTERLEAVED_UNPACKED, PCM_INTERLEAVED, PCM_LITTLE_ENDIAN,
};

/// Length of the generic media-format header.
const MEDIA_FMT_HEADER_LEN: usize = 12;
/// Length of the fixed part of both PCM media-format payloads.
const PCM_FMT_FIXED_LEN: usize = 16;

fn channel_count_field(media: &MediaConfig) -> u16 {
    if media.native {
        PARAM_VAL_NATIVE as u16
    } else {
        media.channels
    }
}

fn write_u8_map(out: &mut Vec<u8>, roles: &[ChannelRole]) -> std::io::Result<()> {
    for role in roles {
        out.write_u8(role.code())?;
    }
    Ok(())
}

fn write_u16_map(out: &mut Vec<u8>, roles: &[ChannelRole]) -> std::io::Result<()> {
    for role in roles {
        out.write_u16::<LittleEndian>(u16::from(role.code()))?;
    }
    Ok(())
}

fn write_media_header(out: &mut Vec<u8>, payload_size: usize) -> std::io::Result<()> {
    out.write_u32::<LittleEndian>(DATA_FORMAT_FIXED_POINT)?;
    out.write_u32::<LittleEndian>(MEDIA_FMT_ID_PCM)?;
    out.write_u32::<LittleEndian>(payload_size as u32)
}

/// Input media format of a PCM stream (`PARAM_ID_MEDIA_FORMAT`).
pub fn in_media_format(module: &ModuleInfo, media: &MediaConfig) -> Result<Payload> {
    let miid = module.miid()?;
    let fmt = media.sample_format()?;
    let channels = usize::from(media.channels);
    let inner = PCM_FMT_FIXED_LEN + channels;

    let mut w = PayloadWriter::begin(miid, PARAM_ID_MEDIA_FORMAT, MEDIA_FMT_HEADER_LEN + inner)?;
    let out = w.body();
    write_media_header(out, inner)?;
    out.write_u32::<LittleEndian>(media.sample_rate)?;
    out.write_u16::<LittleEndian>(fmt.bit_width)?;
    out.write_u16::<LittleEndian>(1)?; // alignment
    out.write_u16::<LittleEndian>(fmt.bits_per_sample)?;
    out.write_u16::<LittleEndian>(fmt.q_factor)?;
    out.write_u16::<LittleEndian>(PCM_LITTLE_ENDIAN)?;
    out.write_u16::<LittleEndian>(channel_count_field(media))?;
    write_u8_map(out, &channel_roles(media.channels))?;

    tracing::debug!(
        sample_rate = media.sample_rate,
        bit_width = fmt.bit_width,
        bits_per_sample = fmt.bits_per_sample,
        q_factor = fmt.q_factor,
        channels = media.channels,
        "in media format"
    );
    Ok(w.finish())
}

/// Output format of a PCM encoder, decoder or converter
/// (`PARAM_ID_PCM_OUTPUT_FORMAT_CFG`).
///
/// Playback paths are written deinterleaved-unpacked, everything else interleaved.
pub fn out_media_format(module: &ModuleInfo, media: &MediaConfig) -> Result<Payload> {
    let miid = module.miid()?;
    let fmt = media.sample_format()?;
    let channels = usize::from(media.channels);
    let inner = PCM_FMT_FIXED_LEN + channels;
    let interleaved = match media.direction {
        Direction::Output => PCM_DEINTERLEAVED_UNPACKED,
        Direction::Input | Direction::InputOutput => PCM_INTERLEAVED,
    };

    let mut w = PayloadWriter::begin(
        miid,
        PARAM_ID_PCM_OUTPUT_FORMAT_CFG,
        MEDIA_FMT_HEADER_LEN + inner,
    )?;
    let out = w.body();
    write_media_header(out, inner)?;
    out.write_u16::<LittleEndian>(fmt.bit_width)?;
    out.write_u16::<LittleEndian>(1)?; // alignment
    out.write_u16::<LittleEndian>(fmt.bits_per_sample)?;
    out.write_u16::<LittleEndian>(fmt.q_factor)?;
    out.write_u16::<LittleEndian>(PCM_LITTLE_ENDIAN)?;
    out.write_u16::<LittleEndian>(interleaved)?;
    out.write_u16::<LittleEndian>(0)?; // reserved
    out.write_u16::<LittleEndian>(channel_count_field(media))?;
    write_u8_map(out, &channel_roles(media.channels))?;

    tracing::debug!(
        bit_width = fmt.bit_width,
        interleaved,
        channels = media.channels,
        "out media format"
    );
    Ok(w.finish())
}

/// Hardware endpoint media format (`PARAM_ID_HW_EP_MF_CFG`).
pub fn hw_ep_media_format(module: &ModuleInfo, media: &MediaConfig) -> Result<Payload> {
    let miid = module.miid()?;
    let fmt = media.sample_format()?;

    let mut w = PayloadWriter::begin(miid, PARAM_ID_HW_EP_MF_CFG, 12)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(media.sample_rate)?;
    out.write_u16::<LittleEndian>(fmt.bit_width)?;
    out.write_u16::<LittleEndian>(media.channels)?;
    out.write_u32::<LittleEndian>(DATA_FORMAT_FIXED_POINT)?;

    tracing::debug!(
        sample_rate = media.sample_rate,
        bit_width = fmt.bit_width,
        channels = media.channels,
        "hw ep media format"
    );
    Ok(w.finish())
}

/// Media-format converter output (`PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT`).
///
/// A stereo map is written `[R, L]` when the speaker rotation is swapped.
pub fn mfc_output(miid: u32, media: &MediaConfig) -> Result<Payload> {
    let fmt = media.sample_format()?;
    let channels = usize::from(media.channels);

    let mut roles = channel_roles(media.channels);
    if media.channels == 2 && media.rotation == SpeakerRotation::RightLeft {
        roles.swap(0, 1);
    }

    let mut w = PayloadWriter::begin(miid, PARAM_ID_MFC_OUTPUT_MEDIA_FORMAT, 8 + 2 * channels)?;
    let out = w.body();
    out.write_i32::<LittleEndian>(media.sample_rate as i32)?;
    out.write_i16::<LittleEndian>(fmt.bit_width as i16)?;
    out.write_i16::<LittleEndian>(media.channels as i16)?;
    write_u16_map(out, &roles)?;

    tracing::debug!(
        sample_rate = media.sample_rate,
        bit_width = fmt.bit_width,
        channels = media.channels,
        rotation = ?media.rotation,
        "mfc output format"
    );
    Ok(w.finish())
}

/// Rate-adapter media format (`PARAM_ID_RAT_MEDIA_FORMAT`).
pub fn rat_media_format(miid: u32, media: &MediaConfig) -> Result<Payload> {
    let fmt = media.sample_format()?;
    let channels = usize::from(media.channels);

    let mut w = PayloadWriter::begin(miid, PARAM_ID_RAT_MEDIA_FORMAT, 16 + 2 * channels)?;
    let out = w.body();
    out.write_u32::<LittleEndian>(media.sample_rate)?;
    out.write_u16::<LittleEndian>(fmt.bits_per_sample)?;
    out.write_u16::<LittleEndian>(fmt.q_factor)?;
    out.write_u32::<LittleEndian>(DATA_FORMAT_FIXED_POINT)?;
    out.write_u32::<LittleEndian>(u32::from(media.channels))?;
    write_u16_map(out, &channel_roles(media.channels))?;

    tracing::debug!(
        sample_rate = media.sample_rate,
        bits_per_sample = fmt.bits_per_sample,
        q_factor = fmt.q_factor,
        channels = media.channels,
        "rat media format"
    );
    Ok(w.finish())
}

/// Bluetooth COP packetizer output format
/// (`PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT`).
pub fn cop_packetizer(miid: u32, media: &MediaConfig) -> Result<Payload> {
    let fmt = media.sample_format()?;
    let channels = usize::from(media.channels);

    let mut w = PayloadWriter::begin(
        miid,
        PARAM_ID_COP_PACKETIZER_OUTPUT_MEDIA_FORMAT,
        8 + 2 * channels,
    )?;
    let out = w.body();
    out.write_u32::<LittleEndian>(media.sample_rate)?;
    out.write_u16::<LittleEndian>(fmt.bits_per_sample)?;
    out.write_u16::<LittleEndian>(media.channels)?;
    write_u16_map(out, &channel_roles(media.channels))?;

    tracing::debug!(
        sample_rate = media.sample_rate,
        bits_per_sample = fmt.bits_per_sample,
        channels = media.channels,
        "cop packetizer format"
    );
    Ok(w.finish())
}
