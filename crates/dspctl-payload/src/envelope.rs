//! Parameter envelope and the owned payload buffer.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};

/// Envelope length in bytes.
pub const ENVELOPE_LEN: usize = 16;

const ALIGNMENT: usize = 8;

/// `len` rounded up to the next multiple of eight.
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(ALIGNMENT) * ALIGNMENT
}

/// Header prefixed to every parameter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamEnvelope {
    /// Target module instance.
    pub module_instance_id: u32,
    /// Parameter identifier.
    pub param_id: u32,
    /// Reserved for the DSP's response; always zero on construction.
    pub error_code: u32,
    /// Trailer length, excluding envelope and padding.
    pub param_size: u32,
}

impl ParamEnvelope {
    fn write_to(&self, out: &mut Vec<u8>) -> std::io::Result<()> {
        out.write_u32::<LittleEndian>(self.module_instance_id)?;
        out.write_u32::<LittleEndian>(self.param_id)?;
        out.write_u32::<LittleEndian>(self.error_code)?;
        out.write_u32::<LittleEndian>(self.param_size)
    }

    fn read_from(bytes: &[u8]) -> Self {
        Self {
            module_instance_id: LittleEndian::read_u32(&bytes[0..4]),
            param_id: LittleEndian::read_u32(&bytes[4..8]),
            error_code: LittleEndian::read_u32(&bytes[8..12]),
            param_size: LittleEndian::read_u32(&bytes[12..16]),
        }
    }
}

/// An encoded parameter block, owned by the caller.
///
/// Always at least [`ENVELOPE_LEN`] bytes and a multiple of eight long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
    padding: usize,
}

impl Payload {
    /// Total length including padding.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole block.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of zero bytes appended for alignment.
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Decoded envelope.
    pub fn envelope(&self) -> ParamEnvelope {
        ParamEnvelope::read_from(&self.bytes[..ENVELOPE_LEN])
    }

    /// Trailer without padding.
    pub fn trailer(&self) -> &[u8] {
        &self.bytes[ENVELOPE_LEN..self.bytes.len() - self.padding]
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Payload> for Vec<u8> {
    fn from(payload: Payload) -> Self {
        payload.bytes
    }
}

/// Builds one payload: allocates the padded buffer up front, writes the
/// envelope, then lets the encoder append trailer fields.
pub(crate) struct PayloadWriter {
    buf: Vec<u8>,
    trailer_len: usize,
}

impl PayloadWriter {
    pub(crate) fn begin(module_instance_id: u32, param_id: u32, trailer_len: usize) -> Result<Self> {
        let param_size = u32::try_from(trailer_len).map_err(|_| Error::TooLarge(trailer_len))?;
        let total = padded_len(ENVELOPE_LEN + trailer_len);

        let mut buf = Vec::new();
        buf.try_reserve_exact(total)
            .map_err(|source| Error::Allocation {
                requested: total,
                source,
            })?;

        let envelope = ParamEnvelope {
            module_instance_id,
            param_id,
            error_code: 0,
            param_size,
        };
        envelope.write_to(&mut buf)?;
        tracing::debug!(
            miid = format_args!("{module_instance_id:#x}"),
            param_id = format_args!("{param_id:#010x}"),
            param_size,
            "payload header"
        );
        Ok(Self { buf, trailer_len })
    }

    /// Trailer sink. Fields are appended in firmware order.
    pub(crate) fn body(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }

    /// Zero-fill any trailer bytes not written plus alignment padding.
    pub(crate) fn finish(mut self) -> Payload {
        let unpadded = ENVELOPE_LEN + self.trailer_len;
        debug_assert!(
            self.buf.len() <= unpadded,
            "trailer overran its declared size"
        );
        let total = padded_len(unpadded);
        self.buf.resize(total, 0);
        tracing::trace!(len = total, "payload complete");
        Payload {
            bytes: self.buf,
            padding: total - unpadded,
        }
    }
}
