#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
//! Byte-level primitives shared by every Syscoin asset payload record.
//!
//! Two unrelated variable-length integer encodings coexist on the wire:
//! the size-tagged [`read_compact_size`] form used for sequence counts,
//! output indices and length prefixes, and the continuation-bit
//! [`read_varuint`] form used for compressed monetary amounts. The two
//! must never be mixed; every field of the record grammar is pinned to
//! exactly one of them.

use bytes::{Buf, BufMut};

mod amount;
mod bytestring;
mod error;
mod varint;

pub use amount::{compress_amount, decompress_amount};
pub use bytestring::{read_var_bytes, write_var_bytes};
pub use error::DecodeError;
pub use varint::{
    compact_size_len, read_compact_size, read_varuint, varuint_len, write_compact_size,
    write_varuint,
};

/// A value with a canonical wire encoding.
pub trait Encodable {
    /// Appends the wire encoding of `self` to `out`.
    fn encode(&self, out: &mut dyn BufMut);

    /// Length in bytes of the wire encoding.
    fn length(&self) -> usize {
        let mut out: Vec<u8> = Vec::new();
        self.encode(&mut out);
        out.len()
    }
}

/// A value decodable from its canonical wire encoding.
pub trait Decodable: Sized {
    /// Decodes a value from the front of `buf`, advancing the slice past
    /// the bytes consumed. The cursor position is unspecified on error.
    fn decode(buf: &mut &[u8]) -> Result<Self, DecodeError>;
}

/// Reads a single byte.
pub fn read_u8(buf: &mut &[u8], field: &'static str) -> Result<u8, DecodeError> {
    if buf.remaining() < 1 {
        return Err(DecodeError::UnexpectedEof { field });
    }
    Ok(buf.get_u8())
}

/// Reads a little-endian `u16`.
pub fn read_u16_le(buf: &mut &[u8], field: &'static str) -> Result<u16, DecodeError> {
    if buf.remaining() < 2 {
        return Err(DecodeError::UnexpectedEof { field });
    }
    Ok(buf.get_u16_le())
}

/// Reads a little-endian `u32`.
pub fn read_u32_le(buf: &mut &[u8], field: &'static str) -> Result<u32, DecodeError> {
    if buf.remaining() < 4 {
        return Err(DecodeError::UnexpectedEof { field });
    }
    Ok(buf.get_u32_le())
}

/// Reads a little-endian `u64`.
pub fn read_u64_le(buf: &mut &[u8], field: &'static str) -> Result<u64, DecodeError> {
    if buf.remaining() < 8 {
        return Err(DecodeError::UnexpectedEof { field });
    }
    Ok(buf.get_u64_le())
}
