//! Minimal RLP writer for the header seal hash.
//!
//! Only what the canonical header list needs: byte strings, minimal-width
//! integers, and a single list wrapper. Decoding is out of scope; the seal
//! hash is a one-way derivation.

use primitive_types::U256;

/// Append the RLP length header for a payload of `len` bytes.
fn append_length(out: &mut Vec<u8>, base: u8, len: usize) {
    if len <= 55 {
        out.push(base + len as u8);
    } else {
        let len_bytes = len.to_be_bytes();
        let skip = len_bytes.iter().take_while(|&&b| b == 0).count();
        let trimmed = &len_bytes[skip..];
        out.push(base + 55 + trimmed.len() as u8);
        out.extend_from_slice(trimmed);
    }
}

/// Append a byte string item.
pub(crate) fn append_bytes(out: &mut Vec<u8>, data: &[u8]) {
    if data.len() == 1 && data[0] < 0x80 {
        out.push(data[0]);
    } else {
        append_length(out, 0x80, data.len());
        out.extend_from_slice(data);
    }
}

/// Append a 64-bit integer item (minimal big-endian, zero is the empty string).
pub(crate) fn append_uint(out: &mut Vec<u8>, v: u64) {
    let bytes = v.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    append_bytes(out, &bytes[skip..]);
}

/// Append a 256-bit integer item (minimal big-endian, zero is the empty string).
pub(crate) fn append_u256(out: &mut Vec<u8>, v: &U256) {
    let mut bytes = [0u8; 32];
    v.to_big_endian(&mut bytes);
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    append_bytes(out, &bytes[skip..]);
}

/// Wrap an already-encoded payload into a list item.
pub(crate) fn wrap_list(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 9);
    append_length(&mut out, 0xc0, payload.len());
    out.extend_from_slice(payload);
    out
}
