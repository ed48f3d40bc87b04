//! cipher/keystream.rs
//! Per-window keystream derivation.
//!
//! One keystream block per window, a pure function of `(key, offset)`:
//!
//! ```text
//! block = Keccak256( key ++ uint256_be(offset) )
//! ```
//!
//! The hash input is the packed concatenation of the raw key bytes and the
//! 32-byte big-endian offset field. No length prefixes, no delimiters —
//! inserting either diverges from the reference implementation.
//!
//! Keccak-256 here is the original Keccak padding, not SHA3-256 (the
//! standardized variant pads differently and produces different digests).

use byteorder::{BigEndian, ByteOrder};
use sha3::{Digest, Keccak256};

use crate::constants::{DIGEST_LEN, OFFSET_FIELD_LEN};

/// Encode a window offset as an unsigned 256-bit big-endian integer,
/// zero-padded on the left.
#[inline]
pub fn encode_offset(offset: usize) -> [u8; OFFSET_FIELD_LEN] {
    let mut field = [0u8; OFFSET_FIELD_LEN];
    BigEndian::write_u64(&mut field[OFFSET_FIELD_LEN - 8..], offset as u64);
    field
}

/// Derive the 32-byte keystream block for `(key, offset)`.
///
/// `offset` is the window's starting byte position within the input, not
/// its sequential index. Deterministic; no state carried between calls.
#[inline]
pub fn keystream_block(key: &[u8], offset: usize) -> [u8; DIGEST_LEN] {
    let mut hasher = Keccak256::new();
    hasher.update(key);
    hasher.update(encode_offset(offset));

    let digest = hasher.finalize();
    let mut block = [0u8; DIGEST_LEN];
    block.copy_from_slice(&digest);
    block
}
