/// Cipher window width in bytes. One keystream block masks one window.
pub const BLOCK_LEN: usize = 32;

/// Width of the offset field hashed after the key: an unsigned 256-bit
/// big-endian integer, zero-padded on the left.
pub const OFFSET_FIELD_LEN: usize = 32;

/// Keccak-256 digest length in bytes.
pub const DIGEST_LEN: usize = 32;
