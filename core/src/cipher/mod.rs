//! cipher/mod.rs
//! The masking cipher, split into its three stages:
//!
//! - `segment`: window offsets over the input length
//! - `keystream`: per-window Keccak-256 keystream blocks
//! - `transform`: XOR combination and exact-length truncation

pub mod keystream;
pub mod segment;
pub mod transform;

pub use keystream::{encode_offset, keystream_block};
pub use segment::{window_count, WindowOffsets};
pub use transform::{
    encrypt_decrypt, encrypt_decrypt_hex, encrypt_decrypt_parallel,
    encrypt_decrypt_with_counters,
};
