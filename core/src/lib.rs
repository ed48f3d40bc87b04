//! mask-core
//!
//! Symmetric Keccak-256 masking cipher.
//! Deterministic keystream plus XOR; applying the transform twice under
//! the same key recovers the input.
//! No Python, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod parallelism;

// Cipher stages
pub mod cipher;

// Collaborators and observability
pub mod parity;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::cipher::{
        encrypt_decrypt, encrypt_decrypt_hex, encrypt_decrypt_parallel,
        encrypt_decrypt_with_counters,
    };
    pub use crate::parallelism::ParallelismProfile;
    pub use crate::telemetry::{TransformCounters, TransformSnapshot};
}
