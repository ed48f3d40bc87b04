//! parity/mod.rs
//! Black-box harness for the external reference implementation.
//!
//! The reference is an independent, pre-existing implementation of the
//! same cipher, consumed only to validate output equality — it is never
//! reimplemented here. [`CommandOracle`] shells out to it with hex
//! arguments; anything implementing [`ReferenceOracle`] can stand in
//! for tests of the harness itself.

use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::cipher::encrypt_decrypt;

/// Failures while invoking or comparing against the reference oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle process could not be spawned or its output read.
    #[error("failed to invoke reference oracle: {0}")]
    Invoke(#[from] std::io::Error),

    /// The oracle ran but exited unsuccessfully.
    #[error("reference oracle exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The oracle's stdout was not valid hex.
    #[error("reference oracle produced invalid hex: {0}")]
    BadHex(#[from] hex::FromHexError),

    /// Our output and the oracle's output differ.
    #[error("parity mismatch: ours=0x{ours} oracle=0x{theirs}")]
    Mismatch { ours: String, theirs: String },
}

/// An external implementation of the same `(data, key)` transform.
pub trait ReferenceOracle {
    fn encrypt_decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, OracleError>;
}

/// Oracle reached through a subprocess.
///
/// Contract: the program receives `hex(data)` and `hex(key)` as its two
/// arguments and prints the transformed bytes as hex on stdout (a leading
/// `0x` and trailing whitespace are accepted).
pub struct CommandOracle {
    program: String,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ReferenceOracle for CommandOracle {
    fn encrypt_decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, OracleError> {
        let output = Command::new(&self.program)
            .arg(hex::encode(data))
            .arg(hex::encode(key))
            .output()?;

        if !output.status.success() {
            return Err(OracleError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = stdout.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        Ok(hex::decode(text)?)
    }
}

/// Transform `(data, key)` locally and with the oracle; error on any
/// byte-level divergence.
pub fn check_parity<O: ReferenceOracle>(
    oracle: &O,
    data: &[u8],
    key: &[u8],
) -> Result<(), OracleError> {
    let ours = encrypt_decrypt(data, key);
    let theirs = oracle.encrypt_decrypt(data, key)?;

    if ours != theirs {
        return Err(OracleError::Mismatch {
            ours: hex::encode(ours),
            theirs: hex::encode(theirs),
        });
    }
    Ok(())
}
