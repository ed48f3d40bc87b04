//! telemetry/counters.rs
//! Mutable counters recorded during instrumented transforms.
//!
//! Summary: collects call, window, and byte counts. Converted into an
//! immutable TransformSnapshot afterwards.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::constants::BLOCK_LEN;

/// Deterministic counters collected across transform calls
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformCounters {
    pub calls: u64,
    pub windows_full: u64,
    pub windows_short: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl TransformCounters {
    /// Record one processed window of `len` content bytes (`0 < len <= 32`;
    /// only the final window of a call can be short).
    pub fn add_window(&mut self, len: usize) {
        if len == BLOCK_LEN {
            self.windows_full += 1;
        } else {
            self.windows_short += 1;
        }
    }

    /// Record one completed transform call of `len` input bytes.
    /// Output length always equals input length.
    pub fn add_call(&mut self, len: usize) {
        self.calls += 1;
        self.bytes_in += len as u64;
        self.bytes_out += len as u64;
    }

    /// Total windows processed.
    pub fn windows(&self) -> u64 {
        self.windows_full + self.windows_short
    }

    // Workers keep private counters and merge at the end.
    // This avoids locks and atomics inside the hot loop.
    pub fn merge(&mut self, other: &TransformCounters) {
        self.calls += other.calls;
        self.windows_full += other.windows_full;
        self.windows_short += other.windows_short;
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
    }
}

impl AddAssign for TransformCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.calls          += rhs.calls;
        self.windows_full   += rhs.windows_full;
        self.windows_short  += rhs.windows_short;
        self.bytes_in       += rhs.bytes_in;
        self.bytes_out      += rhs.bytes_out;
    }
}
