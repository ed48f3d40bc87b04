//! telemetry/snapshot.rs
//!
//! Immutable snapshot derived from counters plus an elapsed duration.
//! Serializable for logs and cross-language parity reports.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::telemetry::counters::TransformCounters;

/// Point-in-time view of transform activity: counters, throughput, elapsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    pub calls: u64,
    pub windows_full: u64,
    pub windows_short: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl TransformSnapshot {
    pub fn from(counters: &TransformCounters, elapsed: Duration) -> Self {
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            calls: counters.calls,
            windows_full: counters.windows_full,
            windows_short: counters.windows_short,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            throughput_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// JSON rendering for logs and reports.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
