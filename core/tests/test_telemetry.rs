use std::time::Duration;

use mask_core::cipher::encrypt_decrypt_with_counters;
use mask_core::telemetry::{TransformCounters, TransformSnapshot};

#[test]
fn counters_track_windows_and_bytes() {
    let mut counters = TransformCounters::default();

    // 40 bytes: one full window, one short window
    let data = vec![7u8; 40];
    let out = encrypt_decrypt_with_counters(&data, b"key", &mut counters);

    assert_eq!(out.len(), 40);
    assert_eq!(counters.calls, 1);
    assert_eq!(counters.windows_full, 1);
    assert_eq!(counters.windows_short, 1);
    assert_eq!(counters.windows(), 2);
    assert_eq!(counters.bytes_in, 40);
    assert_eq!(counters.bytes_out, 40);
}

#[test]
fn empty_call_counts_no_windows() {
    let mut counters = TransformCounters::default();
    encrypt_decrypt_with_counters(&[], b"key", &mut counters);

    assert_eq!(counters.calls, 1);
    assert_eq!(counters.windows(), 0);
    assert_eq!(counters.bytes_in, 0);
}

#[test]
fn counters_accumulate_across_calls() {
    let mut counters = TransformCounters::default();
    encrypt_decrypt_with_counters(&[1u8; 32], b"key", &mut counters);
    encrypt_decrypt_with_counters(&[2u8; 33], b"key", &mut counters);

    assert_eq!(counters.calls, 2);
    assert_eq!(counters.windows_full, 2);
    assert_eq!(counters.windows_short, 1);
    assert_eq!(counters.bytes_in, 65);
}

#[test]
fn merge_and_add_assign_agree() {
    let mut a = TransformCounters::default();
    encrypt_decrypt_with_counters(&[0u8; 100], b"key", &mut a);

    let mut b = TransformCounters::default();
    encrypt_decrypt_with_counters(&[0u8; 7], b"key", &mut b);

    let mut merged = a.clone();
    merged.merge(&b);

    let mut summed = a;
    summed += b;

    assert_eq!(merged, summed);
    assert_eq!(merged.calls, 2);
    assert_eq!(merged.bytes_in, 107);
}

#[test]
fn snapshot_derives_throughput() {
    let mut counters = TransformCounters::default();
    encrypt_decrypt_with_counters(&[0u8; 1000], b"key", &mut counters);

    let snap = TransformSnapshot::from(&counters, Duration::from_secs(2));
    assert_eq!(snap.bytes_in, 1000);
    assert_eq!(snap.throughput_bytes_per_sec, 500.0);

    // zero elapsed must not divide by zero
    let snap = TransformSnapshot::from(&counters, Duration::ZERO);
    assert_eq!(snap.throughput_bytes_per_sec, 0.0);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut counters = TransformCounters::default();
    encrypt_decrypt_with_counters(&[0u8; 64], b"key", &mut counters);

    let snap = TransformSnapshot::from(&counters, Duration::from_millis(5));
    let json = snap.to_json().unwrap();
    let back: TransformSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snap);
}
