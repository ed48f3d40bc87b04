//! telemetry/mod.rs
//! Opt-in transform observability.
//!
//! Counters are collected during instrumented calls and converted into an
//! immutable snapshot afterwards; the plain transform entry points stay
//! pure and allocate nothing here.

pub mod counters;
pub mod snapshot;

pub use counters::TransformCounters;
pub use snapshot::TransformSnapshot;
