//! parallelism.rs
//! Worker-count selection for the parallel transform.
//!
//! Window processing is embarrassingly parallel: each window's keystream
//! and XOR depend only on that window's offset and content. The profile
//! only decides how many scoped threads the parallel path spawns;
//! correctness never depends on the choice.

/// Parallelism configuration
#[derive(Debug, Clone)]
pub struct ParallelismProfile {
    pub worker_count: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self { worker_count: 1 }
    }

    /// Size the pool from the machine, leaving one core for the caller.
    pub fn dynamic() -> Self {
        let cores = num_cpus::get();
        Self {
            worker_count: cores.saturating_sub(1).max(1),
        }
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::single_threaded()
    }
}
