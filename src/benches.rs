//! Reference workloads.
//!
//! Each workload builds its input outside the measurement window
//! ([`Workload::prepare`]) and does its CPU-bound work inside it
//! ([`Workload::run`]). `run` returns a checksum that the harness feeds to
//! `black_box`, which keeps the computation from being optimized away.

use crate::error::{BenchError, Result};

pub mod log_halving;

/// How a workload treats a non-positive `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizePolicy {
    /// `n <= 0` is an [`BenchError::InvalidSize`].
    Reject,
    /// `n <= 0` degrades to the smallest input the workload supports.
    Clamp,
}

pub trait Workload {
    /// Binary name, used in diagnostics.
    const NAME: &'static str;
    const SIZE_POLICY: SizePolicy;

    type Input;

    /// Build the input for `(n, seed)`. Not timed.
    fn prepare(n: i64, seed: u64) -> Result<Self::Input>;

    /// The timed computation.
    fn run(input: &mut Self::Input) -> u64;

    fn check_size(n: i64) -> Result<()> {
        match Self::SIZE_POLICY {
            SizePolicy::Reject if n <= 0 => Err(BenchError::InvalidSize { n }),
            _ => Ok(()),
        }
    }
}

/// Cheap fingerprint of a sorted buffer.
pub(crate) fn sorted_checksum(values: &[i32]) -> u64 {
    let first = values.first().copied().unwrap_or(0) as u32 as u64;
    let last = values.last().copied().unwrap_or(0) as u32 as u64;
    first ^ (last << 32) ^ values.len() as u64
}
