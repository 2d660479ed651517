//! Deterministic input generation for the workloads.
//!
//! Every input is drawn from a `ChaCha8Rng` seeded with the run's 64-bit
//! seed. ChaCha output does not depend on the host, so the same `(n, seed)`
//! pair yields the same buffer on every platform.
//!
//! Inputs are built before the measurement window opens and are never part
//! of the timed computation.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{BenchError, Result};

/// Seeded generator shared by input generation and stream-consuming workloads.
pub fn input_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Element count for a requested size; non-positive sizes give an empty input.
pub fn input_len(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

/// Draw one input value: the low 32 bits of the next word, as a signed integer.
#[inline]
fn next_value(rng: &mut ChaCha8Rng) -> i32 {
    rng.next_u64() as u32 as i32
}

/// Generate `n` pseudo-random `i32` values from `seed`.
///
/// Fails with [`BenchError::Allocation`] when the buffer cannot be reserved.
pub fn generate_input(n: i64, seed: u64) -> Result<Vec<i32>> {
    let len = input_len(n);
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation { n })?;

    let mut rng = input_rng(seed);
    values.extend((0..len).map(|_| next_value(&mut rng)));
    Ok(values)
}
