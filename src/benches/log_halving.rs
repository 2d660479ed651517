use std::hint::black_box;

use rand_chacha::rand_core::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::benches::{SizePolicy, Workload};
use crate::dataset;
use crate::error::Result;

/// Halves a working value down to 1, doing a fixed block of mixing against
/// the seeded stream on every step. Cost is `log2(n)` blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHalving;

#[derive(Debug)]
pub struct HalvingState {
    pub value: u64,
    pub rng: ChaCha8Rng,
}

impl LogHalving {
    /// Mixing steps per halving; large enough to clear coarse CPU-time ticks.
    pub const INNER_WORK: u64 = 500_000;

    /// Starting value for a requested size. Sizes below 2 start at 2.
    pub fn start_value(n: i64) -> u64 {
        if n > 1 {
            n as u64
        } else {
            2
        }
    }

    /// Number of halving steps performed for `n`.
    #[cfg(test)]
    fn outer_iterations(n: i64) -> u32 {
        63 - Self::start_value(n).leading_zeros()
    }

    fn mix(state: &mut HalvingState, inner: u64) -> u64 {
        let mut checksum = 0u64;
        while state.value > 1 {
            for i in 0..inner {
                checksum ^= state.value ^ state.rng.next_u64();
                checksum = checksum.wrapping_add(state.value | i);
                checksum = checksum.rotate_left(1);
            }
            checksum = black_box(checksum);
            state.value >>= 1;
        }
        checksum
    }
}

impl Workload for LogHalving {
    const NAME: &'static str = "log-halving";
    const SIZE_POLICY: SizePolicy = SizePolicy::Clamp;

    type Input = HalvingState;

    fn prepare(n: i64, seed: u64) -> Result<HalvingState> {
        Ok(HalvingState {
            value: Self::start_value(n),
            rng: dataset::input_rng(seed),
        })
    }

    fn run(input: &mut HalvingState) -> u64 {
        Self::mix(input, Self::INNER_WORK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_value_clamps() {
        assert_eq!(LogHalving::start_value(-5), 2);
        assert_eq!(LogHalving::start_value(0), 2);
        assert_eq!(LogHalving::start_value(1), 2);
        assert_eq!(LogHalving::start_value(1000), 1000);
    }

    #[test]
    fn test_outer_iterations_are_log2() {
        assert_eq!(LogHalving::outer_iterations(0), 1);
        assert_eq!(LogHalving::outer_iterations(2), 1);
        assert_eq!(LogHalving::outer_iterations(3), 1);
        assert_eq!(LogHalving::outer_iterations(1024), 10);
        assert_eq!(LogHalving::outer_iterations(1 << 40), 40);
    }

    #[test]
    fn test_consumes_stream_per_step() {
        let mut state = LogHalving::prepare(8, 1).unwrap();
        LogHalving::mix(&mut state, 10);
        assert_eq!(state.value, 1);

        let mut expected = dataset::input_rng(1);
        for _ in 0..30 {
            expected.next_u64();
        }
        assert_eq!(state.rng.next_u64(), expected.next_u64());
    }

    #[test]
    fn test_seed_changes_checksum() {
        let mut a = LogHalving::prepare(64, 1).unwrap();
        let mut b = LogHalving::prepare(64, 1).unwrap();
        let mut c = LogHalving::prepare(64, 2).unwrap();
        let ra = LogHalving::mix(&mut a, 1_000);
        assert_eq!(ra, LogHalving::mix(&mut b, 1_000));
        assert_ne!(ra, LogHalving::mix(&mut c, 1_000));
    }

    #[test]
    fn test_full_run_terminates() {
        let mut state = LogHalving::prepare(4, 9).unwrap();
        LogHalving::run(&mut state);
        assert_eq!(state.value, 1);
    }
}
