use std::fmt::Debug;
use std::time::Duration;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Cumulative resource counters of the current process at one instant.
///
/// CPU times only ever grow during a process lifetime. `peak_rss_bytes` is
/// the OS-maintained high-water mark, so it never decreases either.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceUsage {
    pub user_cpu: Duration,
    pub sys_cpu: Duration,
    pub peak_rss_bytes: u64,
}

impl ResourceUsage {
    pub fn peak_rss_mib(&self) -> f64 {
        self.peak_rss_bytes as f64 / BYTES_PER_MIB
    }
}

/// Reads the process resource counters.
///
/// Implementations must not fail: when the OS refuses to answer they report
/// [`ResourceUsage::default`] so a record can still be produced.
pub trait ResourceSampler: Debug {
    fn sample(&self) -> ResourceUsage;
}
