use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use crate::pal::{OsSampler, ResourceSampler, ResourceUsage};
use crate::schema::BenchRecord;

/// Baseline for one measured interval.
///
/// The window is an ordinary value: `start` captures the baseline and
/// `stop` consumes it, so each window produces exactly one set of deltas.
#[derive(Debug)]
pub struct MeasurementWindow<S: ResourceSampler = OsSampler> {
    sampler: S,
    wall_start: Instant,
    baseline: ResourceUsage,
}

impl MeasurementWindow<OsSampler> {
    /// Open a window on the real process counters.
    ///
    /// Call this immediately before the timed computation.
    #[inline]
    pub fn start() -> Self {
        Self::start_with(OsSampler)
    }
}

impl<S: ResourceSampler> MeasurementWindow<S> {
    #[inline]
    pub fn start_with(sampler: S) -> Self {
        let wall_start = Instant::now();
        let baseline = sampler.sample();
        Self {
            sampler,
            wall_start,
            baseline,
        }
    }

    /// Close the window and write the measured fields of `record`.
    pub fn stop(self, record: &mut BenchRecord) {
        let wall = self.wall_start.elapsed();
        let now = self.sampler.sample();

        record.wall_ms = duration_ms(wall);
        record.cpu_user_ms = duration_ms(now.user_cpu.saturating_sub(self.baseline.user_cpu));
        record.cpu_sys_ms = duration_ms(now.sys_cpu.saturating_sub(self.baseline.sys_cpu));
        record.rss_peak_mib = now.peak_rss_mib();
        record.threads = hardware_concurrency();
    }
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Logical processors visible to this process, or 0 when unknown.
pub fn hardware_concurrency() -> i32 {
    thread::available_parallelism()
        .map(|n| i32::try_from(n.get()).unwrap_or(i32::MAX))
        .unwrap_or(0)
}

/// Run `f` inside a fresh window, filling `record` with the result.
///
/// The return value of `f` goes through `black_box`, so the optimizer has
/// to assume it is used.
pub fn measure<T>(record: &mut BenchRecord, f: impl FnOnce() -> T) -> T {
    measure_with(OsSampler, record, f)
}

pub fn measure_with<S, T>(sampler: S, record: &mut BenchRecord, f: impl FnOnce() -> T) -> T
where
    S: ResourceSampler,
{
    let window = MeasurementWindow::start_with(sampler);
    let out = black_box(f());
    window.stop(record);
    out
}
