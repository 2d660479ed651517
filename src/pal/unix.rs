use std::mem::MaybeUninit;
use std::time::Duration;

use crate::pal::{ResourceSampler, ResourceUsage};

// ru_maxrss is reported in bytes on Apple targets and in KiB elsewhere.
#[cfg(any(target_os = "macos", target_os = "ios"))]
const MAXRSS_UNIT: u64 = 1;
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
const MAXRSS_UNIT: u64 = 1024;

/// `getrusage(RUSAGE_SELF)` backed sampler.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSampler;

impl ResourceSampler for OsSampler {
    fn sample(&self) -> ResourceUsage {
        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        // SAFETY: getrusage only writes into the struct we pass, which lives on our stack.
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return ResourceUsage::default();
        }
        // SAFETY: a zero return code means the kernel filled the whole struct.
        let usage = unsafe { usage.assume_init() };

        ResourceUsage {
            user_cpu: timeval_to_duration(usage.ru_utime),
            sys_cpu: timeval_to_duration(usage.ru_stime),
            peak_rss_bytes: u64::try_from(usage.ru_maxrss)
                .unwrap_or(0)
                .saturating_mul(MAXRSS_UNIT),
        }
    }
}

fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = u64::try_from(tv.tv_sec).unwrap_or(0);
    let micros = u64::try_from(tv.tv_usec).unwrap_or(0);
    Duration::from_secs(secs) + Duration::from_micros(micros)
}
