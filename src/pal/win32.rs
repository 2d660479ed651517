use std::mem::size_of;
use std::time::Duration;

use windows::Win32::Foundation::FILETIME;
use windows::Win32::System::ProcessStatus::{GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS};
use windows::Win32::System::Threading::{GetCurrentProcess, GetProcessTimes};

use crate::pal::{ResourceSampler, ResourceUsage};

/// `GetProcessTimes` + `GetProcessMemoryInfo` backed sampler.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSampler;

impl ResourceSampler for OsSampler {
    fn sample(&self) -> ResourceUsage {
        // SAFETY: returns a pseudo handle for the current process; it needs no closing.
        let process = unsafe { GetCurrentProcess() };

        let mut creation = FILETIME::default();
        let mut exit = FILETIME::default();
        let mut kernel = FILETIME::default();
        let mut user = FILETIME::default();
        // SAFETY: every out pointer refers to a live local FILETIME.
        let times = unsafe {
            GetProcessTimes(process, &mut creation, &mut exit, &mut kernel, &mut user)
        };
        if times.is_err() {
            return ResourceUsage::default();
        }

        let mut counters = PROCESS_MEMORY_COUNTERS::default();
        // SAFETY: the buffer is a live PROCESS_MEMORY_COUNTERS and cb is its exact size.
        let memory = unsafe {
            GetProcessMemoryInfo(
                process,
                &mut counters,
                size_of::<PROCESS_MEMORY_COUNTERS>() as u32,
            )
        };
        let peak_rss_bytes = match memory {
            Ok(()) => counters.PeakWorkingSetSize as u64,
            Err(_) => 0,
        };

        ResourceUsage {
            user_cpu: filetime_to_duration(user),
            sys_cpu: filetime_to_duration(kernel),
            peak_rss_bytes,
        }
    }
}

/// FILETIME durations count 100 ns ticks.
fn filetime_to_duration(ft: FILETIME) -> Duration {
    let ticks = (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime);
    Duration::from_nanos(ticks.saturating_mul(100))
}
