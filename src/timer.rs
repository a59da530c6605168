//! Timing for a single synchronous workload invocation.
//!
//! Wall-clock time comes from `std::time::Instant`. The user/system CPU split
//! comes from the process accounting facility (`getrusage(RUSAGE_SELF)`) on
//! unix; on platforms without one the split is reported as unavailable rather
//! than fabricated.

use std::time::{Duration, Instant};

/// The three timing deltas for one measured invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    /// CPU time spent in the process's own code, if the platform can tell.
    pub user_time: Option<Duration>,
    /// CPU time spent in the kernel on the process's behalf, if available.
    pub system_time: Option<Duration>,
    /// Elapsed wall-clock time.
    pub real_time: Duration,
}

impl TimingSample {
    /// Combined CPU time (user + system), if the split is available.
    pub fn total_cpu(&self) -> Option<Duration> {
        Some(self.user_time? + self.system_time?)
    }
}

/// Run `block` to completion on the calling thread and return its timing
/// deltas alongside its result.
///
/// Samples are taken immediately before and after the call; there is no
/// suspension, retry, or timeout in between. CPU deltas saturate at zero
/// since process-accounting clocks are coarser than `Instant` and can read
/// equal on either side of a short block.
pub fn measure<F, R>(block: F) -> (TimingSample, R)
where
    F: FnOnce() -> R,
{
    let cpu_before = cpu_times();
    let wall_before = Instant::now();

    let result = block();

    let real_time = wall_before.elapsed();
    let cpu_after = cpu_times();

    let (user_time, system_time) = match (cpu_before, cpu_after) {
        (Some(before), Some(after)) => (
            Some(after.user.saturating_sub(before.user)),
            Some(after.system.saturating_sub(before.system)),
        ),
        _ => (None, None),
    };

    (
        TimingSample {
            user_time,
            system_time,
            real_time,
        },
        result,
    )
}

/// Absolute per-process CPU times at one sampling point.
#[derive(Debug, Clone, Copy)]
struct CpuTimes {
    user: Duration,
    system: Duration,
}

#[cfg(unix)]
fn cpu_times() -> Option<CpuTimes> {
    use std::mem::MaybeUninit;

    let mut usage = MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage fills the struct when given a valid pointer and
    // RUSAGE_SELF; we only read it after checking the return code.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    let usage = unsafe { usage.assume_init() };

    Some(CpuTimes {
        user: timeval_to_duration(usage.ru_utime),
        system: timeval_to_duration(usage.ru_stime),
    })
}

#[cfg(unix)]
fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = tv.tv_sec.max(0) as u64;
    let micros = tv.tv_usec.max(0) as u32;
    Duration::new(secs, micros * 1_000)
}

#[cfg(not(unix))]
fn cpu_times() -> Option<CpuTimes> {
    None
}
