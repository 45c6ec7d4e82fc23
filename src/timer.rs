//! High-resolution cycle sources for timing short memory-access loops.
//!
//! Each source provides a pair of counter reads meant to bracket a measured
//! region:
//! - x86_64: `cpuid; rdtsc` before, `rdtscp; cpuid` after
//! - aarch64: `isb; mrs cntvct_el0` before, the same plus a trailing `isb` after
//! - anywhere: a monotonic nanosecond clock built on `std::time::Instant`
//!
//! On aarch64 the virtual counter ticks at a fixed frequency rather than the
//! core clock, so "cycles" there are counter ticks.

use std::sync::OnceLock;
use std::sync::atomic::{Ordering, compiler_fence};
use std::time::Instant;

/// A counter that can be read immediately before and after a timed region.
pub trait CycleSource {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Read the counter at the start of a measured region.
    ///
    /// Earlier instructions must have retired before the read happens.
    fn start(&self) -> u64;

    /// Read the counter at the end of a measured region.
    ///
    /// The read must not happen before the measured instructions retire, and
    /// later instructions must not start before the read.
    fn stop(&self) -> u64;

    /// Elapsed counts between two readings of this source.
    fn elapsed(&self, start: u64, end: u64) -> u64 {
        end.saturating_sub(start)
    }
}

/// Time-stamp counter read with serializing `cpuid`/`rdtscp`.
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Tsc;

#[cfg(target_arch = "x86_64")]
impl CycleSource for Tsc {
    fn name(&self) -> &'static str {
        "rdtsc"
    }

    #[inline(always)]
    #[allow(unused_unsafe)]
    fn start(&self) -> u64 {
        use std::arch::x86_64::{__cpuid, _rdtsc};

        compiler_fence(Ordering::SeqCst);
        // SAFETY: cpuid and rdtsc are available on every x86_64 CPU.
        let cycles = unsafe {
            let _ = __cpuid(0);
            _rdtsc()
        };
        compiler_fence(Ordering::SeqCst);
        cycles
    }

    #[inline(always)]
    #[allow(unused_unsafe)]
    fn stop(&self) -> u64 {
        use std::arch::x86_64::{__cpuid, __rdtscp};

        compiler_fence(Ordering::SeqCst);
        let mut aux = 0u32;
        // SAFETY: rdtscp is present on every x86_64 CPU made since 2006;
        // cpuid is always available.
        let cycles = unsafe {
            let cycles = __rdtscp(&mut aux);
            let _ = __cpuid(0);
            cycles
        };
        compiler_fence(Ordering::SeqCst);
        cycles
    }
}

/// ARM generic timer virtual count, fenced with `isb`.
#[cfg(target_arch = "aarch64")]
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualCounter;

#[cfg(target_arch = "aarch64")]
impl CycleSource for VirtualCounter {
    fn name(&self) -> &'static str {
        "cntvct_el0"
    }

    #[inline(always)]
    fn start(&self) -> u64 {
        compiler_fence(Ordering::SeqCst);
        let ticks: u64;
        // SAFETY: cntvct_el0 is readable from EL0 on Linux and macOS.
        unsafe {
            std::arch::asm!(
                "isb",
                "mrs {}, cntvct_el0",
                out(reg) ticks,
                options(nostack, nomem),
            );
        }
        compiler_fence(Ordering::SeqCst);
        ticks
    }

    #[inline(always)]
    fn stop(&self) -> u64 {
        compiler_fence(Ordering::SeqCst);
        let ticks: u64;
        // SAFETY: see `start`.
        unsafe {
            std::arch::asm!(
                "isb",
                "mrs {}, cntvct_el0",
                "isb",
                out(reg) ticks,
                options(nostack, nomem),
            );
        }
        compiler_fence(Ordering::SeqCst);
        ticks
    }
}

/// Nanoseconds since a process-wide epoch. Works on every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl MonotonicClock {
    fn now_ns() -> u64 {
        static EPOCH: OnceLock<Instant> = OnceLock::new();

        let epoch = EPOCH.get_or_init(Instant::now);
        epoch.elapsed().as_nanos() as u64
    }
}

impl CycleSource for MonotonicClock {
    fn name(&self) -> &'static str {
        "monotonic-ns"
    }

    #[inline]
    fn start(&self) -> u64 {
        compiler_fence(Ordering::SeqCst);
        let ns = Self::now_ns();
        compiler_fence(Ordering::SeqCst);
        ns
    }

    #[inline]
    fn stop(&self) -> u64 {
        self.start()
    }
}

/// The best counter available on the build target.
#[cfg(target_arch = "x86_64")]
pub type PlatformCounter = Tsc;

/// The best counter available on the build target.
#[cfg(target_arch = "aarch64")]
pub type PlatformCounter = VirtualCounter;

/// The best counter available on the build target.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type PlatformCounter = MonotonicClock;

/// Construct the [`PlatformCounter`] for this target.
pub fn platform_counter() -> PlatformCounter {
    PlatformCounter::default()
}
