//! Cache size estimation by strided access timing.
//!
//! A buffer is walked one element per cache line while the cycle counter
//! brackets each pass. Plotting average cycles per access against buffer size
//! shows a knee each time the working set overflows a cache level.

use std::hint::black_box;
use std::mem::size_of;

use crate::error::{Error, Result};
use crate::timer::CycleSource;

/// Cache line size assumed when none is given.
pub const CACHE_LINE_SIZE: usize = 64;

/// Settings for a single access-time measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Bytes between two touched elements.
    pub line_size: usize,
    /// Timed passes over the buffer.
    pub trials: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            line_size: CACHE_LINE_SIZE,
            trials: 1000,
        }
    }
}

/// Sizes visited by a sweep, in KB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// First size measured.
    pub start_kb: usize,
    /// Last size measured; the sweep always ends on it.
    pub cap_kb: usize,
    /// Largest growth between two sizes.
    pub step_kb: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_kb: 1,
            cap_kb: 24000,
            step_kb: 1024,
        }
    }
}

/// Average access cost at one working-set size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Working-set size in KB.
    pub size_kb: usize,
    /// Average counter ticks per strided access.
    pub cycles_per_access: f64,
}

/// `bytes / 4` `i32`s holding 0, 1, 2, ...
///
/// Values wrap past `i32::MAX`; the length always matches the request.
pub fn sequential_buffer(bytes: usize) -> Vec<i32> {
    let len = bytes / size_of::<i32>();
    (0..len).map(|i| i as i32).collect()
}

/// Average cycles per cache-line-strided access over a buffer of `bytes`.
///
/// The buffer is filled with 0, 1, 2, ..., warmed with one untimed pass, then
/// timed for `config.trials` passes. The result is the total elapsed count
/// divided by the number of accesses made.
///
/// # Errors
///
/// [`Error::ZeroTrials`] when `config.trials` is zero,
/// [`Error::InvalidLineSize`] when the line is smaller than an `i32`, and
/// [`Error::EmptyBuffer`] when `bytes` cannot hold a single `i32`.
///
/// # Example
///
/// ```
/// use cache_aware::probe::{measure_access_cycles, ProbeConfig};
/// use cache_aware::timer::MonotonicClock;
///
/// let config = ProbeConfig { trials: 10, ..ProbeConfig::default() };
/// let cycles = measure_access_cycles(&MonotonicClock, 4096, &config).unwrap();
/// assert!(cycles >= 0.0);
/// ```
pub fn measure_access_cycles<S: CycleSource>(
    source: &S,
    bytes: usize,
    config: &ProbeConfig,
) -> Result<f64> {
    let element_size = size_of::<i32>();
    if config.trials == 0 {
        return Err(Error::ZeroTrials);
    }
    if config.line_size < element_size {
        return Err(Error::InvalidLineSize {
            line_size: config.line_size,
            element_size,
        });
    }

    let len = bytes / element_size;
    if len == 0 {
        return Err(Error::EmptyBuffer {
            bytes,
            element_size,
        });
    }

    let buffer = sequential_buffer(bytes);
    let stride = config.line_size / element_size;
    let accesses = len.div_ceil(stride);

    let mut sink = 0i32;
    for i in (0..len).step_by(stride) {
        sink = black_box(sink.wrapping_add(buffer[i]));
    }

    let mut total: u64 = 0;
    for _ in 0..config.trials {
        let start = source.start();
        for i in (0..len).step_by(stride) {
            sink = black_box(sink.wrapping_add(buffer[i]));
        }
        let end = source.stop();
        total += source.elapsed(start, end);
    }
    black_box(sink);

    Ok(total as f64 / (config.trials as f64 * accesses as f64))
}

/// Average cycles spent timing a trivial region: one heap value incremented
/// and decremented.
///
/// This is the fixed cost of the counter reads themselves, useful as a floor
/// when reading [`measure_access_cycles`] results.
pub fn measure_overhead_cycles<S: CycleSource>(source: &S, trials: usize) -> Result<f64> {
    if trials == 0 {
        return Err(Error::ZeroTrials);
    }

    let mut dummy = Box::new(0i32);
    let mut total: u64 = 0;
    for _ in 0..trials {
        let start = source.start();
        *dummy = black_box(*dummy + 1);
        *dummy = black_box(*dummy - 1);
        let end = source.stop();
        total += source.elapsed(start, end);
    }
    black_box(&dummy);

    Ok(total as f64 / trials as f64)
}

/// Working-set sizes (KB) for a sweep.
///
/// Sizes double while that is smaller than one linear step, then grow by
/// `step_kb`. When the next size would pass `cap_kb`, the cap itself is the
/// final size, so the sequence always ends exactly at the cap.
///
/// ```
/// use cache_aware::probe::{sweep_sizes, SweepConfig};
///
/// let sizes = sweep_sizes(&SweepConfig { start_kb: 1, cap_kb: 10, step_kb: 3 }).unwrap();
/// assert_eq!(sizes, vec![1, 2, 4, 7, 10]);
/// ```
pub fn sweep_sizes(config: &SweepConfig) -> Result<Vec<usize>> {
    let SweepConfig {
        start_kb,
        cap_kb,
        step_kb,
    } = *config;
    if start_kb == 0 || step_kb == 0 || start_kb > cap_kb {
        return Err(Error::InvalidSweep {
            start_kb,
            cap_kb,
            step_kb,
        });
    }

    let mut sizes = Vec::new();
    let mut kb = start_kb;
    loop {
        sizes.push(kb);
        if kb == cap_kb {
            break;
        }
        let next = kb.saturating_mul(2).min(kb.saturating_add(step_kb));
        kb = next.min(cap_kb);
    }
    Ok(sizes)
}

/// Measure every size of the sweep.
pub fn run_sweep<S: CycleSource>(
    source: &S,
    sweep: &SweepConfig,
    probe: &ProbeConfig,
) -> Result<Vec<Measurement>> {
    let sizes = sweep_sizes(sweep)?;
    log::info!(
        "sweeping {} sizes from {} KB to {} KB with {} ({} trials)",
        sizes.len(),
        sweep.start_kb,
        sweep.cap_kb,
        source.name(),
        probe.trials
    );

    let mut results = Vec::with_capacity(sizes.len());
    for size_kb in sizes {
        let cycles_per_access = measure_access_cycles(source, size_kb * 1024, probe)?;
        log::debug!("{} KB: {:.3} cycles/access", size_kb, cycles_per_access);
        results.push(Measurement {
            size_kb,
            cycles_per_access,
        });
    }
    Ok(results)
}
