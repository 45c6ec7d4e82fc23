//! Benchmark driver: times each selected kernel on the same operands.

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Error, Result};
use crate::matrix::init::{fill_random, max_abs_diff, zero};
use crate::matrix::tiled::TILE_SIZE;
use crate::variant::Variant;

/// Largest difference from the naive result accepted by `verify`.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// What to run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Matrix dimension.
    pub n: usize,
    /// Tile edge for the tiled variants.
    pub block: usize,
    /// Variants to run after the naive baseline.
    pub variants: Vec<Variant>,
    /// Seed for the operand generator; fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Compare every variant's result against naive.
    pub verify: bool,
}

impl BenchConfig {
    /// Config for an `n × n` run of every variant with the default tile.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            block: TILE_SIZE,
            variants: Variant::OPTIMIZED.to_vec(),
            seed: None,
            verify: false,
        }
    }

    /// Run order: naive first, then each requested variant once, in
    /// canonical order.
    pub fn schedule(&self) -> Vec<Variant> {
        Variant::ALL
            .into_iter()
            .filter(|v| *v == Variant::Naive || self.variants.contains(v))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::InvalidDimension);
        }
        if self.block == 0 {
            return Err(Error::InvalidTile);
        }
        Ok(())
    }
}

/// Wall-clock time of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTiming {
    /// Kernel that was timed.
    pub variant: Variant,
    /// Wall-clock time in microseconds.
    pub micros: u128,
}

/// Results of a benchmark run, naive first.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    /// Matrix dimension.
    pub n: usize,
    /// One entry per variant run, in run order.
    pub timings: Vec<VariantTiming>,
}

impl BenchReport {
    /// Naive time over this timing's time, `None` if the timing measured zero.
    pub fn speedup(&self, timing: &VariantTiming) -> Option<f64> {
        let baseline = self.timings.first()?.micros;
        if timing.micros == 0 {
            return None;
        }
        Some(baseline as f64 / timing.micros as f64)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for timing in &self.timings {
            writeln!(
                f,
                "{} matmul: {} microseconds",
                timing.variant.label(),
                timing.micros
            )?;
            if timing.variant != Variant::Naive {
                match self.speedup(timing) {
                    Some(speedup) => writeln!(f, "Speedup: {:.4}", speedup)?,
                    None => writeln!(
                        f,
                        "Speedup: N/A ({} time = 0)",
                        timing.variant.label().to_lowercase()
                    )?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Generate operands, then time every scheduled variant from a zeroed C.
///
/// # Errors
///
/// [`Error::InvalidDimension`] or [`Error::InvalidTile`] for a zero
/// dimension or tile, and [`Error::Mismatch`] when `verify` is set and a
/// variant disagrees with naive.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let n = config.n;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut a = vec![0.0; n * n];
    let mut b = vec![0.0; n * n];
    let mut c = vec![0.0; n * n];
    fill_random(&mut a, &mut rng);
    fill_random(&mut b, &mut rng);

    let mut baseline: Option<Vec<f64>> = None;
    let mut timings = Vec::new();

    for variant in config.schedule() {
        zero(&mut c);
        log::debug!("running {} ({}x{}, block {})", variant, n, n, config.block);

        let start = Instant::now();
        variant.multiply(&a, &b, &mut c, n, config.block);
        let micros = start.elapsed().as_micros();

        log::info!("{}: {} us", variant, micros);
        timings.push(VariantTiming { variant, micros });

        if config.verify {
            match &baseline {
                None => baseline = Some(c.clone()),
                Some(expected) => {
                    let diff = max_abs_diff(expected, &c);
                    if diff > VERIFY_TOLERANCE {
                        return Err(Error::Mismatch {
                            variant: variant.label(),
                            diff,
                        });
                    }
                }
            }
        }
    }

    Ok(BenchReport { n, timings })
}
