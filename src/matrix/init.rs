//! Operand and accumulator setup for the benchmarks.

use rand::Rng;

/// Fill `m` with uniform values in `[0, 1)`.
pub fn fill_random<R: Rng + ?Sized>(m: &mut [f64], rng: &mut R) {
    for x in m.iter_mut() {
        *x = rng.gen_range(0.0..1.0);
    }
}

/// Reset an accumulator before a timed run.
pub fn zero(m: &mut [f64]) {
    m.fill(0.0);
}

/// Largest absolute element-wise difference between two matrices.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn max_abs_diff(expected: &[f64], actual: &[f64]) -> f64 {
    assert_eq!(expected.len(), actual.len(), "length mismatch");
    expected
        .iter()
        .zip(actual)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
