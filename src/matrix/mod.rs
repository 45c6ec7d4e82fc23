//! Square matrix multiplication kernels and their setup helpers.
//!
//! All kernels take row-major `n × n` matrices and accumulate into C
//! (C += A * B), so a caller timing several kernels must clear C between
//! runs. [`init::zero`] does that; the benchmark driver calls it before every
//! timed run.

pub mod init;
pub mod naive_ijk;
pub mod naive_ikj;
pub mod tiled;

fn check_shapes(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
}
