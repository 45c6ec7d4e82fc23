//! Tiled (blocked) multiplication.
//!
//! The iteration space is cut into `block`-edged cubes over rows, the
//! reduction dimension and columns. Only three `block × block` tiles are live
//! at a time, so with a suitable edge the working set of each cube stays in
//! cache. Cubes on the right and bottom edges are clipped to the matrix.

/// Default tile edge.
pub const TILE_SIZE: usize = 100;

/// Tiled multiplication with i-j-k order inside each tile.
///
/// Accumulates: C += A * B. Tiles are visited with the reduction block in
/// the middle loop, so every `C[i][j]` still sees its products in ascending
/// `k`.
///
/// # Panics
///
/// Panics if `block` is zero or any slice length is not `n * n`.
pub fn matmul_tiled(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    super::check_shapes(a, b, c, n);
    assert!(block > 0, "block size must be positive");

    for ii in (0..n).step_by(block) {
        let i_end = (ii + block).min(n);
        for kk in (0..n).step_by(block) {
            let k_end = (kk + block).min(n);
            for jj in (0..n).step_by(block) {
                let j_end = (jj + block).min(n);

                for i in ii..i_end {
                    for j in jj..j_end {
                        for k in kk..k_end {
                            c[i * n + j] += a[i * n + k] * b[k * n + j];
                        }
                    }
                }
            }
        }
    }
}

/// Tiling combined with i-k-j order inside each tile.
///
/// Same blocking as [`matmul_tiled`], but the inner loops hoist `A[i][k]`
/// and stream rows of B and C, so both optimizations apply at once.
///
/// # Panics
///
/// Panics if `block` is zero or any slice length is not `n * n`.
pub fn matmul_tiled_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    super::check_shapes(a, b, c, n);
    assert!(block > 0, "block size must be positive");

    for ii in (0..n).step_by(block) {
        let i_end = (ii + block).min(n);
        for kk in (0..n).step_by(block) {
            let k_end = (kk + block).min(n);
            for jj in (0..n).step_by(block) {
                let j_end = (jj + block).min(n);

                for i in ii..i_end {
                    let c_row = &mut c[i * n + jj..i * n + j_end];
                    for k in kk..k_end {
                        let a_ik = a[i * n + k];
                        let b_row = &b[k * n + jj..k * n + j_end];
                        for (c_ij, b_kj) in c_row.iter_mut().zip(b_row) {
                            *c_ij += a_ik * b_kj;
                        }
                    }
                }
            }
        }
    }
}
