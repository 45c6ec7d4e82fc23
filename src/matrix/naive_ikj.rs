/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, one element of A is held in a register
/// while the innermost loop sweeps a row of B and a row of C sequentially
/// (stride 1).
///
/// Each `C[i][j]` still receives its products in ascending `k`, so the
/// result is bit-identical to [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk).
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if any slice length is not `n * n`.
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    super::check_shapes(a, b, c, n);

    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += a_ik * b[k * n + j];
            }
        }
    }
}
