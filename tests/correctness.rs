use cache_aware::matrix::init::{fill_random, max_abs_diff, zero};
use cache_aware::{Variant, matmul_naive_ijk, matmul_naive_ikj, matmul_tiled, matmul_tiled_ikj};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-8,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

fn identity(n: usize) -> Vec<f64> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}

// ============================================================
// Known results
// ============================================================

#[test]
fn test_identity_times_b_is_b() {
    let a = identity(3);
    let b = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    for variant in Variant::ALL {
        let mut c = vec![0.0; 9];
        variant.multiply(&a, &b, &mut c, 3, 2);
        assert_eq!(c, b, "{}", variant);
    }
}

#[test]
fn test_2x2_multiply() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];
    let mut c = vec![0.0; 4];

    matmul_naive_ijk(&a, &b, &mut c, 2);
    assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_1x1_multiply() {
    for variant in Variant::ALL {
        let mut c = vec![0.0];
        variant.multiply(&[3.0], &[4.0], &mut c, 1, 100);
        assert_eq!(c, vec![12.0], "{}", variant);
    }
}

// ============================================================
// Variants agree
// ============================================================

#[test]
fn test_all_variants_match_naive() {
    let test_sizes = [2, 3, 5, 7, 16, 31, 64, 101];

    for n in test_sizes {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut a = vec![0.0; n * n];
        let mut b = vec![0.0; n * n];
        fill_random(&mut a, &mut rng);
        fill_random(&mut b, &mut rng);

        let mut expected = vec![0.0; n * n];
        matmul_naive_ijk(&a, &b, &mut expected, n);

        for variant in Variant::ALL {
            let mut c = vec![0.0; n * n];
            variant.multiply(&a, &b, &mut c, n, 8);
            // Same summation order per element, so results match exactly.
            assert_eq!(expected, c, "{} at n={}", variant, n);
        }
    }
}

#[test]
fn test_small_odd_sizes_integer_inputs() {
    for n in [3, 5, 7, 11, 13, 17] {
        let a: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
        let b: Vec<f64> = (0..n * n).map(|i| (i % 7) as f64).collect();

        let mut c_naive = vec![0.0; n * n];
        let mut c_ikj = vec![0.0; n * n];
        let mut c_tiled = vec![0.0; n * n];
        let mut c_combined = vec![0.0; n * n];

        matmul_naive_ijk(&a, &b, &mut c_naive, n);
        matmul_naive_ikj(&a, &b, &mut c_ikj, n);
        matmul_tiled(&a, &b, &mut c_tiled, n, 4);
        matmul_tiled_ikj(&a, &b, &mut c_combined, n, 4);

        assert_matrices_equal(&c_naive, &c_ikj, &format!("ikj_{}", n));
        assert_matrices_equal(&c_naive, &c_tiled, &format!("tiled_{}", n));
        assert_matrices_equal(&c_naive, &c_combined, &format!("combined_{}", n));
    }
}

// ============================================================
// Tile boundary tests
// ============================================================

#[test]
fn test_single_tile_matches_loop_order() {
    let n = 37;
    let mut rng = StdRng::seed_from_u64(7);
    let mut a = vec![0.0; n * n];
    let mut b = vec![0.0; n * n];
    fill_random(&mut a, &mut rng);
    fill_random(&mut b, &mut rng);

    let mut c_ikj = vec![0.0; n * n];
    matmul_naive_ikj(&a, &b, &mut c_ikj, n);

    for block in [n, n + 1, 100] {
        let mut c_tiled = vec![0.0; n * n];
        let mut c_combined = vec![0.0; n * n];
        matmul_tiled(&a, &b, &mut c_tiled, n, block);
        matmul_tiled_ikj(&a, &b, &mut c_combined, n, block);

        assert_eq!(c_ikj, c_tiled, "tiled block={}", block);
        assert_eq!(c_ikj, c_combined, "combined block={}", block);
    }
}

#[test]
fn test_partial_tiles_cover_each_triple_once() {
    // With all-ones operands every C[i][j] counts the k values visited.
    for (n, block) in [(10, 3), (17, 4), (25, 7), (100, 33), (9, 8), (5, 1)] {
        let a = vec![1.0; n * n];
        let b = vec![1.0; n * n];

        let mut c_tiled = vec![0.0; n * n];
        let mut c_combined = vec![0.0; n * n];
        matmul_tiled(&a, &b, &mut c_tiled, n, block);
        matmul_tiled_ikj(&a, &b, &mut c_combined, n, block);

        assert!(
            c_tiled.iter().all(|&x| x == n as f64),
            "tiled n={} block={}",
            n,
            block
        );
        assert!(
            c_combined.iter().all(|&x| x == n as f64),
            "combined n={} block={}",
            n,
            block
        );
    }
}

#[test]
#[should_panic(expected = "block size must be positive")]
fn test_zero_block_panics() {
    let mut c = vec![0.0; 4];
    matmul_tiled(&[1.0; 4], &[1.0; 4], &mut c, 2, 0);
}

#[test]
#[should_panic(expected = "B: expected")]
fn test_shape_mismatch_panics() {
    let mut c = vec![0.0; 4];
    matmul_naive_ikj(&[1.0; 4], &[1.0; 3], &mut c, 2);
}

// ============================================================
// Accumulation test (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_accumulation() {
    let n = 20;
    let a: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();
    let b: Vec<f64> = (0..n * n).map(|i| (i % 10) as f64).collect();

    let mut fresh = vec![0.0; n * n];
    matmul_naive_ijk(&a, &b, &mut fresh, n);

    for variant in Variant::ALL {
        let mut c = vec![5.0; n * n];
        variant.multiply(&a, &b, &mut c, n, 6);
        let expected: Vec<f64> = fresh.iter().map(|x| x + 5.0).collect();
        assert_matrices_equal(&expected, &c, &format!("accumulate_{}", variant));

        // Clearing restores the from-zero result.
        zero(&mut c);
        variant.multiply(&a, &b, &mut c, n, 6);
        assert_eq!(max_abs_diff(&fresh, &c), 0.0, "{}", variant);
    }
}
