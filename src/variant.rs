//! Which multiplication kernels a benchmark run includes.

use std::fmt;

use clap::ValueEnum;

use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::naive_ikj::matmul_naive_ikj;
use crate::matrix::tiled::{matmul_tiled, matmul_tiled_ikj};

/// One of the four kernels under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Variant {
    /// i-j-k triple loop; always run as the baseline.
    Naive,
    /// i-k-j triple loop.
    #[value(name = "loop")]
    LoopOrder,
    /// Tiled with i-j-k order inside each tile.
    Tiled,
    /// Tiled with i-k-j order inside each tile.
    Combined,
}

impl Variant {
    /// Every variant, in the order a benchmark runs them.
    pub const ALL: [Variant; 4] = [
        Variant::Naive,
        Variant::LoopOrder,
        Variant::Tiled,
        Variant::Combined,
    ];

    /// The optimized variants, run when none are chosen explicitly.
    pub const OPTIMIZED: [Variant; 3] = [Variant::LoopOrder, Variant::Tiled, Variant::Combined];

    /// Label used in benchmark output.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Naive => "Naive",
            Variant::LoopOrder => "Loop-optimized",
            Variant::Tiled => "Tiled",
            Variant::Combined => "Combined",
        }
    }

    /// Run this variant's kernel: C += A * B.
    ///
    /// `block` is the tile edge; the untiled variants ignore it.
    pub fn multiply(self, a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
        match self {
            Variant::Naive => matmul_naive_ijk(a, b, c, n),
            Variant::LoopOrder => matmul_naive_ikj(a, b, c, n),
            Variant::Tiled => matmul_tiled(a, b, c, n, block),
            Variant::Combined => matmul_tiled_ikj(a, b, c, n, block),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
