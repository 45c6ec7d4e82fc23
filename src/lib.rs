//! Cache probing and cache-aware matrix multiplication, built from scratch.
//!
//! Two small experiments on the memory hierarchy:
//!
//! - **Cache probe**: walk buffers of growing size one cache line at a time
//!   and time each pass with a serialized cycle counter. The points where
//!   cycles per access jump are the cache capacities.
//! - **Matmul bench**: the same product computed four ways (naive, loop
//!   reordered, tiled, tiled + reordered) to see what locality buys.
//!
//! ## Usage
//!
//! ```
//! use cache_aware::Variant;
//!
//! let n = 64;
//! let a = vec![1.0f64; n * n];
//! let b = vec![1.0f64; n * n];
//! let mut c = vec![0.0f64; n * n];
//!
//! Variant::Combined.multiply(&a, &b, &mut c, n, 16);
//! assert!(c.iter().all(|&x| x == n as f64));
//! ```
//!
//! Estimating access cost at one working-set size:
//!
//! ```
//! use cache_aware::probe::{measure_access_cycles, ProbeConfig};
//! use cache_aware::timer::platform_counter;
//!
//! let config = ProbeConfig { trials: 100, ..ProbeConfig::default() };
//! let cycles = measure_access_cycles(&platform_counter(), 32 * 1024, &config).unwrap();
//! println!("32 KB: {cycles:.2} cycles/access");
//! ```

pub mod error;
pub mod matrix;
pub mod probe;
pub mod runner;
pub mod timer;
pub mod variant;

pub use error::{Error, Result};
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::naive_ikj::matmul_naive_ikj;
pub use matrix::tiled::{TILE_SIZE, matmul_tiled, matmul_tiled_ikj};
pub use variant::Variant;
