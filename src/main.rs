//! Benchmark runner for the matmul variants.

use cache_aware::TILE_SIZE;
use cache_aware::Variant;
use cache_aware::runner::{self, BenchConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "matmul_bench", about = "Time naive, loop-reordered and tiled matmul")]
struct Args {
    /// Matrix dimension N (matrices are N×N).
    dimension: Option<usize>,

    /// Tile edge for the tiled variants.
    #[arg(long, default_value_t = TILE_SIZE)]
    tile: usize,

    /// Variants to run after the naive baseline.
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Variant::OPTIMIZED)]
    variants: Vec<Variant>,

    /// Seed for the random operands.
    #[arg(long)]
    seed: Option<u64>,

    /// Check every variant's result against the naive one.
    #[arg(long)]
    verify: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Some(n) = args.dimension else {
        println!("Usage: matmul_bench <matrix_dimension>");
        return;
    };

    let config = BenchConfig {
        n,
        block: args.tile,
        variants: args.variants,
        seed: args.seed,
        verify: args.verify,
    };
    log::info!("config: {:?}", config);

    match runner::run(&config) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            std::process::exit(1);
        }
    }
}
